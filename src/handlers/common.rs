//! Service probes: liveness, memo-store readiness, build info.

use crate::state::AppState;
use crate::store::MEMOS_TABLE;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub(crate) struct Liveness {
    status: &'static str,
}

/// Readiness of the memo store. `memos` is the current row count when the table answers.
#[derive(Serialize)]
pub(crate) struct StoreReadiness {
    status: &'static str,
    store: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    memos: Option<i64>,
}

pub(crate) async fn health() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

/// 503 when the memos table cannot be read (database gone or schema not initialized).
pub(crate) async fn ready(
    State(state): State<AppState>,
) -> Result<Json<StoreReadiness>, (StatusCode, Json<StoreReadiness>)> {
    let sql = format!("SELECT COUNT(*) FROM {}", MEMOS_TABLE);
    match sqlx::query_scalar::<_, i64>(&sql).fetch_one(&state.pool).await {
        Ok(count) => Ok(Json(StoreReadiness {
            status: "ok",
            store: "ok",
            memos: Some(count),
        })),
        Err(e) => {
            tracing::warn!(error = %e, "memo store not ready");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StoreReadiness {
                    status: "degraded",
                    store: "unavailable",
                    memos: None,
                }),
            ))
        }
    }
}

pub(crate) async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "api": ["/memos/", "/memos/{memo_id}"]
    }))
}
