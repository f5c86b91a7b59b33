//! Common routes: health, readiness, version, OpenAPI document.

use crate::handlers::common::{health, ready, version};
use crate::handlers::docs::openapi_json;
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /health, /ready (with a database probe), /version, /openapi.json.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
}
