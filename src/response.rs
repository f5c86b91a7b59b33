//! Response contracts.

use crate::model::Memo;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a memo. Timestamps stay internal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemoResponse {
    #[schema(example = 123)]
    pub memo_id: i64,
    pub title: String,
    pub description: String,
}

impl From<Memo> for MemoResponse {
    fn from(memo: Memo) -> Self {
        MemoResponse {
            memo_id: memo.memo_id,
            title: memo.title,
            description: memo.description,
        }
    }
}

/// Outcome message for writes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "memo updated successfully")]
    pub message: String,
}

pub fn status(message: impl Into<String>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: message.into(),
    })
}
