//! Memo request extractors: validated write body and `{memo_id}` path segment.

use crate::error::AppError;
use crate::service::{MemoWrite, RequestValidator};
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde_json::Value;

/// Body that passed write-contract validation. Malformed JSON is a validation error too.
#[derive(Debug)]
pub struct MemoPayload(pub MemoWrite);

#[async_trait]
impl<S> FromRequest<S> for MemoPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid(&["body"], rejection.body_text(), "json_invalid"))?;
        let write = RequestValidator::validate_memo(&body)?;
        Ok(MemoPayload(write))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MemoId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for MemoId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::invalid(&["path", "memo_id"], rejection.body_text(), "path_invalid"))?;
        RequestValidator::parse_memo_id(&raw).map(MemoId)
    }
}
