//! Memo CRUD handlers: create, list, read, update, delete.

use crate::error::{AppError, ErrorMessage, ValidationBody};
use crate::extractors::{DbConn, MemoId, MemoPayload};
use crate::response::{status, MemoResponse, StatusResponse};
use crate::service::MemoService;
use crate::state::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    post,
    path = "/memos/",
    tag = "Memos",
    request_body = crate::service::MemoWrite,
    responses(
        (status = 200, description = "Memo registered", body = StatusResponse),
        (status = 400, description = "Store rejected the write", body = ErrorMessage),
        (status = 422, description = "Invalid body", body = ValidationBody)
    )
)]
pub async fn create_memo(
    State(state): State<AppState>,
    MemoPayload(write): MemoPayload,
) -> Result<Json<StatusResponse>, AppError> {
    let mut conn = DbConn::acquire(&state).await?;
    match MemoService::insert(&mut conn, &write).await {
        Ok(_) => Ok(status("memo registered successfully")),
        Err(e) => {
            tracing::warn!(error = %e, "insert memo failed");
            Err(AppError::BadRequest("failed to register memo".into()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/memos/",
    tag = "Memos",
    responses((status = 200, description = "All memos", body = [MemoResponse]))
)]
pub async fn list_memos(mut conn: DbConn) -> Result<Json<Vec<MemoResponse>>, AppError> {
    let memos = MemoService::list(&mut conn).await?;
    Ok(Json(memos.into_iter().map(MemoResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/memos/{memo_id}",
    tag = "Memos",
    params(("memo_id" = i64, Path, description = "Memo id")),
    responses(
        (status = 200, description = "The memo", body = MemoResponse),
        (status = 404, description = "No memo with this id", body = ErrorMessage)
    )
)]
pub async fn get_memo(MemoId(memo_id): MemoId, mut conn: DbConn) -> Result<Json<MemoResponse>, AppError> {
    let memo = MemoService::get_by_id(&mut conn, memo_id)
        .await?
        .ok_or_else(|| AppError::NotFound("memo not found".into()))?;
    Ok(Json(memo.into()))
}

#[utoipa::path(
    put,
    path = "/memos/{memo_id}",
    tag = "Memos",
    params(("memo_id" = i64, Path, description = "Memo id")),
    request_body = crate::service::MemoWrite,
    responses(
        (status = 200, description = "Memo updated", body = StatusResponse),
        (status = 404, description = "No memo with this id", body = ErrorMessage),
        (status = 422, description = "Invalid body", body = ValidationBody)
    )
)]
pub async fn update_memo(
    MemoId(memo_id): MemoId,
    State(state): State<AppState>,
    MemoPayload(write): MemoPayload,
) -> Result<Json<StatusResponse>, AppError> {
    let mut conn = DbConn::acquire(&state).await?;
    MemoService::update(&mut conn, memo_id, &write)
        .await?
        .ok_or_else(|| AppError::NotFound("update target not found".into()))?;
    Ok(status("memo updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/memos/{memo_id}",
    tag = "Memos",
    params(("memo_id" = i64, Path, description = "Memo id")),
    responses(
        (status = 200, description = "Memo deleted", body = StatusResponse),
        (status = 404, description = "No memo with this id", body = ErrorMessage)
    )
)]
pub async fn delete_memo(MemoId(memo_id): MemoId, mut conn: DbConn) -> Result<Json<StatusResponse>, AppError> {
    MemoService::delete(&mut conn, memo_id)
        .await?
        .ok_or_else(|| AppError::NotFound("delete target not found".into()))?;
    Ok(status("memo deleted successfully"))
}
