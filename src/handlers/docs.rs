//! OpenAPI document for the memo endpoints.

use crate::error::{ErrorMessage, FieldError, ValidationBody};
use crate::response::{MemoResponse, StatusResponse};
use crate::service::MemoWrite;
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::memo::create_memo,
        crate::handlers::memo::list_memos,
        crate::handlers::memo::get_memo,
        crate::handlers::memo::update_memo,
        crate::handlers::memo::delete_memo,
    ),
    components(schemas(MemoWrite, MemoResponse, StatusResponse, ErrorMessage, ValidationBody, FieldError)),
    tags((name = "Memos", description = "Memo registration, lookup, update and removal"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
