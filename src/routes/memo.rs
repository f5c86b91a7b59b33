//! Memo CRUD routes under `/memos`. The collection answers with and without the trailing slash.

use crate::handlers::memo::{create_memo, delete_memo, get_memo, list_memos, update_memo};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn memo_routes(state: AppState) -> Router {
    Router::new()
        .route("/memos", get(list_memos).post(create_memo))
        .route("/memos/", get(list_memos).post(create_memo))
        .route(
            "/memos/:memo_id",
            get(get_memo).put(update_memo).delete(delete_memo),
        )
        .with_state(state)
}
