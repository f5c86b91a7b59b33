//! Shared application state for all routes.

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    /// Each request checks out its own connection; see [`crate::extractors::DbConn`].
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        AppState { pool }
    }
}
