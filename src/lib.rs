//! Memo API: CRUD REST backend for memos on SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use model::Memo;
pub use routes::app;
pub use service::{MemoService, MemoWrite};
pub use state::AppState;
pub use store::{connect, ensure_schema, reset_schema};
