//! Request extractors.

pub mod db;
pub mod memo;
pub use db::DbConn;
pub use memo::{MemoId, MemoPayload};
