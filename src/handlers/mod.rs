//! HTTP handlers for memo CRUD, service probes and API docs.

pub mod common;
pub mod docs;
pub mod memo;
pub use memo::*;
