//! MemoService: memo data access, plus write-contract validation.

mod memo;
mod validation;
pub use memo::MemoService;
pub use validation::{MemoWrite, RequestValidator, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS};
