//! Write-contract validation for memo create and update bodies.

use crate::error::{AppError, FieldError};
use serde_json::Value;
use utoipa::ToSchema;

pub const TITLE_MIN_CHARS: usize = 1;
pub const TITLE_MAX_CHARS: usize = 50;
pub const DESCRIPTION_MAX_CHARS: usize = 255;

/// Validated body of `POST /memos/` and `PUT /memos/{memo_id}`.
#[derive(Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct MemoWrite {
    #[schema(min_length = 1, max_length = 50, example = "Tomorrow's agenda")]
    pub title: String,
    #[schema(max_length = 255, example = "Topics: project status")]
    pub description: String,
}

impl MemoWrite {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        MemoWrite {
            title: title.into(),
            description: description.into(),
        }
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a raw JSON body. Every failing field is reported, not just the first.
    /// Unknown keys are ignored; a missing or null description becomes empty.
    pub fn validate_memo(body: &Value) -> Result<MemoWrite, AppError> {
        let obj = body.as_object().ok_or_else(|| {
            AppError::invalid(&["body"], "Input should be a valid dictionary", "model_attributes_type")
        })?;
        let mut errors = Vec::new();

        let title = match obj.get("title") {
            None | Some(Value::Null) => {
                errors.push(FieldError::new(&["body", "title"], "Field required", "missing"));
                None
            }
            Some(v) => string_field("title", v, TITLE_MIN_CHARS, TITLE_MAX_CHARS, &mut errors),
        };

        let description = match obj.get("description") {
            None | Some(Value::Null) => Some(String::new()),
            Some(v) => string_field("description", v, 0, DESCRIPTION_MAX_CHARS, &mut errors),
        };

        match (title, description) {
            (Some(title), Some(description)) if errors.is_empty() => Ok(MemoWrite { title, description }),
            _ => Err(AppError::Validation(errors)),
        }
    }

    /// Parse the `{memo_id}` path segment.
    pub fn parse_memo_id(raw: &str) -> Result<i64, AppError> {
        raw.trim().parse::<i64>().map_err(|_| {
            AppError::invalid(
                &["path", "memo_id"],
                "Input should be a valid integer, unable to parse string as an integer",
                "int_parsing",
            )
        })
    }
}

fn string_field(
    name: &str,
    v: &Value,
    min: usize,
    max: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let Some(s) = v.as_str() else {
        errors.push(FieldError::new(&["body", name], "Input should be a valid string", "string_type"));
        return None;
    };
    let len = s.chars().count();
    if len < min {
        errors.push(FieldError::new(
            &["body", name],
            format!("String should have at least {} character{}", min, plural(min)),
            "string_too_short",
        ));
        return None;
    }
    if len > max {
        errors.push(FieldError::new(
            &["body", name],
            format!("String should have at most {} character{}", max, plural(max)),
            "string_too_long",
        ));
        return None;
    }
    Some(s.to_string())
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
