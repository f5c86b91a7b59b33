//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key} '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("logging: {0}")]
    Logging(String),
}

/// One rejected field of a request: where it is, what is wrong, and a stable error kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        FieldError {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Single-field validation failure.
    pub fn invalid(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        AppError::Validation(vec![FieldError::new(loc, msg, kind)])
    }
}

/// `{"detail": "..."}` body for not-found and bad-request responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    pub detail: String,
}

/// `{"detail": [...]}` body for validation failures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationBody {
    pub detail: Vec<FieldError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody { detail: errors }),
            )
                .into_response(),
            AppError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(ErrorMessage { detail })).into_response()
            }
            AppError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, Json(ErrorMessage { detail })).into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorMessage {
                        detail: "internal server error".into(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
