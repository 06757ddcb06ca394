use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::v1::response::ApiResponse;

#[derive(Error, Debug)]
pub enum MemoError {
    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A required credential or setting is missing. Operator-correctable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The generation endpoint failed or answered with no text.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The generation call succeeded but nothing usable could be parsed from it.
    #[error("Empty result: {0}")]
    EmptyResult(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for MemoError {
    fn into_response(self) -> Response {
        ApiResponse::<()>::from(self).into_response()
    }
}

pub type Result<T> = std::result::Result<T, MemoError>;
