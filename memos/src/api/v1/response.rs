//! # V1 API Response Envelope & Error Contract
//!
//! Every v1 endpoint returns an [`ApiResponse<T>`] envelope:
//!
//! ```json
//! {
//!   "data": { ... },                 // present on success, absent on error
//!   "meta": { "total": 42 },         // optional, list endpoints only
//!   "error": { "code": "not_found", "message": "..." }  // present on error
//! }
//! ```
//!
//! ## ID Formats
//!
//! - **memoId**: nanoid, 21 characters (e.g. `"V1StGXR8_Z5jdHi6B-myT"`)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::MemoError;

/// Message returned for any missing-credential failure. The underlying
/// detail is logged, not sent.
pub const CONFIGURATION_ERROR_MESSAGE: &str =
    "Server configuration error: LLM API key is not configured.";

const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Machine-readable error code included in every error response.
///
/// Serialized as a snake_case string on the wire (e.g. `"invalid_request"`).
/// Each variant maps to a fixed HTTP status code via [`ErrorCode::status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Missing or blank fields, malformed JSON, bad query parameters. HTTP 400.
    InvalidRequest,
    /// The requested memo does not exist. HTTP 404.
    NotFound,
    /// The server lacks a required credential. HTTP 500.
    ConfigurationError,
    /// The text generation service failed or answered with nothing. HTTP 500.
    UpstreamError,
    /// Generation succeeded but produced no usable summary or tags. HTTP 500.
    EmptyResult,
    /// Unexpected server-side failure. Details are never leaked. HTTP 500.
    InternalError,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ConfigurationError
            | Self::UpstreamError
            | Self::EmptyResult
            | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::NotFound => write!(f, "not_found"),
            Self::ConfigurationError => write!(f, "configuration_error"),
            Self::UpstreamError => write!(f, "upstream_error"),
            Self::EmptyResult => write!(f, "empty_result"),
            Self::InternalError => write!(f, "internal_error"),
        }
    }
}

/// Structured error payload within the API envelope.
///
/// ```json
/// { "code": "invalid_request", "message": "Title and content are required." }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiError {
    pub code: ErrorCode,
    /// Human-readable description safe to display to end users.
    pub message: String,
}

/// Metadata included in list responses.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    /// Number of items in `data` after filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Canonical v1 API response envelope.
///
/// On success, `data` is present and `error` is absent. On error, `error` is
/// present and `data` is absent. The HTTP status comes from the error code or
/// from the constructor used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,

    /// Not serialized on the wire.
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success response with data (HTTP 200).
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            meta: None,
            error: None,
            status: StatusCode::OK,
        }
    }

    /// Success response with data and list metadata (HTTP 200).
    pub fn success_with_meta(data: T, meta: ResponseMeta) -> Self {
        Self {
            data: Some(data),
            meta: Some(meta),
            error: None,
            status: StatusCode::OK,
        }
    }

    /// Resource created response (HTTP 201).
    pub fn created(data: T) -> Self {
        Self {
            data: Some(data),
            meta: None,
            error: None,
            status: StatusCode::CREATED,
        }
    }

    /// Error response. HTTP status is derived from the [`ErrorCode`].
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        let status = code.status();
        Self {
            data: None,
            meta: None,
            error: Some(ApiError {
                code,
                message: message.into(),
            }),
            status,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        match serde_json::to_value(&self) {
            Ok(body) => (status, Json(body)).into_response(),
            Err(error) => {
                tracing::error!(error = %error, "Failed to serialize v1 response");
                let body = serde_json::json!({
                    "error": {
                        "code": ErrorCode::InternalError,
                        "message": INTERNAL_ERROR_MESSAGE
                    }
                });
                (ErrorCode::InternalError.status(), Json(body)).into_response()
            }
        }
    }
}

impl<T: Serialize> From<MemoError> for ApiResponse<T> {
    /// Convert a [`MemoError`] into a v1 [`ApiResponse`].
    ///
    /// Upstream failures keep their message since it helps diagnose quota or
    /// key problems. Configuration and internal failures are logged and
    /// replaced by fixed messages.
    fn from(err: MemoError) -> Self {
        match err {
            MemoError::Validation(msg) => ApiResponse::error(ErrorCode::InvalidRequest, msg),

            MemoError::Json(e) => {
                ApiResponse::error(ErrorCode::InvalidRequest, format!("Invalid JSON: {e}"))
            }

            MemoError::NotFound(msg) => ApiResponse::error(ErrorCode::NotFound, msg),

            MemoError::Configuration(detail) => {
                tracing::error!(%detail, "Generation is not configured");
                ApiResponse::error(ErrorCode::ConfigurationError, CONFIGURATION_ERROR_MESSAGE)
            }

            MemoError::Upstream(msg) => ApiResponse::error(ErrorCode::UpstreamError, msg),

            MemoError::EmptyResult(msg) => ApiResponse::error(ErrorCode::EmptyResult, msg),

            ref internal @ (MemoError::Database(_) | MemoError::Internal(_)) => {
                tracing::error!(error = %internal, "Internal error mapped to v1 response");
                ApiResponse::error(ErrorCode::InternalError, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}
