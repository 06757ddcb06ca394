use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::MemoError;

/// `axum::Json` whose rejections render as a v1 `invalid_request` envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(MemoError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for MemoError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

fn map_json_rejection(rejection: JsonRejection) -> MemoError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            if let Some(field) = extract_missing_field(&message) {
                MemoError::Validation(format!("Missing required field: {field}"))
            } else {
                MemoError::Validation(format!("Invalid JSON: {message}"))
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            MemoError::Validation(format!("JSON syntax error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            MemoError::Validation("Missing `Content-Type: application/json` header".to_string())
        }
        JsonRejection::BytesRejection(_) => {
            MemoError::Internal("Failed to read request body".to_string())
        }
        _ => MemoError::Validation(rejection.body_text()),
    }
}

fn extract_missing_field(message: &str) -> Option<&str> {
    let prefix = "missing field `";
    let start = message.find(prefix)? + prefix.len();
    let remaining = message.get(start..)?;
    let end = remaining.find('`')?;
    remaining.get(..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_missing_field_name() {
        let message = "Failed to deserialize the JSON body: missing field `title` at line 1";
        assert_eq!(extract_missing_field(message), Some("title"));
        assert_eq!(extract_missing_field("expected value"), None);
    }
}
