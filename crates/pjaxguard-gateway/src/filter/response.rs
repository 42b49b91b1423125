//! Guard errors as HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use pjaxguard_core::GuardError;

/// Response wrapper for `GuardError`.
#[derive(Debug)]
pub struct HttpError(pub GuardError);

impl From<GuardError> for HttpError {
    fn from(e: GuardError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self.0 {
            GuardError::ActionRejected { code, message } => {
                let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let body = if message.is_empty() {
                    status.canonical_reason().unwrap_or_default().to_string()
                } else {
                    message
                };
                (status, body).into_response()
            }
            other => {
                tracing::error!(code = other.code().as_str(), error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.code().as_str()).into_response()
            }
        }
    }
}
