//! Error handling - maps failures onto the `{ success: false, error }` envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use cms_core::SubmissionError;
use cms_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to error envelopes.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    /// Caller-correctable rejection; the message is shown verbatim.
    Validation(String),
    /// Unexpected fault; the detail is logged, never returned.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not found"),
            AppError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound => ErrorResponse::not_found(),
            AppError::Validation(message) => ErrorResponse::new(message.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        if err.is_validation() {
            return AppError::Validation(err.to_string());
        }

        match err {
            SubmissionError::Processing(detail) => AppError::Internal(detail),
            SubmissionError::Transport(detail) => {
                AppError::Internal(format!("Upstream unreachable: {}", detail))
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
