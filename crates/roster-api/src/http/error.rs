//! Application error type mapping to HTTP status codes.
//!
//! Errors are returned as short plain-text bodies; the front-end turns them
//! into user-facing messages.

use std::any::Any;

use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

use roster_types::error::CharacterError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Character lookup errors.
    Character(CharacterError),
    /// Generic internal error.
    Internal(String),
}

impl From<CharacterError> for AppError {
    fn from(e: CharacterError) -> Self {
        AppError::Character(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Character(CharacterError::NotFound(slug)) => {
                tracing::debug!(%slug, "Character not found");
                (StatusCode::NOT_FOUND, "not found")
            }
            AppError::Character(CharacterError::Internal(msg)) | AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        (status, [(CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
    }
}

/// Turn a handler panic into a plain 500 response.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(detail).into_response()
}
