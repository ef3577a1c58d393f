//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cart::LimitError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Requested cart change breaks a stock or option limit.
    #[error("Cart limit: {0}")]
    Limit(#[from] LimitError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Limit(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            Self::Limit(err) => err.to_string(),
            _ => self.to_string(),
        };

        (self.status(), message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
