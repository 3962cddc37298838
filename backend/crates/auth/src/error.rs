//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Bad or missing input, detected before any mutation
    #[error("{0}")]
    Validation(String),

    /// Username or email uniqueness violation.
    /// Surfaced as 400 on the wire (API contract); kept distinct here
    /// so logs can tell conflicts from plain bad input.
    #[error("Username or email already exists")]
    AccountExists,

    /// Unknown email or wrong password; single message on purpose,
    /// internal tracing distinguishes the two
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No bearer token on a protected request
    #[error("Token required")]
    TokenRequired,

    /// Token failed verification (malformed, bad signature, expired)
    #[error("Invalid token")]
    TokenInvalid,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) | AuthError::AccountExists => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::TokenRequired
            | AuthError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::AccountExists => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::TokenRequired
            | AuthError::TokenInvalid => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccountExists => {
                tracing::info!("Registration rejected: username or email taken");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}
