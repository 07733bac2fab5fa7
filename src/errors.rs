//! Unified error type for the whole crate.
//!
//! Core operations and HTTP handlers share one `Error` enum; the
//! `IntoResponse` implementation maps each variant to the HTTP status the
//! surface contract requires (404 for unknown slugs, 403 for unauthenticated
//! mutation attempts, 500 for infrastructure failures).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// All error conditions the application distinguishes.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file missing, unreadable, or malformed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// A submitted field value was rejected
    #[error("Invalid {field}: {message}")]
    Validation {
        /// The offending form field
        field: &'static str,
        /// Human-readable rejection reason
        message: String,
    },

    /// No cheese with the requested slug exists
    #[error("No cheese found for slug '{slug}'")]
    CheeseNotFound {
        /// The slug that failed to resolve
        slug: String,
    },

    /// Request lacked a valid account token
    #[error("Authentication required")]
    Unauthorized,

    /// Database error from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::CheeseNotFound { .. } => StatusCode::NOT_FOUND,
            Error::Unauthorized => StatusCode::FORBIDDEN,
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::Config { .. } | Error::Database(_) | Error::Io(_) | Error::EnvVar(_) => {
                tracing::error!(error = %self, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
