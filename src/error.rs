/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error type shared by every operation of the client.

use reqwest::StatusCode;
use std::fmt;

/// Convenience alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport failure: connection refused, timeout, TLS, malformed URL
    Network(reqwest::Error),
    /// Local file could not be read
    Io(std::io::Error),
    /// Response body was not valid JSON
    Json(serde_json::Error),
    /// Response body was JSON but did not match the expected schema
    Validation(String),
    /// The backend answered 404
    NotFound,
    /// The backend answered with any other non-success status
    Api {
        /// HTTP status returned by the backend
        status: StatusCode,
        /// `detail` field of the error body, or the raw body
        detail: String,
    },
    /// Caller supplied something that cannot be turned into a request
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Validation(msg) => write!(f, "validation error: {msg}"),
            AppError::NotFound => write!(f, "not found"),
            AppError::Api { status, detail } => write!(f, "api error {status}: {detail}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl AppError {
    /// HTTP status carried by the error, if the backend produced one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::NotFound => Some(StatusCode::NOT_FOUND),
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}
