/******************************************************************************
   Author: Taggy Contributors
   Date: 18/10/26
******************************************************************************/

//! Error type shared by every layer of the crate.

use reqwest::StatusCode;
use std::fmt;
use std::io;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Network or HTTP client error
    Network(reqwest::Error),
    /// I/O error
    Io(io::Error),
    /// JSON (de)serialization error
    Json(serde_json::Error),
    /// The remote API rejected the credentials
    Unauthorized,
    /// The remote API answered 404
    NotFound,
    /// The remote API answered 429
    RateLimitExceeded,
    /// Any other non-success status code
    Unexpected(StatusCode),
    /// Token provider failed to produce a token
    TokenProvider(String),
    /// Nothing was published in the registry under this key
    RegistryKeyNotFound(String),
    /// A value has already been published in the registry under this key
    RegistryKeyTaken(String),
    /// The value published under this key is not of the requested type
    RegistryTypeMismatch(String),
    /// The host application version is not supported by the module
    IncompatibleHost(String),
    /// Invalid input supplied by the caller
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Unexpected(s) => write!(f, "unexpected http status: {s}"),
            AppError::TokenProvider(msg) => write!(f, "token provider error: {msg}"),
            AppError::RegistryKeyNotFound(key) => write!(f, "registry key not found: {key}"),
            AppError::RegistryKeyTaken(key) => write!(f, "registry key already provided: {key}"),
            AppError::RegistryTypeMismatch(key) => write!(f, "registry type mismatch: {key}"),
            AppError::IncompatibleHost(msg) => write!(f, "incompatible host: {msg}"),
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
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl AppError {
    /// Maps a non-success HTTP status to the matching error
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            StatusCode::NOT_FOUND => AppError::NotFound,
            StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitExceeded,
            other => AppError::Unexpected(other),
        }
    }
}
