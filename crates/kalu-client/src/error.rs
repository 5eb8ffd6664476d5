//! Error types for the dashboard client.

use kalu_types::SchemaError;
use thiserror::Error;

/// Message used when a failed response carries no `detail`.
pub const GENERIC_FAILURE: &str = "request failed";

/// Errors that can occur when using the dashboard client.
///
/// None of these are retried by the client; retry policy belongs to the caller.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure (connect, TLS, timeout, body read).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server `detail`, or the generic failure message.
        message: String,
    },

    /// Server returned a 2xx body that is not JSON or does not fit the expected record.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Base URL or request path could not be turned into a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Translation tables or request record were rejected.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl ClientError {
    /// HTTP status for `Api` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
