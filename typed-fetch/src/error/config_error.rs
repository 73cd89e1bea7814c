//! Client and request configuration errors.

use thiserror::Error;

/// Errors in client, request or schema configuration.
///
/// These indicate programmer errors rather than anything the remote
/// server did.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing or joining failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A header name or value is not valid HTTP.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header problem.
        message: String,
    },

    /// A JSON Schema document could not be compiled.
    #[error("Invalid JSON Schema: {message}")]
    InvalidSchema {
        /// Compiler message.
        message: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ConfigError {
    /// Creates an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }
}
