//! Top-level error type.

use super::{ApiError, ConfigError, RequestFailed, SchemaValidationError};
use crate::schema::SchemaError;
use thiserror::Error;

/// Top-level error type for every fetch and dispatch operation.
///
/// ## Examples
///
/// ```rust,ignore
/// use typed_fetch::FetchError;
///
/// fn handle_error(err: FetchError) {
///     match err {
///         FetchError::Api(e) => eprintln!("{} ({})", e.kind_name(), e.status_code()),
///         FetchError::Validation(e) => eprintln!("Unexpected response shape: {e}"),
///         FetchError::Failed(e) => eprintln!("{e}"),
///         FetchError::Json(e) => eprintln!("Response was not JSON: {e}"),
///         FetchError::Schema(e) => eprintln!("Schema crashed: {e}"),
///         FetchError::Config(e) => eprintln!("Bad configuration: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum FetchError {
    /// The response matched a registered error kind.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A successful response body was rejected by the success schema.
    #[error(transparent)]
    Validation(#[from] SchemaValidationError),

    /// Generic request failure (unmatched status, unmatched body, transport).
    #[error(transparent)]
    Failed(#[from] RequestFailed),

    /// JSON encoding or decoding failed outside of error-kind matching.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A schema failed to execute, as opposed to rejecting its input.
    #[error("Schema execution failed: {0}")]
    Schema(#[source] SchemaError),

    /// Client or request configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FetchError {
    /// Returns the typed API error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the schema validation error, if this is one.
    pub fn as_validation(&self) -> Option<&SchemaValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }

    /// Returns `true` for the generic [`RequestFailed`] catch-all.
    pub fn is_request_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the HTTP status code of a typed API error.
    ///
    /// Generic failures deliberately carry their status only in the message.
    pub fn status_code(&self) -> Option<u16> {
        self.as_api().map(ApiError::status_code)
    }
}
