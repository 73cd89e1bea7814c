//! Layered error types for the crate.
//!
//! Callers receive a single [`FetchError`] and tell failures apart by variant:
//! - [`ApiError`] - a response matched a registered error kind
//! - [`SchemaValidationError`] - a successful body was rejected by its schema
//! - [`RequestFailed`] - catch-all for unmatched failures and transport errors
//! - [`ConfigError`] - invalid URLs, headers or schema documents

mod api_error;
mod config_error;
mod fetch_error;
mod request_failed;
mod validation_error;

pub use api_error::ApiError;
pub use config_error::ConfigError;
pub use fetch_error::FetchError;
pub use request_failed::RequestFailed;
pub use validation_error::SchemaValidationError;
