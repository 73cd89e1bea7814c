//! Schema adapter.
//!
//! The [`Schema`] trait is the only contract this crate needs from a
//! validation library: given a decoded JSON value, either accept it (possibly
//! coercing it into another type) or reject it with a list of [`Issue`]s.
//! [`validate`] turns that contract into a `Result` the dispatcher can branch
//! on.

mod fn_schema;
mod issue;
mod json_schema;
mod serde_schema;

use std::future::Future;

use serde_json::Value;

use crate::error::{FetchError, SchemaValidationError};

pub use fn_schema::FnSchema;
pub use issue::Issue;
pub use json_schema::JsonSchema;
pub use serde_schema::SerdeSchema;

/// Failure of a schema's own execution, as opposed to a rejection.
pub type SchemaError = Box<dyn std::error::Error + Send + Sync>;

/// Result of running a schema against a candidate value.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The candidate was accepted; holds the coerced value.
    Accepted(T),
    /// The candidate was rejected; holds the reasons in schema order.
    Rejected(Vec<Issue>),
}

impl<T> Outcome<T> {
    /// Rejects with a single issue.
    pub fn reject(message: impl Into<String>) -> Self {
        Self::Rejected(vec![Issue::new(message)])
    }

    /// Returns `true` if the candidate was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// A validation and coercion capability.
///
/// Implementations must not mutate the candidate. Returning `Err` means the
/// schema itself broke; that error reaches the caller unchanged and is never
/// treated as a rejection.
///
/// ## Examples
///
/// ```rust
/// use serde_json::Value;
/// use typed_fetch::{Outcome, Schema, SchemaError};
///
/// struct NonEmptyString;
///
/// impl Schema for NonEmptyString {
///     type Output = String;
///
///     async fn validate(&self, candidate: &Value) -> Result<Outcome<String>, SchemaError> {
///         Ok(match candidate.as_str() {
///             Some(s) if !s.is_empty() => Outcome::Accepted(s.to_owned()),
///             _ => Outcome::reject("expected a non-empty string"),
///         })
///     }
/// }
/// ```
pub trait Schema: Send + Sync {
    /// The coerced value produced on acceptance.
    type Output: Send;

    /// Validates `candidate`, returning the coerced value or the issues.
    fn validate(
        &self,
        candidate: &Value,
    ) -> impl Future<Output = Result<Outcome<Self::Output>, SchemaError>> + Send;
}

/// Runs `schema` against `candidate`.
///
/// ## Errors
///
/// - [`FetchError::Validation`] when the schema rejects the candidate; the
///   issue list is never empty.
/// - [`FetchError::Schema`] when the schema itself fails.
pub async fn validate<S: Schema>(schema: &S, candidate: &Value) -> Result<S::Output, FetchError> {
    match schema.validate(candidate).await.map_err(FetchError::Schema)? {
        Outcome::Accepted(value) => Ok(value),
        Outcome::Rejected(issues) => Err(SchemaValidationError::new(issues).into()),
    }
}

/// Accepts any JSON value unchanged.
///
/// The schema used when a caller asks for an untyped response.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyJson;

impl Schema for AnyJson {
    type Output = Value;

    async fn validate(&self, candidate: &Value) -> Result<Outcome<Value>, SchemaError> {
        Ok(Outcome::Accepted(candidate.clone()))
    }
}
