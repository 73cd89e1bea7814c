use std::fmt;

use serde_json::Value;

use super::{Outcome, Schema, SchemaError};

/// Schema backed by a synchronous closure.
///
/// Useful for one-off checks and for adapting validation libraries that do
/// not warrant their own [`Schema`] impl.
///
/// ## Examples
///
/// ```rust
/// use typed_fetch::{FnSchema, Outcome};
///
/// let positive = FnSchema::new(|value: &serde_json::Value| {
///     Ok(match value.as_i64() {
///         Some(n) if n > 0 => Outcome::Accepted(n),
///         _ => Outcome::reject("expected a positive integer"),
///     })
/// });
/// # let _ = positive;
/// ```
#[derive(Clone)]
pub struct FnSchema<F>(F);

impl<F> FnSchema<F> {
    /// Wraps `f` as a schema.
    pub fn new<T>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Outcome<T>, SchemaError>,
    {
        Self(f)
    }
}

impl<F> fmt::Debug for FnSchema<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnSchema")
    }
}

impl<F, T> Schema for FnSchema<F>
where
    F: Fn(&Value) -> Result<Outcome<T>, SchemaError> + Send + Sync,
    T: Send,
{
    type Output = T;

    async fn validate(&self, candidate: &Value) -> Result<Outcome<T>, SchemaError> {
        (self.0)(candidate)
    }
}
