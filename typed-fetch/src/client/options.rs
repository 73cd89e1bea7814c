//! Per-request options.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::Serialize;

use crate::error::{ConfigError, FetchError};
use crate::kind::ErrorDescriptor;
use crate::method::RestMethod;
use crate::schema::{AnyJson, Schema};

/// Options for a single fetch: transport settings plus the success schema
/// and the ordered list of error kinds.
///
/// ## Type Parameters
///
/// - `S`: The success [`Schema`]. Defaults to [`AnyJson`], which returns the
///   decoded body untouched.
///
/// ## Examples
///
/// ```rust,ignore
/// let options = FetchOptions::new()
///     .method(RestMethod::Post)
///     .json(&NewUser { name: "Ann" })?
///     .schema(SerdeSchema::<User>::new())
///     .error(&conflict)
///     .error(&validation_failed)
///     .timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct FetchOptions<S = AnyJson> {
    pub(crate) method: RestMethod,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Bytes>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) schema: S,
    pub(crate) errors: Vec<ErrorDescriptor>,
}

impl FetchOptions<AnyJson> {
    /// Creates options for an untyped `GET`.
    pub fn new() -> Self {
        Self {
            method: RestMethod::Get,
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
            schema: AnyJson,
            errors: Vec::new(),
        }
    }
}

impl Default for FetchOptions<AnyJson> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FetchOptions<S> {
    /// Sets the HTTP method.
    pub fn method(mut self, method: RestMethod) -> Self {
        self.method = method;
        self
    }

    /// Adds a request header.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self, FetchError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ConfigError::invalid_header(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ConfigError::invalid_header(format!("invalid header value: {e}")))?;
        self.headers.append(name, value);
        Ok(self)
    }

    /// Sets a raw request body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `value` as the JSON request body and sets `Content-Type`.
    ///
    /// ## Errors
    ///
    /// Returns [`FetchError::Json`] if `value` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, value: &B) -> Result<Self, FetchError> {
        self.body = Some(serde_json::to_vec(value)?.into());
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(self)
    }

    /// Sets a timeout for this request only.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the success schema.
    pub fn schema<T: Schema>(self, schema: T) -> FetchOptions<T> {
        FetchOptions {
            method: self.method,
            headers: self.headers,
            body: self.body,
            timeout: self.timeout,
            schema,
            errors: self.errors,
        }
    }

    /// Registers an error kind. Kinds sharing a status code are tried in
    /// registration order.
    pub fn error(mut self, kind: impl Into<ErrorDescriptor>) -> Self {
        self.errors.push(kind.into());
        self
    }

    /// Registers several error kinds, in order.
    pub fn errors<I>(mut self, kinds: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ErrorDescriptor>,
    {
        self.errors.extend(kinds.into_iter().map(Into::into));
        self
    }

    /// Returns the HTTP method.
    pub fn get_method(&self) -> RestMethod {
        self.method
    }

    /// Returns the registered error kinds in order.
    pub fn error_kinds(&self) -> &[ErrorDescriptor] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::define_error;
    use crate::schema::SerdeSchema;

    #[test]
    fn test_defaults() {
        let options = FetchOptions::new();
        assert_eq!(options.get_method(), RestMethod::Get);
        assert!(options.error_kinds().is_empty());
        assert!(options.body.is_none());
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let options = FetchOptions::new()
            .json(&serde_json::json!({"name": "Ann"}))
            .unwrap();
        assert_eq!(
            options.headers.get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(options.body.unwrap().as_ref(), br#"{"name":"Ann"}"#);
    }

    #[test]
    fn test_invalid_header_name() {
        let result = FetchOptions::new().header("bad header", "x");
        assert!(matches!(
            result,
            Err(FetchError::Config(ConfigError::InvalidHeader { .. }))
        ));
    }

    #[test]
    fn test_errors_keep_registration_order() {
        let a = define_error(400, SerdeSchema::<String>::new(), Some("A"));
        let b = define_error(400, SerdeSchema::<u32>::new(), Some("B"));
        let options = FetchOptions::new().error(&a).errors([b.descriptor().clone()]);

        let names: Vec<_> = options
            .error_kinds()
            .iter()
            .map(ErrorDescriptor::display_name)
            .collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_schema_swap_keeps_settings() {
        let options = FetchOptions::new()
            .method(RestMethod::Put)
            .timeout(Duration::from_secs(3))
            .schema(SerdeSchema::<String>::new());
        assert_eq!(options.get_method(), RestMethod::Put);
        assert_eq!(options.timeout, Some(Duration::from_secs(3)));
    }
}
