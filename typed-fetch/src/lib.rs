//! Typed request/response envelope for JSON HTTP APIs.
//!
//! `typed-fetch` wraps a plain HTTP transport with two guarantees:
//!
//! - **Successful responses are validated**: a 2xx body is decoded as JSON and
//!   run through a caller-supplied [`Schema`], so the caller receives the
//!   schema's coerced output rather than raw JSON.
//! - **Failures are typed**: callers register [`ErrorKind`]s (a status code
//!   plus a body schema). A non-2xx response whose status and body match a
//!   registered kind becomes an [`ApiError`] carrying the validated error data.
//!   Anything else becomes a generic [`RequestFailed`].
//!
//! ## Features
//!
//! - **Pluggable schemas**: anything implementing [`Schema`] works; serde types
//!   ([`SerdeSchema`]), JSON Schema documents ([`JsonSchema`]) and closures
//!   ([`FnSchema`]) are supported out of the box
//! - **Ordered first-match error kinds**: several kinds may share a status
//!   code and are tried in registration order
//! - **Pluggable transport**: [`ReqwestTransport`] by default, any
//!   [`Transport`] otherwise
//! - **Tracing**: every fetch runs inside an `otel`-flavoured span
//!
//! ## Example
//!
//! ```rust,ignore
//! use typed_fetch::{define_error, FetchClient, FetchOptions, SerdeSchema};
//!
//! #[derive(Debug, serde::Deserialize)]
//! struct User { id: String, name: String }
//!
//! #[derive(Debug, serde::Deserialize)]
//! struct NotFoundBody { message: String, resource: String }
//!
//! let not_found = define_error(404, SerdeSchema::<NotFoundBody>::new(), Some("NotFound"));
//! let client = FetchClient::new(url::Url::parse("https://api.example.com")?)?;
//!
//! let options = FetchOptions::new()
//!     .schema(SerdeSchema::<User>::new())
//!     .error(&not_found);
//!
//! match client.fetch("/users/1", options).await {
//!     Ok(Some(user)) => println!("{}", user.name),
//!     Ok(None) => println!("no content"),
//!     Err(err) => match not_found.extract(&err) {
//!         Some(body) => println!("missing {}", body.resource),
//!         None => return Err(err.into()),
//!     },
//! }
//! ```

pub mod client;
pub mod dispatch;
pub mod error;
pub mod kind;
pub mod method;
pub mod response;
pub mod schema;
pub mod transport;

// Re-exports for convenience
pub use client::{fetch, FetchClient, FetchClientBuilder, FetchOptions};
pub use dispatch::{dispatch, dispatch_untyped};
pub use error::{ApiError, ConfigError, FetchError, RequestFailed, SchemaValidationError};
pub use kind::{define_error, ErrorDescriptor, ErrorKind};
pub use method::RestMethod;
pub use response::{parse_success, parse_success_untyped, RawResponse};
pub use schema::{
    validate, AnyJson, FnSchema, Issue, JsonSchema, Outcome, Schema, SchemaError, SerdeSchema,
};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportRequest};
