//! Error-kind definitions.
//!
//! [`define_error`] binds a status code and a body schema into an
//! [`ErrorKind`]. Kinds are pure configuration: define them once, share them
//! freely, and pass them to [`FetchOptions::error`](crate::FetchOptions::error)
//! for every request that may produce them. The dispatcher works on the
//! type-erased [`ErrorDescriptor`]; callers use the typed [`ErrorKind`] to
//! recognise errors and read their data back.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::Value;

use crate::error::{ApiError, FetchError};
use crate::schema::{self, Schema};

/// Display name used when a kind is defined without one.
pub const DEFAULT_KIND_NAME: &str = "ApiError";

/// Validated error data, type-erased.
pub(crate) type ErrorData = Arc<dyn ErrorPayload>;

pub(crate) trait ErrorPayload: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug + Send + Sync> ErrorPayload for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

trait ErasedSchema: Send + Sync {
    fn validate_erased<'a>(
        &'a self,
        candidate: &'a Value,
    ) -> BoxFuture<'a, Result<ErrorData, FetchError>>;
}

impl<S> ErasedSchema for S
where
    S: Schema,
    S::Output: fmt::Debug + Sync + 'static,
{
    fn validate_erased<'a>(
        &'a self,
        candidate: &'a Value,
    ) -> BoxFuture<'a, Result<ErrorData, FetchError>> {
        Box::pin(async move {
            let data = schema::validate(self, candidate).await?;
            Ok(Arc::new(data) as ErrorData)
        })
    }
}

struct DescriptorInner {
    status_code: u16,
    display_name: String,
    schema: Arc<dyn ErasedSchema>,
}

/// Type-erased error kind, as stored in an options list.
///
/// Clones share identity: two descriptors are the same kind only if one was
/// cloned from the other (or both from the same [`ErrorKind`]).
#[derive(Clone)]
pub struct ErrorDescriptor {
    inner: Arc<DescriptorInner>,
}

impl ErrorDescriptor {
    /// Returns the status code this kind matches.
    pub fn status_code(&self) -> u16 {
        self.inner.status_code
    }

    /// Returns the kind's display name.
    pub fn display_name(&self) -> &str {
        &self.inner.display_name
    }

    /// Returns `true` if both descriptors are the same kind.
    pub fn same_kind(&self, other: &ErrorDescriptor) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Runs the body schema, returning the coerced data on acceptance.
    pub(crate) fn validate<'a>(
        &'a self,
        candidate: &'a Value,
    ) -> BoxFuture<'a, Result<ErrorData, FetchError>> {
        self.inner.schema.validate_erased(candidate)
    }
}

impl fmt::Debug for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorDescriptor")
            .field("status_code", &self.inner.status_code)
            .field("display_name", &self.inner.display_name)
            .finish_non_exhaustive()
    }
}

/// A typed error kind: a status code plus a body schema `S`.
///
/// Errors matched by this kind carry `S::Output` as their data.
pub struct ErrorKind<S> {
    schema: Arc<S>,
    descriptor: ErrorDescriptor,
}

/// Defines an error kind.
///
/// `display_name` defaults to [`DEFAULT_KIND_NAME`]. The status code is not
/// range-checked; a kind for an impossible status simply never matches.
/// Several kinds may share a status code; dispatch tries them in the order
/// they are registered on a request.
///
/// ## Examples
///
/// ```rust
/// use typed_fetch::{define_error, SerdeSchema};
///
/// #[derive(Debug, serde::Deserialize)]
/// struct NotFound { message: String, resource: String }
///
/// let not_found = define_error(404, SerdeSchema::<NotFound>::new(), Some("NotFound"));
/// assert_eq!(not_found.status_code(), 404);
/// assert_eq!(not_found.display_name(), "NotFound");
/// ```
pub fn define_error<S>(status_code: u16, schema: S, display_name: Option<&str>) -> ErrorKind<S>
where
    S: Schema + 'static,
    S::Output: fmt::Debug + Sync + 'static,
{
    let schema = Arc::new(schema);
    let descriptor = ErrorDescriptor {
        inner: Arc::new(DescriptorInner {
            status_code,
            display_name: display_name.unwrap_or(DEFAULT_KIND_NAME).to_string(),
            schema: schema.clone(),
        }),
    };
    ErrorKind { schema, descriptor }
}

impl<S> ErrorKind<S> {
    /// Returns the status code this kind matches.
    pub fn status_code(&self) -> u16 {
        self.descriptor.status_code()
    }

    /// Returns the kind's display name.
    pub fn display_name(&self) -> &str {
        self.descriptor.display_name()
    }

    /// Returns the body schema.
    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// Returns the type-erased descriptor.
    pub fn descriptor(&self) -> &ErrorDescriptor {
        &self.descriptor
    }

    /// Returns `true` if `err` was produced by this kind.
    pub fn matches(&self, err: &ApiError) -> bool {
        err.is(&self.descriptor)
    }
}

impl<S: Schema> ErrorKind<S>
where
    S::Output: 'static,
{
    /// Returns the validated data of `err` if it was produced by this kind.
    pub fn data<'e>(&self, err: &'e ApiError) -> Option<&'e S::Output> {
        if self.matches(err) {
            err.data::<S::Output>()
        } else {
            None
        }
    }

    /// Like [`data`](Self::data), starting from a [`FetchError`].
    pub fn extract<'e>(&self, err: &'e FetchError) -> Option<&'e S::Output> {
        err.as_api().and_then(|api| self.data(api))
    }
}

impl<S> Clone for ErrorKind<S> {
    fn clone(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            descriptor: self.descriptor.clone(),
        }
    }
}

impl<S> fmt::Debug for ErrorKind<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorKind")
            .field("status_code", &self.status_code())
            .field("display_name", &self.display_name())
            .finish_non_exhaustive()
    }
}

impl<S> From<ErrorKind<S>> for ErrorDescriptor {
    fn from(kind: ErrorKind<S>) -> Self {
        kind.descriptor
    }
}

impl<S> From<&ErrorKind<S>> for ErrorDescriptor {
    fn from(kind: &ErrorKind<S>) -> Self {
        kind.descriptor.clone()
    }
}
