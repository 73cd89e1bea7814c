//! Typed API errors produced by registered error kinds.

use std::fmt;

use crate::kind::{ErrorData, ErrorDescriptor, ErrorPayload};
use crate::response::RawResponse;

/// A failure response that matched a registered [`ErrorKind`](crate::ErrorKind).
///
/// Carries the kind's validated (and possibly coerced) body, the status text
/// as its message, and the full response for diagnostics. Use
/// [`ErrorKind::data`](crate::ErrorKind::data) to recognise the kind and read
/// the data with its concrete type in one step.
///
/// ## Examples
///
/// ```rust,ignore
/// match client.fetch("/users/7", options).await {
///     Err(FetchError::Api(err)) if not_found.matches(&err) => {
///         let body = not_found.data(&err).expect("matched kind");
///         println!("{} is missing: {}", body.resource, err.message());
///     }
///     other => { /* ... */ }
/// }
/// ```
#[derive(Debug)]
pub struct ApiError {
    descriptor: ErrorDescriptor,
    data: ErrorData,
    message: String,
    raw: RawResponse,
}

impl ApiError {
    pub(crate) fn new(descriptor: ErrorDescriptor, data: ErrorData, raw: RawResponse) -> Self {
        Self {
            descriptor,
            data,
            message: raw.status_text().to_string(),
            raw,
        }
    }

    /// Returns the status code of the matching kind.
    pub fn status_code(&self) -> u16 {
        self.descriptor.status_code()
    }

    /// Returns the display name of the matching kind.
    pub fn kind_name(&self) -> &str {
        self.descriptor.display_name()
    }

    /// Returns the response's status text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the response this error was built from.
    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }

    /// Returns the descriptor of the matching kind.
    pub fn descriptor(&self) -> &ErrorDescriptor {
        &self.descriptor
    }

    /// Returns `true` if this error was produced by `descriptor`'s kind.
    pub fn is(&self, descriptor: &ErrorDescriptor) -> bool {
        self.descriptor.same_kind(descriptor)
    }

    /// Returns the validated data if it has type `T`.
    pub fn data<T: 'static>(&self) -> Option<&T> {
        <dyn ErrorPayload as ErrorPayload>::as_any(&*self.data).downcast_ref::<T>()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {})", self.kind_name(), self.status_code())?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
