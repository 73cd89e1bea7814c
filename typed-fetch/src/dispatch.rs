//! Response dispatch.
//!
//! [`dispatch`] decides what a completed response means:
//!
//! 1. 2xx responses go to [`parse_success`].
//! 2. Otherwise the registered error kinds whose status code equals the
//!    response status are selected, keeping their registration order.
//! 3. The body is decoded once and offered to each selected kind in turn.
//!    The first schema to accept it produces the [`ApiError`]; a rejection
//!    moves on to the next kind; any other schema failure aborts the loop.
//! 4. Everything that falls through becomes a [`RequestFailed`].

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{ApiError, FetchError, RequestFailed};
use crate::kind::ErrorDescriptor;
use crate::response::{parse_success, RawResponse};
use crate::schema::{AnyJson, Schema};

/// Turns a response into a validated success value or an error.
///
/// On success, returns `Ok(None)` for empty bodies (204 or zero length) and
/// `Ok(Some(value))` with the schema's coerced output otherwise.
///
/// ## Errors
///
/// - [`FetchError::Api`] when a registered kind claims a failure response.
/// - [`FetchError::Failed`] for any other failure response.
/// - [`FetchError::Validation`] / [`FetchError::Json`] when a success body is
///   rejected or undecodable.
/// - [`FetchError::Schema`] when a schema fails to execute.
#[instrument(
    name = "dispatch",
    level = "debug",
    skip_all,
    fields(http.status_code = response.status(), error_kinds = error_kinds.len())
)]
pub async fn dispatch<S: Schema>(
    response: RawResponse,
    error_kinds: &[ErrorDescriptor],
    schema: &S,
) -> Result<Option<S::Output>, FetchError> {
    if response.is_ok() {
        return parse_success(&response, schema).await;
    }
    Err(resolve_failure(response, error_kinds).await)
}

/// [`dispatch`] without a success schema; success bodies come back as raw
/// JSON.
///
/// ## Errors
///
/// Same as [`dispatch`].
pub async fn dispatch_untyped(
    response: RawResponse,
    error_kinds: &[ErrorDescriptor],
) -> Result<Option<Value>, FetchError> {
    dispatch(response, error_kinds, &AnyJson).await
}

async fn resolve_failure(response: RawResponse, error_kinds: &[ErrorDescriptor]) -> FetchError {
    let status = response.status();

    let candidates: Vec<&ErrorDescriptor> = error_kinds
        .iter()
        .filter(|kind| kind.status_code() == status)
        .collect();

    if candidates.is_empty() {
        debug!(status, "no error kind registered for status");
        return RequestFailed::status(status, response.status_text()).into();
    }

    let body = match response.json() {
        Ok(body) => body,
        Err(e) => return RequestFailed::undecodable(status, response.status_text(), &e).into(),
    };

    for candidate in candidates {
        match candidate.validate(&body).await {
            Ok(data) => {
                debug!(kind = candidate.display_name(), "error kind matched");
                return ApiError::new(candidate.clone(), data, response).into();
            }
            Err(FetchError::Validation(rejection)) => {
                debug!(
                    kind = candidate.display_name(),
                    issues = %rejection,
                    "error kind rejected response body"
                );
            }
            Err(err) => return err,
        }
    }

    RequestFailed::unmatched(status, response.status_text()).into()
}
