use serde_json::Value;
use tracing::warn;

use super::RawResponse;
use crate::error::FetchError;
use crate::schema::{self, AnyJson, Schema};

/// Parses a successful response against `schema`.
///
/// Returns `Ok(None)` without decoding or validating when the response has
/// status 204 or a zero `Content-Length`; an explicit "no body" response is
/// valid whatever the schema says.
///
/// ## Errors
///
/// - [`FetchError::Json`] if the body is not JSON.
/// - [`FetchError::Validation`] if the schema rejects the body. The issues
///   and the decoded body are logged at `warn` level first.
/// - [`FetchError::Schema`] if the schema itself fails.
pub async fn parse_success<S: Schema>(
    response: &RawResponse,
    schema: &S,
) -> Result<Option<S::Output>, FetchError> {
    if response.is_empty_body() {
        return Ok(None);
    }

    let decoded: Value = response.json()?;

    match schema::validate(schema, &decoded).await {
        Ok(value) => Ok(Some(value)),
        Err(FetchError::Validation(err)) => {
            warn!(
                status = response.status(),
                issues = %err,
                body = %decoded,
                "response body failed schema validation"
            );
            Err(err.into())
        }
        Err(err) => Err(err),
    }
}

/// Parses a successful response without a schema, returning the decoded
/// JSON as-is.
///
/// ## Errors
///
/// Returns [`FetchError::Json`] if the body is not JSON.
pub async fn parse_success_untyped(response: &RawResponse) -> Result<Option<Value>, FetchError> {
    parse_success(response, &AnyJson).await
}
