//! Generic request failure.

use thiserror::Error;

use crate::transport::TransportError;

/// Catch-all failure for requests that did not produce a typed outcome.
///
/// Raised when no error kinds were registered, none matched the status code,
/// the failure body was not JSON, every candidate schema rejected the body,
/// or the transport itself failed. Only the message says which; register an
/// [`ErrorKind`](crate::ErrorKind) for a status to get structured errors.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RequestFailed {
    message: String,
    #[source]
    source: Option<TransportError>,
}

impl RequestFailed {
    /// Non-2xx response that no registered error kind could claim.
    pub fn status(status: u16, status_text: &str) -> Self {
        Self::with_message(format!(
            "Request failed with status {}",
            status_line(status, status_text)
        ))
    }

    /// Non-2xx response whose body could not be decoded as JSON.
    pub fn undecodable(status: u16, status_text: &str, error: &serde_json::Error) -> Self {
        Self::with_message(format!(
            "Request failed with status {}: response body is not valid JSON ({error})",
            status_line(status, status_text)
        ))
    }

    /// Non-2xx response whose body every candidate error schema rejected.
    pub fn unmatched(status: u16, status_text: &str) -> Self {
        Self::with_message(format!(
            "Request failed with status {}: no registered error schema matched the response body",
            status_line(status, status_text)
        ))
    }

    /// The transport failed before a response was received.
    pub fn transport(error: TransportError) -> Self {
        Self {
            message: format!("Request failed: {error}"),
            source: Some(error),
        }
    }

    /// Returns the human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn with_message(message: String) -> Self {
        Self {
            message,
            source: None,
        }
    }
}

fn status_line(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        status.to_string()
    } else {
        format!("{status} {status_text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_status_message() {
        let err = RequestFailed::status(500, "Internal Server Error");
        assert_eq!(
            err.to_string(),
            "Request failed with status 500 Internal Server Error"
        );
    }

    #[test]
    fn test_status_without_reason() {
        let err = RequestFailed::status(599, "");
        assert_eq!(err.message(), "Request failed with status 599");
    }

    #[test]
    fn test_unmatched_message() {
        let err = RequestFailed::unmatched(400, "Bad Request");
        assert!(err.message().contains("400"));
        assert!(err.message().contains("no registered error schema matched"));
    }

    #[test]
    fn test_transport_keeps_source() {
        let err = RequestFailed::transport("dns lookup failed".into());
        assert_eq!(err.message(), "Request failed: dns lookup failed");
        assert!(err.source().is_some());
    }
}
