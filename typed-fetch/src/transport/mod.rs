//! Transport boundary.
//!
//! A [`Transport`] performs one HTTP exchange and returns the response with
//! its body read. [`ReqwestTransport`] is the default implementation; tests
//! and embedders can supply their own.

mod reqwest_transport;

use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use url::Url;

use crate::method::RestMethod;
use crate::response::RawResponse;

pub use reqwest_transport::ReqwestTransport;

/// Error raised by a transport (DNS, connection, timeout, body read).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// A fully resolved request handed to a [`Transport`].
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: RestMethod,
    /// Absolute request URL.
    pub url: Url,
    /// Per-request headers, applied on top of any transport defaults.
    pub headers: HeaderMap,
    /// Request body, if any.
    pub body: Option<Bytes>,
    /// Per-request timeout, passed through untouched.
    pub timeout: Option<Duration>,
}

impl TransportRequest {
    /// Creates a bodiless request with no extra headers.
    pub fn new(method: RestMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }
}

/// Performs HTTP exchanges.
///
/// Cancellation follows the usual async rule: dropping the returned future
/// abandons the exchange.
pub trait Transport: Send + Sync {
    /// Sends `request` and reads the full response.
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}
