use super::{Transport, TransportError, TransportRequest};
use crate::response::RawResponse;

/// [`Transport`] backed by a `reqwest::Client`.
///
/// Client-level settings (default headers, timeout, connection pooling) come
/// from the wrapped client; per-request settings from the
/// [`TransportRequest`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an existing client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Returns the wrapped client.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError> {
        let TransportRequest {
            method,
            url,
            headers,
            body,
            timeout,
        } = request;

        let mut builder = self.client.request(method.into(), url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        Ok(RawResponse::from_reqwest(response).await?)
    }
}
