use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

/// A completed HTTP response with its body fully read.
///
/// This is what transports hand to the dispatcher, and what an
/// [`ApiError`](crate::ApiError) keeps for diagnostics.
///
/// ## Examples
///
/// ```rust
/// use typed_fetch::RawResponse;
///
/// let response = RawResponse::new(404).with_json(&serde_json::json!({"message": "nope"}));
/// assert!(!response.is_ok());
/// assert_eq!(response.status_text(), "Not Found");
/// ```
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: u16,
    status_text: String,
    headers: HeaderMap,
    url: Option<Url>,
    body: Bytes,
}

impl RawResponse {
    /// Creates an empty response with the canonical reason phrase for
    /// `status` (empty for unknown codes).
    pub fn new(status: u16) -> Self {
        let status_text = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string();

        Self {
            status,
            status_text,
            headers: HeaderMap::new(),
            url: None,
            body: Bytes::new(),
        }
    }

    /// Reads a `reqwest` response to completion.
    ///
    /// ## Errors
    ///
    /// Returns an error if the body cannot be read.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let mut raw = Self::new(response.status().as_u16());
        raw.headers = response.headers().clone();
        raw.url = Some(response.url().clone());
        raw.body = response.bytes().await?;
        Ok(raw)
    }

    /// Overrides the status text.
    pub fn with_status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = status_text.into();
        self
    }

    /// Adds a header.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Sets the URL the response came from.
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    /// Sets the raw body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets a JSON body along with matching `Content-Type` and
    /// `Content-Length` headers.
    pub fn with_json(self, value: &Value) -> Self {
        let body = value.to_string();
        let length = HeaderValue::from(body.len());
        self.with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_header(CONTENT_LENGTH, length)
            .with_body(body)
    }

    /// Returns the numeric status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the status text (reason phrase).
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Returns the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a header value as a string, if present and valid ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the URL the response came from, if known.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Returns the raw body bytes.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Returns the declared `Content-Length`, if present and numeric.
    pub fn content_length(&self) -> Option<u64> {
        self.header(CONTENT_LENGTH.as_str())
            .and_then(|v| v.trim().parse().ok())
    }

    /// Returns `true` when the response explicitly has no body: status 204,
    /// or a declared length of zero.
    pub fn is_empty_body(&self) -> bool {
        self.status == StatusCode::NO_CONTENT.as_u16() || self.content_length() == Some(0)
    }

    /// Decodes the body as JSON.
    ///
    /// ## Errors
    ///
    /// Returns the decoder error if the body is not valid JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}
