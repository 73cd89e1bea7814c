//! Request execution with tracing instrumentation.
//!
//! This module provides [`fetch`], which runs one request through any
//! [`Transport`] and dispatches the response, and [`FetchClient`], which pairs
//! a base URL with a configured [`ReqwestTransport`].

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, USER_AGENT};
use tracing::{instrument, warn, Span};
use url::Url;

use super::FetchOptions;
use crate::dispatch::dispatch;
use crate::error::{ConfigError, FetchError, RequestFailed};
use crate::schema::Schema;
use crate::transport::{ReqwestTransport, Transport, TransportRequest};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Performs a request against `url` and dispatches the response.
///
/// Transport failures (DNS, connection, timeout) become
/// [`RequestFailed`]; everything else follows [`dispatch`].
///
/// ## Errors
///
/// See [`dispatch`] for the full list.
#[instrument(
    name = "fetch",
    skip_all,
    fields(
        http.method = %options.method,
        http.url = %url,
        http.status_code = tracing::field::Empty,
        otel.kind = "client",
        otel.status_code = tracing::field::Empty,
    )
)]
pub async fn fetch<T, S>(
    transport: &T,
    url: Url,
    options: FetchOptions<S>,
) -> Result<Option<S::Output>, FetchError>
where
    T: Transport,
    S: Schema,
{
    let FetchOptions {
        method,
        headers,
        body,
        timeout,
        schema,
        errors,
    } = options;

    let request = TransportRequest {
        method,
        url,
        headers,
        body,
        timeout,
    };

    let response = match transport.send(request).await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "transport failed");
            Span::current().record("otel.status_code", "ERROR");
            return Err(RequestFailed::transport(e).into());
        }
    };

    let status_code = response.status();
    Span::current().record("http.status_code", status_code);
    let otel_status = if response.is_ok() {
        "OK"
    } else if status_code >= 500 {
        "ERROR"
    } else {
        "UNSET"
    };
    Span::current().record("otel.status_code", otel_status);

    dispatch(response, &errors, &schema).await
}

/// Builder for configuring a [`FetchClient`].
#[derive(Debug)]
pub struct FetchClientBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
}

impl FetchClientBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
        }
    }

    /// Sets the client-wide request timeout.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = FetchClient::builder(base_url)
    ///     .timeout(Duration::from_secs(60))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header to all requests.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, FetchError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ConfigError::invalid_header(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ConfigError::invalid_header(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sends `Authorization: Bearer <token>` with every request.
    ///
    /// ## Errors
    ///
    /// Returns an error if the token is not a valid header value.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Result<Self, FetchError> {
        let mut value = HeaderValue::try_from(format!("Bearer {}", token.as_ref()))
            .map_err(|e| ConfigError::invalid_header(format!("invalid bearer token: {e}")))?;
        value.set_sensitive(true);
        self.default_headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Sets the `User-Agent` header.
    ///
    /// ## Errors
    ///
    /// Returns an error if the value is not a valid header value.
    pub fn user_agent(self, user_agent: impl AsRef<str>) -> Result<Self, FetchError> {
        self.default_header(USER_AGENT.as_str(), user_agent)
    }

    /// Builds the [`FetchClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<FetchClient, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(FetchClient {
            transport: ReqwestTransport::new(client),
            base_url: self.base_url,
        })
    }
}

/// Async client that resolves paths against a base URL and runs them
/// through [`fetch`].
///
/// Cloning is cheap and clones share the connection pool. Calls share no
/// other state.
///
/// ## Examples
///
/// ```rust,ignore
/// use typed_fetch::{FetchClient, FetchOptions, SerdeSchema};
/// use url::Url;
///
/// #[derive(Debug, serde::Deserialize)]
/// struct User { id: String, name: String }
///
/// let client = FetchClient::new(Url::parse("https://api.example.com")?)?;
/// let user = client
///     .fetch("/users/1", FetchOptions::new().schema(SerdeSchema::<User>::new()))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct FetchClient<T = ReqwestTransport> {
    transport: T,
    base_url: Url,
}

impl FetchClient {
    /// Creates a new builder for configuring a client.
    ///
    /// ## Arguments
    ///
    /// * `base_url` - The base URL paths are resolved against.
    pub fn builder(base_url: Url) -> FetchClientBuilder {
        FetchClientBuilder::new(base_url)
    }

    /// Creates a client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, FetchError> {
        Self::builder(base_url).build()
    }
}

impl<T: Transport> FetchClient<T> {
    /// Creates a client over a custom transport.
    pub fn with_transport(base_url: Url, transport: T) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves `path` against the base URL. Absolute URLs pass through.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the result is not a valid URL.
    pub fn url_for(&self, path: &str) -> Result<Url, FetchError> {
        Ok(self.base_url.join(path).map_err(ConfigError::InvalidUrl)?)
    }

    /// Fetches `path` with `options`.
    ///
    /// ## Errors
    ///
    /// See [`dispatch`](crate::dispatch) for the failure cases.
    pub async fn fetch<S: Schema>(
        &self,
        path: &str,
        options: FetchOptions<S>,
    ) -> Result<Option<S::Output>, FetchError> {
        let url = self.url_for(path)?;
        fetch(&self.transport, url, options).await
    }
}
