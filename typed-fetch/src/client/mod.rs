//! HTTP client module.
//!
//! This module provides the request entry points: the free [`fetch`]
//! function for any [`Transport`](crate::Transport), and [`FetchClient`] for
//! the common case of a base URL over `reqwest`.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use typed_fetch::{define_error, FetchClient, FetchOptions, SerdeSchema};
//! use url::Url;
//!
//! let client = FetchClient::builder(Url::parse("https://api.example.com")?)
//!     .bearer_auth("sk-xxx")?
//!     .build()?;
//!
//! let rate_limited = define_error(429, SerdeSchema::<RetryAfter>::new(), Some("RateLimited"));
//!
//! let user = client
//!     .fetch(
//!         "/users/1",
//!         FetchOptions::new()
//!             .schema(SerdeSchema::<User>::new())
//!             .error(&rate_limited),
//!     )
//!     .await?;
//! ```

mod executor;
mod options;

pub use executor::{fetch, FetchClient, FetchClientBuilder};
pub use options::FetchOptions;
