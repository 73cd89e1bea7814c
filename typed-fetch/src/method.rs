//! HTTP methods accepted by [`FetchOptions`](crate::FetchOptions).

use strum::{Display, EnumString};

/// The HTTP method of a fetch.
///
/// Defaults to [`RestMethod::Get`]. Parses case-insensitively so that
/// methods read from configuration (`"post"`, `"PATCH"`) work as-is.
///
/// ## Examples
///
/// ```rust
/// use typed_fetch::RestMethod;
///
/// let method: RestMethod = "post".parse().unwrap();
/// assert_eq!(method, RestMethod::Post);
/// assert!(method.has_body());
/// assert_eq!(method.to_string(), "POST");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RestMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl RestMethod {
    /// Returns `true` if requests with this method usually carry a body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Returns `true` if repeating the request has the same effect as
    /// sending it once.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, Self::Post | Self::Patch)
    }

    /// Returns `true` if the method only reads.
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Get | Self::Head | Self::Options)
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        match method {
            RestMethod::Get => reqwest::Method::GET,
            RestMethod::Post => reqwest::Method::POST,
            RestMethod::Put => reqwest::Method::PUT,
            RestMethod::Patch => reqwest::Method::PATCH,
            RestMethod::Delete => reqwest::Method::DELETE,
            RestMethod::Head => reqwest::Method::HEAD,
            RestMethod::Options => reqwest::Method::OPTIONS,
        }
    }
}
