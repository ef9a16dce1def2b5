//! Immutable SDK configuration.

use http::header::{HeaderName, HeaderValue};

use super::defaults;

/// Base URI, user agent and default headers shared by every request.
///
/// Built once and handed to a [`HttpPipeline`](crate::pipeline::HttpPipeline),
/// which owns it from then on. The `with_*` methods consume the value and
/// return a new one; there are no setters.
///
/// # Example
///
/// ```
/// use adobe_client::config::SdkConfig;
/// use http::header::{HeaderName, HeaderValue};
///
/// let config = SdkConfig::new("https://platform.adobe.io/")
///     .with_default_header(
///         HeaderName::from_static("x-sandbox-name"),
///         HeaderValue::from_static("prod"),
///     );
///
/// assert_eq!(config.base_uri(), "https://platform.adobe.io");
/// ```
#[derive(Debug, Clone)]
pub struct SdkConfig {
    base_uri: String,
    user_agent: HeaderValue,
    default_headers: Vec<(HeaderName, HeaderValue)>,
}

impl SdkConfig {
    /// Creates a configuration for `base_uri` with the default user agent
    /// and no default headers.
    ///
    /// A single trailing `/` is stripped from `base_uri`.
    #[must_use]
    pub fn new(base_uri: impl Into<String>) -> Self {
        let mut base_uri = base_uri.into();
        if base_uri.ends_with('/') {
            base_uri.pop();
        }

        Self {
            base_uri,
            user_agent: HeaderValue::from_static(defaults::USER_AGENT),
            default_headers: Vec::new(),
        }
    }

    /// Replaces the `User-Agent` value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: HeaderValue) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Adds a default header.
    ///
    /// A header already present under the same (case-insensitive) name keeps
    /// its position and takes the new value.
    #[must_use]
    pub fn with_default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        match self.default_headers.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.default_headers.push((name, value)),
        }
        self
    }

    /// Adds several default headers in iteration order.
    #[must_use]
    pub fn with_default_headers<I>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (HeaderName, HeaderValue)>,
    {
        headers
            .into_iter()
            .fold(self, |config, (name, value)| config.with_default_header(name, value))
    }

    /// Returns the base URI without its trailing slash.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the `User-Agent` value.
    #[must_use]
    pub const fn user_agent(&self) -> &HeaderValue {
        &self.user_agent
    }

    /// Returns the default headers in the order they are applied.
    #[must_use]
    pub fn default_headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.default_headers
    }
}
