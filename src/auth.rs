//! Authentication capabilities applied to outgoing requests.
//!
//! An [`Authenticator`] receives a request that already carries the standard
//! and default headers and returns it with credentials attached. The
//! pipeline treats the authenticator as optional; without one, requests go
//! out unauthenticated.
//!
//! Provided variants:
//! - [`BearerToken`]: `Authorization: Bearer <token>`
//! - [`HeaderAuth`]: one fixed credential header (API keys, gateway markers)
//! - any `Fn(HttpRequest) -> HttpRequest + Send + Sync` closure

use std::fmt;

use http::header::{AUTHORIZATION, HeaderName, HeaderValue, InvalidHeaderValue};

use crate::transport::HttpRequest;

/// Injects credentials into an outgoing request.
///
/// Implementations must be total: credential validation happens when the
/// authenticator is built, never while a request is being prepared. Token
/// refresh is out of scope; callers supply an already-valid credential.
///
/// # Example
///
/// ```
/// use adobe_client::auth::Authenticator;
/// use adobe_client::transport::HttpRequest;
/// use http::HeaderValue;
///
/// let tag = |req: HttpRequest| {
///     req.with_header(
///         http::header::HeaderName::from_static("x-client-tag"),
///         HeaderValue::from_static("reporting"),
///     )
/// };
/// let req = tag.authenticate(HttpRequest::get("https://example.com/"));
/// assert_eq!(req.header_str("x-client-tag"), Some("reporting"));
/// ```
pub trait Authenticator: Send + Sync {
    /// Returns `request` with credentials attached.
    fn authenticate(&self, request: HttpRequest) -> HttpRequest;
}

impl<F> Authenticator for F
where
    F: Fn(HttpRequest) -> HttpRequest + Send + Sync,
{
    fn authenticate(&self, request: HttpRequest) -> HttpRequest {
        self(request)
    }
}

/// Bearer token authentication.
///
/// The `Authorization` value is built and validated once in
/// [`BearerToken::new`] and marked sensitive so it is redacted from
/// `Debug` output of header maps.
#[derive(Clone)]
pub struct BearerToken {
    header: HeaderValue,
}

impl BearerToken {
    /// Creates a bearer token authenticator.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHeaderValue`] if the token contains characters that
    /// cannot appear in an HTTP header (control characters, newlines).
    pub fn new(token: &str) -> Result<Self, InvalidHeaderValue> {
        let mut header = HeaderValue::try_from(format!("Bearer {token}"))?;
        header.set_sensitive(true);
        Ok(Self { header })
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken").finish_non_exhaustive()
    }
}

impl Authenticator for BearerToken {
    fn authenticate(&self, request: HttpRequest) -> HttpRequest {
        request.with_header(AUTHORIZATION, self.header.clone())
    }
}

/// Static header authentication, e.g. `x-api-key`.
#[derive(Clone)]
pub struct HeaderAuth {
    name: HeaderName,
    value: HeaderValue,
}

impl HeaderAuth {
    /// Creates an authenticator that sets `name: value` on every request.
    #[must_use]
    pub fn new(name: HeaderName, mut value: HeaderValue) -> Self {
        value.set_sensitive(true);
        Self { name, value }
    }

    /// Returns the header name this authenticator sets.
    #[must_use]
    pub const fn name(&self) -> &HeaderName {
        &self.name
    }
}

impl fmt::Debug for HeaderAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderAuth")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Authenticator for HeaderAuth {
    fn authenticate(&self, request: HttpRequest) -> HttpRequest {
        request.with_header(self.name.clone(), self.value.clone())
    }
}
