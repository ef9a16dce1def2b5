//! Declarative endpoint descriptors.
//!
//! Each remote operation is one `static` [`Endpoint`] built with the `const`
//! constructors below: verb, path template, how its path parameter is
//! encoded, the query options it documents, the message used when it fails
//! and its success rule. Resource clients render a descriptor into a path
//! and hand both to the pipeline.
//!
//! Declare descriptors as `static`: a borrowed `const` holding a [`Method`]
//! is a temporary and dies before a stored future runs.

use http::Method;

use super::classify::{Success, classify};
use super::encode::{QueryParams, encode_hierarchical, encode_segment};
use super::error::ApiError;
use crate::transport::HttpResponse;

/// Placeholder replaced by the encoded path parameter.
const PLACEHOLDER: &str = "{}";

/// How an endpoint's path parameter is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// The template has no parameter.
    None,
    /// A flat identifier; every reserved character is escaped, `/` included.
    Segment,
    /// A repository path; segments are escaped, `/` separators kept.
    Hierarchical,
    /// Inserted verbatim.
    Raw,
}

impl Param {
    fn encode(self, value: &str) -> String {
        match self {
            Self::None => String::new(),
            Self::Segment => encode_segment(value),
            Self::Hierarchical => encode_hierarchical(value),
            Self::Raw => value.to_string(),
        }
    }
}

/// Descriptor of one remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// HTTP verb
    pub method: Method,
    /// Path relative to the base URI, with at most one `{}` placeholder
    pub template: &'static str,
    /// Encoding of the placeholder value
    pub param: Param,
    /// Query option names the remote API documents
    pub query: &'static [&'static str],
    /// Message of the [`ApiError`] raised when the call fails
    pub failure: &'static str,
    /// Which statuses count as success
    pub success: Success,
}

impl Endpoint {
    /// Creates a descriptor without path parameter or query options.
    #[must_use]
    pub const fn new(method: Method, template: &'static str, failure: &'static str) -> Self {
        Self {
            method,
            template,
            param: Param::None,
            query: &[],
            failure,
            success: Success::BelowRedirect,
        }
    }

    /// Creates a descriptor whose template takes a parameter.
    #[must_use]
    pub const fn with_param(
        method: Method,
        template: &'static str,
        param: Param,
        failure: &'static str,
    ) -> Self {
        Self {
            method,
            template,
            param,
            query: &[],
            failure,
            success: Success::BelowRedirect,
        }
    }

    /// Creates a descriptor for a listing endpoint with documented query options.
    #[must_use]
    pub const fn listing(
        template: &'static str,
        query: &'static [&'static str],
        failure: &'static str,
    ) -> Self {
        Self {
            method: Method::GET,
            template,
            param: Param::None,
            query,
            failure,
            success: Success::BelowRedirect,
        }
    }

    /// Renders the path, substituting the encoded `param` for the placeholder.
    ///
    /// The placeholder is removed when the descriptor takes no parameter.
    #[must_use]
    pub fn render(&self, param: &str) -> String {
        self.template
            .replacen(PLACEHOLDER, &self.param.encode(param), 1)
    }

    /// Renders the path and appends the query options.
    ///
    /// Options the endpoint does not document are still sent; they are only
    /// reported at debug level.
    #[must_use]
    pub fn render_with_query(&self, param: &str, query: &QueryParams) -> String {
        if !self.query.is_empty() {
            for (key, _) in query.iter() {
                if !self.query.contains(&key) {
                    tracing::debug!(option = key, endpoint = self.template, "Undocumented query option");
                }
            }
        }
        query.append_to(&self.render(param))
    }

    /// Classifies a response under this endpoint's success rule.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] carrying the response when the status is rejected.
    pub fn classify(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        classify(response, self.success, self.failure)
    }
}
