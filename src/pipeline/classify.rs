//! Success/failure classification of responses.

use serde_json::Value;

use super::{ApiError, ClientError};
use crate::transport::HttpResponse;

/// Which statuses count as success for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Success {
    /// Anything below 300. All 3xx/4xx/5xx are uniformly fatal.
    #[default]
    BelowRedirect,

    /// Only 200..=299. Failures report the status in the message.
    Only2xx,
}

impl Success {
    /// Returns true if `status` is accepted under this rule.
    #[must_use]
    pub fn accepts(self, status: http::StatusCode) -> bool {
        match self {
            Self::BelowRedirect => status.as_u16() < 300,
            Self::Only2xx => status.is_success(),
        }
    }
}

/// Classifies `response`, turning a rejected status into an [`ApiError`]
/// that carries the response.
///
/// # Errors
///
/// Returns [`ApiError`] with `failure` as its message when `rule` rejects
/// the status. Under [`Success::Only2xx`] the message gains a
/// `"; status <code>"` suffix.
pub fn classify(
    response: HttpResponse,
    rule: Success,
    failure: &str,
) -> Result<HttpResponse, ApiError> {
    if rule.accepts(response.status) {
        return Ok(response);
    }

    let status = response.status.as_u16();
    tracing::warn!(status, "{failure}");

    let message = match rule {
        Success::BelowRedirect => failure.to_string(),
        Success::Only2xx => format!("{failure}; status {status}"),
    };
    Err(ApiError::new(message, Some(response)))
}

/// Decodes a success body into an untyped JSON value.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] when the body is not valid JSON,
/// including when it is empty.
pub fn decode_json(response: &HttpResponse) -> Result<Value, ClientError> {
    serde_json::from_slice(&response.body).map_err(ClientError::Decode)
}
