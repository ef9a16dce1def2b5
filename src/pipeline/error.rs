//! Error types for resource client calls.

use thiserror::Error;

use crate::transport::{HttpError, HttpResponse};

/// A completed exchange whose status the classifier rejected.
///
/// The message names the failed operation ("Failed to create audience");
/// it is never derived from the response body. The response is attached
/// so callers can read the status and body themselves.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
    response: Option<HttpResponse>,
}

impl ApiError {
    /// Creates an API error.
    #[must_use]
    pub fn new(message: impl Into<String>, response: Option<HttpResponse>) -> Self {
        Self {
            message: message.into(),
            response,
        }
    }

    /// Returns the operation-specific message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending response, if one was attached.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// Returns the status of the attached response.
    #[must_use]
    pub fn status(&self) -> Option<http::StatusCode> {
        self.response.as_ref().map(|r| r.status)
    }

    /// Consumes the error and returns the attached response.
    #[must_use]
    pub fn into_response(self) -> Option<HttpResponse> {
        self.response
    }
}

/// Error type for resource client operations.
///
/// Every failure reaches the immediate caller; nothing is retried or
/// recovered locally.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request payload could not be serialized to JSON.
    #[error("Failed to serialize request payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The transport failed to complete the exchange.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The server answered with a failure status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A success response body was not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A caller-supplied header could not be built.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The offending header name
        name: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl ClientError {
    /// Returns the API error when the server rejected the call.
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the failure status when the server rejected the call.
    #[must_use]
    pub fn status(&self) -> Option<http::StatusCode> {
        self.as_api().and_then(ApiError::status)
    }
}
