//! Error types for transport operations.

use thiserror::Error;

/// Error type for transport operations.
///
/// Reported by [`HttpClient`](super::HttpClient) implementations when the
/// exchange could not be completed. The pipeline never interprets or retries
/// these; they reach the caller unchanged.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS handshake failures and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// Only produced when the transport itself was configured with a deadline.
    #[error("Request timed out")]
    Timeout,

    /// The request URL could not be used by the transport.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
