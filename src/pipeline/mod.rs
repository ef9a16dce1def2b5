//! Request pipeline shared by every resource client.
//!
//! This module provides:
//! - Request construction and dispatch ([`HttpPipeline`])
//! - Status classification ([`classify`], [`Success`])
//! - Path and query encoding ([`encode_segment`], [`encode_hierarchical`], [`QueryParams`])
//! - Endpoint descriptors ([`Endpoint`], [`Param`])
//! - Error types ([`ClientError`], [`ApiError`])
//!
//! # Flow
//!
//! ```text
//! resource client -> Endpoint::render -> HttpPipeline::create_request
//!   -> Authenticator -> HttpClient -> classify -> decode_json -> caller
//! ```

mod classify;
mod dispatch;
mod encode;
mod endpoint;
mod error;


pub use classify::{Success, classify, decode_json};
pub use dispatch::HttpPipeline;
pub use encode::{QueryParams, encode_hierarchical, encode_segment};
pub use endpoint::{Endpoint, Param};
pub use error::{ApiError, ClientError};
