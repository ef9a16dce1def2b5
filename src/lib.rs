//! Async client for the Adobe Experience Manager and Adobe Experience
//! Platform segmentation REST APIs.
//!
//! The crate is layered:
//!
//! - [`transport`]: the [`HttpClient`](transport::HttpClient) seam and its
//!   `reqwest` implementation
//! - [`auth`]: credential injection
//! - [`config`]: base URI, user agent, default headers and TOML loading
//! - [`pipeline`]: request composition, dispatch, status classification
//! - [`resources`]: one client per API family, driven by an endpoint table
//! - [`Sdk`]: the façade tying them together
//!
//! Responses are decoded into [`serde_json::Value`]. The library emits
//! `tracing` events and installs no subscriber.

pub mod auth;
pub mod config;
pub mod pipeline;
pub mod resources;
mod sdk;
pub mod transport;

#[cfg(test)]
mod test_fixtures;

pub use pipeline::{ApiError, ClientError};
pub use sdk::Sdk;
