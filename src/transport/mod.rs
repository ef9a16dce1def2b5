//! Transport layer: the capability that physically sends HTTP requests.
//!
//! This module provides:
//! - Plain request/response values ([`HttpRequest`], [`HttpResponse`])
//! - The injected transport contract ([`HttpClient`])
//! - Transport failures ([`HttpError`])
//! - A production transport over reqwest ([`ReqwestClient`])
//!
//! Nothing here knows about base URIs, credentials or API semantics; that
//! is the job of [`crate::pipeline`].

mod client;
mod error;
mod http;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
