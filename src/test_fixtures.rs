//! Shared test fixtures: a recording transport and pipeline helpers.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use http::{HeaderMap, StatusCode};
use serde_json::Value;

use crate::config::SdkConfig;
use crate::pipeline::HttpPipeline;
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

pub const BASE_URI: &str = "https://platform.adobe.io";

/// Mock transport that records requests and replays queued results.
#[derive(Debug, Default)]
pub struct MockTransport {
    results: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new(results: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(results.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Replies once with `status` and a JSON body.
    pub fn json(status: u16, body: &str) -> Arc<Self> {
        Self::new(vec![Ok(json_response(status, body))])
    }

    /// Replies once with `status` and an empty body.
    pub fn empty(status: u16) -> Arc<Self> {
        Self::new(vec![Ok(response(status, ""))])
    }

    /// Fails once with `error`.
    pub fn failing(error: HttpError) -> Arc<Self> {
        Self::new(vec![Err(error)])
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl HttpClient for MockTransport {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Connection("no response queued".into())))
    }
}

pub fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse::new(
        StatusCode::from_u16(status).unwrap(),
        HeaderMap::new(),
        body.as_bytes().to_vec(),
    )
}

pub fn json_response(status: u16, body: &str) -> HttpResponse {
    let mut response = response(status, body);
    response.headers.insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static("application/json"),
    );
    response
}

/// Unauthenticated pipeline over `transport` rooted at [`BASE_URI`].
pub fn pipeline(transport: &Arc<MockTransport>) -> Arc<HttpPipeline<Arc<MockTransport>>> {
    Arc::new(HttpPipeline::new(
        Arc::clone(transport),
        SdkConfig::new(BASE_URI),
    ))
}

/// Parses the JSON body of a captured request.
pub fn body_json(request: &HttpRequest) -> Value {
    serde_json::from_slice(request.body.as_deref().expect("request has no body")).unwrap()
}

/// Returns the captured body as text.
pub fn body_text(request: &HttpRequest) -> &str {
    std::str::from_utf8(request.body.as_deref().expect("request has no body")).unwrap()
}

/// Returns the URL of a captured request relative to [`BASE_URI`].
pub fn relative_url(request: &HttpRequest) -> &str {
    request
        .url
        .strip_prefix(BASE_URI)
        .expect("request URL does not start with the base URI")
}
