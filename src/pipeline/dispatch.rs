//! The request pipeline: URL composition, headers, authentication, dispatch.

use std::fmt;

use http::Method;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde_json::Value;

use super::classify::decode_json;
use super::endpoint::Endpoint;
use super::error::ClientError;
use crate::auth::Authenticator;
use crate::config::SdkConfig;
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

fn application_json() -> HeaderValue {
    HeaderValue::from_static("application/json")
}

/// Builds, authenticates and dispatches every outgoing request.
///
/// # Design
///
/// The pipeline owns its [`SdkConfig`] and optional [`Authenticator`] and
/// never mutates either. It holds no per-call state, so one instance can
/// serve concurrent calls as long as the transport can.
///
/// Header precedence, lowest to highest: `Accept`, `User-Agent`, configured
/// default headers, authenticator headers, call-specific headers such as
/// `Content-Type`. A later write replaces every earlier value of that name.
///
/// # Type Parameters
///
/// - `H`: The transport implementation
pub struct HttpPipeline<H> {
    transport: H,
    config: SdkConfig,
    authenticator: Option<Box<dyn Authenticator>>,
}

impl<H> HttpPipeline<H> {
    /// Creates an unauthenticated pipeline.
    #[must_use]
    pub fn new(transport: H, config: SdkConfig) -> Self {
        Self {
            transport,
            config,
            authenticator: None,
        }
    }

    /// Returns the pipeline with `authenticator` applied to every request.
    #[must_use]
    pub fn with_authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Some(Box::new(authenticator));
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &H {
        &self.transport
    }

    /// Returns true if an authenticator is installed.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticator.is_some()
    }

    /// Builds a request for `path` relative to the base URI.
    ///
    /// The base URI and `path` are joined with exactly one `/`, whatever
    /// slashes either side carries. Never fails.
    #[must_use]
    pub fn create_request(&self, method: Method, path: &str) -> HttpRequest {
        let url = format!(
            "{}/{}",
            self.config.base_uri().trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        let mut request = HttpRequest::new(method, url)
            .with_header(ACCEPT, application_json())
            .with_header(USER_AGENT, self.config.user_agent().clone());

        for (name, value) in self.config.default_headers() {
            request = request.with_header(name.clone(), value.clone());
        }

        match &self.authenticator {
            Some(authenticator) => authenticator.authenticate(request),
            None => request,
        }
    }

    /// Builds a request carrying `payload` as a UTF-8 JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialization`] if `payload` cannot be
    /// represented as JSON (for example a map with non-string keys).
    pub fn create_json_request<P>(
        &self,
        method: Method,
        path: &str,
        payload: &P,
    ) -> Result<HttpRequest, ClientError>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload).map_err(ClientError::Serialization)?;

        Ok(self
            .create_request(method, path)
            .with_header(CONTENT_TYPE, application_json())
            .with_body(body))
    }
}

impl<H: HttpClient> HttpPipeline<H> {
    /// Sends `request` through the transport.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unchanged.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        match self.transport.request(request).await {
            Ok(response) => {
                tracing::debug!(status = response.status.as_u16(), "Received response");
                Ok(response)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Transport failed");
                Err(e)
            }
        }
    }

    /// Sends a prepared request and classifies the response under `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] or [`ClientError::Api`].
    pub async fn dispatch(
        &self,
        endpoint: &Endpoint,
        request: HttpRequest,
    ) -> Result<HttpResponse, ClientError> {
        let response = self.send(request).await?;
        Ok(endpoint.classify(response)?)
    }

    /// Calls a body-less endpoint and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`], [`ClientError::Api`] or
    /// [`ClientError::Decode`].
    pub async fn fetch(&self, endpoint: &Endpoint, path: &str) -> Result<Value, ClientError> {
        let request = self.create_request(endpoint.method.clone(), path);
        let response = self.dispatch(endpoint, request).await?;
        decode_json(&response)
    }

    /// Calls an endpoint with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// As [`HttpPipeline::fetch`], plus [`ClientError::Serialization`].
    pub async fn fetch_with<P>(
        &self,
        endpoint: &Endpoint,
        path: &str,
        payload: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized + Sync,
    {
        let request = self.create_json_request(endpoint.method.clone(), path, payload)?;
        let response = self.dispatch(endpoint, request).await?;
        decode_json(&response)
    }

    /// Calls a body-less endpoint and discards the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] or [`ClientError::Api`].
    pub async fn execute(&self, endpoint: &Endpoint, path: &str) -> Result<(), ClientError> {
        let request = self.create_request(endpoint.method.clone(), path);
        self.dispatch(endpoint, request).await?;
        Ok(())
    }
}

impl<H: fmt::Debug> fmt::Debug for HttpPipeline<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpPipeline")
            .field("transport", &self.transport)
            .field("config", &self.config)
            .field("authenticated", &self.authenticator.is_some())
            .finish()
    }
}
