use std::sync::Arc;

use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use serde_json::Value;

use super::endpoints::assets as ep;
use crate::pipeline::{ClientError, HttpPipeline};
use crate::transport::HttpClient;

/// Prefix of the headers carrying asset metadata.
const META_PREFIX: &str = "X-Meta-";

/// Client for the AEM Assets API.
///
/// Asset paths are appended to `/api/assets/v1` as given; callers pass an
/// already URL-safe path with a leading `/`.
#[derive(Debug)]
pub struct AssetsClient<H> {
    http: Arc<HttpPipeline<H>>,
}

impl<H> Clone for AssetsClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<H: HttpClient> AssetsClient<H> {
    #[must_use]
    pub const fn new(http: Arc<HttpPipeline<H>>) -> Self {
        Self { http }
    }

    /// Uploads `content` to `path`.
    ///
    /// Each metadata entry is sent as an `X-Meta-<name>` header; a repeated
    /// name sends one header value per entry. The response body is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidHeader`] before sending if the content
    /// type or a metadata entry cannot form a header, and fails with
    /// "Failed to upload asset" on a status of 300 or above.
    pub async fn upload<I, K, V>(
        &self,
        path: &str,
        content: impl Into<Vec<u8>> + Send,
        content_type: &str,
        metadata: I,
    ) -> Result<(), ClientError>
    where
        I: IntoIterator<Item = (K, V)> + Send,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = self
            .http
            .create_request(ep::UPLOAD.method.clone(), &ep::UPLOAD.render(path))
            .with_header(CONTENT_TYPE, header_value(CONTENT_TYPE.as_str(), content_type)?);

        for (name, value) in metadata {
            let name = format!("{META_PREFIX}{}", name.as_ref());
            let value = header_value(&name, value.as_ref())?;
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ClientError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            request = request.with_appended_header(name, value);
        }

        self.http
            .dispatch(&ep::UPLOAD, request.with_body(content.into()))
            .await?;
        Ok(())
    }

    /// Retrieves the asset metadata at `path`.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to retrieve asset".
    pub async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.http.fetch(&ep::GET, &ep::GET.render(path)).await
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(value).map_err(|e| ClientError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
