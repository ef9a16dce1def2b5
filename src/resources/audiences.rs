use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::bulk_ids;
use super::endpoints::audiences as ep;
use crate::pipeline::{ClientError, HttpPipeline, QueryParams};
use crate::transport::HttpClient;

/// Client for the Audience API.
///
/// Identifiers are percent-encoded as a single path segment, so values
/// containing `/` or spaces address exactly one audience.
#[derive(Debug)]
pub struct AudiencesClient<H> {
    http: Arc<HttpPipeline<H>>,
}

impl<H> Clone for AudiencesClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<H: HttpClient> AudiencesClient<H> {
    #[must_use]
    pub const fn new(http: Arc<HttpPipeline<H>>) -> Self {
        Self { http }
    }

    /// Lists audiences.
    ///
    /// Documented options: `start`, `limit`, `sort`, `property`, `name`,
    /// `description`, `entityType`.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to list audiences" on a status of 300 or above.
    pub async fn list_audiences(&self, options: &QueryParams) -> Result<Value, ClientError> {
        let path = ep::LIST.render_with_query("", options);
        self.http.fetch(&ep::LIST, &path).await
    }

    /// Creates an audience from `payload`.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to create audience".
    pub async fn create_audience<P>(&self, payload: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.http
            .fetch_with(&ep::CREATE, ep::CREATE.template, payload)
            .await
    }

    /// Retrieves one audience.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to retrieve audience".
    pub async fn get_audience(&self, id: &str) -> Result<Value, ClientError> {
        self.http.fetch(&ep::GET, &ep::GET.render(id)).await
    }

    /// Deletes one audience. The response body is discarded.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to delete audience".
    pub async fn delete_audience(&self, id: &str) -> Result<(), ClientError> {
        self.http.execute(&ep::DELETE, &ep::DELETE.render(id)).await
    }

    /// Applies JSON Patch `operations` to one audience.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to patch audience".
    pub async fn patch_audience<P>(&self, id: &str, operations: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.http
            .fetch_with(&ep::PATCH, &ep::PATCH.render(id), operations)
            .await
    }

    /// Replaces one audience with `payload`.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to update audience".
    pub async fn update_audience<P>(&self, id: &str, payload: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.http
            .fetch_with(&ep::UPDATE, &ep::UPDATE.render(id), payload)
            .await
    }

    /// Retrieves several audiences in one call.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to bulk retrieve audiences".
    pub async fn bulk_get_audiences<S>(&self, ids: &[S]) -> Result<Value, ClientError>
    where
        S: AsRef<str>,
    {
        self.http
            .fetch_with(&ep::BULK_GET, ep::BULK_GET.template, &bulk_ids(ids))
            .await
    }
}
