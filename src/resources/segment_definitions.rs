use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::bulk_ids;
use super::endpoints::segment_definitions as ep;
use crate::pipeline::{ClientError, HttpPipeline, QueryParams};
use crate::transport::HttpClient;

/// Client for the Segment Definitions API.
#[derive(Debug)]
pub struct SegmentDefinitionsClient<H> {
    http: Arc<HttpPipeline<H>>,
}

impl<H> Clone for SegmentDefinitionsClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<H: HttpClient> SegmentDefinitionsClient<H> {
    #[must_use]
    pub const fn new(http: Arc<HttpPipeline<H>>) -> Self {
        Self { http }
    }

    /// Lists segment definitions (`start`, `limit`, `page`, `sort`).
    ///
    /// # Errors
    ///
    /// Fails with "Failed to list segment definitions".
    pub async fn list_segment_definitions(
        &self,
        options: &QueryParams,
    ) -> Result<Value, ClientError> {
        let path = ep::LIST.render_with_query("", options);
        self.http.fetch(&ep::LIST, &path).await
    }

    /// # Errors
    ///
    /// Fails with "Failed to create segment definition".
    pub async fn create_segment_definition<P>(&self, payload: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.http
            .fetch_with(&ep::CREATE, ep::CREATE.template, payload)
            .await
    }

    /// # Errors
    ///
    /// Fails with "Failed to retrieve segment definition".
    pub async fn get_segment_definition(&self, id: &str) -> Result<Value, ClientError> {
        self.http.fetch(&ep::GET, &ep::GET.render(id)).await
    }

    /// Deletes a segment definition and returns the decoded confirmation.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to delete segment definition", or
    /// [`ClientError::Decode`] if the confirmation body is not JSON.
    pub async fn delete_segment_definition(&self, id: &str) -> Result<Value, ClientError> {
        self.http.fetch(&ep::DELETE, &ep::DELETE.render(id)).await
    }

    /// # Errors
    ///
    /// Fails with "Failed to patch segment definition".
    pub async fn patch_segment_definition<P>(
        &self,
        id: &str,
        operations: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.http
            .fetch_with(&ep::PATCH, &ep::PATCH.render(id), operations)
            .await
    }

    /// # Errors
    ///
    /// Fails with "Failed to bulk retrieve segment definitions".
    pub async fn bulk_get_segment_definitions<S>(&self, ids: &[S]) -> Result<Value, ClientError>
    where
        S: AsRef<str>,
    {
        self.http
            .fetch_with(&ep::BULK_GET, ep::BULK_GET.template, &bulk_ids(ids))
            .await
    }

    /// Converts a segment definition between PQL formats.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to convert segment definition".
    pub async fn convert_segment_definition<P>(&self, payload: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.http
            .fetch_with(&ep::CONVERT, ep::CONVERT.template, payload)
            .await
    }
}
