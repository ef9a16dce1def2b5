use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::bulk_ids;
use super::endpoints::segment_jobs as ep;
use crate::pipeline::{ClientError, HttpPipeline, QueryParams};
use crate::transport::HttpClient;

/// Client for the Segment Jobs API.
#[derive(Debug)]
pub struct SegmentJobsClient<H> {
    http: Arc<HttpPipeline<H>>,
}

impl<H> Clone for SegmentJobsClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<H: HttpClient> SegmentJobsClient<H> {
    #[must_use]
    pub const fn new(http: Arc<HttpPipeline<H>>) -> Self {
        Self { http }
    }

    /// Lists segment jobs.
    ///
    /// Documented options: `snapshot.name`, `start`, `limit`, `status`,
    /// `sort`, `property`.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to list segment jobs".
    pub async fn list_segment_jobs(&self, options: &QueryParams) -> Result<Value, ClientError> {
        let path = ep::LIST.render_with_query("", options);
        self.http.fetch(&ep::LIST, &path).await
    }

    /// Starts a segment job. `requests` is usually an array of
    /// `{"segmentId": ...}` objects.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to create segment job".
    pub async fn create_segment_job<P>(&self, requests: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.http
            .fetch_with(&ep::CREATE, ep::CREATE.template, requests)
            .await
    }

    /// # Errors
    ///
    /// Fails with "Failed to retrieve segment job".
    pub async fn get_segment_job(&self, id: &str) -> Result<Value, ClientError> {
        self.http.fetch(&ep::GET, &ep::GET.render(id)).await
    }

    /// Cancels a running segment job. The response body is discarded.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to cancel segment job".
    pub async fn cancel_segment_job(&self, id: &str) -> Result<(), ClientError> {
        self.http.execute(&ep::CANCEL, &ep::CANCEL.render(id)).await
    }

    /// # Errors
    ///
    /// Fails with "Failed to bulk retrieve segment jobs".
    pub async fn bulk_get_segment_jobs<S>(&self, ids: &[S]) -> Result<Value, ClientError>
    where
        S: AsRef<str>,
    {
        self.http
            .fetch_with(&ep::BULK_GET, ep::BULK_GET.template, &bulk_ids(ids))
            .await
    }
}
