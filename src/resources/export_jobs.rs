use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::endpoints::export_jobs as ep;
use crate::pipeline::{ClientError, HttpPipeline, QueryParams};
use crate::transport::HttpClient;

/// Client for the Export Jobs API.
#[derive(Debug)]
pub struct ExportJobsClient<H> {
    http: Arc<HttpPipeline<H>>,
}

impl<H> Clone for ExportJobsClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<H: HttpClient> ExportJobsClient<H> {
    #[must_use]
    pub const fn new(http: Arc<HttpPipeline<H>>) -> Self {
        Self { http }
    }

    /// Lists export jobs (`limit`, `offset`, `status`).
    ///
    /// # Errors
    ///
    /// Fails with "Failed to list export jobs".
    pub async fn list_export_jobs(&self, options: &QueryParams) -> Result<Value, ClientError> {
        let path = ep::LIST.render_with_query("", options);
        self.http.fetch(&ep::LIST, &path).await
    }

    /// # Errors
    ///
    /// Fails with "Failed to create export job".
    pub async fn create_export_job<P>(&self, payload: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.http
            .fetch_with(&ep::CREATE, ep::CREATE.template, payload)
            .await
    }

    /// # Errors
    ///
    /// Fails with "Failed to retrieve export job".
    pub async fn get_export_job(&self, id: &str) -> Result<Value, ClientError> {
        self.http.fetch(&ep::GET, &ep::GET.render(id)).await
    }

    /// Cancels an export job and returns the decoded job state.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to cancel export job", or [`ClientError::Decode`]
    /// if the body is not JSON.
    pub async fn cancel_export_job(&self, id: &str) -> Result<Value, ClientError> {
        self.http.fetch(&ep::CANCEL, &ep::CANCEL.render(id)).await
    }
}
