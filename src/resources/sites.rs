use std::sync::Arc;

use serde_json::Value;

use super::endpoints::sites as ep;
use crate::config::defaults::PAGES_ROOT;
use crate::pipeline::{ClientError, HttpPipeline};
use crate::transport::HttpClient;

/// Client for the AEM Sites pages API.
///
/// Unlike the other families, only 2xx statuses count as success here, and
/// the failure message carries the status code.
#[derive(Debug)]
pub struct SitesClient<H> {
    http: Arc<HttpPipeline<H>>,
}

impl<H> Clone for SitesClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<H: HttpClient> SitesClient<H> {
    #[must_use]
    pub const fn new(http: Arc<HttpPipeline<H>>) -> Self {
        Self { http }
    }

    /// Lists the pages below `path` (`/content` when `None`).
    ///
    /// # Errors
    ///
    /// Fails with "Failed to list AEM pages; status <code>" on any non-2xx
    /// status.
    pub async fn list_pages(&self, path: Option<&str>) -> Result<Value, ClientError> {
        let path = ep::LIST_PAGES.render(path.unwrap_or(PAGES_ROOT));
        self.http.fetch(&ep::LIST_PAGES, &path).await
    }
}
