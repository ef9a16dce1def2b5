use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::endpoints::content_fragments as ep;
use crate::config::defaults::FRAGMENT_CONTAINER;
use crate::pipeline::{ClientError, HttpPipeline, QueryParams};
use crate::transport::HttpClient;

/// Client for the AEM Sites content fragments API.
///
/// Fragments are addressed by repository path such as
/// `/content/dam/site/en/hero`. Each segment is percent-encoded and the `/`
/// separators are kept, so a path maps onto nested URL segments.
#[derive(Debug)]
pub struct ContentFragmentsClient<H> {
    http: Arc<HttpPipeline<H>>,
}

impl<H> Clone for ContentFragmentsClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<H: HttpClient> ContentFragmentsClient<H> {
    #[must_use]
    pub const fn new(http: Arc<HttpPipeline<H>>) -> Self {
        Self { http }
    }

    /// Lists the fragments below `container_path` (`/content/dam` when `None`).
    ///
    /// `options` are merged over the `path` option, so an explicit `path`
    /// option wins. Documented options: `limit`, `offset`, `model`,
    /// `recursive`, `search`, `sort`.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to list Content Fragments".
    pub async fn list(
        &self,
        container_path: Option<&str>,
        options: &QueryParams,
    ) -> Result<Value, ClientError> {
        let mut query =
            QueryParams::new().with("path", container_path.unwrap_or(FRAGMENT_CONTAINER));
        query.merge(options);

        let path = ep::LIST.render_with_query("", &query);
        self.http.fetch(&ep::LIST, &path).await
    }

    /// # Errors
    ///
    /// Fails with "Failed to create Content Fragment".
    pub async fn create<P>(&self, payload: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.http
            .fetch_with(&ep::CREATE, ep::CREATE.template, payload)
            .await
    }

    /// # Errors
    ///
    /// Fails with "Failed to fetch Content Fragment".
    pub async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.http.fetch(&ep::GET, &ep::GET.render(path)).await
    }

    /// Applies a partial update to the fragment at `path`.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to update Content Fragment".
    pub async fn update<P>(&self, path: &str, payload: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.http
            .fetch_with(&ep::UPDATE, &ep::UPDATE.render(path), payload)
            .await
    }

    /// # Errors
    ///
    /// Fails with "Failed to delete Content Fragment".
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.http.execute(&ep::DELETE, &ep::DELETE.render(path)).await
    }

    /// Deletes the fragment and unpublishes it from every tier.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to delete and unpublish Content Fragment".
    pub async fn delete_and_unpublish(&self, path: &str) -> Result<(), ClientError> {
        self.http
            .execute(&ep::DELETE_AND_UNPUBLISH, &ep::DELETE_AND_UNPUBLISH.render(path))
            .await
    }

    /// Returns the preview URLs of the fragment.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to fetch preview URLs for Content Fragment".
    pub async fn preview_urls(&self, path: &str) -> Result<Value, ClientError> {
        self.http.fetch(&ep::PREVIEWS, &ep::PREVIEWS.render(path)).await
    }

    /// Copies the fragment; `payload` names the destination.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to copy Content Fragment".
    pub async fn copy<P>(&self, path: &str, payload: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.http
            .fetch_with(&ep::COPY, &ep::COPY.render(path), payload)
            .await
    }
}
