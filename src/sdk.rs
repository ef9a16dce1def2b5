//! Single entry point aggregating every resource client.

use std::sync::Arc;

use crate::auth::Authenticator;
use crate::config::SdkConfig;
use crate::pipeline::HttpPipeline;
use crate::resources::{
    AssetsClient, AudiencesClient, ContentFragmentsClient, ExportJobsClient,
    SegmentDefinitionsClient, SegmentJobsClient, SitesClient,
};
use crate::transport::HttpClient;

/// Façade over all resource clients.
///
/// Every client shares one [`HttpPipeline`]; the façade holds no other
/// state. Cloning is cheap and clones share the pipeline.
///
/// # Example
///
/// ```no_run
/// use adobe_client::auth::BearerToken;
/// use adobe_client::config::SdkConfig;
/// use adobe_client::pipeline::QueryParams;
/// use adobe_client::transport::ReqwestClient;
/// use adobe_client::Sdk;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let sdk = Sdk::authenticated(
///     ReqwestClient::new(),
///     SdkConfig::new("https://platform.adobe.io"),
///     BearerToken::new("access-token")?,
/// );
///
/// let audiences = sdk
///     .audiences()
///     .list_audiences(&QueryParams::new().with("limit", 20))
///     .await?;
/// println!("{audiences}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Sdk<H> {
    pipeline: Arc<HttpPipeline<H>>,
    sites: SitesClient<H>,
    assets: AssetsClient<H>,
    content_fragments: ContentFragmentsClient<H>,
    audiences: AudiencesClient<H>,
    export_jobs: ExportJobsClient<H>,
    segment_definitions: SegmentDefinitionsClient<H>,
    segment_jobs: SegmentJobsClient<H>,
}

impl<H: HttpClient> Sdk<H> {
    /// Creates an unauthenticated façade.
    #[must_use]
    pub fn new(transport: H, config: SdkConfig) -> Self {
        Self::from_pipeline(HttpPipeline::new(transport, config))
    }

    /// Creates a façade whose requests all pass through `authenticator`.
    #[must_use]
    pub fn authenticated(
        transport: H,
        config: SdkConfig,
        authenticator: impl Authenticator + 'static,
    ) -> Self {
        Self::from_pipeline(HttpPipeline::new(transport, config).with_authenticator(authenticator))
    }

    /// Creates a façade over a prepared pipeline.
    #[must_use]
    pub fn from_pipeline(pipeline: HttpPipeline<H>) -> Self {
        let pipeline = Arc::new(pipeline);

        Self {
            sites: SitesClient::new(Arc::clone(&pipeline)),
            assets: AssetsClient::new(Arc::clone(&pipeline)),
            content_fragments: ContentFragmentsClient::new(Arc::clone(&pipeline)),
            audiences: AudiencesClient::new(Arc::clone(&pipeline)),
            export_jobs: ExportJobsClient::new(Arc::clone(&pipeline)),
            segment_definitions: SegmentDefinitionsClient::new(Arc::clone(&pipeline)),
            segment_jobs: SegmentJobsClient::new(Arc::clone(&pipeline)),
            pipeline,
        }
    }

    #[must_use]
    pub const fn sites(&self) -> &SitesClient<H> {
        &self.sites
    }

    #[must_use]
    pub const fn assets(&self) -> &AssetsClient<H> {
        &self.assets
    }

    #[must_use]
    pub const fn content_fragments(&self) -> &ContentFragmentsClient<H> {
        &self.content_fragments
    }

    #[must_use]
    pub const fn audiences(&self) -> &AudiencesClient<H> {
        &self.audiences
    }

    #[must_use]
    pub const fn export_jobs(&self) -> &ExportJobsClient<H> {
        &self.export_jobs
    }

    #[must_use]
    pub const fn segment_definitions(&self) -> &SegmentDefinitionsClient<H> {
        &self.segment_definitions
    }

    #[must_use]
    pub const fn segment_jobs(&self) -> &SegmentJobsClient<H> {
        &self.segment_jobs
    }

    /// Returns the shared pipeline.
    #[must_use]
    pub fn pipeline(&self) -> &HttpPipeline<H> {
        &self.pipeline
    }
}

impl<H> Clone for Sdk<H> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            sites: self.sites.clone(),
            assets: self.assets.clone(),
            content_fragments: self.content_fragments.clone(),
            audiences: self.audiences.clone(),
            export_jobs: self.export_jobs.clone(),
            segment_definitions: self.segment_definitions.clone(),
            segment_jobs: self.segment_jobs.clone(),
        }
    }
}
