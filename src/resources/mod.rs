//! Resource clients, one per remote API family.
//!
//! Every client is a thin, cloneable handle over a shared
//! [`HttpPipeline`](crate::pipeline::HttpPipeline). Operations render an
//! [`Endpoint`](crate::pipeline::Endpoint) from [`endpoints`], send it and
//! decode the JSON body into a [`serde_json::Value`].

mod assets;
mod audiences;
mod content_fragments;
pub mod endpoints;
mod export_jobs;
mod segment_definitions;
mod segment_jobs;
mod sites;

#[cfg(test)]
mod audiences_tests;
#[cfg(test)]
mod segment_definitions_tests;

pub use assets::AssetsClient;
pub use audiences::AudiencesClient;
pub use content_fragments::ContentFragmentsClient;
pub use export_jobs::ExportJobsClient;
pub use segment_definitions::SegmentDefinitionsClient;
pub use segment_jobs::SegmentJobsClient;
pub use sites::SitesClient;

use serde_json::{Value, json};

/// Body of the `bulk-get` endpoints.
fn bulk_ids<S: AsRef<str>>(ids: &[S]) -> Value {
    let ids: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
    json!({ "ids": ids })
}
