//! Endpoint table for every resource client.
//!
//! One `static` per remote operation, so `&endpoints::x::Y` is `'static`. Adding an operation means adding a row
//! here and a one-line method on the matching client.
//!
//! Path parameters follow the encoding each API family has always used on
//! the wire: segmentation identifiers are flat ([`Param::Segment`]),
//! content fragment locations are repository paths
//! ([`Param::Hierarchical`]) and asset paths are appended as given
//! ([`Param::Raw`]).

use http::Method;

use crate::pipeline::{Endpoint, Param, Success};

/// Audience API, `/data/core/ups/audiences`.
pub mod audiences {
    use super::{Endpoint, Method, Param};

    pub static LIST: Endpoint = Endpoint::listing(
        "/data/core/ups/audiences",
        &["start", "limit", "sort", "property", "name", "description", "entityType"],
        "Failed to list audiences",
    );
    pub static CREATE: Endpoint =
        Endpoint::new(Method::POST, "/data/core/ups/audiences", "Failed to create audience");
    pub static GET: Endpoint = Endpoint::with_param(
        Method::GET,
        "/data/core/ups/audiences/{}",
        Param::Segment,
        "Failed to retrieve audience",
    );
    pub static DELETE: Endpoint = Endpoint::with_param(
        Method::DELETE,
        "/data/core/ups/audiences/{}",
        Param::Segment,
        "Failed to delete audience",
    );
    pub static PATCH: Endpoint = Endpoint::with_param(
        Method::PATCH,
        "/data/core/ups/audiences/{}",
        Param::Segment,
        "Failed to patch audience",
    );
    pub static UPDATE: Endpoint = Endpoint::with_param(
        Method::PUT,
        "/data/core/ups/audiences/{}",
        Param::Segment,
        "Failed to update audience",
    );
    pub static BULK_GET: Endpoint = Endpoint::new(
        Method::POST,
        "/data/core/ups/audiences/bulk-get",
        "Failed to bulk retrieve audiences",
    );
}

/// Segment definitions API, `/data/core/ups/segment/definitions`.
pub mod segment_definitions {
    use super::{Endpoint, Method, Param};

    pub static LIST: Endpoint = Endpoint::listing(
        "/data/core/ups/segment/definitions",
        &["start", "limit", "page", "sort"],
        "Failed to list segment definitions",
    );
    pub static CREATE: Endpoint = Endpoint::new(
        Method::POST,
        "/data/core/ups/segment/definitions",
        "Failed to create segment definition",
    );
    pub static GET: Endpoint = Endpoint::with_param(
        Method::GET,
        "/data/core/ups/segment/definitions/{}",
        Param::Segment,
        "Failed to retrieve segment definition",
    );
    pub static DELETE: Endpoint = Endpoint::with_param(
        Method::DELETE,
        "/data/core/ups/segment/definitions/{}",
        Param::Segment,
        "Failed to delete segment definition",
    );
    pub static PATCH: Endpoint = Endpoint::with_param(
        Method::PATCH,
        "/data/core/ups/segment/definitions/{}",
        Param::Segment,
        "Failed to patch segment definition",
    );
    pub static BULK_GET: Endpoint = Endpoint::new(
        Method::POST,
        "/data/core/ups/segment/definitions/bulk-get",
        "Failed to bulk retrieve segment definitions",
    );
    pub static CONVERT: Endpoint = Endpoint::new(
        Method::POST,
        "/data/core/ups/segment/conversion",
        "Failed to convert segment definition",
    );
}

/// Segment jobs API, `/data/core/ups/segment/jobs`.
pub mod segment_jobs {
    use super::{Endpoint, Method, Param};

    pub static LIST: Endpoint = Endpoint::listing(
        "/data/core/ups/segment/jobs",
        &["snapshot.name", "start", "limit", "status", "sort", "property"],
        "Failed to list segment jobs",
    );
    pub static CREATE: Endpoint = Endpoint::new(
        Method::POST,
        "/data/core/ups/segment/jobs",
        "Failed to create segment job",
    );
    pub static GET: Endpoint = Endpoint::with_param(
        Method::GET,
        "/data/core/ups/segment/jobs/{}",
        Param::Segment,
        "Failed to retrieve segment job",
    );
    pub static CANCEL: Endpoint = Endpoint::with_param(
        Method::DELETE,
        "/data/core/ups/segment/jobs/{}",
        Param::Segment,
        "Failed to cancel segment job",
    );
    pub static BULK_GET: Endpoint = Endpoint::new(
        Method::POST,
        "/data/core/ups/segment/jobs/bulk-get",
        "Failed to bulk retrieve segment jobs",
    );
}

/// Export jobs API, `/data/core/ups/export/jobs`.
pub mod export_jobs {
    use super::{Endpoint, Method, Param};

    pub static LIST: Endpoint = Endpoint::listing(
        "/data/core/ups/export/jobs",
        &["limit", "offset", "status"],
        "Failed to list export jobs",
    );
    pub static CREATE: Endpoint = Endpoint::new(
        Method::POST,
        "/data/core/ups/export/jobs",
        "Failed to create export job",
    );
    pub static GET: Endpoint = Endpoint::with_param(
        Method::GET,
        "/data/core/ups/export/jobs/{}",
        Param::Segment,
        "Failed to retrieve export job",
    );
    pub static CANCEL: Endpoint = Endpoint::with_param(
        Method::DELETE,
        "/data/core/ups/export/jobs/{}",
        Param::Segment,
        "Failed to cancel export job",
    );
}

/// Content fragments API, `/api/sites/v1/fragments`.
pub mod content_fragments {
    use super::{Endpoint, Method, Param};

    pub static LIST: Endpoint = Endpoint::listing(
        "/api/sites/v1/fragments",
        &["path", "limit", "offset", "model", "recursive", "search", "sort"],
        "Failed to list Content Fragments",
    );
    pub static CREATE: Endpoint = Endpoint::new(
        Method::POST,
        "/api/sites/v1/fragments",
        "Failed to create Content Fragment",
    );
    pub static GET: Endpoint = Endpoint::with_param(
        Method::GET,
        "/api/sites/v1/fragments{}",
        Param::Hierarchical,
        "Failed to fetch Content Fragment",
    );
    pub static UPDATE: Endpoint = Endpoint::with_param(
        Method::PATCH,
        "/api/sites/v1/fragments{}",
        Param::Hierarchical,
        "Failed to update Content Fragment",
    );
    pub static DELETE: Endpoint = Endpoint::with_param(
        Method::DELETE,
        "/api/sites/v1/fragments{}",
        Param::Hierarchical,
        "Failed to delete Content Fragment",
    );
    pub static DELETE_AND_UNPUBLISH: Endpoint = Endpoint::with_param(
        Method::POST,
        "/api/sites/v1/fragments{}/delete-and-unpublish",
        Param::Hierarchical,
        "Failed to delete and unpublish Content Fragment",
    );
    pub static PREVIEWS: Endpoint = Endpoint::with_param(
        Method::GET,
        "/api/sites/v1/fragments{}/previews",
        Param::Hierarchical,
        "Failed to fetch preview URLs for Content Fragment",
    );
    pub static COPY: Endpoint = Endpoint::with_param(
        Method::POST,
        "/api/sites/v1/fragments{}/copy",
        Param::Hierarchical,
        "Failed to copy Content Fragment",
    );
}

/// Sites pages API, `/api/sites/v1/pages`.
pub mod sites {
    use super::{Endpoint, Method, Param, Success};

    pub static LIST_PAGES: Endpoint = Endpoint {
        method: Method::GET,
        template: "/api/sites/v1/pages?path={}",
        param: Param::Segment,
        query: &[],
        failure: "Failed to list AEM pages",
        success: Success::Only2xx,
    };
}

/// Assets API, `/api/assets/v1`.
pub mod assets {
    use super::{Endpoint, Method, Param};

    pub static UPLOAD: Endpoint = Endpoint::with_param(
        Method::PUT,
        "/api/assets/v1{}",
        Param::Raw,
        "Failed to upload asset",
    );
    pub static GET: Endpoint = Endpoint::with_param(
        Method::GET,
        "/api/assets/v1{}",
        Param::Raw,
        "Failed to retrieve asset",
    );
}
