//! API client contract and implementations.
//!
//! UI code talks to one [`ApiClient`] trait object, constructed once at
//! application start and passed by reference to consumers. Two
//! implementations exist: [`HttpApiClient`] against the live backend
//! (requires the `live` feature) and [`DemoApiClient`] replaying a captured
//! dump with client-side filtering, sorting and pagination.

pub mod demo;
#[cfg(feature = "live")]
pub mod http;

pub use demo::{DemoApiClient, Dump};
#[cfg(feature = "live")]
pub use http::{HttpApiClient, HttpClientConfig};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{
    Image, ImageGraph, ImagePage, Provenance, ReleaseNotes, Scorecard, Vulnerability, WorkflowRun,
};

/// Default number of images per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Per-image resource kinds, used both as demo-dump keys and API path stems.
pub mod resource {
    pub const IMAGE: &str = "image";
    pub const DESCRIPTION: &str = "description";
    pub const RELEASE_NOTES: &str = "release-notes";
    pub const GRAPH: &str = "graph";
    pub const SCORECARD: &str = "scorecard";
    pub const PROVENANCE: &str = "provenance";
    pub const SBOM: &str = "sbom";
    pub const VULNERABILITIES: &str = "vulnerabilities";
    pub const WORKFLOW: &str = "workflow";
    pub const LOGO: &str = "logo";
}

/// Tag-filter combination mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagOp {
    /// All requested tags must be present
    #[default]
    And,
    /// At least one requested tag suffices
    Or,
}

impl TagOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// Sort key for the image listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Most recently bumped first (the backend's natural order)
    #[default]
    Bump,
    /// Lexicographic by reference
    Reference,
}

impl SortBy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bump => "bump",
            Self::Reference => "reference",
        }
    }
}

/// Sort direction for the image listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Listing options for [`ApiClient::get_images`].
///
/// `page` is 0-based here; the wire uses 1-based pages and the conversion
/// happens in [`ImageQuery::to_query_pairs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageQuery {
    /// Free-text substring filter over reference and description
    pub query: Option<String>,
    /// Tags to filter by
    pub tags: Vec<String>,
    /// How multiple tags combine
    pub tagop: TagOp,
    pub sort: SortBy,
    pub order: SortOrder,
    /// 0-based page index
    pub page: usize,
    /// Page size; [`DEFAULT_PAGE_SIZE`] when unset
    pub limit: Option<usize>,
}

impl ImageQuery {
    /// Effective page size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Wire query parameters for this listing request.
    ///
    /// The single source of truth for parameter names, shared by the live
    /// client and the pagination href builder.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for tag in &self.tags {
            pairs.push(("tag".to_string(), tag.clone()));
        }
        if !self.tags.is_empty() {
            pairs.push(("tagop".to_string(), self.tagop.as_str().to_string()));
        }
        pairs.push(("sort".to_string(), self.sort.as_str().to_string()));
        pairs.push(("order".to_string(), self.order.as_str().to_string()));
        pairs.push(("page".to_string(), (self.page + 1).to_string()));
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(query) = self.query.as_deref() {
            if !query.is_empty() {
                pairs.push(("query".to_string(), query.to_string()));
            }
        }
        pairs
    }
}

/// Contract shared by the live and demo clients.
///
/// Per-resource getters return `Ok(None)` when the resource is legitimately
/// absent (the backend's 404, or a missing dump entry), distinguishing that
/// from request failure.
pub trait ApiClient: Send + Sync {
    /// The distinct tag vocabulary across all tracked images.
    fn get_tags(&self) -> Result<Vec<String>>;

    /// One page of the image listing.
    fn get_images(&self, query: &ImageQuery) -> Result<ImagePage>;

    fn get_image(&self, reference: &str) -> Result<Option<Image>>;

    fn get_image_description(&self, reference: &str) -> Result<Option<String>>;

    fn get_image_release_notes(&self, reference: &str) -> Result<Option<ReleaseNotes>>;

    fn get_image_graph(&self, reference: &str) -> Result<Option<ImageGraph>>;

    fn get_image_scorecard(&self, reference: &str) -> Result<Option<Scorecard>>;

    fn get_image_provenance(&self, reference: &str) -> Result<Option<Provenance>>;

    /// The raw SBOM document; rendered elsewhere, so left opaque.
    fn get_image_sbom(&self, reference: &str) -> Result<Option<serde_json::Value>>;

    fn get_image_vulnerabilities(&self, reference: &str) -> Result<Option<Vec<Vulnerability>>>;

    fn get_latest_image_workflow(&self, reference: &str) -> Result<Option<WorkflowRun>>;

    /// Best-effort logo URL; `None` when unknown. Synchronous by contract.
    fn get_logo_url(&self, reference: &str) -> Option<String>;

    /// Fire-and-forget request to rescan an image.
    fn schedule_image_scan(&self, reference: &str) -> Result<()>;

    /// Implementation name for diagnostics (e.g. `"http"`, `"demo"`).
    fn name(&self) -> &'static str;
}
