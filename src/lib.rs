//! **Data core and API clients for a container image update tracker.**
//!
//! `imagedash` provides the non-presentational half of an image-update
//! dashboard: typed wire models, tolerant parsers for the identifiers that
//! appear in tracker data, layout-ready graph formatting, and two
//! interchangeable API clients behind one trait.
//!
//! ## Key Features
//!
//! - **Reference parsing**: split OCI references into name/tag/digest and
//!   derive display versions, accepting any input without errors.
//! - **Purl parsing**: decode `pkg:` URLs from vulnerability data and map
//!   known ecosystems to external registry links. Malformed purls are an
//!   absence, never an error.
//! - **Severity normalization**: a fixed total order over heterogeneous
//!   scanner severity labels, usable directly as a sort comparator.
//! - **Graph formatting**: turn backend node/edge maps and workflow job
//!   graphs into positioned nodes, cubic edge curves and content bounds.
//! - **Clients**: a live HTTP client (`live` feature) and a demo client that
//!   replays a captured JSON dump with client-side filtering, sorting and
//!   pagination, both implementing [`ApiClient`].
//! - **Display utilities**: relative-time and duration labels, and windowed
//!   page-number strips with query-preserving hrefs.
//!
//! ## Getting Started
//!
//! ```no_run
//! use imagedash::client::{ApiClient, DemoApiClient, ImageQuery};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DemoApiClient::load(Path::new("demo-dump.json"))?;
//!
//!     let page = client.get_images(&ImageQuery {
//!         query: Some("mongo".to_string()),
//!         ..ImageQuery::default()
//!     })?;
//!     println!("{} images match", page.total);
//!
//!     for image in &page.images {
//!         println!(
//!             "{} {}",
//!             imagedash::model::name(&image.reference),
//!             imagedash::model::version(&image.reference)
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `live` (default): the reqwest-backed [`client::HttpApiClient`]. Disable
//!   it for demo-only builds without network dependencies.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod graph;
pub mod model;
pub mod pagination;
pub mod time;

// Re-export main types for convenience
pub use client::{ApiClient, DemoApiClient, ImageQuery, SortBy, SortOrder, TagOp};
#[cfg(feature = "live")]
pub use client::{HttpApiClient, HttpClientConfig};
pub use config::{AppConfig, ConfigError};
pub use error::{Result, TrackerError};
pub use graph::{format_ancestry_graph, format_dependency_graph, format_workflow_graph};
pub use model::{
    compare_severity, full_version, normalized_severity, parse_purl, ImageReference, Severity,
};
pub use pagination::{page_links, PageLink};
pub use time::{format_duration, format_relative_time, format_relative_time_to};
