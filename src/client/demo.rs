//! Demo-mode client backed by a captured JSON dump.
//!
//! The dump is a static snapshot of API responses: the tag vocabulary, the
//! pre-paginated image listing, and per-reference resource maps. It is read
//! once at construction and immutable afterwards, so the client is freely
//! shareable across readers. All listing semantics (filtering, sorting,
//! pagination) are applied client-side against the flattened listing.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{DumpErrorKind, Result, TrackerError};
use crate::model::{
    Image, ImageGraph, ImagePage, Provenance, ReleaseNotes, Scorecard, Vulnerability, WorkflowRun,
};

use super::{resource, ApiClient, ImageQuery, SortBy, SortOrder, TagOp};

/// A captured API snapshot.
///
/// Page order in `pages` (and image order within them) carries meaning: it is
/// the backend's most-recently-bumped-first order, which the `bump` sort
/// preserves.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dump {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pages: Vec<ImagePage>,
    /// reference → (resource kind → raw value)
    #[serde(default)]
    pub resources: IndexMap<String, IndexMap<String, Value>>,
}

/// [`ApiClient`] implementation replaying a [`Dump`].
pub struct DemoApiClient {
    dump: Dump,
}

impl DemoApiClient {
    /// Load the dump from disk. Fails eagerly so every later call operates
    /// on loaded data.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TrackerError::dump(
                "loading demo dump",
                DumpErrorKind::NotFound(path.to_path_buf()),
            ));
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| TrackerError::io(path, e))?;
        let dump: Dump = serde_json::from_str(&content).map_err(|e| {
            TrackerError::dump(
                format!("parsing demo dump at {}", path.display()),
                DumpErrorKind::InvalidJson(e.to_string()),
            )
        })?;

        tracing::debug!(
            images = dump.pages.iter().map(|p| p.images.len()).sum::<usize>(),
            tags = dump.tags.len(),
            "Loaded demo dump"
        );
        Ok(Self { dump })
    }

    /// Wrap an already-built dump (used by tests).
    #[must_use]
    pub fn from_dump(dump: Dump) -> Self {
        Self { dump }
    }

    /// All images across pages, in dump (most-recently-bumped-first) order.
    fn all_images(&self) -> impl Iterator<Item = &Image> {
        self.dump.pages.iter().flat_map(|page| page.images.iter())
    }

    /// Typed lookup into the per-reference resource map.
    ///
    /// Absent reference or kind is `Ok(None)`; a present value that does not
    /// deserialize into `T` is an error, since the dump shape is a contract.
    fn lookup<T: serde::de::DeserializeOwned>(
        &self,
        reference: &str,
        kind: &str,
    ) -> Result<Option<T>> {
        let Some(value) = self
            .dump
            .resources
            .get(reference)
            .and_then(|kinds| kinds.get(kind))
        else {
            return Ok(None);
        };
        let typed = serde_json::from_value(value.clone()).map_err(|e| {
            TrackerError::dump(
                "reading demo resource",
                DumpErrorKind::InvalidResource {
                    reference: reference.to_string(),
                    kind: kind.to_string(),
                    message: e.to_string(),
                },
            )
        })?;
        Ok(Some(typed))
    }
}

/// Free-text filter: substring match over reference and description,
/// case-sensitive by design.
fn matches_query(image: &Image, query: &str) -> bool {
    image.reference.contains(query)
        || image
            .description
            .as_deref()
            .is_some_and(|d| d.contains(query))
}

fn matches_tags(image: &Image, tags: &[String], tagop: TagOp) -> bool {
    if tags.is_empty() {
        return true;
    }
    match tagop {
        TagOp::Or => tags.iter().any(|t| image.tags.contains(t)),
        TagOp::And => tags.iter().all(|t| image.tags.contains(t)),
    }
}

impl ApiClient for DemoApiClient {
    fn get_tags(&self) -> Result<Vec<String>> {
        Ok(self.dump.tags.clone())
    }

    fn get_images(&self, query: &ImageQuery) -> Result<ImagePage> {
        // Filter, sort, reverse, paginate, in that order.
        let mut filtered: Vec<&Image> = self
            .all_images()
            .filter(|image| {
                query
                    .query
                    .as_deref()
                    .map_or(true, |q| matches_query(image, q))
            })
            .filter(|image| matches_tags(image, &query.tags, query.tagop))
            .collect();

        if query.sort == SortBy::Reference {
            filtered.sort_by(|a, b| a.reference.cmp(&b.reference));
        }
        if query.order == SortOrder::Desc {
            filtered.reverse();
        }

        let total = filtered.len();
        let size = query.size();
        let start = query.page.saturating_mul(size);
        let images: Vec<Image> = filtered
            .into_iter()
            .skip(start)
            .take(size)
            .cloned()
            .collect();

        tracing::debug!(total, page = query.page, size, "Demo listing computed");

        Ok(ImagePage {
            images,
            total,
            page: query.page + 1,
            size,
            next: (start.saturating_add(size) < total).then_some(query.page + 2),
            previous: (query.page > 0).then_some(query.page),
        })
    }

    fn get_image(&self, reference: &str) -> Result<Option<Image>> {
        self.lookup(reference, resource::IMAGE)
    }

    fn get_image_description(&self, reference: &str) -> Result<Option<String>> {
        self.lookup(reference, resource::DESCRIPTION)
    }

    fn get_image_release_notes(&self, reference: &str) -> Result<Option<ReleaseNotes>> {
        self.lookup(reference, resource::RELEASE_NOTES)
    }

    fn get_image_graph(&self, reference: &str) -> Result<Option<ImageGraph>> {
        self.lookup(reference, resource::GRAPH)
    }

    fn get_image_scorecard(&self, reference: &str) -> Result<Option<Scorecard>> {
        self.lookup(reference, resource::SCORECARD)
    }

    fn get_image_provenance(&self, reference: &str) -> Result<Option<Provenance>> {
        self.lookup(reference, resource::PROVENANCE)
    }

    fn get_image_sbom(&self, reference: &str) -> Result<Option<Value>> {
        self.lookup(reference, resource::SBOM)
    }

    fn get_image_vulnerabilities(&self, reference: &str) -> Result<Option<Vec<Vulnerability>>> {
        self.lookup(reference, resource::VULNERABILITIES)
    }

    fn get_latest_image_workflow(&self, reference: &str) -> Result<Option<WorkflowRun>> {
        self.lookup(reference, resource::WORKFLOW)
    }

    fn get_logo_url(&self, reference: &str) -> Option<String> {
        self.dump
            .resources
            .get(reference)?
            .get(resource::LOGO)?
            .as_str()
            .map(ToString::to_string)
    }

    fn schedule_image_scan(&self, reference: &str) -> Result<()> {
        // Demo mode cannot mutate backend state; accept and do nothing.
        tracing::debug!(reference, "Ignoring scan request in demo mode");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}
