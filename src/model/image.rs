//! Wire models for tracked images and their per-image resources.
//!
//! These mirror the backend's JSON shapes. Every field the backend may omit
//! is optional or defaulted so a partial payload still deserializes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked container image as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Full OCI reference, e.g. `ghcr.io/mongo/mongo:6.0.0`
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// When the tracker last bumped this image to a newer version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bumped_at: Option<DateTime<Utc>>,
}

/// One page of the image listing, with pagination metadata.
///
/// `page` is 1-based on the wire; client-side page indexes are 0-based and
/// converted at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePage {
    pub images: Vec<Image>,
    pub total: usize,
    pub page: usize,
    pub size: usize,
    /// 1-based number of the next page, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<usize>,
    /// 1-based number of the previous page, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<usize>,
}

/// A vulnerability affecting an image, as reported by the backend scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vulnerability {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Package URL of the affected package, parseable via [`crate::model::parse_purl`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_specific: Option<DatabaseSpecific>,
}

/// Scanner-specific extension data carried on a vulnerability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSpecific {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

/// Release notes for the currently tracked version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseNotes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
}

/// OpenSSF-style scorecard summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scorecard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default)]
    pub checks: Vec<ScorecardCheck>,
}

/// A single scorecard check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorecardCheck {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Build provenance summary (SLSA-style).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provenance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_image_deserializes() {
        let image: Image = serde_json::from_str(r#"{"reference": "mongo:7"}"#).expect("parse");
        assert_eq!(image.reference, "mongo:7");
        assert!(image.tags.is_empty());
        assert!(image.description.is_none());
    }

    #[test]
    fn test_page_roundtrip() {
        let page = ImagePage {
            images: vec![],
            total: 42,
            page: 2,
            size: 30,
            next: Some(3),
            previous: Some(1),
        };
        let json = serde_json::to_string(&page).expect("serialize");
        let back: ImagePage = serde_json::from_str(&json).expect("parse");
        assert_eq!(back.total, 42);
        assert_eq!(back.previous, Some(1));
    }
}
