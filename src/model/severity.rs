//! Vulnerability severity normalization and ordering.
//!
//! Scanners disagree on severity vocabulary, so raw labels are mapped onto a
//! fixed total order usable as a sort comparator. Unrecognized labels bucket
//! into [`Severity::Unspecified`]; the extended string comparator additionally
//! sorts anything outside the known vocabulary last.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::image::Vulnerability;

/// Normalized severity, ordered most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Unspecified,
    /// Bucket for values the backend itself could not classify
    Unknown,
}

/// Display order for severity labels, most severe first. Labels outside this
/// list compare after all known values.
pub const SEVERITY_ORDER: &[&str] = &["critical", "high", "medium", "low", "unspecified"];

impl Severity {
    /// Map a raw scanner label onto the fixed enumeration.
    ///
    /// `MODERATE` and `MEDIUM` are synonyms; anything unrecognized
    /// (including the empty string) is `Unspecified`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "CRITICAL" => Self::Critical,
            "HIGH" => Self::High,
            "MODERATE" | "MEDIUM" => Self::Medium,
            "LOW" => Self::Low,
            _ => Self::Unspecified,
        }
    }

    /// Rank within the fixed order (0 = most severe).
    #[must_use]
    pub const fn rank(self) -> usize {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
            Self::Unspecified => 4,
            Self::Unknown => 5,
        }
    }

    /// Lowercase display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unspecified => "unspecified",
            Self::Unknown => "unknown or unsupported",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized severity of a vulnerability, read from its database-specific
/// severity field when present.
#[must_use]
pub fn normalized_severity(vulnerability: &Vulnerability) -> Severity {
    vulnerability
        .database_specific
        .as_ref()
        .and_then(|db| db.severity.as_deref())
        .map_or(Severity::Unspecified, Severity::from_label)
}

/// Compare two severity labels by the fixed order.
///
/// Labels outside [`SEVERITY_ORDER`] (e.g. `"unknown or unsupported"`) rank
/// after every known value; equal labels compare equal, so this is a valid
/// sort comparator.
#[must_use]
pub fn compare_severity(a: &str, b: &str) -> Ordering {
    severity_index(a).cmp(&severity_index(b))
}

fn severity_index(label: &str) -> usize {
    SEVERITY_ORDER
        .iter()
        .position(|s| *s == label)
        .unwrap_or(SEVERITY_ORDER.len())
}

/// Vulnerability counts grouped by normalized severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unspecified: usize,
}

impl SeverityCounts {
    /// Tally a slice of vulnerabilities by normalized severity.
    #[must_use]
    pub fn tally(vulnerabilities: &[Vulnerability]) -> Self {
        let mut counts = Self::default();
        for vulnerability in vulnerabilities {
            match normalized_severity(vulnerability) {
                Severity::Critical => counts.critical += 1,
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
                Severity::Unspecified | Severity::Unknown => counts.unspecified += 1,
            }
        }
        counts
    }

    /// Total number of tallied vulnerabilities.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low + self.unspecified
    }
}
