//! Core data model: wire shapes and the parsers that interpret them.

pub mod graph;
pub mod image;
pub mod purl;
pub mod reference;
pub mod severity;
pub mod workflow;

pub use graph::{GraphNode, ImageGraph};
pub use image::{
    DatabaseSpecific, Image, ImagePage, Provenance, ReleaseNotes, Scorecard, ScorecardCheck,
    Vulnerability,
};
pub use purl::{parse_purl, purl_link, purl_type, Purl};
pub use reference::{full_version, name, version, ImageReference};
pub use severity::{
    compare_severity, normalized_severity, Severity, SeverityCounts, SEVERITY_ORDER,
};
pub use workflow::{WorkflowJob, WorkflowRun};
