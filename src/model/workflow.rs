//! Wire model for CI workflow runs and their job graphs.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The latest CI workflow run recorded for an image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowRun {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Job id → job, in workflow definition order
    #[serde(default)]
    pub jobs: IndexMap<String, WorkflowJob>,
}

/// One job within a workflow run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowJob {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
    /// Ids of jobs this job depends on
    #[serde(default)]
    pub needs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl WorkflowRun {
    /// Wall-clock duration in seconds, when both timestamps are recorded.
    #[must_use]
    pub fn duration_secs(&self) -> Option<i64> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some((end - start).num_seconds()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_duration() {
        let run = WorkflowRun {
            started_at: Some(Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()),
            completed_at: Some(Utc.with_ymd_and_hms(2026, 1, 1, 12, 3, 20).unwrap()),
            ..WorkflowRun::default()
        };
        assert_eq!(run.duration_secs(), Some(200));

        let incomplete = WorkflowRun::default();
        assert_eq!(incomplete.duration_secs(), None);
    }

    #[test]
    fn test_job_needs_default_empty() {
        let job: WorkflowJob = serde_json::from_str(r#"{"name": "build"}"#).expect("parse");
        assert!(job.needs.is_empty());
    }
}
