use log_index::Conclusion;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A finished CI job under triage, as handed over by the ingestion
/// pipeline. Immutable for the duration of a triage pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedJob {
    pub id: i64,
    /// Full display name, e.g. "pull / linux-jammy-py3.9 / test (default, 1, 5, …)".
    pub name: String,
    /// Job portion of the display name, when known.
    #[serde(default)]
    pub job_name: Option<String>,
    /// Enclosing workflow run. `None` means a standalone check.
    #[serde(default)]
    pub workflow_id: Option<i64>,
    pub html_url: String,
    pub head_sha: String,
    /// Commit timestamp of `head_sha`. `None` when the upstream record
    /// carried no parseable timestamp.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub head_sha_timestamp: Option<OffsetDateTime>,
    pub head_branch: String,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub completed_at: Option<OffsetDateTime>,
    pub conclusion: Conclusion,
    #[serde(default)]
    pub failure_lines: Vec<String>,
    #[serde(default)]
    pub failure_captures: Vec<String>,
    /// Name of the runner the job executed on. Empty when the job never
    /// reached a runner.
    #[serde(default)]
    pub runner_name: String,
    #[serde(default)]
    pub author_email: Option<String>,
}

impl FailedJob {
    /// Whether the job belongs to an enclosing workflow run.
    pub fn is_workflow_job(&self) -> bool {
        self.workflow_id.is_some()
    }

    /// Free-text search terms for this failure: the captured lines
    /// joined into a single query string.
    pub fn failure_capture_text(&self) -> String {
        self.failure_captures.join(" ")
    }
}
