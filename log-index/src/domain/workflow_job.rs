use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Terminal status of a finished CI job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    Success,
    Failure,
    Neutral,
    Cancelled,
    Skipped,
    TimedOut,
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conclusion::Success => write!(f, "success"),
            Conclusion::Failure => write!(f, "failure"),
            Conclusion::Neutral => write!(f, "neutral"),
            Conclusion::Cancelled => write!(f, "cancelled"),
            Conclusion::Skipped => write!(f, "skipped"),
            Conclusion::TimedOut => write!(f, "timed_out"),
        }
    }
}

/// A workflow job failure as stored in the search index. Field names keep
/// the camelCase projection written by the ingestion pipeline, so a row
/// deserializes verbatim from an index hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowJobDocument {
    pub id: i64,
    /// Full display name, e.g. "pull / linux-jammy-py3.9 / test (default, 1, 5, …)".
    pub name: String,
    #[serde(default)]
    pub job_name: Option<String>,
    /// Enclosing workflow run. `None` means a standalone check.
    #[serde(default)]
    pub workflow_id: Option<i64>,
    pub branch: String,
    pub sha: String,
    /// Completion time of the job.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub time: Option<OffsetDateTime>,
    pub conclusion: Conclusion,
    #[serde(default)]
    pub failure_lines: Vec<String>,
    #[serde(default)]
    pub failure_captures: Vec<String>,
    pub html_url: String,
    #[serde(default)]
    pub author_email: Option<String>,
}
