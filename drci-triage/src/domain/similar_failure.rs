use log_index::{Conclusion, WorkflowJobDocument};
use serde::Serialize;
use time::OffsetDateTime;

/// A prior failure judged similar to the one under triage, translated
/// from the index projection into job-record vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarFailure {
    pub id: i64,
    pub name: String,
    pub job_name: Option<String>,
    pub workflow_id: Option<i64>,
    pub head_branch: String,
    pub head_sha: String,
    pub html_url: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    pub conclusion: Conclusion,
    pub failure_lines: Vec<String>,
    pub failure_captures: Vec<String>,
    pub author_email: Option<String>,
    /// Whether the matched failure came from the same change author.
    /// `None` when either side carries no author identity.
    pub same_author: Option<bool>,
}

impl SimilarFailure {
    pub(crate) fn from_document(doc: WorkflowJobDocument, same_author: Option<bool>) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            job_name: doc.job_name,
            workflow_id: doc.workflow_id,
            head_branch: doc.branch,
            head_sha: doc.sha,
            html_url: doc.html_url,
            completed_at: doc.time,
            conclusion: doc.conclusion,
            failure_lines: doc.failure_lines,
            failure_captures: doc.failure_captures,
            author_email: doc.author_email,
            same_author,
        }
    }
}
