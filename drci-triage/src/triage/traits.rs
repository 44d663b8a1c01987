//! Trait definitions for the triage layer's external collaborators.
//!
//! These traits enable dependency injection and easy testing through mocking.

use async_trait::async_trait;
use log_index::{SearchFetchError, SimilarFailureQuery, WorkflowJobDocument};

use crate::domain::FailedJob;

/// Error type for triage operations.
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("Search index error: {0}")]
    Search(String),

    #[error("Metadata source error: {0}")]
    Metadata(String),

    #[error("{0}")]
    Other(String),
}

impl From<SearchFetchError> for TriageError {
    fn from(e: SearchFetchError) -> Self {
        TriageError::Search(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TriageError>;

/// Query side of the failure search index.
///
/// A failed or timed-out lookup surfaces as an error to the caller, who
/// owns retry policy; an empty hit list is a clean `Ok`.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Run a similarity query, returning hits in the query's sort order.
    async fn search_similar_failures(
        &self,
        query: &SimilarFailureQuery,
    ) -> Result<Vec<WorkflowJobDocument>>;
}

/// Job metadata kept by the CI provider.
#[async_trait]
pub trait JobMetadataSource: Send + Sync {
    /// Whether a raw log artifact was uploaded for the given job.
    async fn has_log_artifact(&self, job_id: i64) -> Result<bool>;

    /// Whether the job under triage and the indexed candidate share a
    /// change author.
    async fn is_same_author(
        &self,
        job: &FailedJob,
        candidate: &WorkflowJobDocument,
    ) -> Result<bool>;
}
