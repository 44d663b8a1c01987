//! Job metadata source implementations.

#[cfg(test)]
mod mock;

#[cfg(test)]
pub use mock::MockJobMetadataSource;

use async_trait::async_trait;
use log_index::WorkflowJobDocument;
use serde::Deserialize;

use super::traits::{JobMetadataSource, Result, TriageError};
use crate::domain::FailedJob;

/// Metadata source backed by the CI provider's REST API and the raw log
/// bucket.
pub struct HttpJobMetadataSource {
    api_url: String,
    log_bucket_url: String,
}

#[derive(Debug, Deserialize)]
struct CommitAuthor {
    author_email: Option<String>,
}

impl HttpJobMetadataSource {
    pub fn new(api_url: impl Into<String>, log_bucket_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            log_bucket_url: log_bucket_url.into(),
        }
    }

    async fn commit_author(&self, sha: &str) -> Result<Option<String>> {
        let url = format!("{}/commit/{}", self.api_url.trim_end_matches('/'), sha);
        let client = reqwest::Client::new();

        let resp = client
            .get(&url)
            .send()
            .await
            .map_err(|e| TriageError::Metadata(e.to_string()))?;
        if !resp.status().is_success() {
            tracing::debug!(sha, status = %resp.status(), "no author metadata for commit");
            return Ok(None);
        }

        let author = resp
            .json::<CommitAuthor>()
            .await
            .map_err(|e| TriageError::Metadata(format!("Failed to parse commit author: {}", e)))?;

        Ok(author.author_email)
    }
}

#[async_trait]
impl JobMetadataSource for HttpJobMetadataSource {
    async fn has_log_artifact(&self, job_id: i64) -> Result<bool> {
        let url = format!("{}/log/{}", self.log_bucket_url.trim_end_matches('/'), job_id);
        let client = reqwest::Client::new();

        let resp = client
            .head(&url)
            .send()
            .await
            .map_err(|e| TriageError::Metadata(e.to_string()))?;

        Ok(resp.status().is_success())
    }

    async fn is_same_author(
        &self,
        job: &FailedJob,
        candidate: &WorkflowJobDocument,
    ) -> Result<bool> {
        let job_author = match &job.author_email {
            Some(email) => Some(email.clone()),
            None => self.commit_author(&job.head_sha).await?,
        };
        let candidate_author = match &candidate.author_email {
            Some(email) => Some(email.clone()),
            None => self.commit_author(&candidate.sha).await?,
        };

        match (job_author, candidate_author) {
            (Some(a), Some(b)) => Ok(a == b),
            _ => Ok(false),
        }
    }
}
