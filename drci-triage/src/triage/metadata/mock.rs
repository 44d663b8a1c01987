//! Mock job metadata source for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log_index::WorkflowJobDocument;

use crate::domain::FailedJob;
use crate::triage::traits::{JobMetadataSource, Result};

/// Mock metadata source with canned answers and per-call counters.
#[derive(Clone)]
pub struct MockJobMetadataSource {
    has_log: bool,
    same_author: bool,
    log_checks: Arc<AtomicUsize>,
    author_checks: Arc<AtomicUsize>,
}

impl Default for MockJobMetadataSource {
    fn default() -> Self {
        Self {
            has_log: true,
            same_author: false,
            log_checks: Arc::new(AtomicUsize::new(0)),
            author_checks: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl MockJobMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure whether a raw log artifact exists.
    pub fn with_log_artifact(mut self, has_log: bool) -> Self {
        self.has_log = has_log;
        self
    }

    /// Configure the answer to author-equality checks.
    pub fn with_same_author(mut self, same_author: bool) -> Self {
        self.same_author = same_author;
        self
    }

    /// Number of log-existence checks issued so far.
    pub fn log_check_count(&self) -> usize {
        self.log_checks.load(Ordering::SeqCst)
    }

    /// Number of author-equality checks issued so far.
    pub fn author_check_count(&self) -> usize {
        self.author_checks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobMetadataSource for MockJobMetadataSource {
    async fn has_log_artifact(&self, _job_id: i64) -> Result<bool> {
        self.log_checks.fetch_add(1, Ordering::SeqCst);
        Ok(self.has_log)
    }

    async fn is_same_author(
        &self,
        _job: &FailedJob,
        _candidate: &WorkflowJobDocument,
    ) -> Result<bool> {
        self.author_checks.fetch_add(1, Ordering::SeqCst);
        Ok(self.same_author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_tracks_log_checks() {
        let metadata = MockJobMetadataSource::new().with_log_artifact(false);
        assert_eq!(metadata.log_check_count(), 0);

        assert!(!metadata.has_log_artifact(1).await.unwrap());
        assert!(!metadata.has_log_artifact(2).await.unwrap());
        assert_eq!(metadata.log_check_count(), 2);
    }
}
