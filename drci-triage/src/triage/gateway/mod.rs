//! Search gateway implementations.

#[cfg(test)]
mod mock;

#[cfg(test)]
pub use mock::MockSearchGateway;

use async_trait::async_trait;
use log_index::{SearchClient, SimilarFailureQuery, WorkflowJobDocument};

use super::traits::{Result, SearchGateway};

/// Search gateway backed by the failure log index service.
pub struct LogIndexGateway {
    client: SearchClient,
}

impl LogIndexGateway {
    pub fn new(client: SearchClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchGateway for LogIndexGateway {
    async fn search_similar_failures(
        &self,
        query: &SimilarFailureQuery,
    ) -> Result<Vec<WorkflowJobDocument>> {
        Ok(self.client.search_workflow_jobs(query).await?)
    }
}
