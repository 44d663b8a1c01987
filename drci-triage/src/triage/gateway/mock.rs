//! Mock search gateway for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use log_index::{SimilarFailureQuery, WorkflowJobDocument};

use crate::triage::traits::{Result, SearchGateway};

/// Mock gateway that answers every query with a configured hit list and
/// records the queries it receives, so tests can assert both that no
/// query was issued and what an issued query looked like.
#[derive(Clone, Default)]
pub struct MockSearchGateway {
    hits: Arc<Mutex<Vec<WorkflowJobDocument>>>,
    queries: Arc<Mutex<Vec<SimilarFailureQuery>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockSearchGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the hits every query returns.
    pub fn with_hits(self, hits: Vec<WorkflowJobDocument>) -> Self {
        *self.hits.lock().unwrap() = hits;
        self
    }

    /// Number of queries issued so far.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Issued queries, in order.
    pub fn recorded_queries(&self) -> Vec<SimilarFailureQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchGateway for MockSearchGateway {
    async fn search_similar_failures(
        &self,
        query: &SimilarFailureQuery,
    ) -> Result<Vec<WorkflowJobDocument>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.hits.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log_index::{MAX_SIZE, MIN_SCORE, OLDEST_FIRST, WORKFLOW_JOB_INDEX};
    use time::macros::datetime;

    fn make_query(text: &str) -> SimilarFailureQuery {
        SimilarFailureQuery {
            query: text.to_string(),
            index: WORKFLOW_JOB_INDEX.to_string(),
            start_time: datetime!(2023-07-31 00:00:00 UTC),
            end_time: datetime!(2023-08-01 00:00:00 UTC),
            author: None,
            min_score: MIN_SCORE,
            max_size: MAX_SIZE,
            sort: OLDEST_FIRST,
        }
    }

    #[tokio::test]
    async fn mock_records_queries_in_order() {
        let gateway = MockSearchGateway::new();
        assert_eq!(gateway.call_count(), 0);

        gateway
            .search_similar_failures(&make_query("first"))
            .await
            .unwrap();
        gateway
            .search_similar_failures(&make_query("second"))
            .await
            .unwrap();

        assert_eq!(gateway.call_count(), 2);
        let queries = gateway.recorded_queries();
        assert_eq!(queries[0].query, "first");
        assert_eq!(queries[1].query, "second");
    }
}
