use serde_json::{json, Value};
use time::OffsetDateTime;

/// Index holding one document per finished workflow job.
pub const WORKFLOW_JOB_INDEX: &str = "workflow-job";

/// Relevance floor below which a hit is treated as unrelated noise.
pub const MIN_SCORE: f64 = 1.0;

/// Upper bound on hits returned by a single query.
pub const MAX_SIZE: usize = 1000;

/// Default sort for similarity lookups, so the earliest occurrence of a
/// failure is examined first.
pub const OLDEST_FIRST: SortOrder = SortOrder::OldestFirst;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    OldestFirst,
    NewestFirst,
}

impl SortOrder {
    fn direction(&self) -> &'static str {
        match self {
            SortOrder::OldestFirst => "asc",
            SortOrder::NewestFirst => "desc",
        }
    }
}

/// One full-text similarity lookup against the failure index. Built per
/// call and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarFailureQuery {
    /// Free-text terms, e.g. the failure captures joined by spaces.
    pub query: String,
    pub index: String,
    /// Inclusive window over job completion time.
    pub start_time: OffsetDateTime,
    pub end_time: OffsetDateTime,
    /// Restrict hits to a single change author.
    pub author: Option<String>,
    pub min_score: f64,
    pub max_size: usize,
    pub sort: SortOrder,
}

impl SimilarFailureQuery {
    /// The JSON body sent to the search service. Time bounds are encoded
    /// as epoch seconds, which the range filter accepts and which keeps
    /// construction infallible.
    pub fn to_request_body(&self) -> Value {
        let mut filters = vec![json!({
            "range": {
                "time": {
                    "gte": self.start_time.unix_timestamp(),
                    "lte": self.end_time.unix_timestamp(),
                    "format": "epoch_second",
                }
            }
        })];
        if let Some(author) = &self.author {
            filters.push(json!({ "term": { "authorEmail": author } }));
        }

        json!({
            "min_score": self.min_score,
            "size": self.max_size,
            "query": {
                "bool": {
                    "must": [{
                        "match": {
                            "failureCaptures": { "query": self.query, "operator": "and" }
                        }
                    }],
                    "filter": filters,
                }
            },
            "sort": [{ "time": self.sort.direction() }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn make_query() -> SimilarFailureQuery {
        SimilarFailureQuery {
            query: "ERROR".to_string(),
            index: WORKFLOW_JOB_INDEX.to_string(),
            start_time: datetime!(2023-07-31 00:00:00 UTC),
            end_time: datetime!(2023-08-01 00:00:00 UTC),
            author: None,
            min_score: MIN_SCORE,
            max_size: MAX_SIZE,
            sort: OLDEST_FIRST,
        }
    }

    #[test]
    fn body_carries_text_window_and_caps() {
        let body = make_query().to_request_body();

        assert_eq!(body["min_score"], json!(1.0));
        assert_eq!(body["size"], json!(1000));
        assert_eq!(
            body["query"]["bool"]["must"][0]["match"]["failureCaptures"]["query"],
            json!("ERROR")
        );

        let range = &body["query"]["bool"]["filter"][0]["range"]["time"];
        assert_eq!(range["gte"], json!(1690761600));
        assert_eq!(range["lte"], json!(1690848000));

        assert_eq!(body["sort"], json!([{ "time": "asc" }]));
    }

    #[test]
    fn body_includes_author_filter_when_set() {
        let mut query = make_query();
        query.author = Some("dev@example.com".to_string());

        let body = query.to_request_body();
        assert_eq!(
            body["query"]["bool"]["filter"][1]["term"]["authorEmail"],
            json!("dev@example.com")
        );
    }

    #[test]
    fn newest_first_sorts_descending() {
        let mut query = make_query();
        query.sort = SortOrder::NewestFirst;

        let body = query.to_request_body();
        assert_eq!(body["sort"], json!([{ "time": "desc" }]));
    }
}
