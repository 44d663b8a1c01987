use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use crate::domain::{SimilarFailureQuery, WorkflowJobDocument};
use crate::SearchUrl;

pub struct SearchClient {
    base_url: SearchUrl,
    token: Option<String>,
}

impl SearchClient {
    pub fn new(base_url: SearchUrl) -> Self {
        Self {
            base_url,
            token: None,
        }
    }

    /// Authenticate requests with a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    async fn post<T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
        body: &serde_json::Value,
    ) -> Result<T, SearchFetchError> {
        let client = reqwest::Client::new();

        let mut request = client.post(url.as_ref()).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| SearchFetchError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(SearchFetchError::Unauthorized);
        }

        let resp_data = resp.json::<T>().await.map_err(|e| {
            SearchFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        Ok(resp_data)
    }

    /// Run a similarity query against the workflow job index, returning
    /// the stored documents in the query's sort order.
    pub async fn search_workflow_jobs(
        &self,
        query: &SimilarFailureQuery,
    ) -> Result<Vec<WorkflowJobDocument>, SearchFetchError> {
        let url = self.base_url.search_endpoint(&query.index);

        tracing::debug!(index = %query.index, "querying failure index");
        let response: SearchHitsResponse<WorkflowJobDocument> =
            self.post(url, &query.to_request_body()).await?;

        Ok(response.into_documents())
    }
}

#[derive(Error, Debug)]
pub enum SearchFetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("Other: {0}")]
    Other(String),
}

/// Response envelope returned by the search service: ranked hits, each
/// wrapping a stored document together with its relevance score.
#[derive(Debug, Deserialize)]
pub struct SearchHitsResponse<T> {
    pub hits: HitsEnvelope<T>,
}

#[derive(Debug, Deserialize)]
pub struct HitsEnvelope<T> {
    pub hits: Vec<Hit<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Hit<T> {
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source")]
    pub source: T,
}

impl<T> SearchHitsResponse<T> {
    /// Unwrap the envelope, keeping hit order.
    pub fn into_documents(self) -> Vec<T> {
        self.hits.hits.into_iter().map(|hit| hit.source).collect()
    }
}
