use std::env;

#[derive(Debug, Clone)]
pub struct SearchUrl(String);

impl AsRef<str> for SearchUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SearchUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Creates a new SearchUrl from the environment variable `LOG_INDEX_URL`.
    pub fn from_env() -> Self {
        Self(env::var("LOG_INDEX_URL").expect("LOG_INDEX_URL must be set in env"))
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// Search endpoint of the given index.
    pub fn search_endpoint(&self, index: &str) -> Self {
        self.append_path(index).append_path("_search")
    }
}
