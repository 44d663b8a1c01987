use std::env;
use std::error::Error;

use log_index::{
    SearchClient, SearchUrl, SimilarFailureQuery, MAX_SIZE, MIN_SCORE, OLDEST_FIRST,
    WORKFLOW_JOB_INDEX,
};
use time::{Duration, OffsetDateTime};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::from_filename("./log-index/.env.local").ok();

    let capture = env::args()
        .nth(1)
        .unwrap_or_else(|| "ERROR".to_string());

    let mut client = SearchClient::new(SearchUrl::from_env());
    if let Ok(token) = env::var("LOG_INDEX_TOKEN") {
        client = client.with_token(token);
    }

    let end_time = OffsetDateTime::now_utc();
    let query = SimilarFailureQuery {
        query: capture,
        index: WORKFLOW_JOB_INDEX.to_string(),
        start_time: end_time - Duration::hours(24),
        end_time,
        author: None,
        min_score: MIN_SCORE,
        max_size: MAX_SIZE,
        sort: OLDEST_FIRST,
    };

    let documents = client.search_workflow_jobs(&query).await?;

    println!("Matching failures in the last 24h:");
    for doc in documents {
        println!(
            "{} | {} @ {} ({})",
            doc.id, doc.name, doc.branch, doc.conclusion
        );
    }

    Ok(())
}
