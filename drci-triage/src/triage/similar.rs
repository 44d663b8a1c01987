//! Nearest prior-failure lookup.

use log_index::{SimilarFailureQuery, MAX_SIZE, MIN_SCORE, OLDEST_FIRST, WORKFLOW_JOB_INDEX};
use time::{Duration, OffsetDateTime};
use tracing::instrument;

use super::jobs::is_same_failure;
use super::traits::{JobMetadataSource, Result, SearchGateway};
use crate::domain::{FailedJob, SimilarFailure};

/// Hard ceiling on the total lookback span of one similarity query, in
/// hours. Keeps a single lookup from scanning unbounded history when a
/// PR is based on an old commit.
pub const MAX_SEARCH_HOURS_FOR_QUERYING_SIMILAR_FAILURES: i64 = 90;

/// Look for a sufficiently similar prior failure on another PR within
/// the lookback window, returning it normalized into job-record
/// vocabulary.
///
/// The window ends at the head commit timestamp and reaches back
/// `lookback_hours`, widened to cover the full range down to
/// `base_commit_time` when the base commit is older than the head.
/// Returns `Ok(None)` without touching the index when the job carries no
/// head commit timestamp, or when the widened span would exceed
/// [`MAX_SEARCH_HOURS_FOR_QUERYING_SIMILAR_FAILURES`].
#[instrument(
    name = "find_similar_failure",
    skip(job, base_commit_time, gateway, metadata),
    fields(job_id = job.id)
)]
pub async fn find_similar_failure(
    job: &FailedJob,
    base_commit_time: Option<OffsetDateTime>,
    lookback_hours: i64,
    gateway: &impl SearchGateway,
    metadata: &impl JobMetadataSource,
) -> Result<Option<SimilarFailure>> {
    let Some(head_time) = job.head_sha_timestamp else {
        tracing::debug!("job has no head sha timestamp, skipping lookup");
        return Ok(None);
    };

    let base_to_head_hours = match base_commit_time {
        Some(base) if base < head_time => hours_between(base, head_time),
        _ => 0,
    };

    if base_to_head_hours + lookback_hours > MAX_SEARCH_HOURS_FOR_QUERYING_SIMILAR_FAILURES {
        tracing::debug!(
            span_hours = base_to_head_hours + lookback_hours,
            "lookback span exceeds ceiling, skipping lookup"
        );
        return Ok(None);
    }

    let query = SimilarFailureQuery {
        query: job.failure_capture_text(),
        index: WORKFLOW_JOB_INDEX.to_string(),
        start_time: head_time - Duration::hours(lookback_hours + base_to_head_hours),
        end_time: head_time,
        author: None,
        min_score: MIN_SCORE,
        max_size: MAX_SIZE,
        sort: OLDEST_FIRST,
    };

    // Hits arrive oldest first, so the first survivor is the earliest
    // occurrence of the failure.
    for candidate in gateway.search_similar_failures(&query).await? {
        if candidate.branch == job.head_branch {
            // Same branch means same PR, which is not a signal.
            continue;
        }
        if candidate.id == job.id {
            continue;
        }
        if !is_same_failure(job, &candidate) {
            continue;
        }

        let same_author = match (&job.author_email, &candidate.author_email) {
            (Some(_), Some(_)) => Some(metadata.is_same_author(job, &candidate).await?),
            _ => None,
        };

        tracing::debug!(candidate_id = candidate.id, "found similar failure");
        return Ok(Some(SimilarFailure::from_document(candidate, same_author)));
    }

    Ok(None)
}

fn hours_between(earlier: OffsetDateTime, later: OffsetDateTime) -> i64 {
    (later - earlier).whole_hours()
}
