//! Flakiness heuristics over a finished job.

use tracing::instrument;

use super::traits::{JobMetadataSource, Result};
use crate::domain::FailedJob;

/// Job-name prefixes whose failures never count toward flakiness
/// bookkeeping: quick lint checks and documentation builds fail for
/// real reasons, not flaky infrastructure. Extend by adding entries,
/// not branches.
pub const EXCLUDED_FROM_FLAKINESS: &[&str] = &["LinT", "pull / linux-docs / build-docs-"];

/// A workflow job that produced no failure captures and never reached a
/// runner is presumed to be an infrastructure flake (e.g. a scheduling
/// failure), not a genuine test failure.
pub fn is_infra_flaky_job(job: &FailedJob) -> bool {
    job.is_workflow_job() && job.failure_captures.is_empty() && job.runner_name.is_empty()
}

/// Whether the log classifier never produced output for a workflow job:
/// either the raw log exists but no failure lines were extracted, or no
/// log was uploaded at all. Always false for standalone checks, which
/// the classifier does not cover.
#[instrument(name = "is_log_classifier_failed", skip(job, metadata), fields(job_id = job.id))]
pub async fn is_log_classifier_failed(
    job: &FailedJob,
    metadata: &impl JobMetadataSource,
) -> Result<bool> {
    if !job.is_workflow_job() {
        return Ok(false);
    }

    let has_failure_lines = !job.failure_lines.join("").is_empty();
    if metadata.has_log_artifact(job.id).await? {
        Ok(!has_failure_lines)
    } else {
        Ok(true)
    }
}

/// Whether the job belongs to a category that is never counted as flaky.
pub fn is_excluded_from_flakiness(job: &FailedJob) -> bool {
    EXCLUDED_FROM_FLAKINESS
        .iter()
        .any(|prefix| job.name.starts_with(prefix))
}
