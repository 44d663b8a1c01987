//! Normalization helpers shared by the triage heuristics.

use std::sync::LazyLock;

use log_index::WorkflowJobDocument;
use regex::Regex;

use crate::domain::FailedJob;

// Matches the shard part of a parenthesized job suffix, e.g. the
// ", 1, 5, linux.g5.4xlarge.nvidia.gpu" in "test (default, 1, 5, linux.g5.4xlarge.nvidia.gpu)".
static SHARD_SUFFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r", [0-9]+, [0-9]+, .+\)").unwrap());

/// Strip the shard suffix from a job name, so two shards of the same job
/// compare as equal: "test (default, 1, 5, linux.g5.4xlarge.nvidia.gpu)"
/// and "test (default, 2, 5, linux.g5.4xlarge.nvidia.gpu, unstable)" both
/// become "test (default)".
pub fn remove_job_name_suffix(name: &str) -> String {
    SHARD_SUFFIX_PATTERN.replace(name, ")").to_string()
}

/// Whether an indexed failure has the same signature as the job under
/// triage: same de-sharded name, same captures, same conclusion.
pub fn is_same_failure(job: &FailedJob, candidate: &WorkflowJobDocument) -> bool {
    remove_job_name_suffix(&job.name) == remove_job_name_suffix(&candidate.name)
        && job.failure_captures == candidate.failure_captures
        && job.conclusion == candidate.conclusion
}
