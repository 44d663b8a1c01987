//! Label-driven suppression of blocking job failures.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::FailedJob;

/// Suppressible job kinds and the PR labels that hide their failures
/// from merge decisions. Keyed by the job's short name.
static SUPPRESSED_JOB_BY_LABELS: LazyLock<HashMap<&'static str, Vec<&'static str>>> =
    LazyLock::new(|| {
        HashMap::from([(
            "bc_linter",
            vec!["suppress-bc-linter", "suppress-api-compatibility-check"],
        )])
    });

/// The subset of `labels` that suppresses this job's failure, in input
/// order. Empty when the job kind supports no suppression at all.
pub fn get_suppressed_labels<'a>(job: &FailedJob, labels: &'a [String]) -> Vec<&'a str> {
    let Some(suppressing) = job
        .job_name
        .as_deref()
        .and_then(|job_name| SUPPRESSED_JOB_BY_LABELS.get(job_name))
    else {
        return vec![];
    };

    labels
        .iter()
        .map(String::as_str)
        .filter(|label| suppressing.iter().any(|suppression| suppression == label))
        .collect()
}
