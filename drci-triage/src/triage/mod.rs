//! Triage heuristics and the ports they depend on.
//!
//! Everything here is thin decision logic over small, already-fetched
//! records. The two external collaborators are modeled as traits:
//!
//! - [`SearchGateway`] - the full-text failure index (mockable)
//! - [`JobMetadataSource`] - the CI provider's job metadata (mockable)

mod flaky;
mod jobs;
mod similar;
mod suppression;
mod traits;

pub mod gateway;
pub mod metadata;

pub use flaky::{
    is_excluded_from_flakiness, is_infra_flaky_job, is_log_classifier_failed,
    EXCLUDED_FROM_FLAKINESS,
};
pub use jobs::{is_same_failure, remove_job_name_suffix};
pub use similar::{find_similar_failure, MAX_SEARCH_HOURS_FOR_QUERYING_SIMILAR_FAILURES};
pub use suppression::get_suppressed_labels;
pub use traits::{JobMetadataSource, Result, SearchGateway, TriageError};
