mod failed_job;
mod similar_failure;

pub use failed_job::FailedJob;
pub use log_index::Conclusion;
pub use similar_failure::SimilarFailure;
