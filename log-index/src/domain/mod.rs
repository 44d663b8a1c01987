mod query;
mod workflow_job;

pub use query::*;
pub use workflow_job::*;
