//! Decision layer for the Dr.CI triage dashboard.
//!
//! Thin heuristics over already-materialized CI job records:
//!
//! - [`triage::find_similar_failure`] - does a sufficiently similar prior
//!   failure exist on another PR within the lookback window?
//! - [`triage::is_infra_flaky_job`], [`triage::is_log_classifier_failed`],
//!   [`triage::is_excluded_from_flakiness`] - flakiness heuristics
//! - [`triage::get_suppressed_labels`] - which PR labels hide a job's
//!   failure from merge decisions
//!
//! The heavy lifting is delegated to two external collaborators, modeled
//! as traits so callers can wire in any backend:
//!
//! - [`triage::SearchGateway`] - the full-text failure index
//! - [`triage::JobMetadataSource`] - the CI provider's job metadata

pub mod config;
pub mod domain;
pub mod triage;
