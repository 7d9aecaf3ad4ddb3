//! Technology Readiness Level (TRL) scoring and insight generation.
//!
//! Survey snapshots are scored against a rubric dictionary, enriched with
//! templated insights, and aggregated into cohort metrics and chart datasets
//! for the dashboard service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
