pub mod dataset;
pub mod readiness;
pub mod rubric;
pub mod survey;
