//! Readiness scoring: TRL segmentation, rubric scoring, per-project insights,
//! and the cohort aggregates served to the dashboard.

pub mod charts;
pub mod domain;
pub mod insights;
pub mod pipeline;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod segment;
pub mod service;

#[cfg(test)]
mod tests;

pub use charts::{CategoryCount, ChartDatasets, HistogramBin, SegmentApproval};
pub use domain::{EnglishLevel, ScoredProject, SegmentScores};
pub use insights::{generate_insights, MaturityStage, PotentialBand, ProjectInsights};
pub use pipeline::{score_response, score_snapshot, ProcessedCohort};
pub use report::{
    CohortInsightsView, CohortReport, OverviewMetrics, ProjectDetailView, ProjectSummaryView,
    ScoreAverages, SegmentCount, TopProject,
};
pub use repository::{
    FormApiSource, Materialization, RefreshPolicy, SnapshotSource, SnapshotStore,
};
pub use router::readiness_router;
pub use scoring::{ScoreOutcome, ScoringEngine, ScoringPolicy};
pub use segment::{segment, TrlSegment};
pub use service::{ReadinessError, ReadinessService};
