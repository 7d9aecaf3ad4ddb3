mod narrative;
mod summary;
mod views;

pub use summary::{CohortReport, OverviewMetrics, ScoreAverages, SegmentCount};
pub use views::{CohortInsightsView, ProjectDetailView, ProjectSummaryView, TopProject};
