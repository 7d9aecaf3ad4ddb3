use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;

use super::charts::ChartDatasets;
use super::pipeline::{score_snapshot, ProcessedCohort};
use super::report::{CohortInsightsView, OverviewMetrics, ProjectDetailView, ProjectSummaryView};
use super::repository::{Materialization, SnapshotSource, SnapshotStore};
use super::scoring::{ScoringEngine, ScoringPolicy};
use crate::workflows::dataset::DatasetError;
use crate::workflows::rubric::RubricTable;
use crate::workflows::survey::{FetchError, SurveyColumns};

/// Service composing the snapshot store, rubric dictionary, and scoring
/// policy. Every query re-reads both files and recomputes from scratch.
pub struct ReadinessService<S> {
    store: SnapshotStore,
    source: S,
    rubric_path: PathBuf,
    columns: SurveyColumns,
    policy: ScoringPolicy,
}

impl<S> ReadinessService<S>
where
    S: SnapshotSource + 'static,
{
    pub fn new(store: SnapshotStore, source: S, rubric_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            source,
            rubric_path: rubric_path.into(),
            columns: SurveyColumns::default(),
            policy: ScoringPolicy::standard(),
        }
    }

    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn snapshot_path(&self) -> &Path {
        self.store.path()
    }

    pub fn rubric_path(&self) -> &Path {
        &self.rubric_path
    }

    /// Run the full pipeline over the current snapshot and rubric.
    pub fn process(&self) -> Result<ProcessedCohort, ReadinessError> {
        let snapshot = self.store.load()?;
        let rubric = RubricTable::from_path(&self.rubric_path)?;
        let engine = ScoringEngine::new(Arc::new(rubric), self.policy);
        Ok(score_snapshot(&snapshot, &self.columns, &engine)?)
    }

    pub fn overview(&self) -> Result<OverviewMetrics, ReadinessError> {
        Ok(self.process()?.overview())
    }

    pub fn projects(&self) -> Result<Vec<ProjectSummaryView>, ReadinessError> {
        Ok(self
            .process()?
            .projects
            .iter()
            .map(|project| project.summary_view())
            .collect())
    }

    /// All projects whose name contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Result<Vec<ProjectDetailView>, ReadinessError> {
        let cohort = self.process()?;
        let generated_at = Utc::now();
        let matches: Vec<_> = cohort
            .matching(query)
            .map(|project| ProjectDetailView::new(project, generated_at))
            .collect();

        if matches.is_empty() {
            return Err(ReadinessError::LookupMiss {
                query: query.to_string(),
            });
        }
        Ok(matches)
    }

    /// Report for the first project whose name contains `name`.
    pub fn project_detail(&self, name: &str) -> Result<ProjectDetailView, ReadinessError> {
        let cohort = self.process()?;
        let detail = cohort
            .matching(name)
            .next()
            .map(|project| ProjectDetailView::new(project, Utc::now()))
            .ok_or_else(|| ReadinessError::LookupMiss {
                query: name.to_string(),
            });
        detail
    }

    pub fn cohort_insights(&self) -> Result<CohortInsightsView, ReadinessError> {
        Ok(CohortInsightsView::from(self.process()?.report()))
    }

    pub fn charts(&self) -> Result<ChartDatasets, ReadinessError> {
        Ok(self.process()?.charts())
    }

    /// Materialize the snapshot from the upstream source if none exists.
    pub async fn refresh(&self) -> Result<Materialization, ReadinessError> {
        self.store.ensure_materialized(&self.source).await
    }
}

/// Error raised by the readiness service.
#[derive(Debug, thiserror::Error)]
pub enum ReadinessError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("no project matches '{query}'")]
    LookupMiss { query: String },
}

impl ReadinessError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::LookupMiss { .. } | Self::Dataset(DatasetError::NotFound { .. })
        )
    }

    pub fn is_bad_input(&self) -> bool {
        matches!(self, Self::Dataset(err) if err.is_format_error())
    }
}
