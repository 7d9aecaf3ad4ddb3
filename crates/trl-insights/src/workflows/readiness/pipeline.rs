use super::charts::ChartDatasets;
use super::domain::ScoredProject;
use super::insights::generate_insights;
use super::report::{CohortReport, OverviewMetrics};
use super::scoring::ScoringEngine;
use super::segment::segment;
use crate::workflows::dataset::DatasetError;
use crate::workflows::survey::{SurveyColumns, SurveyResponse, SurveySnapshot};
use tracing::{debug, info};

/// Score a single response and attach its insights.
pub fn score_response(response: &SurveyResponse, engine: &ScoringEngine) -> ScoredProject {
    let outcome = engine.score(response);
    let project = ScoredProject {
        name: response.name.clone(),
        readiness_level: response.readiness_level,
        segment: segment(response.readiness_level),
        scores: outcome.scores,
        bonus: outcome.bonus,
        total_score: outcome.total(),
        approved: outcome.approved,
        mentor: response.mentor,
        english_level: response.english_level,
        industry: response.industry.clone(),
        location: response.location.clone(),
        insights: Vec::new(),
    };

    debug!(
        project = %project.name,
        early = project.scores.early,
        mid = project.scores.mid,
        late = project.scores.late,
        approved = project.approved,
        "scored project"
    );

    let insights = generate_insights(&project).into_lines();
    ScoredProject { insights, ..project }
}

/// Score every row of a snapshot. Rows are independent; output keeps input
/// order.
pub fn score_snapshot(
    snapshot: &SurveySnapshot,
    columns: &SurveyColumns,
    engine: &ScoringEngine,
) -> Result<ProcessedCohort, DatasetError> {
    let projects: Vec<ScoredProject> = snapshot
        .responses(columns)?
        .iter()
        .map(|response| score_response(response, engine))
        .collect();

    let cohort = ProcessedCohort { projects };
    info!(
        records = cohort.len(),
        approved = cohort.approved(),
        "readiness pipeline complete"
    );
    Ok(cohort)
}

/// Result of one pipeline run. Rebuilt on every request, never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedCohort {
    pub projects: Vec<ScoredProject>,
}

impl ProcessedCohort {
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn approved(&self) -> usize {
        self.projects.iter().filter(|project| project.approved).count()
    }

    pub fn overview(&self) -> OverviewMetrics {
        OverviewMetrics::from_projects(&self.projects)
    }

    pub fn report(&self) -> CohortReport {
        CohortReport::aggregate(&self.projects)
    }

    pub fn charts(&self) -> ChartDatasets {
        ChartDatasets::build(&self.projects)
    }

    /// Case-insensitive literal substring match on the project name, in
    /// snapshot order.
    pub fn matching<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a ScoredProject> + 'a {
        let needle = query.trim().to_lowercase();
        self.projects
            .iter()
            .filter(move |project| project.name.to_lowercase().contains(&needle))
    }
}
