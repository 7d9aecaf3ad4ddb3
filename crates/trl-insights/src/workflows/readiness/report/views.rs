use super::super::domain::{EnglishLevel, ScoredProject};
use super::super::segment::TrlSegment;
use super::summary::CohortReport;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopProject {
    pub name: String,
    pub total_score: f64,
}

/// Row of the project listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummaryView {
    pub name: String,
    pub approved: bool,
    pub early_score: f64,
    pub mid_score: f64,
    pub late_score: f64,
    pub total_score: f64,
    pub segment: TrlSegment,
    pub segment_label: &'static str,
    pub industry: String,
    pub insights: Vec<String>,
}

/// Full per-project report, stamped with its generation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetailView {
    pub name: String,
    pub approved: bool,
    pub readiness_level: f64,
    pub segment: TrlSegment,
    pub segment_label: &'static str,
    pub mentor: bool,
    pub location: String,
    pub english_level: EnglishLevel,
    pub english_label: &'static str,
    pub industry: String,
    pub early_score: f64,
    pub mid_score: f64,
    pub late_score: f64,
    pub bonus: f64,
    pub total_score: f64,
    pub insights: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl ProjectDetailView {
    pub fn new(project: &ScoredProject, generated_at: DateTime<Utc>) -> Self {
        Self {
            name: project.name.clone(),
            approved: project.approved,
            readiness_level: project.readiness_level,
            segment: project.segment,
            segment_label: project.segment.label(),
            mentor: project.mentor,
            location: project.location.clone(),
            english_level: project.english_level,
            english_label: project.english_level.label(),
            industry: project.industry.clone(),
            early_score: project.scores.early,
            mid_score: project.scores.mid,
            late_score: project.scores.late,
            bonus: project.bonus,
            total_score: project.total_score,
            insights: project.insights.clone(),
            generated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortInsightsView {
    #[serde(flatten)]
    pub metrics: CohortReport,
    pub insights: Vec<String>,
}

impl From<CohortReport> for CohortInsightsView {
    fn from(metrics: CohortReport) -> Self {
        let insights = metrics.narrative();
        Self { metrics, insights }
    }
}
