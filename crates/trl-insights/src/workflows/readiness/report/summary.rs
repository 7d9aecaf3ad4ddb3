use super::super::domain::ScoredProject;
use super::super::segment::TrlSegment;
use super::views::{ProjectSummaryView, TopProject};
use serde::Serialize;

const TOP_PROJECTS: usize = 3;

/// One decimal place, ties to even on the exact binary value.
pub(crate) fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round1(values.sum::<f64>() / count as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentCount {
    pub segment: TrlSegment,
    pub segment_label: &'static str,
    pub count: usize,
}

/// Mean segment and total scores, rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreAverages {
    pub early: f64,
    pub mid: f64,
    pub late: f64,
    pub total: f64,
}

/// Cohort-level metrics over a full set of scored projects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortReport {
    pub total_projects: usize,
    pub approved: usize,
    pub approval_pct: f64,
    pub distribution: Vec<SegmentCount>,
    pub averages: ScoreAverages,
    pub top_projects: Vec<TopProject>,
}

impl CohortReport {
    pub fn aggregate(projects: &[ScoredProject]) -> Self {
        let total_projects = projects.len();
        let approved = projects.iter().filter(|project| project.approved).count();
        let approval_pct = if total_projects == 0 {
            0.0
        } else {
            round1(approved as f64 / total_projects as f64 * 100.0)
        };

        let distribution = TrlSegment::ordered()
            .into_iter()
            .map(|segment| SegmentCount {
                segment,
                segment_label: segment.label(),
                count: projects
                    .iter()
                    .filter(|project| project.segment == segment)
                    .count(),
            })
            .collect();

        let averages = ScoreAverages {
            early: mean(projects.iter().map(|p| p.scores.early), total_projects),
            mid: mean(projects.iter().map(|p| p.scores.mid), total_projects),
            late: mean(projects.iter().map(|p| p.scores.late), total_projects),
            total: mean(projects.iter().map(|p| p.total_score), total_projects),
        };

        Self {
            total_projects,
            approved,
            approval_pct,
            distribution,
            averages,
            top_projects: top_projects(projects, TOP_PROJECTS),
        }
    }

    pub fn count(&self, segment: TrlSegment) -> usize {
        self.distribution
            .iter()
            .find(|entry| entry.segment == segment)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

/// Highest totals first. The sort is stable so ties keep input order.
fn top_projects(projects: &[ScoredProject], limit: usize) -> Vec<TopProject> {
    let mut ranked: Vec<&ScoredProject> = projects.iter().collect();
    ranked.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    ranked
        .into_iter()
        .take(limit)
        .map(|project| TopProject {
            name: project.name.clone(),
            total_score: round1(project.total_score),
        })
        .collect()
}

/// Headline counters for the dashboard landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverviewMetrics {
    pub forms: usize,
    pub max_readiness_level: i64,
    pub approved: usize,
    pub mentor_yes: usize,
    pub mentor_no: usize,
}

impl OverviewMetrics {
    pub fn from_projects(projects: &[ScoredProject]) -> Self {
        let mentor_yes = projects.iter().filter(|project| project.mentor).count();
        let max_readiness_level = projects
            .iter()
            .map(|project| project.readiness_level)
            .reduce(f64::max)
            .map(|level| level.trunc() as i64)
            .unwrap_or(0);

        Self {
            forms: projects.len(),
            max_readiness_level,
            approved: projects.iter().filter(|project| project.approved).count(),
            mentor_yes,
            mentor_no: projects.len() - mentor_yes,
        }
    }
}

impl ScoredProject {
    pub fn summary_view(&self) -> ProjectSummaryView {
        ProjectSummaryView {
            name: self.name.clone(),
            approved: self.approved,
            early_score: self.scores.early,
            mid_score: self.scores.mid,
            late_score: self.scores.late,
            total_score: self.total_score,
            segment: self.segment,
            segment_label: self.segment.label(),
            industry: self.industry.clone(),
            insights: self.insights.clone(),
        }
    }
}
