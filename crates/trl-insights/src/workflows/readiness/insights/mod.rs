mod statements;
mod thresholds;

pub use statements::{MaturityStage, PotentialBand};

use super::domain::ScoredProject;
use serde::Serialize;

/// Structured per-project observations, in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectInsights {
    pub maturity: MaturityStage,
    pub strengths: Vec<&'static str>,
    pub weaknesses: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
    pub potential: PotentialBand,
    pub sector_note: String,
}

impl ProjectInsights {
    /// Flatten into the ordered statement list: maturity, strengths,
    /// weaknesses, recommendations, potential, sector.
    pub fn into_lines(self) -> Vec<String> {
        let mut lines = Vec::with_capacity(
            3 + self.strengths.len() + self.weaknesses.len() + self.recommendations.len(),
        );
        lines.push(self.maturity.statement().to_string());
        lines.extend(self.strengths.iter().map(|line| line.to_string()));
        lines.extend(self.weaknesses.iter().map(|line| line.to_string()));
        lines.extend(self.recommendations.iter().map(|line| line.to_string()));
        lines.push(self.potential.statement().to_string());
        lines.push(self.sector_note);
        lines
    }
}

/// Derive insights from a scored project. Only scores, segment, mentor flag,
/// English level and industry are read; any existing insights are ignored.
pub fn generate_insights(project: &ScoredProject) -> ProjectInsights {
    ProjectInsights {
        maturity: statements::maturity(project),
        strengths: statements::strengths(project),
        weaknesses: statements::weaknesses(project),
        recommendations: statements::recommendations(project),
        potential: statements::potential(&project.scores),
        sector_note: statements::sector_note(&project.industry),
    }
}
