use super::thresholds;
use crate::workflows::readiness::domain::{EnglishLevel, ScoredProject, SegmentScores};
use crate::workflows::readiness::segment::TrlSegment;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityStage {
    SolidResearch,
    Conceptual,
    FunctionalPrototype,
    EarlyPrototype,
    ReadyForImplementation,
    AlmostReady,
}

impl MaturityStage {
    pub const fn statement(self) -> &'static str {
        match self {
            Self::SolidResearch => {
                "Solid research: good theoretical grounding and initial validation"
            }
            Self::Conceptual => {
                "Conceptual stage: needs more theoretical development and validation"
            }
            Self::FunctionalPrototype => {
                "Functional prototype: technical validation in progress"
            }
            Self::EarlyPrototype => "Early prototype: requires more technical development",
            Self::ReadyForImplementation => {
                "Ready for implementation: high market readiness"
            }
            Self::AlmostReady => "Almost ready: needs final adjustments for implementation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PotentialBand {
    Excellent,
    Good,
    Moderate,
    Limited,
}

impl PotentialBand {
    pub const fn statement(self) -> &'static str {
        match self {
            Self::Excellent => {
                "Excellent potential: project well developed across all areas"
            }
            Self::Good => "Good potential: solid project with some areas to improve",
            Self::Moderate => "Moderate potential: needs work in several areas",
            Self::Limited => "Limited potential: requires significant development",
        }
    }
}

/// Score the maturity and recommendation checks key on. Unknown projects
/// are judged like Late ones.
fn own_segment_score(segment: TrlSegment, scores: &SegmentScores) -> f64 {
    scores.get(segment).unwrap_or(scores.late)
}

pub(crate) fn maturity(project: &ScoredProject) -> MaturityStage {
    let score = own_segment_score(project.segment, &project.scores);
    let reached = score >= thresholds::maturity(project.segment);

    match (project.segment, reached) {
        (TrlSegment::Early, true) => MaturityStage::SolidResearch,
        (TrlSegment::Early, false) => MaturityStage::Conceptual,
        (TrlSegment::Mid, true) => MaturityStage::FunctionalPrototype,
        (TrlSegment::Mid, false) => MaturityStage::EarlyPrototype,
        (TrlSegment::Late | TrlSegment::Unknown, true) => MaturityStage::ReadyForImplementation,
        (TrlSegment::Late | TrlSegment::Unknown, false) => MaturityStage::AlmostReady,
    }
}

pub(crate) fn strengths(project: &ScoredProject) -> Vec<&'static str> {
    let scores = &project.scores;
    let mut strengths = Vec::new();

    if scores.early >= thresholds::STRENGTH_EARLY {
        strengths.push("Well-founded innovation backed by solid research");
    }
    if scores.mid >= thresholds::STRENGTH_MID {
        strengths.push("Advanced and validated technical development");
    }
    if scores.late >= thresholds::STRENGTH_LATE {
        strengths.push("High implementation and scalability potential");
    }
    if project.mentor {
        strengths.push("Strong academic mentorship");
    }
    if matches!(
        project.english_level,
        EnglishLevel::Advanced | EnglishLevel::Intermediate
    ) {
        strengths.push("Good capacity for international documentation");
    }

    strengths
}

pub(crate) fn weaknesses(project: &ScoredProject) -> Vec<&'static str> {
    let scores = &project.scores;
    let mut weaknesses = Vec::new();

    if scores.early < thresholds::WEAKNESS_EARLY {
        weaknesses.push("Weak theoretical grounding: needs more research");
    }
    if scores.mid < thresholds::WEAKNESS_MID {
        weaknesses.push("Insufficient technical development: requires more validation");
    }
    if scores.late < thresholds::WEAKNESS_LATE {
        weaknesses.push("Limited market readiness: needs further development");
    }
    if !project.mentor {
        weaknesses.push("No faculty mentor: mentorship recommended");
    }
    if project.english_level == EnglishLevel::Basic {
        weaknesses.push("Limited English: constrains international potential");
    }

    weaknesses
}

pub(crate) fn recommendations(project: &ScoredProject) -> Vec<&'static str> {
    let mut recommendations = Vec::new();
    let score = own_segment_score(project.segment, &project.scores);
    let needs_follow_up = score < thresholds::follow_up(project.segment);

    match project.segment {
        TrlSegment::Early => {
            recommendations.push("Prioritize research and concept validation");
            if needs_follow_up {
                recommendations.push("Carry out further market and technical research");
            }
        }
        TrlSegment::Mid => {
            recommendations.push("Focus on technical development and testing");
            if needs_follow_up {
                recommendations.push("Run more rigorous technical tests");
            }
        }
        TrlSegment::Late | TrlSegment::Unknown => {
            recommendations.push("Prepare an implementation and commercialization strategy");
            if needs_follow_up {
                recommendations.push("Run pilot tests with end users");
            }
        }
    }

    if !project.mentor {
        recommendations.push("Seek faculty mentorship to strengthen the project");
    }
    if project.english_level == EnglishLevel::Basic {
        recommendations.push("Improve English documentation for wider impact");
    }

    recommendations
}

/// Bands the already-bonused segment scores; the bonus is not re-applied.
pub(crate) fn potential(scores: &SegmentScores) -> PotentialBand {
    let total = scores.total();
    if total >= thresholds::POTENTIAL_EXCELLENT {
        PotentialBand::Excellent
    } else if total >= thresholds::POTENTIAL_GOOD {
        PotentialBand::Good
    } else if total >= thresholds::POTENTIAL_MODERATE {
        PotentialBand::Moderate
    } else {
        PotentialBand::Limited
    }
}

pub(crate) fn sector_note(industry: &str) -> String {
    format!("Sector: {industry} - consider related market trends")
}
