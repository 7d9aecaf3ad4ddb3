use super::segment::TrlSegment;
use serde::{Deserialize, Serialize};

/// Self-reported English proficiency of the project team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnglishLevel {
    Basic,
    Intermediate,
    Advanced,
    Unspecified,
}

impl EnglishLevel {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Basic,
            Self::Intermediate,
            Self::Advanced,
            Self::Unspecified,
        ]
    }

    /// Classify free text by keyword. Intermediate is checked before
    /// Advanced so mixed answers such as "intermedio-avanzado" earn the
    /// lower bonus.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        if lowered.contains("intermedi") {
            Self::Intermediate
        } else if lowered.contains("avanzad") || lowered.contains("advanced") {
            Self::Advanced
        } else if lowered.contains("básic") || lowered.contains("basic") {
            Self::Basic
        } else {
            Self::Unspecified
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Unspecified => "Unspecified",
        }
    }
}

/// Points accumulated per scored segment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentScores {
    pub early: f64,
    pub mid: f64,
    pub late: f64,
}

impl SegmentScores {
    pub const fn uniform(points: f64) -> Self {
        Self {
            early: points,
            mid: points,
            late: points,
        }
    }

    pub fn get(&self, segment: TrlSegment) -> Option<f64> {
        match segment {
            TrlSegment::Early => Some(self.early),
            TrlSegment::Mid => Some(self.mid),
            TrlSegment::Late => Some(self.late),
            TrlSegment::Unknown => None,
        }
    }

    /// Returns a copy with `points` added to `segment`. `Unknown` is ignored.
    pub fn award(self, segment: TrlSegment, points: f64) -> Self {
        match segment {
            TrlSegment::Early => Self {
                early: self.early + points,
                ..self
            },
            TrlSegment::Mid => Self {
                mid: self.mid + points,
                ..self
            },
            TrlSegment::Late => Self {
                late: self.late + points,
                ..self
            },
            TrlSegment::Unknown => self,
        }
    }

    pub fn with_bonus(self, bonus: f64) -> Self {
        Self {
            early: self.early + bonus,
            mid: self.mid + bonus,
            late: self.late + bonus,
        }
    }

    pub fn total(&self) -> f64 {
        self.early + self.mid + self.late
    }

    pub fn max(&self) -> f64 {
        self.early.max(self.mid).max(self.late)
    }
}

/// A survey submission after scoring and insight generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProject {
    pub name: String,
    pub readiness_level: f64,
    pub segment: TrlSegment,
    pub scores: SegmentScores,
    pub bonus: f64,
    pub total_score: f64,
    pub approved: bool,
    pub mentor: bool,
    pub english_level: EnglishLevel,
    pub industry: String,
    pub location: String,
    pub insights: Vec<String>,
}
