use serde::{Deserialize, Serialize};

/// Approval threshold and flat bonus weights applied on top of rubric points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub approval_threshold: f64,
    pub mentor_bonus: f64,
    pub intermediate_english_bonus: f64,
    pub advanced_english_bonus: f64,
}

impl ScoringPolicy {
    pub const fn standard() -> Self {
        Self {
            approval_threshold: 50.0,
            mentor_bonus: 10.0,
            intermediate_english_bonus: 2.0,
            advanced_english_bonus: 4.0,
        }
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
