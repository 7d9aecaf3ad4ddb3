mod config;
mod rules;

pub use config::ScoringPolicy;

use super::domain::SegmentScores;
use crate::workflows::rubric::RubricTable;
use crate::workflows::survey::SurveyResponse;
use serde::Serialize;
use std::sync::Arc;

/// Stateless scorer applying the rubric and bonus policy to a response.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    rubric: Arc<RubricTable>,
    policy: ScoringPolicy,
}

impl ScoringEngine {
    pub fn new(rubric: Arc<RubricTable>, policy: ScoringPolicy) -> Self {
        Self { rubric, policy }
    }

    /// Bonus-only scoring, used when no rubric entries apply.
    pub fn without_rubric(policy: ScoringPolicy) -> Self {
        Self::new(Arc::new(RubricTable::empty()), policy)
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Never fails: unmatched answers contribute nothing.
    pub fn score(&self, response: &SurveyResponse) -> ScoreOutcome {
        let rubric_scores = rules::rubric_points(response, &self.rubric);
        let bonus = rules::flat_bonus(response, &self.policy);
        let scores = rubric_scores.with_bonus(bonus);
        let approved = rules::is_approved(&scores, &self.policy);

        ScoreOutcome {
            scores,
            bonus,
            approved,
        }
    }
}

/// Segment totals (bonus included) and the pass/fail decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreOutcome {
    pub scores: SegmentScores,
    pub bonus: f64,
    pub approved: bool,
}

impl ScoreOutcome {
    pub fn total(&self) -> f64 {
        self.scores.total()
    }
}
