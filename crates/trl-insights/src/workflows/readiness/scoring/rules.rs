use super::config::ScoringPolicy;
use crate::workflows::readiness::domain::{EnglishLevel, SegmentScores};
use crate::workflows::rubric::RubricTable;
use crate::workflows::survey::SurveyResponse;

/// Sum rubric points per segment across every answered question. Points land
/// in the segment the rubric names, whatever TRL the project declared.
pub(crate) fn rubric_points(response: &SurveyResponse, rubric: &RubricTable) -> SegmentScores {
    response
        .answers
        .iter()
        .filter_map(|(question, answer)| rubric.lookup(question, answer))
        .fold(SegmentScores::default(), |scores, award| {
            scores.award(award.segment, award.points)
        })
}

pub(crate) fn english_bonus(level: EnglishLevel, policy: &ScoringPolicy) -> f64 {
    match level {
        EnglishLevel::Intermediate => policy.intermediate_english_bonus,
        EnglishLevel::Advanced => policy.advanced_english_bonus,
        EnglishLevel::Basic | EnglishLevel::Unspecified => 0.0,
    }
}

pub(crate) fn mentor_bonus(mentor: bool, policy: &ScoringPolicy) -> f64 {
    if mentor {
        policy.mentor_bonus
    } else {
        0.0
    }
}

/// Flat bonus added identically to every segment.
pub(crate) fn flat_bonus(response: &SurveyResponse, policy: &ScoringPolicy) -> f64 {
    english_bonus(response.english_level, policy) + mentor_bonus(response.mentor, policy)
}

pub(crate) fn is_approved(scores: &SegmentScores, policy: &ScoringPolicy) -> bool {
    scores.max() >= policy.approval_threshold
}
