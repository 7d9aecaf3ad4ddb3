//! Score cut-offs for the per-project insight statements.

use crate::workflows::readiness::segment::TrlSegment;

/// Maturity statement: at or above means the stronger wording.
pub(crate) const MATURITY_EARLY: f64 = 40.0;
pub(crate) const MATURITY_MID: f64 = 50.0;
pub(crate) const MATURITY_LATE: f64 = 60.0;

/// Strength emitted when the segment score is at or above.
pub(crate) const STRENGTH_EARLY: f64 = 40.0;
pub(crate) const STRENGTH_MID: f64 = 50.0;
pub(crate) const STRENGTH_LATE: f64 = 50.0;

/// Weakness emitted when the segment score is strictly below.
pub(crate) const WEAKNESS_EARLY: f64 = 30.0;
pub(crate) const WEAKNESS_MID: f64 = 40.0;
pub(crate) const WEAKNESS_LATE: f64 = 40.0;

/// Secondary recommendation emitted when the own-segment score is strictly
/// below. Late uses its own cut-off, not the weakness one.
pub(crate) const FOLLOW_UP_EARLY: f64 = 30.0;
pub(crate) const FOLLOW_UP_MID: f64 = 40.0;
pub(crate) const FOLLOW_UP_LATE: f64 = 50.0;

/// Overall potential bands over the summed segment scores.
pub(crate) const POTENTIAL_EXCELLENT: f64 = 120.0;
pub(crate) const POTENTIAL_GOOD: f64 = 80.0;
pub(crate) const POTENTIAL_MODERATE: f64 = 50.0;

pub(crate) const fn maturity(segment: TrlSegment) -> f64 {
    match segment {
        TrlSegment::Early => MATURITY_EARLY,
        TrlSegment::Mid => MATURITY_MID,
        TrlSegment::Late | TrlSegment::Unknown => MATURITY_LATE,
    }
}

pub(crate) const fn follow_up(segment: TrlSegment) -> f64 {
    match segment {
        TrlSegment::Early => FOLLOW_UP_EARLY,
        TrlSegment::Mid => FOLLOW_UP_MID,
        TrlSegment::Late | TrlSegment::Unknown => FOLLOW_UP_LATE,
    }
}
