use serde::{Deserialize, Serialize};

/// Readiness band a project falls into based on its declared TRL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrlSegment {
    Early,
    Mid,
    Late,
    Unknown,
}

impl TrlSegment {
    /// Scored segments in rubric order.
    pub const fn scored() -> [Self; 3] {
        [Self::Early, Self::Mid, Self::Late]
    }

    pub const fn ordered() -> [Self; 4] {
        [Self::Early, Self::Mid, Self::Late, Self::Unknown]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Early => "TRL 1-3",
            Self::Mid => "TRL 4-7",
            Self::Late => "TRL 8-9",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse a rubric segment label. Accepts `TRL 1-3`, `1-3` and the band
    /// names; `Unknown` is never a valid rubric target.
    pub fn from_label(raw: &str) -> Option<Self> {
        let compact: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        match compact.trim_start_matches("trl") {
            "1-3" | "early" => Some(Self::Early),
            "4-7" | "mid" => Some(Self::Mid),
            "8-9" | "late" => Some(Self::Late),
            _ => None,
        }
    }
}

/// Classify a readiness level. Anything outside 1-9, including NaN and the
/// gaps between bands, is `Unknown`.
pub fn segment(level: f64) -> TrlSegment {
    if (1.0..=3.0).contains(&level) {
        TrlSegment::Early
    } else if (4.0..=7.0).contains(&level) {
        TrlSegment::Mid
    } else if (8.0..=9.0).contains(&level) {
        TrlSegment::Late
    } else {
        TrlSegment::Unknown
    }
}
