pub(crate) const UNSPECIFIED: &str = "Unspecified";

/// Strip invisible characters and collapse internal whitespace.
pub(crate) fn clean_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Numeric coercion for the readiness column; anything unusable becomes 0.
pub(crate) fn readiness_level(raw: &str) -> f64 {
    clean_text(raw)
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|level| level.is_finite())
        .unwrap_or(0.0)
}

pub(crate) fn mentor_flag(raw: &str) -> bool {
    clean_text(raw).eq_ignore_ascii_case("si")
}

pub(crate) fn industry(raw: Option<&str>) -> String {
    let cleaned = raw.map(clean_text).unwrap_or_default();
    if cleaned.is_empty() {
        UNSPECIFIED.to_string()
    } else {
        cleaned
    }
}

/// Trim and capitalize (first letter upper, rest lower). Empty cells and
/// spreadsheet `nan` placeholders become `Unspecified`.
pub(crate) fn location(raw: Option<&str>) -> String {
    let cleaned = raw.map(clean_text).unwrap_or_default();
    if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("nan") {
        return UNSPECIFIED.to_string();
    }

    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => UNSPECIFIED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness_level_coerces_garbage_to_zero() {
        assert_eq!(readiness_level("5"), 5.0);
        assert_eq!(readiness_level(" 7.0 "), 7.0);
        assert_eq!(readiness_level("3,5"), 3.5);
        assert_eq!(readiness_level("TRL 5"), 0.0);
        assert_eq!(readiness_level(""), 0.0);
        assert_eq!(readiness_level("NaN"), 0.0);
        assert_eq!(readiness_level("inf"), 0.0);
    }

    #[test]
    fn mentor_flag_matches_si_case_insensitively() {
        assert!(mentor_flag("Si"));
        assert!(mentor_flag(" SI "));
        assert!(mentor_flag("si"));
        assert!(!mentor_flag("No"));
        assert!(!mentor_flag("sin docente"));
        assert!(!mentor_flag(""));
    }

    #[test]
    fn location_is_capitalized_with_fallback() {
        assert_eq!(location(Some("  HUANCAYO ")), "Huancayo");
        assert_eq!(location(Some("lima")), "Lima");
        assert_eq!(location(Some("nan")), UNSPECIFIED);
        assert_eq!(location(Some("")), UNSPECIFIED);
        assert_eq!(location(None), UNSPECIFIED);
    }

    #[test]
    fn industry_is_kept_verbatim_when_present() {
        assert_eq!(industry(Some(" Agritech ")), "Agritech");
        assert_eq!(industry(Some("\u{feff}")), UNSPECIFIED);
        assert_eq!(industry(None), UNSPECIFIED);
    }
}
