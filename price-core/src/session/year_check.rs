//! Advisory check on the year field.
//!
//! This is the only inline validation the form performs. It is a
//! three-branch rule, not a general range check: the upper bound matches
//! only the literal text `2019`, and no other field is ever checked. The
//! warning is informational and never blocks submission.

/// Warning shown when the year field is exactly the text `2019`.
pub const YEAR_TOO_RECENT: &str = "Please enter a year less than 2019.";

/// Warning shown when the year field parses to a number below 2003.
pub const YEAR_TOO_OLD: &str = "Please enter a year greater than 2003.";

/// Recomputes the year warning for the current field text.
///
/// Branches, in order:
/// 1. text is exactly `"2019"` → [`YEAR_TOO_RECENT`]
/// 2. text is non-empty and parses (trimmed, permissive float syntax) to a
///    value below 2003 → [`YEAR_TOO_OLD`]
/// 3. anything else, including unparseable text → no warning
pub fn year_warning(raw: &str) -> Option<&'static str> {
    if raw == "2019" {
        return Some(YEAR_TOO_RECENT);
    }

    if raw.is_empty() {
        return None;
    }

    match raw.trim().parse::<f64>() {
        Ok(year) if year < 2003.0 => Some(YEAR_TOO_OLD),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn literal_2019_always_warns_too_recent() {
        assert_eq!(year_warning("2019"), Some(YEAR_TOO_RECENT));
    }

    #[test]
    fn only_the_exact_literal_matches_the_upper_bound() {
        // Neighbouring and padded values fall through to the numeric branch.
        assert_eq!(year_warning("2019 "), None);
        assert_eq!(year_warning("02019"), None);
        assert_eq!(year_warning("2019.0"), None);
    }

    #[test]
    fn years_below_2003_warn_too_old() {
        assert_eq!(year_warning("2002"), Some(YEAR_TOO_OLD));
        assert_eq!(year_warning("1998"), Some(YEAR_TOO_OLD));
        assert_eq!(year_warning("0"), Some(YEAR_TOO_OLD));
    }

    #[test]
    fn years_from_2003_on_are_clear() {
        assert_eq!(year_warning("2003"), None);
        assert_eq!(year_warning("2015"), None);
        // No general upper bound exists beyond the 2019 literal.
        assert_eq!(year_warning("2030"), None);
    }

    #[test]
    fn empty_input_is_clear() {
        assert_eq!(year_warning(""), None);
    }

    #[test]
    fn unparseable_input_is_clear() {
        assert_eq!(year_warning("abc"), None);
        assert_eq!(year_warning("20x3"), None);
    }

    #[test]
    fn permissive_float_syntax_is_accepted() {
        assert_eq!(year_warning("2002.5"), Some(YEAR_TOO_OLD));
        assert_eq!(year_warning("1e3"), Some(YEAR_TOO_OLD));
        assert_eq!(year_warning(" 2004 "), None);
    }
}
