//! Numeric sanitization for dataset text fields.
//!
//! Source fields carry grouping spaces, commas, and footnote markers
//! ("1 428 627.663", "..."). Parsing strips everything outside `[0-9.]`
//! first; rows whose fields still fail to parse fall back to
//! metric-specific defaults instead of being dropped.

/// Fallback when a sex-ratio field does not parse: parity.
pub const SEX_RATIO_FALLBACK: f64 = 100.0;

/// Fallback for density and median age: zero, which renders as no-data.
pub const ZERO_FALLBACK: f64 = 0.0;

/// Keeps ASCII digits and decimal points, dropping everything else.
pub fn strip_non_numeric(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Parses a sanitized copy of `text`; `None` when nothing numeric remains.
pub fn parse_sanitized(text: &str) -> Option<f64> {
    strip_non_numeric(text).parse().ok()
}

/// Parses with a fallback default.
pub fn parse_or(text: &str, default: f64) -> f64 {
    parse_sanitized(text).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::{SEX_RATIO_FALLBACK, parse_or, parse_sanitized, strip_non_numeric};

    #[test]
    fn strips_grouping_and_markers() {
        assert_eq!(strip_non_numeric("1 428 627.663"), "1428627.663");
        assert_eq!(strip_non_numeric("12,345"), "12345");
        assert_eq!(strip_non_numeric("~98.7 est."), "98.7.");
    }

    #[test]
    fn parses_cleaned_numbers() {
        assert_eq!(parse_sanitized("1 428 627.663"), Some(1_428_627.663));
        assert_eq!(parse_sanitized("106.1"), Some(106.1));
        assert_eq!(parse_sanitized("..."), None);
        assert_eq!(parse_sanitized(""), None);
    }

    #[test]
    fn falls_back_on_unparseable_input() {
        assert_eq!(parse_or("n/a", SEX_RATIO_FALLBACK), 100.0);
        assert_eq!(parse_or("48.25", 0.0), 48.25);
    }
}
