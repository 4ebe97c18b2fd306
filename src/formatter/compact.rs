use super::digits::{DigitString, render_positional};
use super::options::ResolvedDigits;
use crate::types::{CompactDisplay, CompactPattern, LocaleSettings};

/// Format a magnitude with the locale's compact abbreviations
///
/// Picks the largest abbreviation not above the value's magnitude that has a
/// suffix for `display`. Returns the body and whether the rounded value is zero.
pub(super) fn format_compact(
    value: &DigitString,
    display: CompactDisplay,
    digits: &ResolvedDigits,
    grouping: Option<u8>,
    settings: &LocaleSettings,
) -> (String, bool) {
    let mut pattern = pattern_for(value.magnitude(), display, settings);
    let (mut rounded, mut min_fraction) = digits.apply(&scaled(value, pattern));

    // Rounding may carry into the next abbreviation (999999 -> 1M)
    let carried = rounded
        .magnitude()
        .map(|m| m + pattern.map_or(0, |p| p.magnitude as i32));
    let next = pattern_for(carried, display, settings);
    if carried.is_some() && next != pattern {
        pattern = next;
        (rounded, min_fraction) = digits.apply(&scaled(value, pattern));
    }

    let mut body = render_positional(&rounded, digits.min_integer, min_fraction, grouping, settings);
    if let Some(suffix) = pattern.and_then(|p| p.suffix(display)) {
        body.push_str(suffix);
    }
    (body, rounded.is_zero())
}

fn pattern_for(
    magnitude: Option<i32>,
    display: CompactDisplay,
    settings: &LocaleSettings,
) -> Option<&CompactPattern> {
    let magnitude = magnitude?;
    settings
        .compact_patterns
        .iter()
        .rev()
        .find(|p| p.suffix(display).is_some() && p.magnitude as i32 <= magnitude)
}

fn scaled(value: &DigitString, pattern: Option<&CompactPattern>) -> DigitString {
    value.shifted(-pattern.map_or(0, |p| p.magnitude as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::options::Rounding;

    fn compact(value: f64, display: CompactDisplay, settings: &LocaleSettings) -> String {
        let digits = ResolvedDigits {
            min_integer: 1,
            rounding: Rounding::Compact,
        };
        format_compact(
            &DigitString::from_f64(value),
            display,
            &digits,
            Some(2),
            settings,
        )
        .0
    }

    #[test]
    fn test_short_suffixes() {
        let settings = LocaleSettings::default();
        assert_eq!(compact(1234567.0, CompactDisplay::Short, &settings), "1.2M");
        assert_eq!(compact(12345.0, CompactDisplay::Short, &settings), "12K");
        assert_eq!(compact(123456.0, CompactDisplay::Short, &settings), "123K");
        assert_eq!(compact(999.0, CompactDisplay::Short, &settings), "999");
        assert_eq!(compact(1.234, CompactDisplay::Short, &settings), "1.2");
        assert_eq!(compact(0.0, CompactDisplay::Short, &settings), "0");
    }

    #[test]
    fn test_long_suffixes() {
        let settings = LocaleSettings::default();
        assert_eq!(compact(1500.0, CompactDisplay::Long, &settings), "1.5 thousand");
        assert_eq!(compact(2e9, CompactDisplay::Long, &settings), "2 billion");
    }

    #[test]
    fn test_rounding_carries_into_next_suffix() {
        let settings = LocaleSettings::default();
        assert_eq!(compact(999999.0, CompactDisplay::Short, &settings), "1M");
        assert_eq!(compact(999.9, CompactDisplay::Short, &settings), "1K");
    }

    #[test]
    fn test_missing_short_suffix_falls_back() {
        let settings = LocaleSettings {
            compact_patterns: vec![
                CompactPattern {
                    magnitude: 3,
                    short: None,
                    long: Some(" Tausend".to_string()),
                },
                CompactPattern {
                    magnitude: 6,
                    short: Some("\u{00A0}Mio.".to_string()),
                    long: Some(" Millionen".to_string()),
                },
            ],
            ..LocaleSettings::default()
        };
        assert_eq!(compact(1234.0, CompactDisplay::Short, &settings), "1234");
        assert_eq!(compact(1234.0, CompactDisplay::Long, &settings), "1.2 Tausend");
        assert_eq!(compact(2500000.0, CompactDisplay::Short, &settings), "2.5\u{00A0}Mio.");
    }
}
