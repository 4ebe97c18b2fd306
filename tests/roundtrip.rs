use locale_decimal::{FormatOptions, format_decimal_to_locale, parse_localized_decimal};
use proptest::prelude::*;

/// Locales whose rendered sentinel shows both separators
const LOCALES: &[&str] = &[
    "en-US", "en-GB", "en-IN", "de-DE", "de-CH", "fr-FR", "it-IT", "pt-BR", "nl-NL", "ja-JP",
];

proptest! {
    #[test]
    fn format_then_parse_recovers_value(
        value in -1.0e12f64..1.0e12,
        locale in prop::sample::select(LOCALES),
    ) {
        let text = format_decimal_to_locale(value, Some(locale), None).unwrap();
        let parsed = parse_localized_decimal(&text, Some(locale));
        prop_assert!(parsed.is_some(), "{text:?} did not parse in {locale}");
        let parsed = parsed.unwrap();
        // Default formatting keeps at most three fraction digits
        prop_assert!((parsed - value).abs() <= 0.000_500_001 + value.abs() * 1e-15, "{value} -> {text:?} -> {parsed}");
    }

    #[test]
    fn surrounding_whitespace_is_ignored(
        value in -1.0e9f64..1.0e9,
        locale in prop::sample::select(LOCALES),
        left in "[ \t\n]{0,3}",
        right in "[ \t\n]{0,3}",
    ) {
        let text = format_decimal_to_locale(value, Some(locale), None).unwrap();
        let padded = format!("{left}{text}{right}");
        prop_assert_eq!(
            parse_localized_decimal(&padded, Some(locale)),
            parse_localized_decimal(&text, Some(locale))
        );
    }

    #[test]
    fn fixed_fraction_digits_are_exact(
        cents in -10_000_000i64..10_000_000,
        locale in prop::sample::select(LOCALES),
    ) {
        let value = cents as f64 / 100.0;
        let options = FormatOptions::new()
            .with_minimum_fraction_digits(2)
            .with_maximum_fraction_digits(2);
        let text = format_decimal_to_locale(value, Some(locale), Some(&options)).unwrap();
        prop_assert_eq!(parse_localized_decimal(&text, Some(locale)), Some(value));
    }

    #[test]
    fn parse_never_panics(input in "\\PC{0,20}", locale in prop::sample::select(LOCALES)) {
        let _ = parse_localized_decimal(&input, Some(locale));
    }
}
