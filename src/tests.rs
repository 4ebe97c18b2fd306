use crate::ambient::FixedLocale;
use crate::formatter::*;
use crate::parser::*;
use crate::types::*;

fn approx(actual: Option<f64>, expected: f64) {
    let actual = actual.unwrap_or_else(|| panic!("expected {expected}, got None"));
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_german_decimal_comma() {
    approx(parse_localized_decimal("3,8", Some("de-DE")), 3.8);
    approx(parse_localized_decimal("1.234,56", Some("de-DE")), 1234.56);
    approx(parse_localized_decimal("1.234.567,89", Some("de-DE")), 1234567.89);
    approx(parse_localized_decimal("-1.234,56", Some("de-DE")), -1234.56);
}

#[test]
fn test_ambiguous_group_separator() {
    // In German `.` only ever groups
    approx(parse_localized_decimal("1.000", Some("de-DE")), 1000.0);
    approx(parse_localized_decimal("1.000", Some("en-US")), 1.0);
}

#[test]
fn test_us_decimal_point() {
    approx(parse_localized_decimal("50.75", Some("en-US")), 50.75);
    approx(parse_localized_decimal("1,234.56", Some("en-US")), 1234.56);
    approx(parse_localized_decimal("0.0000001", Some("en-US")), 1e-7);
    assert_eq!(parse_localized_decimal("0", Some("en-US")), Some(0.0));
}

#[test]
fn test_leading_separator() {
    approx(parse_localized_decimal(",75", Some("de-DE")), 0.75);
    approx(parse_localized_decimal(".75", Some("en-US")), 0.75);
}

#[test]
fn test_invalid_input() {
    assert_eq!(parse_localized_decimal("not-a-number", None), None);
    assert_eq!(parse_localized_decimal("", None), None);
    assert_eq!(parse_localized_decimal("   ", None), None);
    assert_eq!(parse_localized_decimal(".,.,", None), None);
    assert_eq!(parse_localized_decimal(".,.,", Some("de-DE")), None);
}

#[test]
fn test_trailing_text_is_ignored() {
    approx(parse_localized_decimal("12.5 kg", Some("en-US")), 12.5);
    approx(parse_localized_decimal("12,5 kg", Some("de-DE")), 12.5);
}

#[test]
fn test_whitespace_padding() {
    approx(parse_localized_decimal(" 1.234,56 ", Some("de-DE")), 1234.56);
    approx(parse_localized_decimal("\t1,234.56\n", Some("en-US")), 1234.56);
}

#[test]
fn test_ambient_locale_fallback() {
    // The ambient locale is whatever the host reports; only the shape is fixed
    assert!(parse_localized_decimal("1234", None).is_some());

    let parser = DecimalParser::new(SampleSeparatorResolver::default(), FixedLocale::new("de-DE"));
    approx(parser.parse("1.234,56", None), 1234.56);
    approx(parser.parse("1.234,56", Some("")), 1234.56);
}

#[test]
fn test_custom_renderer_drives_separators() {
    let apostrophe = |value: f64, _: &str, _: &FormatOptions| -> Result<String, FormatError> {
        Ok(if value == SENTINEL {
            "1'000,1".to_string()
        } else {
            value.to_string()
        })
    };
    let parser = DecimalParser::new(SampleSeparatorResolver::new(apostrophe), FixedLocale::new("x"));
    approx(parser.parse("12'345,5", None), 12345.5);
}

#[test]
fn test_format_then_parse() {
    for locale in ["en-US", "de-DE", "fr-FR", "de-CH", "en-IN", "nl-NL"] {
        let text = format_decimal_to_locale(1234567.891, Some(locale), None).unwrap();
        approx(parse_localized_decimal(&text, Some(locale)), 1234567.891);
    }
}
