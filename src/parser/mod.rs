//! Locale-aware decimal parsing
//!
//! Text typed in a locale's conventions (`1.234,56` in German, `1,234.56` in
//! English) is converted to a number in three steps: the locale's separators
//! are resolved, thousands separators are removed and the decimal separator
//! is replaced by `.`, then the leading numeric prefix is read.
//! The main entry point is the [`parse_localized_decimal`] function.

mod numeric;
mod separators;

pub use separators::{
    SENTINEL, SampleSeparatorResolver, SeparatorResolver, TableSeparatorResolver,
    separators_from_sample,
};

use tracing::trace;

use crate::ambient::{LocaleProvider, SystemLocale, effective_locale};
use crate::types::SeparatorPair;

/// Parses localized decimal text with a separator resolver and a locale provider
#[derive(Debug, Clone)]
pub struct DecimalParser<S = SampleSeparatorResolver, P = SystemLocale> {
    resolver: S,
    provider: P,
}

impl Default for DecimalParser {
    fn default() -> Self {
        Self::new(SampleSeparatorResolver::default(), SystemLocale)
    }
}

impl<S: SeparatorResolver, P: LocaleProvider> DecimalParser<S, P> {
    pub fn new(resolver: S, provider: P) -> Self {
        Self { resolver, provider }
    }

    /// Parse `input` in `locale`, or in the provider's locale when `None`
    ///
    /// Returns `None` when the normalized text has no numeric prefix or the
    /// value is not finite. Trailing text after the number is ignored.
    pub fn parse(&self, input: &str, locale: Option<&str>) -> Option<f64> {
        let locale = effective_locale(locale, &self.provider);
        let separators = self.resolver.resolve(&locale);
        let normalized = normalize_separators(input, separators);
        let value = numeric::parse_float_prefix(&normalized);
        trace!(input, locale = %locale, normalized = %normalized, ?value, "parsed decimal");
        value
    }
}

/// Remove thousands separators and turn the decimal separator into `.`
///
/// # Examples
/// ```
/// use locale_decimal::parser::normalize_separators;
/// use locale_decimal::types::SeparatorPair;
///
/// let german = SeparatorPair::new('.', ',');
/// assert_eq!(normalize_separators("1.234.567,89", german), "1234567.89");
/// ```
pub fn normalize_separators(input: &str, separators: SeparatorPair) -> String {
    input
        .chars()
        .filter(|c| *c != separators.thousands())
        .map(|c| {
            if c == separators.decimal() {
                '.'
            } else {
                c
            }
        })
        .collect()
}

/// Parse a number typed in a locale's conventions
///
/// Without a locale the system locale is used. Separators are discovered by
/// formatting a sample number, see [`SampleSeparatorResolver`].
///
/// # Examples
/// ```
/// use locale_decimal::parse_localized_decimal;
///
/// assert_eq!(parse_localized_decimal("1.234,56", Some("de-DE")), Some(1234.56));
/// assert_eq!(parse_localized_decimal("1,234.56", Some("en-US")), Some(1234.56));
/// assert_eq!(parse_localized_decimal("abc", Some("en-US")), None);
/// ```
pub fn parse_localized_decimal(input: &str, locale: Option<&str>) -> Option<f64> {
    DecimalParser::default().parse(input, locale)
}
