//! Discovery of a locale's decimal and thousands separators

use tracing::debug;

use crate::formatter::{LocaleFormatter, NumberRenderer};
use crate::locale;
use crate::types::{DEFAULT_DECIMAL_SEPARATOR, DEFAULT_THOUSANDS_SEPARATOR, FormatOptions, SeparatorPair};

/// Sample number rendered to reveal a locale's separators
///
/// It has a thousands group and a fractional part, so a grouping locale
/// prints both separators, e.g. `1,000.1` or `1.000,1`.
pub const SENTINEL: f64 = 1000.1;

/// Determines the separators used by a locale
pub trait SeparatorResolver {
    /// Never fails; unknown locales yield the defaults `,` and `.`
    fn resolve(&self, locale: &str) -> SeparatorPair;
}

/// Reads the separators off the rendered [`SENTINEL`]
///
/// Works with any [`NumberRenderer`]. Locales that do not group a four-digit
/// integer (`es-ES`, `pl-PL`) reveal only their decimal separator; the
/// thousands separator is then assumed to be the other of `,` and `.`.
#[derive(Debug, Clone)]
pub struct SampleSeparatorResolver<R = LocaleFormatter> {
    renderer: R,
}

impl<R: NumberRenderer> SampleSeparatorResolver<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }
}

impl Default for SampleSeparatorResolver<LocaleFormatter> {
    fn default() -> Self {
        Self::new(LocaleFormatter)
    }
}

impl<R: NumberRenderer> SeparatorResolver for SampleSeparatorResolver<R> {
    fn resolve(&self, locale: &str) -> SeparatorPair {
        match self
            .renderer
            .render(SENTINEL, locale, &FormatOptions::default())
        {
            Ok(sample) => separators_from_sample(&sample),
            Err(e) => {
                debug!(locale, error = %e, "sample rendering failed, using default separators");
                SeparatorPair::default()
            }
        }
    }
}

/// Derive the separators from a rendered sample
///
/// The last non-digit character is the decimal separator and the first is
/// the thousands separator.
pub fn separators_from_sample(sample: &str) -> SeparatorPair {
    let symbols: Vec<char> = sample.chars().filter(|c| !c.is_ascii_digit()).collect();
    match symbols.as_slice() {
        [] => SeparatorPair::default(),
        [decimal] => SeparatorPair::new(DEFAULT_THOUSANDS_SEPARATOR, *decimal),
        [thousands, .., decimal] => SeparatorPair::new(*thousands, *decimal),
    }
}

/// Takes the separators straight from the embedded locale table
///
/// Unlike [`SampleSeparatorResolver`] this knows the grouping separator of
/// locales that skip grouping for four-digit numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableSeparatorResolver;

impl SeparatorResolver for TableSeparatorResolver {
    fn resolve(&self, locale: &str) -> SeparatorPair {
        match locale::get_locale_settings(locale) {
            Some(settings) => settings.separators(),
            None => {
                debug!(locale, "unknown locale, using default separators");
                SeparatorPair::new(DEFAULT_THOUSANDS_SEPARATOR, DEFAULT_DECIMAL_SEPARATOR)
            }
        }
    }
}
