//! Locale-aware decimal formatting
//!
//! [`format_decimal_to_locale`] renders a number with the conventions of a
//! locale: decimal and grouping separators, fraction and significant digit
//! rounding, percent and currency styles, scientific and compact notation.
//!
//! Rendering goes through the [`NumberRenderer`] trait so callers (and the
//! separator discovery in [`crate::parser`]) can substitute their own
//! formatter. [`LocaleFormatter`] is the built-in implementation backed by the
//! embedded locale table.

mod compact;
pub(crate) mod digits;
mod exponential;
pub(crate) mod options;
mod style;

use std::fmt;

use tracing::trace;

use crate::ambient::{LocaleProvider, SystemLocale, effective_locale};
use crate::locale;
use crate::types::{CurrencyInfo, FormatOptions, Notation, Style, UseGrouping};
use digits::{DigitString, render_positional};
use options::ResolvedDigits;
use style::{SignMark, apply_style, sign_mark};

/// Error type for formatting operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Currency style was requested without a currency code
    MissingCurrency,
    /// The currency code is not three ASCII letters
    InvalidCurrencyCode(String),
    /// A digit option lies outside its permitted range
    DigitsOutOfRange {
        option: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    /// A minimum digit option exceeds its maximum
    InvertedDigitRange {
        option: &'static str,
        min: u32,
        max: u32,
    },
    /// An option has a value of the wrong type or an unknown variant
    InvalidOption { option: String, value: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingCurrency => {
                write!(f, "Currency code is required with currency style")
            }
            FormatError::InvalidCurrencyCode(code) => {
                write!(f, "Invalid currency code: {}", code)
            }
            FormatError::DigitsOutOfRange {
                option,
                value,
                min,
                max,
            } => write!(
                f,
                "{} value {} is out of range [{}, {}]",
                option, value, min, max
            ),
            FormatError::InvertedDigitRange { option, min, max } => write!(
                f,
                "minimum {} ({}) is greater than maximum ({})",
                option, min, max
            ),
            FormatError::InvalidOption { option, value } => {
                write!(f, "Invalid value for {}: {}", option, value)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders a number as text for a locale
///
/// Closures with the same signature implement this trait, which makes it easy
/// to plug in a different formatter:
///
/// ```
/// use locale_decimal::{FormatError, FormatOptions, NumberRenderer};
///
/// let plain = |value: f64, _: &str, _: &FormatOptions| -> Result<String, FormatError> {
///     Ok(value.to_string())
/// };
/// assert_eq!(plain.render(2.5, "de-DE", &FormatOptions::default()).unwrap(), "2.5");
/// ```
pub trait NumberRenderer {
    fn render(&self, value: f64, locale: &str, options: &FormatOptions)
    -> Result<String, FormatError>;
}

impl<F> NumberRenderer for F
where
    F: Fn(f64, &str, &FormatOptions) -> Result<String, FormatError>,
{
    fn render(
        &self,
        value: f64,
        locale: &str,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        self(value, locale, options)
    }
}

/// Built-in renderer backed by the embedded locale table
///
/// Unknown locales fall back to their language's default locale and then to
/// the root settings (`.` decimal point, `,` grouping).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleFormatter;

impl NumberRenderer for LocaleFormatter {
    fn render(
        &self,
        value: f64,
        locale: &str,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        let currency = resolve_currency(options)?;
        let digits = ResolvedDigits::resolve(options, currency.as_ref())?;
        let settings = locale::resolve_locale_settings(locale);

        if value.is_nan() {
            return Ok(apply_style(
                "NaN",
                SignMark::Unsigned,
                options,
                currency.as_ref(),
                &settings,
            ));
        }

        let negative = value.is_sign_negative();
        if value.is_infinite() {
            let sign = sign_mark(options.sign_display, negative, false);
            return Ok(apply_style("∞", sign, options, currency.as_ref(), &settings));
        }

        let mut magnitude = DigitString::from_f64(value);
        if options.style == Style::Percent {
            magnitude = magnitude.shifted(2);
        }

        let use_grouping = options.use_grouping.unwrap_or(match options.notation {
            Notation::Compact => UseGrouping::Min2,
            _ => UseGrouping::Auto,
        });
        let grouping = match use_grouping {
            UseGrouping::Auto => Some(settings.min_grouping_digits),
            UseGrouping::Always => Some(1),
            UseGrouping::Min2 => Some(2),
            UseGrouping::Never => None,
        };

        let (body, zero) = match options.notation {
            Notation::Standard => {
                let (rounded, min_fraction) = digits.apply(&magnitude);
                let body = render_positional(
                    &rounded,
                    digits.min_integer,
                    min_fraction,
                    grouping,
                    &settings,
                );
                (body, rounded.is_zero())
            }
            Notation::Scientific => {
                exponential::format_exponential(&magnitude, false, &digits, &settings)
            }
            Notation::Engineering => {
                exponential::format_exponential(&magnitude, true, &digits, &settings)
            }
            Notation::Compact => compact::format_compact(
                &magnitude,
                options.compact_display,
                &digits,
                grouping,
                &settings,
            ),
        };

        let sign = sign_mark(options.sign_display, negative, zero);
        let formatted = apply_style(&body, sign, options, currency.as_ref(), &settings);
        trace!(value, locale, locale_id = %settings.id, formatted = %formatted, "formatted number");
        Ok(formatted)
    }
}

/// Validate the currency option and look up its display data
fn resolve_currency(options: &FormatOptions) -> Result<Option<CurrencyInfo>, FormatError> {
    let Some(code) = options.currency.as_deref() else {
        return match options.style {
            Style::Currency => Err(FormatError::MissingCurrency),
            _ => Ok(None),
        };
    };

    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(FormatError::InvalidCurrencyCode(code.to_string()));
    }

    Ok(Some(
        locale::get_currency(code).unwrap_or_else(|| CurrencyInfo::unknown(code)),
    ))
}

/// Formats numbers with a renderer, defaulting the locale from a provider
#[derive(Debug, Clone)]
pub struct DecimalFormatter<R = LocaleFormatter, P = SystemLocale> {
    renderer: R,
    provider: P,
}

impl Default for DecimalFormatter {
    fn default() -> Self {
        Self::new(LocaleFormatter, SystemLocale)
    }
}

impl<R: NumberRenderer, P: LocaleProvider> DecimalFormatter<R, P> {
    pub fn new(renderer: R, provider: P) -> Self {
        Self { renderer, provider }
    }

    /// Format `value` for `locale`, or for the provider's locale when `None`
    pub fn format(
        &self,
        value: f64,
        locale: Option<&str>,
        options: Option<&FormatOptions>,
    ) -> Result<String, FormatError> {
        let locale = effective_locale(locale, &self.provider);
        let default_options = FormatOptions::default();
        self.renderer
            .render(value, &locale, options.unwrap_or(&default_options))
    }
}

/// Format a number for display in a locale
///
/// Delegates to [`LocaleFormatter`]. Without a locale the system locale is
/// used; without options the value is shown with up to three fraction digits.
///
/// # Examples
/// ```
/// use locale_decimal::{FormatOptions, format_decimal_to_locale};
///
/// assert_eq!(format_decimal_to_locale(1234.56, Some("en-US"), None).unwrap(), "1,234.56");
/// assert_eq!(format_decimal_to_locale(1234.56, Some("de-DE"), None).unwrap(), "1.234,56");
///
/// let usd = FormatOptions::currency("USD");
/// assert_eq!(
///     format_decimal_to_locale(1234.5, Some("en-US"), Some(&usd)).unwrap(),
///     "$1,234.50"
/// );
/// ```
pub fn format_decimal_to_locale(
    value: f64,
    locale: Option<&str>,
    options: Option<&FormatOptions>,
) -> Result<String, FormatError> {
    DecimalFormatter::default().format(value, locale, options)
}
