//! Digit option resolution and option loading
//!
//! Unset digit options get defaults that depend on the style, the currency
//! and the notation. Explicit values are range-checked here so an invalid
//! combination surfaces as a [`FormatError`] before anything is rendered.

use tracing::debug;

use super::FormatError;
use super::digits::DigitString;
use crate::types::{
    CompactDisplay, CurrencyDisplay, CurrencyInfo, CurrencySign, FormatOptions, Notation,
    SignDisplay, Style, UseGrouping,
};

const MAX_FRACTION_DIGITS: u32 = 100;
const MAX_SIGNIFICANT_DIGITS: u32 = 21;
const MAX_INTEGER_DIGITS: u32 = 21;

/// How the magnitude is rounded before rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rounding {
    Fraction { min: u32, max: u32 },
    Significant { min: u32, max: u32 },
    /// Two significant digits for a one-digit integer part, whole numbers otherwise
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedDigits {
    pub(crate) min_integer: u32,
    pub(crate) rounding: Rounding,
}

impl ResolvedDigits {
    pub(crate) fn resolve(
        options: &FormatOptions,
        currency: Option<&CurrencyInfo>,
    ) -> Result<Self, FormatError> {
        let min_integer = checked(
            "minimumIntegerDigits",
            options.minimum_integer_digits,
            1,
            MAX_INTEGER_DIGITS,
        )?
        .unwrap_or(1);
        let min_significant = checked(
            "minimumSignificantDigits",
            options.minimum_significant_digits,
            1,
            MAX_SIGNIFICANT_DIGITS,
        )?;
        let max_significant = checked(
            "maximumSignificantDigits",
            options.maximum_significant_digits,
            1,
            MAX_SIGNIFICANT_DIGITS,
        )?;
        let min_fraction = checked(
            "minimumFractionDigits",
            options.minimum_fraction_digits,
            0,
            MAX_FRACTION_DIGITS,
        )?;
        let max_fraction = checked(
            "maximumFractionDigits",
            options.maximum_fraction_digits,
            0,
            MAX_FRACTION_DIGITS,
        )?;

        // Significant digits take precedence over fraction digits
        if min_significant.is_some() || max_significant.is_some() {
            let min = min_significant.unwrap_or(1);
            let max = max_significant.unwrap_or(MAX_SIGNIFICANT_DIGITS);
            if min > max {
                return Err(FormatError::InvertedDigitRange {
                    option: "significantDigits",
                    min,
                    max,
                });
            }
            return Ok(Self {
                min_integer,
                rounding: Rounding::Significant { min, max },
            });
        }

        if options.notation == Notation::Compact && min_fraction.is_none() && max_fraction.is_none()
        {
            return Ok(Self {
                min_integer,
                rounding: Rounding::Compact,
            });
        }

        let (default_min, default_max) = match (options.style, currency) {
            (Style::Currency, Some(currency)) => (currency.digits, currency.digits),
            (Style::Percent, _) => (0, 0),
            _ => (0, 3),
        };

        let (min, max) = match (min_fraction, max_fraction) {
            (Some(min), Some(max)) => {
                if min > max {
                    return Err(FormatError::InvertedDigitRange {
                        option: "fractionDigits",
                        min,
                        max,
                    });
                }
                (min, max)
            }
            (Some(min), None) => (min, default_max.max(min)),
            (None, Some(max)) => (default_min.min(max), max),
            (None, None) => (default_min, default_max),
        };

        Ok(Self {
            min_integer,
            rounding: Rounding::Fraction { min, max },
        })
    }

    /// Round `value` and return it with the fraction digits to display
    pub(crate) fn apply(&self, value: &DigitString) -> (DigitString, u32) {
        match self.rounding {
            Rounding::Fraction { min, max } => (value.round_to_fraction(max), min),
            Rounding::Significant { min, max } => {
                let rounded = value.round_to_significant(max);
                let min_fraction = rounded.fraction_len_for_significant(min);
                (rounded, min_fraction)
            }
            Rounding::Compact => {
                if value.integer_len() >= 2 {
                    (value.round_to_fraction(0), 0)
                } else {
                    (value.round_to_significant(2), 0)
                }
            }
        }
    }
}

fn checked(
    option: &'static str,
    value: Option<u32>,
    min: u32,
    max: u32,
) -> Result<Option<u32>, FormatError> {
    match value {
        Some(v) if v < min || v > max => Err(FormatError::DigitsOutOfRange {
            option,
            value: v,
            min,
            max,
        }),
        other => Ok(other),
    }
}

impl FormatOptions {
    /// Load options from a TOML document using Intl option names
    ///
    /// # Examples
    /// ```
    /// use locale_decimal::{FormatOptions, Style};
    ///
    /// let options = FormatOptions::from_toml_str(
    ///     "style = \"currency\"\ncurrency = \"EUR\"\nmaximumFractionDigits = 0",
    /// )
    /// .unwrap();
    /// assert_eq!(options.style, Style::Currency);
    /// assert_eq!(options.maximum_fraction_digits, Some(0));
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, FormatError> {
        let value: toml::Value = toml::from_str(source).map_err(|e| FormatError::InvalidOption {
            option: "options".to_string(),
            value: e.to_string(),
        })?;
        Self::from_toml_value(&value)
    }

    /// Load options from a TOML table, e.g. a section of a larger config file
    ///
    /// Unrecognized keys are ignored; recognized keys with unsupported values
    /// are rejected.
    pub fn from_toml_value(value: &toml::Value) -> Result<Self, FormatError> {
        let table = value.as_table().ok_or_else(|| invalid("options", value))?;
        let mut options = FormatOptions::default();

        for (key, value) in table {
            match key.as_str() {
                "style" => {
                    options.style = match text(key, value)? {
                        "decimal" => Style::Decimal,
                        "percent" => Style::Percent,
                        "currency" => Style::Currency,
                        _ => return Err(invalid(key, value)),
                    }
                }
                "currency" => options.currency = Some(text(key, value)?.to_string()),
                "currencyDisplay" => {
                    options.currency_display = match text(key, value)? {
                        "symbol" => CurrencyDisplay::Symbol,
                        "narrowSymbol" => CurrencyDisplay::NarrowSymbol,
                        "code" => CurrencyDisplay::Code,
                        "name" => CurrencyDisplay::Name,
                        _ => return Err(invalid(key, value)),
                    }
                }
                "currencySign" => {
                    options.currency_sign = match text(key, value)? {
                        "standard" => CurrencySign::Standard,
                        "accounting" => CurrencySign::Accounting,
                        _ => return Err(invalid(key, value)),
                    }
                }
                "minimumIntegerDigits" => {
                    options.minimum_integer_digits = Some(integer(key, value)?)
                }
                "minimumFractionDigits" => {
                    options.minimum_fraction_digits = Some(integer(key, value)?)
                }
                "maximumFractionDigits" => {
                    options.maximum_fraction_digits = Some(integer(key, value)?)
                }
                "minimumSignificantDigits" => {
                    options.minimum_significant_digits = Some(integer(key, value)?)
                }
                "maximumSignificantDigits" => {
                    options.maximum_significant_digits = Some(integer(key, value)?)
                }
                "useGrouping" => {
                    options.use_grouping = Some(match value {
                        toml::Value::Boolean(true) => UseGrouping::Always,
                        toml::Value::Boolean(false) => UseGrouping::Never,
                        toml::Value::String(s) => match s.as_str() {
                            "auto" => UseGrouping::Auto,
                            "always" | "true" => UseGrouping::Always,
                            "min2" => UseGrouping::Min2,
                            "false" => UseGrouping::Never,
                            _ => return Err(invalid(key, value)),
                        },
                        _ => return Err(invalid(key, value)),
                    })
                }
                "notation" => {
                    options.notation = match text(key, value)? {
                        "standard" => Notation::Standard,
                        "scientific" => Notation::Scientific,
                        "engineering" => Notation::Engineering,
                        "compact" => Notation::Compact,
                        _ => return Err(invalid(key, value)),
                    }
                }
                "compactDisplay" => {
                    options.compact_display = match text(key, value)? {
                        "short" => CompactDisplay::Short,
                        "long" => CompactDisplay::Long,
                        _ => return Err(invalid(key, value)),
                    }
                }
                "signDisplay" => {
                    options.sign_display = match text(key, value)? {
                        "auto" => SignDisplay::Auto,
                        "always" => SignDisplay::Always,
                        "exceptZero" => SignDisplay::ExceptZero,
                        "negative" => SignDisplay::Negative,
                        "never" => SignDisplay::Never,
                        _ => return Err(invalid(key, value)),
                    }
                }
                other => debug!(option = other, "ignoring unrecognized format option"),
            }
        }

        Ok(options)
    }
}

fn invalid(option: &str, value: &toml::Value) -> FormatError {
    FormatError::InvalidOption {
        option: option.to_string(),
        value: value.to_string(),
    }
}

fn text<'a>(option: &str, value: &'a toml::Value) -> Result<&'a str, FormatError> {
    value.as_str().ok_or_else(|| invalid(option, value))
}

fn integer(option: &str, value: &toml::Value) -> Result<u32, FormatError> {
    value
        .as_integer()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| invalid(option, value))
}
