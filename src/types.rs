//! Type definitions shared by the parser and the formatter
//!
//! This module defines the separator pair inferred for a locale, the
//! Intl-style formatting options and the per-locale number settings loaded
//! from the embedded locale data.

use std::collections::BTreeMap;

/// Decimal separator used when a locale reveals nothing better
pub const DEFAULT_DECIMAL_SEPARATOR: char = '.';
/// Thousands separator used when a locale reveals nothing better
pub const DEFAULT_THOUSANDS_SEPARATOR: char = ',';

/// The two characters a locale uses around digits
///
/// The thousands and decimal separators are always distinct. When they would
/// collide the decimal separator wins and the thousands separator becomes the
/// other one of `,` and `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorPair {
    thousands: char,
    decimal: char,
}

impl SeparatorPair {
    /// Build a pair, keeping the decimal separator when both characters are equal
    pub fn new(thousands: char, decimal: char) -> Self {
        let thousands = if thousands == decimal {
            if decimal == DEFAULT_THOUSANDS_SEPARATOR {
                DEFAULT_DECIMAL_SEPARATOR
            } else {
                DEFAULT_THOUSANDS_SEPARATOR
            }
        } else {
            thousands
        };
        Self { thousands, decimal }
    }

    /// Character grouping integer digits
    pub fn thousands(&self) -> char {
        self.thousands
    }

    /// Character between the integer and fractional digits
    pub fn decimal(&self) -> char {
        self.decimal
    }
}

impl Default for SeparatorPair {
    fn default() -> Self {
        Self {
            thousands: DEFAULT_THOUSANDS_SEPARATOR,
            decimal: DEFAULT_DECIMAL_SEPARATOR,
        }
    }
}

/// Formatting style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Plain decimal number
    #[default]
    Decimal,
    /// Value multiplied by 100 and followed by a percent sign
    Percent,
    /// Monetary amount, requires a currency code
    Currency,
}

/// How a currency is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    /// Localized symbol, e.g. `US$` or `$`
    #[default]
    Symbol,
    /// Narrow symbol, e.g. `$`
    NarrowSymbol,
    /// ISO 4217 code, e.g. `USD`
    Code,
    /// Display name, e.g. `US dollars`
    Name,
}

/// How negative currency amounts are signed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencySign {
    /// Leading minus sign
    #[default]
    Standard,
    /// Parentheses around the amount
    Accounting,
}

/// When digit grouping applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseGrouping {
    /// The locale's own minimum grouping digits
    Auto,
    /// Group as soon as the integer part has more than one group
    Always,
    /// Group only when at least two digits would precede the first separator
    Min2,
    /// Never group
    Never,
}

/// Notation used for the number body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Positional notation
    #[default]
    Standard,
    /// Mantissa in [1, 10) followed by `E` and an exponent
    Scientific,
    /// Like scientific, with the exponent a multiple of three
    Engineering,
    /// Locale abbreviations such as `K` or `Mio.`
    Compact,
}

/// Length of compact suffixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompactDisplay {
    /// `1.2M`
    #[default]
    Short,
    /// `1.2 million`
    Long,
}

/// When the sign is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignDisplay {
    /// Minus sign on negative numbers, including negative zero
    #[default]
    Auto,
    /// Sign on every number
    Always,
    /// Sign on every number except zero
    ExceptZero,
    /// Minus sign on negative numbers other than zero
    Negative,
    /// No sign
    Never,
}

/// Options forwarded to a number renderer
///
/// Unset digit options fall back to defaults that depend on the style and
/// the notation, so they are kept as `Option`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormatOptions {
    pub style: Style,
    pub currency: Option<String>,
    pub currency_display: CurrencyDisplay,
    pub currency_sign: CurrencySign,
    pub minimum_integer_digits: Option<u32>,
    pub minimum_fraction_digits: Option<u32>,
    pub maximum_fraction_digits: Option<u32>,
    pub minimum_significant_digits: Option<u32>,
    pub maximum_significant_digits: Option<u32>,
    pub use_grouping: Option<UseGrouping>,
    pub notation: Notation,
    pub compact_display: CompactDisplay,
    pub sign_display: SignDisplay,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currency style with the given ISO 4217 code
    pub fn currency(code: impl Into<String>) -> Self {
        Self::default()
            .with_style(Style::Currency)
            .with_currency(code)
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = Some(code.into());
        self
    }

    pub fn with_currency_display(mut self, display: CurrencyDisplay) -> Self {
        self.currency_display = display;
        self
    }

    pub fn with_currency_sign(mut self, sign: CurrencySign) -> Self {
        self.currency_sign = sign;
        self
    }

    pub fn with_minimum_integer_digits(mut self, digits: u32) -> Self {
        self.minimum_integer_digits = Some(digits);
        self
    }

    pub fn with_minimum_fraction_digits(mut self, digits: u32) -> Self {
        self.minimum_fraction_digits = Some(digits);
        self
    }

    pub fn with_maximum_fraction_digits(mut self, digits: u32) -> Self {
        self.maximum_fraction_digits = Some(digits);
        self
    }

    pub fn with_minimum_significant_digits(mut self, digits: u32) -> Self {
        self.minimum_significant_digits = Some(digits);
        self
    }

    pub fn with_maximum_significant_digits(mut self, digits: u32) -> Self {
        self.maximum_significant_digits = Some(digits);
        self
    }

    pub fn with_use_grouping(mut self, grouping: UseGrouping) -> Self {
        self.use_grouping = Some(grouping);
        self
    }

    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    pub fn with_compact_display(mut self, display: CompactDisplay) -> Self {
        self.compact_display = display;
        self
    }

    pub fn with_sign_display(mut self, display: SignDisplay) -> Self {
        self.sign_display = display;
        self
    }
}

/// Sizes of digit groups in the integer part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupingStyle {
    /// Groups of three: 1,234,567
    #[default]
    Standard,
    /// Three, then groups of two: 12,34,567
    Indian,
}

/// Where a currency symbol sits relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyPosition {
    #[default]
    Prefix,
    Suffix,
}

/// A compact-notation abbreviation for one power of ten
#[derive(Debug, Clone, PartialEq)]
pub struct CompactPattern {
    /// Power of ten the value is divided by
    pub magnitude: u32,
    /// Short suffix, e.g. `K`
    pub short: Option<String>,
    /// Long suffix, e.g. ` thousand`
    pub long: Option<String>,
}

impl CompactPattern {
    pub fn suffix(&self, display: CompactDisplay) -> Option<&str> {
        match display {
            CompactDisplay::Short => self.short.as_deref(),
            CompactDisplay::Long => self.long.as_deref(),
        }
    }
}

/// Locale-specific number settings
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    /// Canonical locale identifier, e.g. `de-DE`
    pub id: String,
    pub decimal_point: char,
    pub thousands_separator: char,
    pub grouping: GroupingStyle,
    /// Digits required before the first separator for grouping to apply
    pub min_grouping_digits: u8,
    pub currency_position: CurrencyPosition,
    /// Whether a no-break space separates the currency symbol from the number
    pub currency_spacing: bool,
    /// Whether a no-break space precedes the percent sign
    pub percent_spacing: bool,
    /// Compact abbreviations, sorted by ascending magnitude
    pub compact_patterns: Vec<CompactPattern>,
    /// Currency symbols this locale writes differently, keyed by ISO 4217 code
    pub currency_symbols: BTreeMap<String, String>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        let english = |magnitude, short: &str, long: &str| CompactPattern {
            magnitude,
            short: Some(short.to_string()),
            long: Some(long.to_string()),
        };
        Self {
            id: "und".to_string(),
            decimal_point: DEFAULT_DECIMAL_SEPARATOR,
            thousands_separator: DEFAULT_THOUSANDS_SEPARATOR,
            grouping: GroupingStyle::Standard,
            min_grouping_digits: 1,
            currency_position: CurrencyPosition::Prefix,
            currency_spacing: false,
            percent_spacing: false,
            compact_patterns: vec![
                english(3, "K", " thousand"),
                english(6, "M", " million"),
                english(9, "B", " billion"),
                english(12, "T", " trillion"),
            ],
            currency_symbols: BTreeMap::new(),
        }
    }
}

impl LocaleSettings {
    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    pub fn with_thousands_separator(mut self, separator: char) -> Self {
        self.thousands_separator = separator;
        self
    }

    pub fn with_grouping(mut self, grouping: GroupingStyle) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_min_grouping_digits(mut self, digits: u8) -> Self {
        self.min_grouping_digits = digits;
        self
    }

    pub fn with_currency_position(mut self, position: CurrencyPosition) -> Self {
        self.currency_position = position;
        self
    }

    /// Symbol for `currency` in this locale
    pub fn currency_symbol<'a>(&'a self, currency: &'a CurrencyInfo) -> &'a str {
        self.currency_symbols
            .get(&currency.code)
            .map_or(currency.symbol.as_str(), String::as_str)
    }

    /// The separators of this locale as a pair
    pub fn separators(&self) -> SeparatorPair {
        SeparatorPair::new(self.thousands_separator, self.decimal_point)
    }
}

/// Data about one ISO 4217 currency
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyInfo {
    pub code: String,
    pub symbol: String,
    pub narrow_symbol: String,
    /// Minor-unit digits, e.g. 2 for USD and 0 for JPY
    pub digits: u32,
    /// English plural display name
    pub name: String,
}

impl CurrencyInfo {
    /// Fallback for well-formed codes missing from the currency table
    pub fn unknown(code: &str) -> Self {
        let code = code.to_ascii_uppercase();
        Self {
            symbol: code.clone(),
            narrow_symbol: code.clone(),
            digits: 2,
            name: code.clone(),
            code,
        }
    }
}
