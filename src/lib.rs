//! Locale-aware decimal parsing and formatting
//!
//! [`parse_localized_decimal`] reads numbers typed with a locale's decimal
//! and thousands separators; [`format_decimal_to_locale`] renders numbers for
//! display in a locale.
//!
//! ```
//! use locale_decimal::{format_decimal_to_locale, parse_localized_decimal};
//!
//! let text = format_decimal_to_locale(1234.56, Some("de-DE"), None).unwrap();
//! assert_eq!(text, "1.234,56");
//! assert_eq!(parse_localized_decimal(&text, Some("de-DE")), Some(1234.56));
//! ```

pub mod ambient;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod types;

pub use ambient::{DEFAULT_LOCALE, FixedLocale, LocaleProvider, SystemLocale};
pub use formatter::{
    DecimalFormatter, FormatError, LocaleFormatter, NumberRenderer, format_decimal_to_locale,
};
pub use locale::{
    LocaleError, get_locale_settings, is_supported_locale, list_available_locales,
    resolve_locale_settings,
};
pub use parser::{
    DecimalParser, SampleSeparatorResolver, SeparatorResolver, TableSeparatorResolver,
    parse_localized_decimal,
};
pub use types::*;

#[cfg(test)]
mod tests;
