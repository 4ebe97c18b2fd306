//! Locale support for number parsing and formatting
//!
//! This module loads the embedded locale and currency tables and resolves
//! locale identifiers such as `de-DE`, `de_DE.UTF-8` or `de` to the number
//! settings of a known locale.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::types::{
    CompactPattern, CurrencyInfo, CurrencyPosition, GroupingStyle, LocaleSettings,
};

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleError {
    /// The specified locale was not found
    NotFound(String),
    /// An error occurred while parsing locale data
    ParseError(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::NotFound(locale) => write!(f, "Locale not found: {}", locale),
            LocaleError::ParseError(msg) => write!(f, "Error parsing locale data: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}

type Result<T> = std::result::Result<T, LocaleError>;

/// Provides access to the embedded locale and currency tables
struct LocaleManager {
    base: LocaleSettings,
    /// Keyed by normalized (lowercase) identifier
    locale_settings: HashMap<String, LocaleSettings>,
    /// Language subtag to normalized identifier of its default locale
    languages: HashMap<String, String>,
    currencies: HashMap<String, CurrencyInfo>,
}

// Global singleton for the immutable embedded data
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    fn new() -> Self {
        let mut manager = Self {
            base: LocaleSettings::default(),
            locale_settings: HashMap::new(),
            languages: HashMap::new(),
            currencies: HashMap::new(),
        };

        if let Err(e) = manager.load_embedded_data() {
            warn!(error = %e, "failed to load embedded locale data, using root settings");
        }

        manager
    }

    fn load_embedded_data(&mut self) -> Result<()> {
        let locale_settings_toml = include_str!("locale/locale_settings.toml");
        self.parse_locale_settings(locale_settings_toml)?;

        let currencies_toml = include_str!("locale/currencies.toml");
        self.parse_currencies(currencies_toml)?;

        Ok(())
    }

    fn parse_locale_settings(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        // First load base settings if available
        if let Some(base) = table.get("base") {
            let mut base_settings = LocaleSettings::default();
            apply_locale_settings(&mut base_settings, base)?;
            self.base = base_settings;
        }

        for (locale_id, value) in table {
            if locale_id == "base" || locale_id == "languages" {
                continue;
            }

            let mut settings = self.base.clone();
            settings.id = locale_id.clone();
            apply_locale_settings(&mut settings, value)?;

            let key = normalize_locale_id(locale_id).ok_or_else(|| {
                LocaleError::ParseError(format!("Invalid locale identifier: {}", locale_id))
            })?;
            self.locale_settings.insert(key, settings);
        }

        if let Some(languages) = table.get("languages") {
            let languages = languages
                .as_table()
                .ok_or_else(|| LocaleError::ParseError("languages is not a table".to_string()))?;
            for (language, locale_id) in languages {
                let locale_id = locale_id.as_str().ok_or_else(|| {
                    LocaleError::ParseError(format!("Invalid default locale for {}", language))
                })?;
                let key = normalize_locale_id(locale_id)
                    .filter(|key| self.locale_settings.contains_key(key))
                    .ok_or_else(|| LocaleError::NotFound(locale_id.to_string()))?;
                self.languages.insert(language.to_ascii_lowercase(), key);
            }
        }

        Ok(())
    }

    fn parse_currencies(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        for (code, value) in table {
            let entry = value
                .as_table()
                .ok_or_else(|| LocaleError::ParseError(format!("{} is not a table", code)))?;

            let field = |name: &str| {
                entry
                    .get(name)
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
                    .ok_or_else(|| {
                        LocaleError::ParseError(format!("Missing or invalid {} in {}", name, code))
                    })
            };

            let symbol = field("symbol")?;
            let narrow_symbol = field("narrow").unwrap_or_else(|_| symbol.clone());
            let name = field("name")?;
            let digits = entry
                .get("digits")
                .and_then(|v| v.as_integer())
                .and_then(|d| u32::try_from(d).ok())
                .ok_or_else(|| {
                    LocaleError::ParseError(format!("Missing or invalid digits in {}", code))
                })?;

            let code = code.to_ascii_uppercase();
            self.currencies.insert(
                code.clone(),
                CurrencyInfo {
                    code,
                    symbol,
                    narrow_symbol,
                    digits,
                    name,
                },
            );
        }

        Ok(())
    }

    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }

    fn lookup(&self, locale_id: &str) -> Option<&LocaleSettings> {
        let key = normalize_locale_id(locale_id)?;
        if let Some(settings) = self.locale_settings.get(&key) {
            return Some(settings);
        }

        // Fall back to the language's default locale (e.g. `fr-CA` -> `fr-FR`)
        let language = key.split('-').next().unwrap_or_default();
        self.languages
            .get(language)
            .and_then(|default_key| self.locale_settings.get(default_key))
    }
}

/// Overlay the keys present in a TOML locale table onto `settings`
fn apply_locale_settings(settings: &mut LocaleSettings, value: &toml::Value) -> Result<()> {
    let table = value
        .as_table()
        .ok_or_else(|| LocaleError::ParseError("Locale setting is not a table".to_string()))?;

    if let Some(decimal) = single_char(table, "decimal")? {
        settings.decimal_point = decimal;
    }

    if let Some(group) = single_char(table, "group")? {
        settings.thousands_separator = group;
    }

    if let Some(grouping) = table.get("grouping").and_then(|v| v.as_str()) {
        settings.grouping = match grouping {
            "standard" => GroupingStyle::Standard,
            "indian" => GroupingStyle::Indian,
            other => {
                return Err(LocaleError::ParseError(format!(
                    "Unknown grouping style: {}",
                    other
                )));
            }
        };
    }

    if let Some(digits) = table.get("min_grouping_digits").and_then(|v| v.as_integer()) {
        settings.min_grouping_digits = u8::try_from(digits)
            .ok()
            .filter(|d| *d >= 1)
            .ok_or_else(|| {
                LocaleError::ParseError(format!("Invalid min_grouping_digits: {}", digits))
            })?;
    }

    if let Some(position) = table.get("currency_position").and_then(|v| v.as_str()) {
        settings.currency_position = match position {
            "prefix" => CurrencyPosition::Prefix,
            "suffix" => CurrencyPosition::Suffix,
            other => {
                return Err(LocaleError::ParseError(format!(
                    "Unknown currency position: {}",
                    other
                )));
            }
        };
    }

    if let Some(spacing) = table.get("currency_spacing").and_then(|v| v.as_bool()) {
        settings.currency_spacing = spacing;
    }

    if let Some(spacing) = table.get("percent_spacing").and_then(|v| v.as_bool()) {
        settings.percent_spacing = spacing;
    }

    if let Some(compact) = table.get("compact").and_then(|v| v.as_array()) {
        let mut patterns = compact
            .iter()
            .map(parse_compact_pattern)
            .collect::<Result<Vec<_>>>()?;
        patterns.sort_by_key(|p| p.magnitude);
        settings.compact_patterns = patterns;
    }

    if let Some(symbols) = table.get("currency_symbols") {
        let symbols = symbols.as_table().ok_or_else(|| {
            LocaleError::ParseError("currency_symbols is not a table".to_string())
        })?;
        for (code, symbol) in symbols {
            let symbol = symbol.as_str().ok_or_else(|| {
                LocaleError::ParseError(format!("Invalid currency symbol for {}", code))
            })?;
            settings
                .currency_symbols
                .insert(code.to_ascii_uppercase(), symbol.to_string());
        }
    }

    Ok(())
}

fn parse_compact_pattern(value: &toml::Value) -> Result<CompactPattern> {
    let table = value
        .as_table()
        .ok_or_else(|| LocaleError::ParseError("Compact pattern is not a table".to_string()))?;

    let magnitude = table
        .get("magnitude")
        .and_then(|v| v.as_integer())
        .and_then(|m| u32::try_from(m).ok())
        .filter(|m| *m > 0)
        .ok_or_else(|| {
            LocaleError::ParseError("Missing or invalid compact magnitude".to_string())
        })?;

    let text = |key: &str| table.get(key).and_then(|v| v.as_str()).map(str::to_string);

    Ok(CompactPattern {
        magnitude,
        short: text("short"),
        long: text("long"),
    })
}

fn single_char(table: &toml::Table, key: &str) -> Result<Option<char>> {
    let Some(value) = table.get(key).and_then(|v| v.as_str()) else {
        return Ok(None);
    };
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some(c)),
        _ => Err(LocaleError::ParseError(format!(
            "{} must be a single character, got {:?}",
            key, value
        ))),
    }
}

/// Normalize a locale tag to the lowercase `language-region` key used for lookups
///
/// `_` and `-` are equivalent, POSIX encoding and modifier suffixes
/// (`.UTF-8`, `@euro`) and BCP-47 extensions (`-u-nu-latn`, `-x-...`) are
/// dropped. Returns `None` for blank input.
pub fn normalize_locale_id(id: &str) -> Option<String> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut key: String = trimmed
        .chars()
        .map(|ch| match ch {
            '_' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect();

    for marker in [".", "@", "-u-", "-x-"] {
        if let Some(idx) = key.find(marker) {
            key.truncate(idx);
        }
    }

    if key.is_empty() { None } else { Some(key) }
}

/// Get locale settings by identifier (e.g. `en-US`, `de_DE`, `fr`)
///
/// An unknown region falls back to the default locale of its language.
pub fn get_locale_settings(locale_id: &str) -> Option<LocaleSettings> {
    LocaleManager::get().lookup(locale_id).cloned()
}

/// Get locale settings, falling back to the root settings for unknown locales
pub fn resolve_locale_settings(locale_id: &str) -> LocaleSettings {
    let manager = LocaleManager::get();
    match manager.lookup(locale_id) {
        Some(settings) => settings.clone(),
        None => {
            debug!(locale = locale_id, "unknown locale, using root number settings");
            manager.base.clone()
        }
    }
}

/// Whether the identifier resolves to a locale of the embedded table
pub fn is_supported_locale(locale_id: &str) -> bool {
    LocaleManager::get().lookup(locale_id).is_some()
}

/// Get currency data by ISO 4217 code, case-insensitively
pub fn get_currency(code: &str) -> Option<CurrencyInfo> {
    LocaleManager::get()
        .currencies
        .get(&code.to_ascii_uppercase())
        .cloned()
}

/// List all available locale identifiers, sorted
pub fn list_available_locales() -> Vec<String> {
    let mut locales: Vec<String> = LocaleManager::get()
        .locale_settings
        .values()
        .map(|settings| settings.id.clone())
        .collect();
    locales.sort();
    locales
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_loading() {
        let locales = list_available_locales();
        assert!(!locales.is_empty(), "Should have loaded some locales");
        assert!(locales.contains(&"de-DE".to_string()));

        let en_us = get_locale_settings("en-US").expect("en-US should be available");
        assert_eq!(en_us.decimal_point, '.');
        assert_eq!(en_us.thousands_separator, ',');

        let de_de = get_locale_settings("de-DE").expect("de-DE should be available");
        assert_eq!(de_de.decimal_point, ',');
        assert_eq!(de_de.thousands_separator, '.');
        assert_eq!(de_de.currency_position, CurrencyPosition::Suffix);
    }

    #[test]
    fn test_locale_overrides_inherit_base() {
        let en_in = get_locale_settings("en-IN").unwrap();
        assert_eq!(en_in.grouping, GroupingStyle::Indian);
        assert_eq!(en_in.decimal_point, '.');
        assert_eq!(en_in.compact_patterns.len(), 4);

        let es = get_locale_settings("es-ES").unwrap();
        assert_eq!(es.min_grouping_digits, 2);

        let fr = get_locale_settings("fr-FR").unwrap();
        assert_eq!(fr.thousands_separator, '\u{202F}');
    }

    #[test]
    fn test_tag_normalization() {
        assert_eq!(normalize_locale_id("de_DE.UTF-8"), Some("de-de".to_string()));
        assert_eq!(normalize_locale_id("en-US-u-nu-latn"), Some("en-us".to_string()));
        assert_eq!(normalize_locale_id("de_DE@euro"), Some("de-de".to_string()));
        assert_eq!(normalize_locale_id("  "), None);

        assert_eq!(get_locale_settings("DE_de").unwrap().id, "de-DE");
    }

    #[test]
    fn test_language_fallback() {
        assert_eq!(get_locale_settings("fr-CA").unwrap().id, "fr-FR");
        assert_eq!(get_locale_settings("de").unwrap().id, "de-DE");
        assert!(get_locale_settings("xx-YY").is_none());
        assert!(!is_supported_locale("xx"));

        let root = resolve_locale_settings("xx-YY");
        assert_eq!(root.decimal_point, '.');
        assert_eq!(root.thousands_separator, ',');
    }

    #[test]
    fn test_locale_currency_symbols() {
        let ja = get_locale_settings("ja-JP").unwrap();
        let yen = get_currency("JPY").unwrap();
        assert_eq!(ja.currency_symbol(&yen), "\u{FFE5}");

        let en = get_locale_settings("en-US").unwrap();
        assert_eq!(en.currency_symbol(&yen), "¥");

        let mut settings = LocaleSettings::default();
        let value: toml::Value = toml::from_str("currency_symbols = { usd = \"US$\" }").unwrap();
        apply_locale_settings(&mut settings, &value).unwrap();
        assert_eq!(settings.currency_symbols.get("USD").map(String::as_str), Some("US$"));
    }

    #[test]
    fn test_currency_table() {
        let usd = get_currency("usd").unwrap();
        assert_eq!(usd.symbol, "$");
        assert_eq!(usd.digits, 2);
        assert_eq!(get_currency("JPY").unwrap().digits, 0);
        assert_eq!(get_currency("KWD").unwrap().digits, 3);
        assert!(get_currency("XYZ").is_none());
    }

    #[test]
    fn test_invalid_locale_data_is_rejected() {
        let mut settings = LocaleSettings::default();
        let value: toml::Value = toml::from_str("decimal = \",,\"").unwrap();
        assert!(matches!(
            apply_locale_settings(&mut settings, &value),
            Err(LocaleError::ParseError(_))
        ));

        let value: toml::Value = toml::from_str("grouping = \"vedic\"").unwrap();
        assert!(apply_locale_settings(&mut settings, &value).is_err());
    }
}
