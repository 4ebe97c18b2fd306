//! Ambient locale discovery
//!
//! Callers may omit the locale. The locale then comes from a
//! [`LocaleProvider`], by default the operating system's preferred locale.

use tracing::debug;

use crate::locale;

/// Locale assumed when neither the caller nor the environment names one
pub const DEFAULT_LOCALE: &str = "en-US";

/// Source of the locale used when the caller supplies none
pub trait LocaleProvider {
    /// The preferred locale, if known
    fn locale(&self) -> Option<String>;

    /// Preferred locales in order of preference
    fn locales(&self) -> Vec<String> {
        self.locale().into_iter().collect()
    }
}

/// Reads the operating system's locale settings on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleProvider for SystemLocale {
    fn locale(&self) -> Option<String> {
        sys_locale::get_locale().filter(|tag| is_usable_tag(tag))
    }

    fn locales(&self) -> Vec<String> {
        sys_locale::get_locales()
            .filter(|tag| is_usable_tag(tag))
            .collect()
    }
}

/// Always answers with the same locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(String);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }
}

impl LocaleProvider for FixedLocale {
    fn locale(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Pick the locale for a call
///
/// An explicit, non-blank locale wins; then the provider's locale, then its
/// first preferred locale, then [`DEFAULT_LOCALE`].
pub fn effective_locale<P: LocaleProvider + ?Sized>(explicit: Option<&str>, provider: &P) -> String {
    if let Some(locale) = explicit.map(str::trim).filter(|l| !l.is_empty()) {
        return locale.to_string();
    }

    provider
        .locale()
        .or_else(|| provider.locales().into_iter().next())
        .unwrap_or_else(|| {
            debug!(fallback = DEFAULT_LOCALE, "no ambient locale available");
            DEFAULT_LOCALE.to_string()
        })
}

/// Whether an OS locale tag names a real locale
///
/// Tags such as `C` or `POSIX` carry no number conventions and are skipped.
fn is_usable_tag(tag: &str) -> bool {
    let posix = tag.replace('-', "_");
    let known = chrono::Locale::try_from(posix.as_str()).is_ok() || locale::is_supported_locale(tag);
    if !known {
        debug!(tag, "ignoring unrecognized system locale");
    }
    known && !matches!(tag, "C" | "POSIX")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoLocale;

    impl LocaleProvider for NoLocale {
        fn locale(&self) -> Option<String> {
            None
        }
    }

    struct ListOnly(Vec<String>);

    impl LocaleProvider for ListOnly {
        fn locale(&self) -> Option<String> {
            None
        }

        fn locales(&self) -> Vec<String> {
            self.0.clone()
        }
    }

    #[test]
    fn test_explicit_locale_wins() {
        let provider = FixedLocale::new("de-DE");
        assert_eq!(effective_locale(Some("fr-FR"), &provider), "fr-FR");
        assert_eq!(effective_locale(Some("  "), &provider), "de-DE");
        assert_eq!(effective_locale(None, &provider), "de-DE");
    }

    #[test]
    fn test_fallback_chain() {
        assert_eq!(effective_locale(None, &NoLocale), DEFAULT_LOCALE);
        let list = ListOnly(vec!["nl-NL".to_string(), "en-GB".to_string()]);
        assert_eq!(effective_locale(None, &list), "nl-NL");
    }

    #[test]
    fn test_system_locale_does_not_panic() {
        let locale = effective_locale(None, &SystemLocale);
        assert!(!locale.is_empty());
    }

    #[test]
    fn test_usable_tags() {
        assert!(is_usable_tag("de-DE"));
        assert!(is_usable_tag("en-US"));
        assert!(!is_usable_tag("C"));
        assert!(!is_usable_tag("xx-invalid"));
    }
}
