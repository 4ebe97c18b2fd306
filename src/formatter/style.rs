use crate::types::{
    CurrencyDisplay, CurrencyInfo, CurrencyPosition, CurrencySign, FormatOptions, LocaleSettings,
    SignDisplay, Style,
};

const NO_BREAK_SPACE: &str = "\u{00A0}";

/// Sign shown in front of a formatted number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SignMark {
    Unsigned,
    Minus,
    Plus,
}

impl SignMark {
    fn as_str(self) -> &'static str {
        match self {
            SignMark::Unsigned => "",
            SignMark::Minus => "-",
            SignMark::Plus => "+",
        }
    }
}

/// Decide the sign from the display mode
///
/// `negative` is the sign of the input (negative zero counts as negative),
/// `zero` tells whether the value rounded to zero.
pub(super) fn sign_mark(display: SignDisplay, negative: bool, zero: bool) -> SignMark {
    match display {
        SignDisplay::Auto if negative => SignMark::Minus,
        SignDisplay::Auto => SignMark::Unsigned,
        SignDisplay::Always if negative => SignMark::Minus,
        SignDisplay::Always => SignMark::Plus,
        SignDisplay::ExceptZero if zero => SignMark::Unsigned,
        SignDisplay::ExceptZero if negative => SignMark::Minus,
        SignDisplay::ExceptZero => SignMark::Plus,
        SignDisplay::Negative if negative && !zero => SignMark::Minus,
        SignDisplay::Negative => SignMark::Unsigned,
        SignDisplay::Never => SignMark::Unsigned,
    }
}

/// Wrap a number body with its sign and the percent or currency affixes
pub(super) fn apply_style(
    body: &str,
    sign: SignMark,
    options: &FormatOptions,
    currency: Option<&CurrencyInfo>,
    settings: &LocaleSettings,
) -> String {
    let sign_str = sign.as_str();
    match (options.style, currency) {
        (Style::Percent, _) => {
            let gap = if settings.percent_spacing { NO_BREAK_SPACE } else { "" };
            format!("{sign_str}{body}{gap}%")
        }
        (Style::Currency, Some(currency)) => {
            apply_currency(body, sign, options, currency, settings)
        }
        _ => format!("{sign_str}{body}"),
    }
}

fn apply_currency(
    body: &str,
    sign: SignMark,
    options: &FormatOptions,
    currency: &CurrencyInfo,
    settings: &LocaleSettings,
) -> String {
    let sign_str = sign.as_str();
    let symbol = match options.currency_display {
        CurrencyDisplay::Name => return format!("{sign_str}{body} {}", currency.name),
        CurrencyDisplay::Symbol => settings.currency_symbol(currency),
        CurrencyDisplay::NarrowSymbol => settings
            .currency_symbols
            .get(&currency.code)
            .unwrap_or(&currency.narrow_symbol)
            .as_str(),
        CurrencyDisplay::Code => currency.code.as_str(),
    };

    match settings.currency_position {
        CurrencyPosition::Prefix => {
            // Letters next to digits always get a space: `CHF 12.00`, `USD 12.00`
            let spaced = settings.currency_spacing
                || symbol.chars().last().is_some_and(char::is_alphabetic);
            let gap = if spaced { NO_BREAK_SPACE } else { "" };
            if options.currency_sign == CurrencySign::Accounting && sign == SignMark::Minus {
                format!("({symbol}{gap}{body})")
            } else {
                format!("{sign_str}{symbol}{gap}{body}")
            }
        }
        CurrencyPosition::Suffix => {
            let spaced = settings.currency_spacing
                || symbol.chars().next().is_some_and(char::is_alphabetic);
            let gap = if spaced { NO_BREAK_SPACE } else { "" };
            format!("{sign_str}{body}{gap}{symbol}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> CurrencyInfo {
        CurrencyInfo {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            narrow_symbol: "$".to_string(),
            digits: 2,
            name: "US dollars".to_string(),
        }
    }

    #[test]
    fn test_sign_modes() {
        use SignDisplay::*;
        assert_eq!(sign_mark(Auto, true, true), SignMark::Minus);
        assert_eq!(sign_mark(Auto, false, false), SignMark::Unsigned);
        assert_eq!(sign_mark(Always, false, true), SignMark::Plus);
        assert_eq!(sign_mark(ExceptZero, false, true), SignMark::Unsigned);
        assert_eq!(sign_mark(ExceptZero, true, false), SignMark::Minus);
        assert_eq!(sign_mark(Negative, true, true), SignMark::Unsigned);
        assert_eq!(sign_mark(Negative, true, false), SignMark::Minus);
        assert_eq!(sign_mark(Never, true, false), SignMark::Unsigned);
    }

    #[test]
    fn test_currency_prefix_and_suffix() {
        let options = FormatOptions::currency("USD");
        let en = LocaleSettings::default();
        assert_eq!(
            apply_style("1,234.56", SignMark::Minus, &options, Some(&usd()), &en),
            "-$1,234.56"
        );

        let de = LocaleSettings {
            currency_spacing: true,
            ..LocaleSettings::default().with_currency_position(CurrencyPosition::Suffix)
        };
        assert_eq!(
            apply_style("1.234,56", SignMark::Unsigned, &options, Some(&usd()), &de),
            "1.234,56\u{00A0}$"
        );
    }

    #[test]
    fn test_currency_display_modes() {
        let en = LocaleSettings::default();
        let code = FormatOptions::currency("USD").with_currency_display(CurrencyDisplay::Code);
        assert_eq!(
            apply_style("12.00", SignMark::Unsigned, &code, Some(&usd()), &en),
            "USD\u{00A0}12.00"
        );

        let name = FormatOptions::currency("USD").with_currency_display(CurrencyDisplay::Name);
        assert_eq!(
            apply_style("12.00", SignMark::Unsigned, &name, Some(&usd()), &en),
            "12.00 US dollars"
        );

        let accounting = FormatOptions::currency("USD").with_currency_sign(CurrencySign::Accounting);
        assert_eq!(
            apply_style("5.00", SignMark::Minus, &accounting, Some(&usd()), &en),
            "($5.00)"
        );
    }

    #[test]
    fn test_locale_symbol_override() {
        let yen = CurrencyInfo {
            code: "JPY".to_string(),
            symbol: "¥".to_string(),
            narrow_symbol: "¥".to_string(),
            digits: 0,
            name: "Japanese yen".to_string(),
        };
        let mut ja = LocaleSettings::default();
        ja.currency_symbols
            .insert("JPY".to_string(), "\u{FFE5}".to_string());

        let options = FormatOptions::currency("JPY");
        assert_eq!(
            apply_style("1,235", SignMark::Unsigned, &options, Some(&yen), &ja),
            "\u{FFE5}1,235"
        );
        let code = options.with_currency_display(CurrencyDisplay::Code);
        assert_eq!(
            apply_style("1,235", SignMark::Unsigned, &code, Some(&yen), &ja),
            "JPY\u{00A0}1,235"
        );
    }

    #[test]
    fn test_percent_spacing() {
        let options = FormatOptions::new().with_style(Style::Percent);
        let en = LocaleSettings::default();
        assert_eq!(apply_style("12", SignMark::Unsigned, &options, None, &en), "12%");

        let spaced = LocaleSettings {
            percent_spacing: true,
            ..LocaleSettings::default()
        };
        assert_eq!(
            apply_style("12", SignMark::Minus, &options, None, &spaced),
            "-12\u{00A0}%"
        );
    }
}
