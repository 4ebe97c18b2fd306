//! Leading numeric prefix of a string
//!
//! Grammar, after optional leading whitespace:
//! `[+-] (digits ['.' digits*] | '.' digits) [(e|E) [+-] digits]`.
//! Everything after the longest match is ignored.

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt, preceded};
use winnow::token::{one_of, take_while};
use winnow::{ModalResult, Parser};

/// Space separators (Zs), line terminators, tab, vertical tab, form feed and BOM
///
/// U+0085 is Unicode white space but does not count here.
fn is_leading_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' ' | '\u{00A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

fn skip_whitespace(input: &mut &str) -> ModalResult<()> {
    take_while(0.., is_leading_space)
        .void()
        .parse_next(input)
}

fn sign(input: &mut &str) -> ModalResult<char> {
    one_of(['+', '-']).parse_next(input)
}

fn mantissa(input: &mut &str) -> ModalResult<()> {
    alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())).parse_next(input)
}

fn exponent(input: &mut &str) -> ModalResult<()> {
    (one_of(['e', 'E']), opt(sign), digit1)
        .void()
        .parse_next(input)
}

/// Recognize the numeric prefix and return its text without the leading whitespace
pub(super) fn decimal_literal<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded(skip_whitespace, (opt(sign), mantissa, opt(exponent)).take()).parse_next(input)
}

/// Convert the leading numeric prefix of `input` to a finite number
///
/// Returns `None` when there is no prefix or when it overflows to infinity.
pub(super) fn parse_float_prefix(input: &str) -> Option<f64> {
    let mut rest = input;
    let literal = decimal_literal.parse_next(&mut rest).ok()?;
    literal.parse::<f64>().ok().filter(|value| value.is_finite())
}
