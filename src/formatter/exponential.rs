use super::digits::{DigitString, render_positional};
use super::options::ResolvedDigits;
use crate::types::LocaleSettings;

/// Format a magnitude in scientific or engineering notation
///
/// The mantissa uses the locale decimal separator and is never grouped.
/// Engineering notation keeps the exponent a multiple of three.
/// Returns the body and whether the rounded mantissa is zero.
pub(super) fn format_exponential(
    value: &DigitString,
    engineering: bool,
    digits: &ResolvedDigits,
    settings: &LocaleSettings,
) -> (String, bool) {
    let Some(magnitude) = value.magnitude() else {
        let (zero, min_fraction) = digits.apply(&DigitString::zero());
        let body = render_positional(&zero, digits.min_integer, min_fraction, None, settings);
        return (format!("{body}E0"), true);
    };

    let step = if engineering { 3 } else { 1 };
    let mut exponent = magnitude.div_euclid(step) * step;
    let (mut mantissa, mut min_fraction) = digits.apply(&value.shifted(-exponent));

    // Rounding can carry the mantissa past its range (9.9996 -> 10.000)
    if mantissa.magnitude().is_some_and(|m| m >= step) {
        exponent += step;
        (mantissa, min_fraction) = digits.apply(&value.shifted(-exponent));
    }

    let body = render_positional(&mantissa, digits.min_integer, min_fraction, None, settings);
    (format!("{body}E{exponent}"), mantissa.is_zero())
}
