//! Decimal digit strings
//!
//! Values are rounded on their shortest round-trip decimal digits rather than
//! on the binary value, so `1.005` rounds to `1.01` at two fraction digits.

use crate::types::{GroupingStyle, LocaleSettings};

/// Magnitude of a number as a run of decimal digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DigitString {
    /// Significant digits without leading or trailing zeros; empty for zero
    digits: Vec<u8>,
    /// Position of the decimal point: the value is `0.d1d2... * 10^point`
    point: i32,
}

impl DigitString {
    pub(crate) fn zero() -> Self {
        Self {
            digits: Vec::new(),
            point: 0,
        }
    }

    /// Digits of `|value|`; non-finite values yield zero
    pub(crate) fn from_f64(value: f64) -> Self {
        let value = value.abs();
        if value == 0.0 || !value.is_finite() {
            return Self::zero();
        }

        // `{:e}` prints the shortest representation that round-trips, e.g. `1.2345e3`
        let repr = format!("{:e}", value);
        let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let digits = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();

        let mut result = Self {
            digits,
            point: exponent + 1,
        };
        result.normalize();
        result
    }

    fn normalize(&mut self) {
        let leading = self.digits.iter().take_while(|d| **d == 0).count();
        if leading == self.digits.len() {
            *self = Self::zero();
            return;
        }
        self.digits.drain(..leading);
        self.point -= leading as i32;
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Exponent of the leading digit, `None` for zero
    pub(crate) fn magnitude(&self) -> Option<i32> {
        (!self.is_zero()).then_some(self.point - 1)
    }

    /// Multiply by `10^power`
    pub(crate) fn shifted(&self, power: i32) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        Self {
            digits: self.digits.clone(),
            point: self.point + power,
        }
    }

    /// Number of digits before the decimal point, 0 for values below one
    pub(crate) fn integer_len(&self) -> usize {
        self.point.max(0) as usize
    }

    pub(crate) fn round_to_fraction(&self, fraction_digits: u32) -> Self {
        self.round_keeping(self.point.saturating_add(fraction_digits as i32))
    }

    pub(crate) fn round_to_significant(&self, significant_digits: u32) -> Self {
        self.round_keeping(significant_digits as i32)
    }

    /// Keep the first `keep` digits, rounding half away from zero
    fn round_keeping(&self, keep: i32) -> Self {
        if self.is_zero() || keep >= self.digits.len() as i32 {
            return self.clone();
        }
        if keep < 0 {
            return Self::zero();
        }

        let keep = keep as usize;
        let round_up = self.digits[keep] >= 5;
        let mut digits = self.digits[..keep].to_vec();
        let mut point = self.point;

        if round_up {
            let mut carry = true;
            for digit in digits.iter_mut().rev() {
                *digit += 1;
                if *digit == 10 {
                    *digit = 0;
                } else {
                    carry = false;
                    break;
                }
            }
            if carry {
                // Carry out of the leading digit: 9.99 -> 10.0
                digits.insert(0, 1);
                point += 1;
            }
        }

        let mut result = Self { digits, point };
        result.normalize();
        result
    }

    /// Fraction digits needed to show at least `significant_digits` digits
    pub(crate) fn fraction_len_for_significant(&self, significant_digits: u32) -> u32 {
        let integer = if self.is_zero() { 1 } else { self.point };
        (significant_digits as i32 - integer).max(0) as u32
    }

    pub(crate) fn integer_digits(&self) -> String {
        (0..self.integer_len())
            .map(|i| char::from(b'0' + self.digits.get(i).copied().unwrap_or(0)))
            .collect()
    }

    pub(crate) fn fraction_digits(&self) -> String {
        let leading_zeros = (-self.point).max(0) as usize;
        let mut fraction = "0".repeat(leading_zeros);
        fraction.extend(
            self.digits
                .iter()
                .skip(self.integer_len())
                .map(|d| char::from(b'0' + d)),
        );
        fraction
    }
}

/// Render digits positionally with locale separators
///
/// # Arguments
/// * `value` - Already rounded digits
/// * `min_integer` - Zero padding on the left of the integer part
/// * `min_fraction` - Zero padding on the right of the fraction part
/// * `grouping` - Minimum grouping digits, `None` to disable grouping
/// * `settings` - Locale symbols
pub(crate) fn render_positional(
    value: &DigitString,
    min_integer: u32,
    min_fraction: u32,
    grouping: Option<u8>,
    settings: &LocaleSettings,
) -> String {
    let mut integer = value.integer_digits();
    let width = min_integer.max(1) as usize;
    if integer.len() < width {
        integer.insert_str(0, &"0".repeat(width - integer.len()));
    }

    let mut fraction = value.fraction_digits();
    while fraction.len() < min_fraction as usize {
        fraction.push('0');
    }

    let mut result = match grouping {
        Some(min_grouping_digits) => group_integer(
            &integer,
            settings.thousands_separator,
            settings.grouping,
            min_grouping_digits,
        ),
        None => integer,
    };

    if !fraction.is_empty() {
        result.push(settings.decimal_point);
        result.push_str(&fraction);
    }
    result
}

/// Insert group separators into a run of ASCII integer digits
pub(crate) fn group_integer(
    integer: &str,
    separator: char,
    style: GroupingStyle,
    min_grouping_digits: u8,
) -> String {
    let len = integer.len();
    if len < 3 + min_grouping_digits as usize {
        return integer.to_string();
    }

    let secondary = match style {
        GroupingStyle::Standard => 3,
        GroupingStyle::Indian => 2,
    };

    let mut grouped: Vec<char> = Vec::with_capacity(len + len / 2);
    for (count, digit) in integer.chars().rev().enumerate() {
        if count == 3 || (count > 3 && (count - 3) % secondary == 0) {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped.reverse();
    grouped.into_iter().collect()
}
