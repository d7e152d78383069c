//! Locale-aware decimal formatting
//!
//! Values are parsed as exact decimals from their text, so precision is
//! never lost on the way through `f64`.

use serde::{Deserialize, Serialize};

/// Integer parts longer than this are not formatted
const MAX_INTEGER_DIGITS: usize = 4096;

/// Separators and precision used when rendering decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    /// Separator between digit groups in the integer part
    pub grouping_separator: char,
    /// Separator between integer and fraction
    pub decimal_separator: char,
    /// Digits per group (0 disables grouping)
    pub grouping_size: usize,
    /// Maximum digits after the decimal separator
    pub max_fraction_digits: usize,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
            grouping_size: 3,
            max_fraction_digits: 3,
        }
    }
}

impl NumberLocale {
    /// Locale with the given separators and default grouping/precision
    #[must_use]
    pub fn new(grouping_separator: char, decimal_separator: char) -> Self {
        Self {
            grouping_separator,
            decimal_separator,
            ..Self::default()
        }
    }

    /// Set digits per group
    #[must_use]
    pub fn with_grouping_size(mut self, size: usize) -> Self {
        self.grouping_size = size;
        self
    }

    /// Set maximum fraction digits
    #[must_use]
    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }
}

/// A parsed decimal: `(-1)^negative * digits * 10^-scale`
#[derive(Debug, Clone, PartialEq, Eq)]
struct Decimal {
    negative: bool,
    digits: Vec<u8>,
    scale: i64,
}

impl Decimal {
    /// Strict parse of `[+-]? d* (. d*)? ([eE] [+-]? d+)?` with at least
    /// one mantissa digit
    fn parse(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        let mut pos = 0;

        let negative = match bytes.first() {
            Some(b'-') => {
                pos += 1;
                true
            }
            Some(b'+') => {
                pos += 1;
                false
            }
            _ => false,
        };

        let mut digits = Vec::new();
        let mut scale: i64 = 0;
        let mut seen_point = false;

        while let Some(&b) = bytes.get(pos) {
            match b {
                b'0'..=b'9' => {
                    digits.push(b - b'0');
                    if seen_point {
                        scale += 1;
                    }
                }
                b'.' if !seen_point => seen_point = true,
                _ => break,
            }
            pos += 1;
        }

        if digits.is_empty() {
            return None;
        }

        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            let exponent: i64 = text.get(pos + 1..)?.parse().ok()?;
            scale = scale.checked_sub(exponent)?;
            pos = bytes.len();
        }

        if pos != bytes.len() {
            return None;
        }

        Some(Self {
            negative,
            digits,
            scale,
        })
    }

    fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| *d == 0)
    }

    /// Whether every digit sits more than one place below the last kept
    /// fraction digit, so the value rounds to zero
    fn below_precision(&self, max_fraction_digits: usize) -> bool {
        let limit = self
            .digits
            .len()
            .saturating_add(max_fraction_digits)
            .saturating_add(1);
        usize::try_from(self.scale).is_ok_and(|scale| scale > limit)
    }

    /// Split into integer and fraction digit strings
    fn split(&self) -> Option<(Vec<u8>, Vec<u8>)> {
        if self.scale <= 0 {
            let zeros = usize::try_from(-self.scale).ok()?;
            if self.digits.len().saturating_add(zeros) > MAX_INTEGER_DIGITS {
                return None;
            }
            let mut int = self.digits.clone();
            int.resize(int.len() + zeros, 0);
            return Some((int, Vec::new()));
        }

        let scale = usize::try_from(self.scale).ok()?;
        if scale > self.digits.len() {
            let mut frac = vec![0; scale - self.digits.len()];
            frac.extend_from_slice(&self.digits);
            Some((Vec::new(), frac))
        } else {
            let split_at = self.digits.len() - scale;
            Some((
                self.digits[..split_at].to_vec(),
                self.digits[split_at..].to_vec(),
            ))
        }
    }
}

/// Format decimal text using the locale's separators
///
/// Returns `None` if `text` is not a plain decimal number. The fraction
/// is rounded half-even to `max_fraction_digits` and trailing zeros are
/// dropped. A negative value that rounds to zero keeps its sign.
///
/// # Example
/// ```
/// use sqltab::table::{format_decimal, NumberLocale};
///
/// let locale = NumberLocale::default();
/// assert_eq!(format_decimal("1234567.5", &locale).as_deref(), Some("1,234,567.5"));
/// assert_eq!(format_decimal("abc", &locale), None);
/// ```
pub fn format_decimal(text: &str, locale: &NumberLocale) -> Option<String> {
    let decimal = Decimal::parse(text)?;
    let negative = decimal.negative && !decimal.is_zero();
    if decimal.below_precision(locale.max_fraction_digits) {
        return Some(if negative { "-0" } else { "0" }.to_string());
    }
    let (mut int, mut frac) = decimal.split()?;

    if frac.len() > locale.max_fraction_digits {
        let round_up = rounds_up(&int, &frac, locale.max_fraction_digits);
        frac.truncate(locale.max_fraction_digits);
        if round_up {
            increment(&mut int, &mut frac);
        }
    }

    while frac.last() == Some(&0) {
        frac.pop();
    }
    let mut int: Vec<u8> = int.into_iter().skip_while(|d| *d == 0).collect();
    if int.is_empty() {
        int.push(0);
    }

    let mut out = String::with_capacity(int.len() * 2 + frac.len() + 2);
    if negative {
        out.push('-');
    }
    push_grouped(&mut out, &int, locale);
    if !frac.is_empty() {
        out.push(locale.decimal_separator);
        out.extend(frac.iter().map(|d| char::from(b'0' + d)));
    }
    Some(out)
}

/// Half-even decision for truncating `frac` to `keep` digits
fn rounds_up(int: &[u8], frac: &[u8], keep: usize) -> bool {
    let first = frac[keep];
    match first.cmp(&5) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => {
            if frac[keep + 1..].iter().any(|d| *d != 0) {
                return true;
            }
            let last_kept = if keep > 0 {
                frac[keep - 1]
            } else {
                int.last().copied().unwrap_or(0)
            };
            last_kept % 2 == 1
        }
    }
}

/// Add one unit in the last place of `int.frac`
fn increment(int: &mut Vec<u8>, frac: &mut [u8]) {
    for d in frac.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    for d in int.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    int.insert(0, 1);
}

fn push_grouped(out: &mut String, int: &[u8], locale: &NumberLocale) {
    let size = locale.grouping_size;
    for (i, d) in int.iter().enumerate() {
        if size > 0 && i > 0 && (int.len() - i) % size == 0 {
            out.push(locale.grouping_separator);
        }
        out.push(char::from(b'0' + d));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(text: &str) -> Option<String> {
        format_decimal(text, &NumberLocale::default())
    }

    #[test]
    fn f_groups_thousands() {
        assert_eq!(fmt("1234567.5").as_deref(), Some("1,234,567.5"));
        assert_eq!(fmt("1000").as_deref(), Some("1,000"));
        assert_eq!(fmt("999").as_deref(), Some("999"));
        assert_eq!(fmt("42").as_deref(), Some("42"));
    }

    #[test]
    fn f_non_numbers_are_misses() {
        assert_eq!(fmt("abc"), None);
        assert_eq!(fmt(""), None);
        assert_eq!(fmt("null"), None);
        assert_eq!(fmt("1.2.3"), None);
        assert_eq!(fmt(" 12"), None);
        assert_eq!(fmt("12 "), None);
        assert_eq!(fmt("NaN"), None);
        assert_eq!(fmt("Infinity"), None);
        assert_eq!(fmt("-"), None);
        assert_eq!(fmt("."), None);
        assert_eq!(fmt("1e"), None);
        assert_eq!(fmt("1e+"), None);
        assert_eq!(fmt("1,000"), None);
    }

    #[test]
    fn f_signs() {
        assert_eq!(fmt("-1234").as_deref(), Some("-1,234"));
        assert_eq!(fmt("+1234").as_deref(), Some("1,234"));
        assert_eq!(fmt("-0").as_deref(), Some("0"));
    }

    #[test]
    fn f_negative_rounding_to_zero_keeps_sign() {
        assert_eq!(fmt("-0.0001").as_deref(), Some("-0"));
    }

    #[test]
    fn f_leading_and_trailing_points() {
        assert_eq!(fmt(".5").as_deref(), Some("0.5"));
        assert_eq!(fmt("5.").as_deref(), Some("5"));
        assert_eq!(fmt("007").as_deref(), Some("7"));
    }

    #[test]
    fn f_trailing_zeros_dropped() {
        assert_eq!(fmt("1.500").as_deref(), Some("1.5"));
        assert_eq!(fmt("2.000").as_deref(), Some("2"));
    }

    #[test]
    fn f_half_even_rounding() {
        assert_eq!(fmt("1.2345").as_deref(), Some("1.234"));
        assert_eq!(fmt("1.2355").as_deref(), Some("1.236"));
        assert_eq!(fmt("1.23451").as_deref(), Some("1.235"));
        assert_eq!(fmt("1.2346").as_deref(), Some("1.235"));
        assert_eq!(fmt("1.2344").as_deref(), Some("1.234"));
    }

    #[test]
    fn f_rounding_carries_into_integer() {
        assert_eq!(fmt("999.9999").as_deref(), Some("1,000"));
        assert_eq!(fmt("0.9996").as_deref(), Some("1"));
    }

    #[test]
    fn f_exponents() {
        assert_eq!(fmt("1E3").as_deref(), Some("1,000"));
        assert_eq!(fmt("1.5e-2").as_deref(), Some("0.015"));
        assert_eq!(fmt("12e+2").as_deref(), Some("1,200"));
        assert_eq!(fmt("1e-5").as_deref(), Some("0"));
    }

    #[test]
    fn f_huge_exponent_is_a_miss() {
        assert_eq!(fmt("1e100000"), None);
        assert_eq!(fmt("1e99999999999999999999"), None);
    }

    #[test]
    fn f_tiny_exponent_rounds_to_zero() {
        assert_eq!(fmt("1e-9000000000000000000").as_deref(), Some("0"));
        assert_eq!(fmt("-1e-9000000000000000000").as_deref(), Some("-0"));
        assert_eq!(fmt("1e-200000000").as_deref(), Some("0"));
        assert_eq!(fmt("0e-9000000000000000000").as_deref(), Some("0"));
    }

    #[test]
    fn f_precision_boundary() {
        // 5 units one place below the last kept digit: half-even to zero
        assert_eq!(fmt("5e-4").as_deref(), Some("0"));
        assert_eq!(fmt("6e-4").as_deref(), Some("0.001"));
        assert_eq!(fmt("15e-5").as_deref(), Some("0"));
        assert_eq!(fmt("-9e-5").as_deref(), Some("-0"));
    }

    #[test]
    fn f_arbitrary_precision() {
        assert_eq!(
            fmt("123456789012345678901234567890").as_deref(),
            Some("123,456,789,012,345,678,901,234,567,890")
        );
    }

    #[test]
    fn f_custom_locale() {
        let locale = NumberLocale::new('.', ',');
        assert_eq!(
            format_decimal("1234567.5", &locale).as_deref(),
            Some("1.234.567,5")
        );

        let plain = NumberLocale::default()
            .with_grouping_size(0)
            .with_max_fraction_digits(1);
        assert_eq!(format_decimal("1234.56", &plain).as_deref(), Some("1234.6"));
    }

    #[test]
    fn f_zero_fraction_digits() {
        let locale = NumberLocale::default().with_max_fraction_digits(0);
        assert_eq!(format_decimal("2.5", &locale).as_deref(), Some("2"));
        assert_eq!(format_decimal("3.5", &locale).as_deref(), Some("4"));
    }

    #[test]
    fn f_locale_serde_round_trip() {
        let locale = NumberLocale::new(' ', ',');
        let json = serde_json::to_string(&locale).unwrap();
        let back: NumberLocale = serde_json::from_str(&json).unwrap();
        assert_eq!(locale, back);
    }
}
