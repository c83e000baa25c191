//! Result formatting
//!
//! Numeric results are fitted to the screen width while keeping as much
//! precision as possible. The primitives reproduce the browser's
//! `Number.prototype` renderings (`toString`, `toExponential`,
//! `toPrecision`) so results match what the widget has always shown.

use tracing::trace;

use crate::config::DisplayConfig;

/// Results below this magnitude (and above zero) go straight to scientific
pub const SMALL_MAGNITUDE: f64 = 1e-5;
/// Upper bound of the fixed-point search band `[SMALL_MAGNITUDE, 0.1)`
pub const FIXED_POINT_CEILING: f64 = 0.1;
/// Fractional digits in scientific renderings
pub const SCIENTIFIC_DIGITS: usize = 2;
/// Significant digits kept in a scientific mantissa
pub const MANTISSA_PRECISION: usize = 3;

/// Formats a numeric result for the display
#[must_use]
pub fn format_result(value: f64, config: &DisplayConfig) -> String {
    if !value.is_finite() {
        return to_js_string(value);
    }
    // -0 renders as 0
    let value = if value == 0.0 { 0.0 } else { value };
    let magnitude = value.abs();
    let width = config.width;

    let rendered = if magnitude > config.overflow_threshold() {
        to_exponential(value, SCIENTIFIC_DIGITS)
    } else if magnitude > 0.0 && magnitude < SMALL_MAGNITUDE {
        to_exponential(value, SCIENTIFIC_DIGITS)
    } else if (SMALL_MAGNITUDE..FIXED_POINT_CEILING).contains(&magnitude) {
        fit_fixed_point(value, config)
    } else {
        let plain = to_js_string(value);
        if plain.len() > width {
            to_precision(value, config.max_precision())
        } else {
            plain
        }
    };

    let formatted = tidy(&rendered);
    trace!(value, rendered = %rendered, formatted = %formatted, "formatted result");
    formatted
}

/// Tries fixed-point renderings from `max_precision` significant digits
/// down to one, keeping the first that fits the width.
fn fit_fixed_point(value: f64, config: &DisplayConfig) -> String {
    (1..=config.max_precision())
        .rev()
        .map(|precision| to_precision(value, precision))
        .find(|candidate| !candidate.contains('e') && candidate.len() <= config.width)
        .unwrap_or_else(|| to_exponential(value, SCIENTIFIC_DIGITS))
}

/// Final clean-up of a rendering.
///
/// Scientific renderings get a three-significant-digit mantissa; fixed
/// renderings lose trailing fractional zeros and a bare trailing point.
fn tidy(rendered: &str) -> String {
    if let Some((mantissa, exponent)) = rendered.split_once('e') {
        let (Ok(mantissa), Ok(mut exponent)) = (mantissa.parse::<f64>(), exponent.parse::<i32>())
        else {
            return rendered.to_string();
        };
        let mut digits = to_precision(mantissa, MANTISSA_PRECISION);
        if digits.trim_start_matches('-').starts_with("10") {
            // 9.996 rounded up a decade
            digits = to_precision(mantissa / 10.0, MANTISSA_PRECISION);
            exponent += 1;
        }
        return format!("{digits}e{}", signed_exponent(exponent));
    }
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered.to_string()
    }
}

fn signed_exponent(exponent: i32) -> String {
    if exponent < 0 {
        format!("-{}", exponent.unsigned_abs())
    } else {
        format!("+{exponent}")
    }
}

/// Splits Rust's `{:e}` output into mantissa text and exponent
fn split_exponent(formatted: &str) -> (&str, i32) {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (formatted, 0),
    }
}

/// Browser `Number.prototype.toString()` for base 10
#[must_use]
pub fn to_js_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        format!("{value}")
    } else {
        let shortest = format!("{value:e}");
        let (mantissa, exponent) = split_exponent(&shortest);
        format!("{mantissa}e{}", signed_exponent(exponent))
    }
}

/// Browser `Number.prototype.toExponential(digits)`
#[must_use]
pub fn to_exponential(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return to_js_string(value);
    }
    let (significand, exponent) = round_significant(value.abs(), digits + 1);
    let mut out = String::with_capacity(digits + 8);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&significand[..1]);
    if digits > 0 {
        out.push('.');
        out.push_str(&significand[1..]);
    }
    out.push('e');
    out.push_str(&signed_exponent(exponent));
    out
}

/// Browser `Number.prototype.toPrecision(precision)`, `precision >= 1`
#[must_use]
pub fn to_precision(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return to_js_string(value);
    }
    let precision = precision.max(1);
    if value == 0.0 {
        return if precision == 1 {
            "0".to_string()
        } else {
            format!("0.{}", "0".repeat(precision - 1))
        };
    }

    let precision_exp = i32::try_from(precision).unwrap_or(i32::MAX);
    let (significand, exponent) = round_significant(value.abs(), precision);
    if exponent < -6 || exponent >= precision_exp {
        return to_exponential(value, precision - 1);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match usize::try_from(exponent) {
        Ok(int_len) => {
            let (int_part, fraction) = significand.split_at(int_len + 1);
            if fraction.is_empty() {
                format!("{sign}{int_part}")
            } else {
                format!("{sign}{int_part}.{fraction}")
            }
        }
        Err(_) => {
            let zeros = usize::try_from(-exponent - 1).unwrap_or(0);
            format!("{sign}0.{}{significand}", "0".repeat(zeros))
        }
    }
}

/// Digits requested from the formatter; enough to hold the exact decimal
/// expansion of any `f64`
const EXACT_DIGITS: usize = 800;

/// Rounds a finite, non-negative value to `significant` digits.
///
/// Returns the digit string and the decimal exponent of its first digit.
/// Ties round up, which is what the browser's `toPrecision` and
/// `toExponential` do; Rust's own formatting rounds them to even.
fn round_significant(magnitude: f64, significant: usize) -> (String, i32) {
    let exact = format!("{:.*e}", EXACT_DIGITS, magnitude);
    let (mantissa, mut exponent) = split_exponent(&exact);
    let expansion: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    let mut digits: Vec<u8> = expansion.iter().copied().take(significant).collect();
    digits.resize(significant, b'0');
    let round_up = expansion.get(significant).is_some_and(|&next| next >= b'5');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            // 9.99 became 10.0
            digits.insert(0, b'1');
            digits.truncate(significant);
            exponent += 1;
        }
    }

    let digits = digits.into_iter().map(char::from).collect();
    (digits, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        format_result(value, &DisplayConfig::default())
    }

    // ===== to_js_string tests =====

    #[test]
    fn test_js_string_integers() {
        assert_eq!(to_js_string(5.0), "5");
        assert_eq!(to_js_string(-42.0), "-42");
        assert_eq!(to_js_string(12_345_678.0), "12345678");
    }

    #[test]
    fn test_js_string_fractions() {
        assert_eq!(to_js_string(0.5), "0.5");
        assert_eq!(to_js_string(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(to_js_string(0.000_001), "0.000001");
    }

    #[test]
    fn test_js_string_exponential_ranges() {
        assert_eq!(to_js_string(1.5e-7), "1.5e-7");
        assert_eq!(to_js_string(1e21), "1e+21");
    }

    #[test]
    fn test_js_string_special_values() {
        assert_eq!(to_js_string(f64::NAN), "NaN");
        assert_eq!(to_js_string(f64::INFINITY), "Infinity");
        assert_eq!(to_js_string(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(to_js_string(-0.0), "0");
    }

    // ===== to_exponential tests =====

    #[test]
    fn test_to_exponential() {
        assert_eq!(to_exponential(123_456_789.0, 2), "1.23e+8");
        assert_eq!(to_exponential(100_000_000.0, 2), "1.00e+8");
        assert_eq!(to_exponential(0.000_001_234, 2), "1.23e-6");
        assert_eq!(to_exponential(-5e-9, 2), "-5.00e-9");
        assert_eq!(to_exponential(0.0, 2), "0.00e+0");
    }

    // ===== to_precision tests =====

    #[test]
    fn test_to_precision_fixed() {
        assert_eq!(to_precision(1.0 / 3.0, 7), "0.3333333");
        assert_eq!(to_precision(0.05, 5), "0.050000");
        assert_eq!(to_precision(123.456, 4), "123.5");
        assert_eq!(to_precision(0.000_012_3, 1), "0.00001");
    }

    #[test]
    fn test_to_precision_switches_to_exponential() {
        assert_eq!(to_precision(123_456_789.0, 7), "1.234568e+8");
        assert_eq!(to_precision(12_345_678.9, 7), "1.234568e+7");
        assert_eq!(to_precision(1.5e-7, 3), "1.50e-7");
    }

    #[test]
    fn test_to_precision_zero() {
        assert_eq!(to_precision(0.0, 1), "0");
        assert_eq!(to_precision(0.0, 3), "0.00");
    }

    // ===== Tie rounding tests =====

    #[test]
    fn test_exact_ties_round_up() {
        assert_eq!(to_exponential(1_125_000_000.0, 2), "1.13e+9");
        assert_eq!(to_precision(1_234_568.5, 7), "1234569");
        assert_eq!(to_precision(2.5, 1), "3");
        assert_eq!(to_precision(0.125, 2), "0.13");
    }

    #[test]
    fn test_negative_ties_round_away_from_zero() {
        assert_eq!(to_precision(-2.5, 1), "-3");
        assert_eq!(to_exponential(-1_125_000_000.0, 2), "-1.13e+9");
    }

    #[test]
    fn test_tie_carry_moves_exponent() {
        assert_eq!(to_precision(9.5, 1), "1e+1");
        assert_eq!(to_exponential(9.995, 2), "9.99e+0");
        assert_eq!(to_exponential(99.5, 1), "1.0e+2");
    }

    #[test]
    fn test_near_ties_follow_exact_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(to_precision(1.005, 3), "1.00");
        // 0.15 is stored as 0.1499999999999999944...
        assert_eq!(to_precision(0.15, 1), "0.1");
    }

    // ===== format_result tests =====

    #[test]
    fn test_format_small_integers_unchanged() {
        assert_eq!(fmt(5.0), "5");
        assert_eq!(fmt(16.0), "16");
        assert_eq!(fmt(100.0), "100");
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(-0.0), "0");
    }

    #[test]
    fn test_format_large_goes_scientific() {
        assert_eq!(fmt(100_000_000.0), "1.00e+8");
        assert_eq!(fmt(123_456_789.0), "1.23e+8");
        assert_eq!(fmt(9.87e15), "9.87e+15");
        assert_eq!(fmt(-123_456_789.0), "-1.23e+8");
    }

    #[test]
    fn test_format_just_above_threshold() {
        assert_eq!(fmt(99_999_999.5), "1.00e+8");
    }

    #[test]
    fn test_format_max_plain() {
        assert_eq!(fmt(99_999_999.0), "99999999");
    }

    #[test]
    fn test_format_tiny_goes_scientific() {
        assert_eq!(fmt(0.000_001_234), "1.23e-6");
        assert_eq!(fmt(1e-9), "1.00e-9");
    }

    #[test]
    fn test_format_fixed_point_band() {
        assert_eq!(fmt(0.05), "0.05");
        assert_eq!(fmt(0.012_345_678_9), "0.012346");
        assert_eq!(fmt(0.000_012_3), "0.000012");
        assert_eq!(fmt(1.0 / 12.0), "0.083333");
    }

    #[test]
    fn test_format_general_long_fraction() {
        assert_eq!(fmt(1.0 / 3.0), "0.3333333");
        assert_eq!(fmt(1.0 / 7.0), "0.1428571");
        assert_eq!(fmt(2.5), "2.5");
    }

    #[test]
    fn test_format_general_long_integer_part() {
        assert_eq!(fmt(12_345_678.9), "1.23e+7");
        assert_eq!(fmt(1_234_567.891), "1234568");
    }

    #[test]
    fn test_format_ties_match_browser() {
        assert_eq!(fmt(1_125_000_000.0), "1.13e+9");
        assert_eq!(fmt(1_234_568.5), "1234569");
    }

    #[test]
    fn test_format_negative_wide() {
        assert_eq!(fmt(-99_999_998.0), "-1.00e+8");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(fmt(f64::INFINITY), "Infinity");
        assert_eq!(fmt(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(fmt(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_wider_screen() {
        let config = DisplayConfig::new().with_width(10);
        assert_eq!(format_result(123_456_789.0, &config), "123456789");
        assert_eq!(format_result(1.0 / 3.0, &config), "0.333333333");
    }

    // ===== tidy tests =====

    #[test]
    fn test_tidy_strips_fractional_zeros_only() {
        assert_eq!(tidy("2.500"), "2.5");
        assert_eq!(tidy("3.000"), "3");
        assert_eq!(tidy("100"), "100");
    }

    #[test]
    fn test_tidy_mantissa() {
        assert_eq!(tidy("1.234568e+7"), "1.23e+7");
        assert_eq!(tidy("1.23e-6"), "1.23e-6");
    }

    #[test]
    fn test_tidy_mantissa_carry() {
        assert_eq!(tidy("9.999999e+7"), "1.00e+8");
    }
}
