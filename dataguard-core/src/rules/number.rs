// File: dataguard-core/src/rules/number.rs
//! Number rules of the catalog. All of them operate on `f64`.

use crate::rule::ValidationRule;

/// Largest integer representable in an `f64` without loss of precision (2^53 − 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Smallest integer representable in an `f64` without loss of precision.
pub const MIN_SAFE_INTEGER: f64 = -MAX_SAFE_INTEGER;

/// Accepts values greater than or equal to zero.
///
/// Zero passes despite the name, and `NaN` fails.
pub fn positive() -> ValidationRule<f64> {
    ValidationRule::new(|value: &f64| *value >= 0.0, "Number must be positive or zero")
        .named("positive")
}

/// Accepts integral values inside `[MIN_SAFE_INTEGER, MAX_SAFE_INTEGER]`.
pub fn integer() -> ValidationRule<f64> {
    ValidationRule::new(
        |value: &f64| is_safe_integer(*value),
        "Number must be a valid integer within safe integer limits",
    )
    .named("integer")
}

/// Accepts values in `[min, max]`, both ends inclusive.
pub fn range(min: f64, max: f64) -> ValidationRule<f64> {
    ValidationRule::new(
        move |value: &f64| *value >= min && *value <= max,
        format!("Number must be between {} and {}", format_bound(min), format_bound(max)),
    )
    .named("range")
}

/// Accepts finite values carrying at most two fractional decimal digits.
///
/// Negative amounts are accepted.
pub fn currency() -> ValidationRule<f64> {
    ValidationRule::new(
        |value: &f64| has_at_most_two_decimals(*value),
        "Invalid currency format (maximum 2 decimal places)",
    )
    .named("currency")
}

/// Formats a bound the way JavaScript prints numbers: shortest round-trip digits,
/// exponent notation below 1e-6 and from 1e21 up, `Infinity` for infinities.
fn format_bound(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude.is_finite() && (magnitude >= 1e21 || magnitude < 1e-6) {
        let scientific = format!("{:e}", value);
        return match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
            _ => scientific,
        };
    }
    value.to_string()
}

fn is_safe_integer(value: f64) -> bool {
    value.is_finite()
        && value.fract() == 0.0
        && (MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value)
}

fn has_at_most_two_decimals(value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    // `f64::round` rounds half away from zero.
    (value * 100.0).round() / 100.0 == value
}
