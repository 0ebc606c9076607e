//! # Display Formatting Contracts
//!
//! ArqCalc has two distinct display contracts, both inherited from the
//! product's original behavior:
//!
//! - Geometry results always show exactly two decimals ("12.00 m²").
//! - Conversion results adapt: very large or very small magnitudes go
//!   exponential, whole numbers drop the decimal point, and everything
//!   else shows up to four decimals with trailing zeros stripped.
//!
//! In both contracts a `NaN` (e.g., from 0/0 in a degenerate estimate)
//! displays as the literal `"0"` rather than leaking "NaN" to the user.

/// Format a geometry measure: two decimal digits, non-finite values as `"0"`.
///
/// # Example
///
/// ```rust
/// use arq_core::format::format_measure;
///
/// assert_eq!(format_measure(12.0), "12.00");
/// assert_eq!(format_measure(f64::NAN), "0");
/// ```
pub fn format_measure(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    format!("{value:.2}")
}

/// Format a converted value per the adaptive contract.
///
/// - `NaN` / infinities -> `"0"`
/// - `|x| >= 1e6` or `0 < |x| <= 1e-5` -> exponential with 4 fractional
///   digits
/// - mathematical integers -> no decimal point
/// - otherwise -> 4 decimal places, trailing zeros stripped
///
/// # Example
///
/// ```rust
/// use arq_core::format::format_conversion;
///
/// assert_eq!(format_conversion(100.0), "100");
/// assert_eq!(format_conversion(10.76391), "10.7639");
/// assert_eq!(format_conversion(2.5000001), "2.5");
/// assert_eq!(format_conversion(2589988.110336), "2.5900e6");
/// ```
pub fn format_conversion(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 || (magnitude > 0.0 && magnitude <= 0.00001) {
        return format!("{value:.4e}");
    }

    if value.fract() == 0.0 {
        return format!("{value}");
    }

    let fixed = format!("{value:.4}");
    let stripped = fixed.trim_end_matches('0').trim_end_matches('.');
    stripped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_two_decimals() {
        assert_eq!(format_measure(6.0), "6.00");
        assert_eq!(format_measure(28.2743), "28.27");
        assert_eq!(format_measure(-3.5), "-3.50");
        assert_eq!(format_measure(0.0), "0.00");
    }

    #[test]
    fn test_measure_nan() {
        assert_eq!(format_measure(f64::NAN), "0");
    }

    #[test]
    fn test_conversion_nan() {
        assert_eq!(format_conversion(f64::NAN), "0");
    }

    #[test]
    fn test_non_finite_renders_as_zero() {
        // A zero paint yield divides to infinity; the user still sees "0"
        assert_eq!(format_measure(f64::INFINITY), "0");
        assert_eq!(format_conversion(f64::INFINITY), "0");
        assert_eq!(format_conversion(f64::NEG_INFINITY), "0");
    }

    #[test]
    fn test_conversion_integer() {
        assert_eq!(format_conversion(100.0), "100");
        assert_eq!(format_conversion(-42.0), "-42");
        assert_eq!(format_conversion(0.0), "0");
    }

    #[test]
    fn test_conversion_fractional_stripping() {
        assert_eq!(format_conversion(10.76391), "10.7639");
        assert_eq!(format_conversion(1.5), "1.5");
        assert_eq!(format_conversion(0.1234), "0.1234");
        // Rounds to a whole at 4 decimals, dot dropped with the zeros
        assert_eq!(format_conversion(2.0000099), "2");
    }

    #[test]
    fn test_conversion_exponential_large() {
        assert_eq!(format_conversion(1_000_000.0), "1.0000e6");
        assert_eq!(format_conversion(2589988.110336), "2.5900e6");
        assert_eq!(format_conversion(-1_000_000.0), "-1.0000e6");
    }

    #[test]
    fn test_conversion_exponential_small() {
        assert_eq!(format_conversion(0.00001), "1.0000e-5");
        assert_eq!(format_conversion(0.000001), "1.0000e-6");
        // Just above the threshold stays fixed-point
        assert_eq!(format_conversion(0.0001), "0.0001");
    }

    #[test]
    fn test_conversion_zero_is_plain() {
        // Zero is not "small"; it prints as an integer, not exponential
        assert_eq!(format_conversion(0.0), "0");
    }
}
