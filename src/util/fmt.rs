/// Decimal exponents at or above this switch to scientific notation.
const SCIENTIFIC_ABOVE: i32 = 16;
/// Decimal exponents below this switch to scientific notation.
const SCIENTIFIC_BELOW: i32 = -4;

/// Splits the shortest round-trip digits of a finite, non-zero value into
/// mantissa and decimal exponent.
fn decompose(value: f64) -> (String, i32) {
    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa.to_string(), exponent.parse().unwrap_or(0)),
        None => (scientific, 0),
    }
}

/// Renders the shortest round-trip representation of `value`, switching to
/// `1e+20` style for very large or very small magnitudes.
///
/// # Example
/// ```
/// use mathkit::util::fmt::format_shortest;
///
/// assert_eq!(format_shortest(5.0), "5");
/// assert_eq!(format_shortest(1e20), "1e+20");
/// assert_eq!(format_shortest(-1.5e-7), "-1.5e-07");
/// assert_eq!(format_shortest(0.0001), "0.0001");
/// ```
#[must_use]
pub fn format_shortest(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return format!("{value}");
    }

    let (mantissa, exponent) = decompose(value);
    if (SCIENTIFIC_BELOW..SCIENTIFIC_ABOVE).contains(&exponent) {
        return format!("{value}");
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// Renders a real number the way the toolkit shows scalars.
///
/// Integral values in positional notation keep a trailing `.0` so that a real
/// result is never mistaken for an integer count.
///
/// # Example
/// ```
/// use mathkit::util::fmt::format_real;
///
/// assert_eq!(format_real(97.0), "97.0");
/// assert_eq!(format_real(-0.75), "-0.75");
/// assert_eq!(format_real(1e20), "1e+20");
/// assert_eq!(format_real(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    let text = format_shortest(value);
    if value.is_finite() && !text.contains(['.', 'e']) {
        format!("{text}.0")
    } else {
        text
    }
}
