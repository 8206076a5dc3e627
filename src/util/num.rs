/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// within the exactly representable range, and not fractional.
///
/// # Returns
/// - `Some(u64)`: The converted value if safe.
/// - `None`: For non-finite, negative, out-of-range, or fractional values.
///
/// # Example
/// ```
/// use mathkit::util::num::f64_to_u64_checked;
///
/// assert_eq!(f64_to_u64_checked(7.0), Some(7));
/// assert_eq!(f64_to_u64_checked(-5.0), None);
/// assert_eq!(f64_to_u64_checked(1.23), None);
/// assert_eq!(f64_to_u64_checked(f64::INFINITY), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    if value.fract() != 0.0 {
        return None;
    }
    Some(value as u64)
}

/// Safely converts an `f64` to `usize` under the same rules as
/// [`f64_to_u64_checked`].
///
/// # Example
/// ```
/// use mathkit::util::num::f64_to_usize_checked;
///
/// assert_eq!(f64_to_usize_checked(3.0), Some(3));
/// assert_eq!(f64_to_usize_checked(2.5), None);
/// ```
#[must_use]
pub fn f64_to_usize_checked(value: f64) -> Option<usize> {
    f64_to_u64_checked(value).and_then(|v| usize::try_from(v).ok())
}

/// Converts an `i128` to `f64`, accepting a rounding of very large values.
///
/// Used only for display of rational approximations whose numerator and
/// denominator were produced by [`f64`] input in the first place.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i128_to_f64_lossy(value: i128) -> f64 {
    value as f64
}
