use crate::util::num::{f64_to_u64_checked, i128_to_f64_lossy};

/// Largest denominator considered when approximating a real by a fraction.
pub const MAX_DENOMINATOR: i128 = 1000;
/// A value counts as rational if its best approximation is closer than this.
pub const RATIONAL_TOLERANCE: f64 = 1e-10;

/// Finds the fraction `p/q` with `1 <= q <= max_denominator` closest to
/// `value`, using the continued-fraction expansion of `value`.
///
/// When the expansion is cut short by the bound, the last convergent and the
/// best semiconvergent are compared and the closer one wins.
///
/// Returns `None` for non-finite input, a bound below 1, or an integer part
/// too large to be represented exactly.
///
/// # Example
/// ```
/// use mathkit::property::limit_denominator;
///
/// assert_eq!(limit_denominator(0.75, 1000), Some((3, 4)));
/// assert_eq!(limit_denominator(-2.0 / 3.0, 1000), Some((-2, 3)));
/// assert_eq!(limit_denominator(std::f64::consts::PI, 1000), Some((355, 113)));
/// assert_eq!(limit_denominator(std::f64::consts::PI, 100), Some((311, 99)));
/// ```
#[must_use]
pub fn limit_denominator(value: f64, max_denominator: i128) -> Option<(i128, i128)> {
    if !value.is_finite() || max_denominator < 1 {
        return None;
    }
    let sign = if value.is_sign_negative() { -1 } else { 1 };
    let target = value.abs();
    let bound = i128_to_f64_lossy(max_denominator);

    let (mut p0, mut q0, mut p1, mut q1) = (0_i128, 1_i128, 1_i128, 0_i128);
    let mut remainder = target;
    loop {
        let whole = remainder.floor();
        // Bound check in floating point first so the cast below stays in range.
        if q1 != 0 && whole.mul_add(i128_to_f64_lossy(q1), i128_to_f64_lossy(q0)) > bound {
            break;
        }
        let a = i128::from(f64_to_u64_checked(whole)?);
        let q2 = q0 + a * q1;
        if q2 > max_denominator {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);

        let fraction = remainder - whole;
        if fraction == 0.0 {
            return Some((sign * p1, q1));
        }
        remainder = fraction.recip();
    }

    let k = (max_denominator - q0) / q1;
    let semi = (p0 + k * p1, q0 + k * q1);
    let error = |(p, q): (i128, i128)| (target - i128_to_f64_lossy(p) / i128_to_f64_lossy(q)).abs();
    let best = if error((p1, q1)) <= error(semi) { (p1, q1) } else { semi };

    Some((sign * best.0, best.1))
}

/// Decides whether `value` is rational for the purposes of classification.
///
/// Integral values are rational. Other finite values are rational if their
/// best approximation with denominator at most [`MAX_DENOMINATOR`] lies
/// within [`RATIONAL_TOLERANCE`]. Infinities and NaN are not rational.
///
/// # Example
/// ```
/// use mathkit::property::is_rational;
///
/// assert!(is_rational(-4.0));
/// assert!(is_rational(0.125));
/// assert!(is_rational(2.0 / 3.0));
/// assert!(!is_rational(std::f64::consts::SQRT_2));
/// assert!(!is_rational(f64::NAN));
/// ```
#[must_use]
pub fn is_rational(value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    if value.fract() == 0.0 {
        return true;
    }
    limit_denominator(value, MAX_DENOMINATOR).is_some_and(|(p, q)| {
        (value - i128_to_f64_lossy(p) / i128_to_f64_lossy(q)).abs() < RATIONAL_TOLERANCE
    })
}
