use crate::error::{MathError, MathResult};

/// Every digit, in value order.
pub const DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Smallest supported base.
pub const MIN_BASE: u32 = 2;
/// Largest supported base.
pub const MAX_BASE: u32 = 36;

/// Checks that `base` lies in `2..=36`.
///
/// # Errors
/// Returns `MathError::BaseRange` otherwise.
///
/// # Example
/// ```
/// use mathkit::base::check_base;
///
/// assert!(check_base(16).is_ok());
/// assert!(check_base(1).is_err());
/// assert!(check_base(37).is_err());
/// ```
pub const fn check_base(base: u32) -> MathResult<u32> {
    if base < MIN_BASE || base > MAX_BASE {
        return Err(MathError::BaseRange { base });
    }
    Ok(base)
}

/// The digits allowed in `base`, e.g. `01234567` for base 8.
///
/// `base` must already be checked.
#[must_use]
pub fn allowed_digits(base: u32) -> &'static str {
    let count = usize::try_from(base).map_or(DIGITS.len(), |b| b.min(DIGITS.len()));
    &DIGITS[..count]
}

/// The value of `ch` as a digit (case-insensitive), or `None` if it is not a
/// digit of any base up to 36.
#[must_use]
pub fn digit_value(ch: char) -> Option<u32> {
    ch.to_digit(MAX_BASE)
}

/// The uppercase character for a digit value below 36.
#[must_use]
pub fn digit_char(value: u32) -> Option<char> {
    char::from_digit(value, MAX_BASE).map(|ch| ch.to_ascii_uppercase())
}
