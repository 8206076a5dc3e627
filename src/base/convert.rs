use std::fmt::Display;

use tracing::debug;

use crate::{
    base::digits::{allowed_digits, check_base, digit_char, digit_value},
    error::{MathError, MathResult, ParseError},
};

/// Reads a signed integer literal written in `base`.
///
/// The literal is an optional leading `-` followed by digits, which are
/// case-insensitive. Every character is validated before any arithmetic is
/// done, and the arithmetic is exact.
///
/// # Errors
/// - `MathError::BaseRange` if `base` is outside `2..=36`.
/// - `MathError::Parse` for an empty literal or a lone `-`.
/// - `MathError::InvalidDigit` naming the first illegal character.
/// - `MathError::Overflow` if the value does not fit in an `i128`.
///
/// # Example
/// ```
/// use mathkit::base::parse_in_base;
///
/// assert_eq!(parse_in_base("FF", 16).unwrap(), 255);
/// assert_eq!(parse_in_base("-101", 2).unwrap(), -5);
/// assert_eq!(parse_in_base("zz", 36).unwrap(), 1295);
/// assert!(parse_in_base("19", 8).is_err());
/// ```
pub fn parse_in_base(input: &str, base: u32) -> MathResult<i128> {
    let base = check_base(base)?;
    let literal = input.trim();
    let (negative, digits) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };
    if digits.is_empty() {
        return Err(ParseError::EmptyLiteral.into());
    }

    let values = digits.chars()
                       .map(|ch| {
                           digit_value(ch).filter(|value| *value < base).ok_or_else(|| {
                               MathError::InvalidDigit { digit:   ch.to_ascii_uppercase(),
                                                         allowed: allowed_digits(base).to_string(),
                                                         context: format!("base {base}") }
                           })
                       })
                       .collect::<MathResult<Vec<u32>>>()?;

    let overflow = || MathError::Overflow { input: literal.to_string() };
    let magnitude = values.into_iter().try_fold(0_i128, |acc, value| {
                                          acc.checked_mul(i128::from(base))?
                                             .checked_add(i128::from(value))
                                      })
                          .ok_or_else(overflow)?;

    Ok(if negative { -magnitude } else { magnitude })
}

/// Writes `value` in `base` with uppercase digits.
///
/// Digits are produced least-significant first by repeated division and then
/// reversed. Zero is `"0"`; negative values are written as `-` followed by the
/// magnitude.
///
/// # Errors
/// Returns `MathError::BaseRange` if `base` is outside `2..=36`.
///
/// # Example
/// ```
/// use mathkit::base::format_in_base;
///
/// assert_eq!(format_in_base(255, 2).unwrap(), "11111111");
/// assert_eq!(format_in_base(-255, 16).unwrap(), "-FF");
/// assert_eq!(format_in_base(0, 7).unwrap(), "0");
/// ```
pub fn format_in_base(value: i128, base: u32) -> MathResult<String> {
    let base = check_base(base)?;
    if value == 0 {
        return Ok("0".to_string());
    }

    let mut magnitude = value.unsigned_abs();
    let mut digits = Vec::new();
    while magnitude > 0 {
        let remainder = u32::try_from(magnitude % u128::from(base)).ok()
                                                                    .and_then(digit_char)
                                                                    .ok_or(MathError::BaseRange { base })?;
        digits.push(remainder);
        magnitude /= u128::from(base);
    }
    if value < 0 {
        digits.push('-');
    }

    Ok(digits.into_iter().rev().collect())
}

/// A base to convert into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TargetBase {
    /// Base 2.
    Binary,
    /// Base 8.
    Octal,
    /// Base 10.
    Decimal,
    /// Base 16.
    Hexadecimal,
    /// Any base in `2..=36`.
    Custom(u32),
}

impl TargetBase {
    /// The numeric base.
    #[must_use]
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
            Self::Custom(base) => base,
        }
    }
}

impl Display for TargetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary => write!(f, "Binary(2)"),
            Self::Octal => write!(f, "Octal(8)"),
            Self::Decimal => write!(f, "Decimal(10)"),
            Self::Hexadecimal => write!(f, "Hex(16)"),
            Self::Custom(base) => write!(f, "Custom({base})"),
        }
    }
}

/// The outcome of [`convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The literal as entered.
    pub input:     String,
    /// The base the literal was read in.
    pub from_base: u32,
    /// The exact value of the literal.
    pub value:     i128,
    /// `(label, digits)` pairs in presentation order.
    pub results:   Vec<(String, String)>,
}

impl Conversion {
    /// Looks up the digits produced for a label such as `Hex(16)`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.results
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, digits)| digits.as_str())
    }
}

/// Converts a literal from `from_base` into every requested target.
///
/// Targets are reported in the fixed order binary, octal, decimal, hex, then
/// custom bases in ascending order; repeated targets are reported once.
///
/// # Errors
/// Fails with `MathError::BaseRange` if the source or any target base is out
/// of range, before the literal is read. Otherwise fails as
/// [`parse_in_base`] does.
///
/// # Example
/// ```
/// use mathkit::base::{TargetBase, convert};
///
/// let conversion = convert("FF", 16, &[TargetBase::Decimal, TargetBase::Binary]).unwrap();
/// assert_eq!(conversion.results,
///            vec![("Binary(2)".to_string(), "11111111".to_string()),
///                 ("Decimal(10)".to_string(), "255".to_string())]);
/// ```
pub fn convert(input: &str, from_base: u32, targets: &[TargetBase]) -> MathResult<Conversion> {
    debug!(input, from_base, ?targets, "converting between bases");

    check_base(from_base)?;
    let mut targets = targets.to_vec();
    targets.sort_unstable();
    targets.dedup();
    for target in &targets {
        check_base(target.radix())?;
    }

    let value = parse_in_base(input, from_base)?;
    let results = targets.into_iter()
                         .map(|target| Ok((target.to_string(), format_in_base(value, target.radix())?)))
                         .collect::<MathResult<Vec<_>>>()?;

    Ok(Conversion { input: input.trim().to_string(),
                    from_base,
                    value,
                    results })
}
