/// Input parsing, classification and the per-number report.
pub mod classify;
/// Primality by `6k ± 1` trial division.
pub mod prime;
/// Rational approximation with a bounded denominator.
pub mod rational;

pub use classify::{
    Classification, NumberKind, NumberProperties, ParsedNumber, REAL_ROWS, RealProperties, analyze, classify,
    parse_number,
};
pub use prime::is_prime;
pub use rational::{MAX_DENOMINATOR, RATIONAL_TOLERANCE, is_rational, limit_denominator};
