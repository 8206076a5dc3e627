/// Parsing errors.
///
/// Defines the errors raised while reading user text: complex literals,
/// plain numbers, fractions and arithmetic expressions. A parse error always
/// means the input could not be understood, never that a computation on a
/// well-formed input failed.
pub mod parse_error;
/// Computation errors.
///
/// Contains the error taxonomy shared by every engine: malformed polar
/// literals, invalid digits, bases out of range, division by zero, domain
/// errors and unknown operation names. Parse errors convert into it so every
/// public entry point returns a single error type.
pub mod math_error;

pub use math_error::{MathError, MathResult};
pub use parse_error::ParseError;
