use thiserror::Error;

use crate::error::ParseError;

/// Result type returned by every public engine operation.
pub type MathResult<T> = Result<T, MathError>;

/// Represents all errors an engine can report to its caller.
///
/// Every variant is recoverable and user-facing. Engines validate their
/// inputs before computing, so an error never comes with a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// The input text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A structured literal (such as polar `r<theta`) has the wrong shape.
    #[error("Invalid format '{input}': {details}.")]
    Format {
        /// The rejected input.
        input:   String,
        /// What was expected instead.
        details: String,
    },
    /// A character lies outside the allowed alphabet.
    #[error("Invalid character '{digit}' for {context}. Allowed digits: {allowed}")]
    InvalidDigit {
        /// The offending character.
        digit:   char,
        /// Every character that would have been accepted.
        allowed: String,
        /// Where the character was found, e.g. `base 16` or `input A`.
        context: String,
    },
    /// A numeric base outside `2..=36`.
    #[error("Base {base} is out of range; bases must be between 2 and 36.")]
    BaseRange {
        /// The rejected base.
        base: u32,
    },
    /// Attempted division by zero.
    #[error("Division by zero: {details}.")]
    DivisionByZero {
        /// Which operand or expression was zero.
        details: String,
    },
    /// A function was applied outside its domain.
    #[error("Domain error: {details}.")]
    Domain {
        /// Details about the violated domain.
        details: String,
    },
    /// An operation name that no engine understands.
    #[error("Unknown operation '{name}'.")]
    UnknownOperation {
        /// The rejected operation name.
        name: String,
    },
    /// A required operand was empty or not supplied.
    #[error("Please enter the {name}.")]
    MissingOperand {
        /// Human-readable name of the missing operand.
        name: String,
    },
    /// An integer does not fit the exact arithmetic used for conversion.
    #[error("Integer '{input}' is too large to convert exactly.")]
    Overflow {
        /// The rejected input.
        input: String,
    },
}
