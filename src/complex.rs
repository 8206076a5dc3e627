/// The complex number type and its arithmetic.
///
/// Defines `ComplexNumber` with the usual operators plus the principal-branch
/// transcendental functions used by the calculator. Values are plain `f64`
/// pairs; no arbitrary precision is attempted.
pub mod number;
/// Operation selector for the calculator.
pub mod operation;
/// Parsing of complex and polar operand text.
///
/// Accepts the `a,b` pair form, native literals such as `2+3j`, and `r<θ`
/// polar text for rectangular conversion.
pub mod parse;
/// Result structures: the computed value, its equation and its derivation.
pub mod solution;
/// Runs a selected operation on raw operand text and records every
/// intermediate step.
///
/// # Responsibilities
/// - Validates operands eagerly before computing anything.
/// - Exposes the algebraic intermediates of multiplication and division.
/// - Distinguishes repeated multiplication from the polar identity for powers.
pub mod solver;

pub use number::{COMPLEX_TOLERANCE, ComplexNumber, ONE, ZERO};
pub use operation::ComplexOperation;
pub use parse::{parse_complex, parse_polar};
pub use solution::{ComplexForms, ComplexSolution, PolarForm, SolutionValue};
pub use solver::{MAX_REPEATED_POWER, solve};
