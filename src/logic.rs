/// Bit-string and boolean evaluation.
///
/// Bit strings are validated, left-padded with zeros to a common width and
/// combined position by position.
pub mod bits;
/// The logic operations and the single per-bit function they share.
pub mod operation;
/// Truth tables derived from the same per-bit function.
pub mod truth_table;

pub use bits::{BitSolution, BoolSolution, bit_char, evaluate_bits, evaluate_bools, validate_bits};
pub use operation::LogicOperation;
pub use truth_table::{TruthRow, truth_table};
