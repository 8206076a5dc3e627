/// Set operations and their results.
pub mod operation;
/// Splitting raw text into set elements.
///
/// Elements are raw strings: no numeric coercion happens, and quoted runs
/// stay together.
pub mod parse;
/// Operation selection, parsing and evaluation in one call.
pub mod solution;

pub use operation::{SetOperation, SetValue};
pub use parse::{StringSet, parse_set, tokenize};
pub use solution::{Operand, SetSolution, solve};
