use std::fmt::Display;

use tracing::debug;

use crate::{
    error::MathResult,
    set::{
        operation::{SetOperation, SetValue, write_elements},
        parse::{StringSet, parse_set},
    },
};

/// A parsed operand, displayed as `{a, b}` or `∅`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand<'a>(pub &'a StringSet);

impl Display for Operand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "∅");
        }
        write_elements(f, self.0.iter().cloned())
    }
}

/// The outcome of [`solve`]: both parsed sets, the operation and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSolution {
    /// The operation that was applied.
    pub operation: SetOperation,
    /// Set A as parsed.
    pub a:         StringSet,
    /// Set B as parsed.
    pub b:         StringSet,
    /// The result.
    pub value:     SetValue,
}

impl SetSolution {
    /// The fixed description of the operation.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.operation.label()
    }

    /// The expression that was evaluated, e.g. `{1, 2} INTERSECTION {2, 3}`.
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{} {} {}",
                Operand(&self.a),
                self.operation.token().to_uppercase(),
                Operand(&self.b))
    }
}

/// Parses an operation name and two raw element lists, then applies the
/// operation.
///
/// # Errors
/// Returns `MathError::UnknownOperation` for an unrecognized operation name.
/// The sets themselves always parse.
///
/// # Example
/// ```
/// use mathkit::set::solve;
///
/// let solution = solve("intersection", "1, 2, 3", "2 3 4").unwrap();
/// assert_eq!(solution.value.to_string(), "{2, 3}");
/// assert_eq!(solution.expression(), "{1, 2, 3} INTERSECTION {2, 3, 4}");
///
/// assert!(solve("power_set", "1", "2").is_err());
/// ```
pub fn solve(operation: &str, a: &str, b: &str) -> MathResult<SetSolution> {
    let operation: SetOperation = operation.parse()?;
    debug!(%operation, a, b, "solving set operation");

    let a = parse_set(a);
    let b = parse_set(b);
    let value = operation.apply(&a, &b);

    Ok(SetSolution { operation, a, b, value })
}
