use tracing::debug;

use crate::{
    error::{MathError, MathResult},
    logic::operation::LogicOperation,
};

/// Converts a truth value to `'0'` or `'1'`.
#[must_use]
pub const fn bit_char(value: bool) -> char {
    if value { '1' } else { '0' }
}

/// Checks that `bits` contains only `0` and `1`.
///
/// # Errors
/// Returns `MathError::InvalidDigit` naming the first offending character.
///
/// # Example
/// ```
/// use mathkit::logic::validate_bits;
///
/// assert!(validate_bits("1010", "input A").is_ok());
/// assert!(validate_bits("1020", "input A").is_err());
/// ```
pub fn validate_bits(bits: &str, context: &str) -> MathResult<()> {
    match bits.chars().find(|ch| !matches!(ch, '0' | '1')) {
        Some(digit) => Err(MathError::InvalidDigit { digit,
                                                     allowed: "01".to_string(),
                                                     context: context.to_string() }),
        None => Ok(()),
    }
}

/// Left-pads `bits` with zeros to `width` characters.
fn zero_pad(bits: &str, width: usize) -> String {
    format!("{bits:0>width$}")
}

/// The outcome of a bit-string operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSolution {
    /// The operation that was applied.
    pub operation: LogicOperation,
    /// Operand A as entered.
    pub a:         String,
    /// Operand B as entered; all zeros of A's length for `not_a`.
    pub b:         String,
    /// The result, as long as the longer operand.
    pub result:    String,
}

impl BitSolution {
    /// Renders `101 ⊕ 011 = 110`, or `¬101 = 010`.
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{} = {}", self.operation.render(&self.a, &self.b), self.result)
    }
}

/// Applies `operation` bit by bit to two binary strings.
///
/// The shorter operand is left-padded with zeros. For
/// [`LogicOperation::NotA`] the second operand is neither validated nor used.
///
/// # Errors
/// Returns `MathError::InvalidDigit` if a used operand contains anything other
/// than `0` and `1`.
///
/// # Example
/// ```
/// use mathkit::logic::{LogicOperation, evaluate_bits};
///
/// let solution = evaluate_bits(LogicOperation::Xor, "101", "011").unwrap();
/// assert_eq!(solution.result, "110");
/// assert_eq!(solution.expression(), "101 ⊕ 011 = 110");
///
/// let padded = evaluate_bits(LogicOperation::And, "1", "111").unwrap();
/// assert_eq!(padded.result, "001");
///
/// let negated = evaluate_bits(LogicOperation::NotA, "101", "not bits").unwrap();
/// assert_eq!(negated.result, "010");
/// ```
pub fn evaluate_bits(operation: LogicOperation, a: &str, b: &str) -> MathResult<BitSolution> {
    debug!(%operation, a, b, "evaluating bit strings");

    let a = a.trim();
    validate_bits(a, "input A")?;
    let b = if operation.uses_b() {
        let b = b.trim();
        validate_bits(b, "input B")?;
        b.to_string()
    } else {
        "0".repeat(a.len())
    };

    let width = a.len().max(b.len());
    let result = zero_pad(a, width).chars()
                                   .zip(zero_pad(&b, width).chars())
                                   .map(|(x, y)| bit_char(operation.apply(x == '1', y == '1')))
                                   .collect();

    Ok(BitSolution { operation,
                     a: a.to_string(),
                     b,
                     result })
}

/// The outcome of a boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolSolution {
    /// The operation that was applied.
    pub operation: LogicOperation,
    /// Operand A.
    pub a:         bool,
    /// Operand B.
    pub b:         bool,
    /// The result.
    pub result:    bool,
}

/// Writes a truth value as `True` or `False`.
const fn truth_word(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

impl BoolSolution {
    /// Renders `True ∧ False = False`.
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{} = {}",
                self.operation.render(truth_word(self.a), truth_word(self.b)),
                truth_word(self.result))
    }
}

/// Applies `operation` to two boolean values.
///
/// # Example
/// ```
/// use mathkit::logic::{LogicOperation, evaluate_bools};
///
/// let solution = evaluate_bools(LogicOperation::Implies, true, false);
/// assert!(!solution.result);
/// assert_eq!(solution.expression(), "True → False = False");
/// ```
#[must_use]
pub fn evaluate_bools(operation: LogicOperation, a: bool, b: bool) -> BoolSolution {
    BoolSolution { operation,
                   a,
                   b,
                   result: operation.apply(a, b) }
}
