use crate::logic::operation::LogicOperation;

/// One row of a truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthRow {
    /// Value of A.
    pub a:      bool,
    /// Value of B, or `None` when the operation ignores B.
    pub b:      Option<bool>,
    /// The operation's result for this row.
    pub result: bool,
}

/// Input combinations, in table order.
const INPUTS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

/// Builds the truth table of `operation` over `{0,1} × {0,1}`.
///
/// For [`LogicOperation::NotA`] the B column is left empty.
///
/// # Example
/// ```
/// use mathkit::logic::{LogicOperation, truth_table};
///
/// let table = truth_table(LogicOperation::Nand);
/// let results: Vec<bool> = table.iter().map(|row| row.result).collect();
/// assert_eq!(results, [true, true, true, false]);
///
/// assert!(truth_table(LogicOperation::NotA).iter().all(|row| row.b.is_none()));
/// ```
#[must_use]
pub fn truth_table(operation: LogicOperation) -> Vec<TruthRow> {
    INPUTS.into_iter()
          .map(|(a, b)| TruthRow { a,
                                   b: operation.uses_b().then_some(b),
                                   result: operation.apply(a, b) })
          .collect()
}
