use crate::{
    error::MathResult,
    property::{NumberProperties, analyze},
};

/// Title line of an exported history.
pub const EXPORT_TITLE: &str = "Number Properties Analysis";
/// Underline written below [`EXPORT_TITLE`].
pub const EXPORT_RULE: &str = "=========================";

/// An append-only log of number-analysis summaries.
///
/// The caller owns the history; nothing in the crate keeps one globally.
///
/// # Example
/// ```
/// use mathkit::{history::History, property::analyze};
///
/// let mut history = History::new();
/// history.record(&analyze("97").unwrap());
/// history.record(&analyze("2+3j").unwrap());
///
/// assert_eq!(history.export_lines(),
///            vec!["Number Properties Analysis",
///                 "=========================",
///                 "",
///                 "Number: 97.0 - Real: Yes, Rational: Yes, Integer: Yes, Positive: Yes, Prime: Yes",
///                 "Number: (2+3j) - Complex Number: Yes, Real Number: No"]);
///
/// history.clear();
/// assert!(history.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends a raw entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Appends the summary line of an analysis.
    pub fn record(&mut self, properties: &NumberProperties) {
        self.push(properties.summary());
    }

    /// Analyzes each input in turn and records every success.
    ///
    /// A bad input does not stop the batch: its error is returned alongside
    /// the input and the remaining inputs are still analyzed.
    ///
    /// # Example
    /// ```
    /// use mathkit::history::History;
    ///
    /// let mut history = History::new();
    /// let outcomes = history.analyze_all(["7", "seven", "8"]);
    ///
    /// assert_eq!(history.len(), 2);
    /// assert!(outcomes[1].1.is_err());
    /// ```
    pub fn analyze_all<'a>(&mut self,
                           inputs: impl IntoIterator<Item = &'a str>)
                           -> Vec<(&'a str, MathResult<NumberProperties>)> {
        inputs.into_iter()
              .map(|input| {
                  let outcome = analyze(input);
                  if let Ok(properties) = &outcome {
                      self.record(properties);
                  }
                  (input, outcome)
              })
              .collect()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The lines of an export file: title, underline, a blank line, then one
    /// line per entry.
    #[must_use]
    pub fn export_lines(&self) -> Vec<String> {
        [EXPORT_TITLE, EXPORT_RULE, ""].into_iter()
                                        .map(str::to_string)
                                        .chain(self.entries.iter().cloned())
                                        .collect()
    }
}
