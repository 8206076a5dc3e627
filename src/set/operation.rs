use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use crate::{error::MathError, set::parse::StringSet};

/// Every operation the set calculator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOperation {
    /// `A ∪ B`
    Union,
    /// `A ∩ B`
    Intersection,
    /// `A - B`
    Difference,
    /// `A △ B`
    SymmetricDifference,
    /// `A × B`
    CartesianProduct,
    /// `A ⊆ B`
    IsSubset,
    /// `A ⊇ B`
    IsSuperset,
    /// `A ∩ B = ∅`
    IsDisjoint,
}

/// The result of a set operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetValue {
    /// A set of elements.
    Elements(StringSet),
    /// A set of ordered pairs.
    Pairs(BTreeSet<(String, String)>),
    /// The answer to a yes/no question about the sets.
    Truth(bool),
}

impl SetValue {
    /// Returns `true` for an empty set result. Boolean results are never
    /// empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Elements(elements) => elements.is_empty(),
            Self::Pairs(pairs) => pairs.is_empty(),
            Self::Truth(_) => false,
        }
    }
}

/// Writes `{a, b, c}` for a non-empty set.
pub(crate) fn write_elements<I>(f: &mut std::fmt::Formatter<'_>, items: I) -> std::fmt::Result
    where I: Iterator<Item = String>
{
    let items: Vec<String> = items.collect();
    write!(f, "{{{}}}", items.join(", "))
}

impl Display for SetValue {
    /// Empty sets are written as `∅ (Empty Set)`.
    ///
    /// # Example
    /// ```
    /// use mathkit::set::{SetValue, parse_set};
    ///
    /// assert_eq!(SetValue::Elements(parse_set("b a")).to_string(), "{a, b}");
    /// assert_eq!(SetValue::Elements(parse_set("")).to_string(), "∅ (Empty Set)");
    /// assert_eq!(SetValue::Truth(false).to_string(), "False");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "∅ (Empty Set)");
        }
        match self {
            Self::Elements(elements) => write_elements(f, elements.iter().cloned()),
            Self::Pairs(pairs) => write_elements(f, pairs.iter().map(|(a, b)| format!("({a}, {b})"))),
            Self::Truth(value) => write!(f, "{}", if *value { "True" } else { "False" }),
        }
    }
}

impl SetOperation {
    /// Every operation, in menu order.
    pub const ALL: [Self; 8] = [Self::Union,
                                Self::Intersection,
                                Self::Difference,
                                Self::SymmetricDifference,
                                Self::CartesianProduct,
                                Self::IsSubset,
                                Self::IsSuperset,
                                Self::IsDisjoint];

    /// The token used to select this operation.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Intersection => "intersection",
            Self::Difference => "difference",
            Self::SymmetricDifference => "symmetric_difference",
            Self::CartesianProduct => "cartesian_product",
            Self::IsSubset => "is_subset",
            Self::IsSuperset => "is_superset",
            Self::IsDisjoint => "is_disjoint",
        }
    }

    /// The fixed description shown above a result.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Union => "Union (A ∪ B)",
            Self::Intersection => "Intersection (A ∩ B)",
            Self::Difference => "Difference (A - B)",
            Self::SymmetricDifference => "Symmetric Difference (A △ B)",
            Self::CartesianProduct => "Cartesian Product (A × B)",
            Self::IsSubset => "Is A subset of B (A ⊆ B)",
            Self::IsSuperset => "Is A superset of B (A ⊇ B)",
            Self::IsDisjoint => "Are A and B disjoint",
        }
    }

    /// Returns `true` for operations whose answer is a boolean.
    #[must_use]
    pub const fn is_predicate(self) -> bool {
        matches!(self, Self::IsSubset | Self::IsSuperset | Self::IsDisjoint)
    }

    /// Applies the operation to two sets.
    ///
    /// # Example
    /// ```
    /// use mathkit::set::{SetOperation, SetValue, parse_set};
    ///
    /// let a = parse_set("1 2 3");
    /// let b = parse_set("2 3 4");
    ///
    /// assert_eq!(SetOperation::Intersection.apply(&a, &b),
    ///            SetValue::Elements(parse_set("2 3")));
    /// assert_eq!(SetOperation::IsDisjoint.apply(&a, &b), SetValue::Truth(false));
    /// ```
    #[must_use]
    pub fn apply(self, a: &StringSet, b: &StringSet) -> SetValue {
        match self {
            Self::Union => SetValue::Elements(a.union(b).cloned().collect()),
            Self::Intersection => SetValue::Elements(a.intersection(b).cloned().collect()),
            Self::Difference => SetValue::Elements(a.difference(b).cloned().collect()),
            Self::SymmetricDifference => {
                SetValue::Elements(a.symmetric_difference(b).cloned().collect())
            },
            Self::CartesianProduct => {
                SetValue::Pairs(a.iter()
                                 .flat_map(|x| b.iter().map(move |y| (x.clone(), y.clone())))
                                 .collect())
            },
            Self::IsSubset => SetValue::Truth(a.is_subset(b)),
            Self::IsSuperset => SetValue::Truth(a.is_superset(b)),
            Self::IsDisjoint => SetValue::Truth(a.is_disjoint(b)),
        }
    }
}

impl Display for SetOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for SetOperation {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter()
                 .find(|op| op.token() == token)
                 .ok_or(MathError::UnknownOperation { name: s.to_string() })
    }
}
