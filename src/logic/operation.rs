use std::{fmt::Display, str::FromStr};

use crate::error::MathError;

/// Every two-valued logic operation the calculator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicOperation {
    /// `A ∧ B`
    And,
    /// `A ∨ B`
    Or,
    /// `A ⊕ B`
    Xor,
    /// `¬(A ∧ B)`
    Nand,
    /// `¬(A ∨ B)`
    Nor,
    /// `A ≡ B`
    Xnor,
    /// `¬A`; the second operand is ignored.
    NotA,
    /// `A → B`, i.e. `¬A ∨ B`.
    Implies,
}

impl LogicOperation {
    /// Every operation, in menu order.
    pub const ALL: [Self; 8] = [Self::And,
                                Self::Or,
                                Self::Xor,
                                Self::Nand,
                                Self::Nor,
                                Self::Xnor,
                                Self::NotA,
                                Self::Implies];

    /// Applies the operation to one pair of truth values.
    ///
    /// Bit-string evaluation, boolean evaluation and truth tables all go
    /// through this function.
    ///
    /// # Example
    /// ```
    /// use mathkit::logic::LogicOperation;
    ///
    /// assert!(LogicOperation::Implies.apply(false, false));
    /// assert!(!LogicOperation::Implies.apply(true, false));
    /// assert!(LogicOperation::NotA.apply(false, true));
    /// ```
    #[must_use]
    pub const fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Self::And => a && b,
            Self::Or => a || b,
            Self::Xor => a ^ b,
            Self::Nand => !(a && b),
            Self::Nor => !(a || b),
            Self::Xnor => a == b,
            Self::NotA => !a,
            Self::Implies => !a || b,
        }
    }

    /// Returns `true` when the result depends on the second operand.
    #[must_use]
    pub const fn uses_b(self) -> bool {
        !matches!(self, Self::NotA)
    }

    /// The token used to select this operation.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Nand => "nand",
            Self::Nor => "nor",
            Self::Xnor => "xnor",
            Self::NotA => "not_a",
            Self::Implies => "implies",
        }
    }

    /// The logical symbol used in rendered expressions.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "∧",
            Self::Or => "∨",
            Self::Xor => "⊕",
            Self::Nand => "⊼",
            Self::Nor => "⊽",
            Self::Xnor => "≡",
            Self::NotA => "¬",
            Self::Implies => "→",
        }
    }

    /// Renders `A op B`, or `¬A` for [`LogicOperation::NotA`].
    #[must_use]
    pub fn render(self, a: &str, b: &str) -> String {
        if self.uses_b() {
            format!("{a} {} {b}", self.symbol())
        } else {
            format!("{}{a}", self.symbol())
        }
    }
}

impl Display for LogicOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for LogicOperation {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter()
                 .find(|op| op.token() == token)
                 .ok_or(MathError::UnknownOperation { name: s.to_string() })
    }
}
