use std::{fmt::Display, str::FromStr};

use crate::error::MathError;

/// Every operation the complex calculator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexOperation {
    /// `z1 + z2`
    Add,
    /// `z1 - z2`
    Subtract,
    /// `z1 * z2`
    Multiply,
    /// `z1 / z2`
    Divide,
    /// `z1 ^ z2`
    Power,
    /// Principal square root.
    Sqrt,
    /// Modulus.
    Abs,
    /// Complex conjugate.
    Conjugate,
    /// Rectangular to polar conversion.
    Polar,
    /// Polar (`r<θ`) to rectangular conversion.
    Rectangular,
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// `e^z`
    Exp,
    /// Principal natural logarithm.
    Ln,
}

impl ComplexOperation {
    /// Every operation, in menu order.
    pub const ALL: [Self; 15] = [Self::Add,
                                 Self::Subtract,
                                 Self::Multiply,
                                 Self::Divide,
                                 Self::Power,
                                 Self::Sqrt,
                                 Self::Abs,
                                 Self::Conjugate,
                                 Self::Polar,
                                 Self::Rectangular,
                                 Self::Sin,
                                 Self::Cos,
                                 Self::Tan,
                                 Self::Exp,
                                 Self::Ln];

    /// Returns `true` for operations that need a second operand.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self,
                 Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Power)
    }

    /// The token used to select this operation.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Conjugate => "conj",
            Self::Polar => "polar",
            Self::Rectangular => "rect",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
            Self::Ln => "log",
        }
    }

    /// The human-readable name shown above a result.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
            Self::Power => "Power",
            Self::Sqrt => "Square Root",
            Self::Abs => "Absolute Value",
            Self::Conjugate => "Conjugate",
            Self::Polar => "Conversion to Polar Form",
            Self::Rectangular => "Conversion to Rectangular Form",
            Self::Sin => "Sine",
            Self::Cos => "Cosine",
            Self::Tan => "Tangent",
            Self::Exp => "Exponential",
            Self::Ln => "Natural Logarithm",
        }
    }
}

impl Display for ComplexOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for ComplexOperation {
    type Err = MathError;

    /// Parses an operation token. `ln` is accepted as an alias of `log`.
    ///
    /// # Example
    /// ```
    /// use mathkit::complex::ComplexOperation;
    ///
    /// assert_eq!("*".parse::<ComplexOperation>().unwrap(), ComplexOperation::Multiply);
    /// assert_eq!("ln".parse::<ComplexOperation>().unwrap(), ComplexOperation::Ln);
    /// assert!("cbrt".parse::<ComplexOperation>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        if token == "ln" {
            return Ok(Self::Ln);
        }
        Self::ALL.into_iter()
                 .find(|op| op.token() == token)
                 .ok_or(MathError::UnknownOperation { name: s.to_string() })
    }
}
