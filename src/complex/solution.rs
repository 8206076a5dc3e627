use std::fmt::Display;

use crate::{
    complex::{number::ComplexNumber, operation::ComplexOperation},
    util::fmt::format_real,
};

/// A complex number in polar form: modulus and argument in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarForm {
    /// Distance from the origin, `r`.
    pub modulus:  f64,
    /// Angle from the positive real axis in radians, `θ`.
    pub argument: f64,
}

impl PolarForm {
    /// Returns the argument in degrees.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.argument.to_degrees()
    }

    /// Converts back to rectangular form.
    #[must_use]
    pub fn to_rectangular(&self) -> ComplexNumber {
        ComplexNumber::from_polar(self.modulus, self.argument)
    }
}

impl From<ComplexNumber> for PolarForm {
    fn from(value: ComplexNumber) -> Self {
        Self { modulus:  value.abs(),
               argument: value.arg(), }
    }
}

impl Display for PolarForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{} < {}",
               format_real(self.modulus),
               format_real(self.argument))
    }
}

/// Every representation of a complex result shown to the user.
///
/// # Example
/// ```
/// use mathkit::complex::{ComplexForms, ComplexNumber};
///
/// let forms = ComplexForms::from(ComplexNumber::new(0.0, 2.0));
/// assert_eq!(forms.modulus(), 2.0);
/// assert!((forms.argument_degrees() - 90.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexForms {
    /// The result as `re + im·j`.
    pub rectangular: ComplexNumber,
    /// The result as modulus and argument.
    pub polar:       PolarForm,
}

impl ComplexForms {
    /// The modulus `|z|`.
    #[must_use]
    pub const fn modulus(&self) -> f64 {
        self.polar.modulus
    }

    /// The argument in radians.
    #[must_use]
    pub const fn argument(&self) -> f64 {
        self.polar.argument
    }

    /// The argument in degrees.
    #[must_use]
    pub fn argument_degrees(&self) -> f64 {
        self.polar.degrees()
    }

    /// Labelled display rows, in the order they are presented.
    #[must_use]
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let angle = format!("{} rad (≈ {}°)",
                            format_real(self.argument()),
                            format_real(self.argument_degrees()));
        vec![("Rectangular form",
              format!("{} + {}j",
                      format_real(self.rectangular.real),
                      format_real(self.rectangular.imaginary))),
             ("Polar form", format!("{} < {angle}", format_real(self.modulus()))),
             ("Modulus", format_real(self.modulus())),
             ("Argument", angle)]
    }
}

impl From<ComplexNumber> for ComplexForms {
    fn from(value: ComplexNumber) -> Self {
        Self { rectangular: value,
               polar:       PolarForm::from(value), }
    }
}

/// The value produced by a complex operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolutionValue {
    /// A complex result, e.g. from `+` or `sqrt`.
    Complex(ComplexNumber),
    /// A real result, from `abs`.
    Real(f64),
    /// A polar pair, from `polar`.
    Polar(PolarForm),
}

impl Display for SolutionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complex(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{}", format_real(*value)),
            Self::Polar(value) => write!(f, "{value}"),
        }
    }
}

/// The outcome of [`solve`](crate::complex::solve): the result, the equation
/// it satisfies and the derivation that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexSolution {
    /// The operation that was performed.
    pub operation: ComplexOperation,
    /// A one-line equation such as `(2+3j) * (1-1j) = (5+1j)`.
    pub equation:  String,
    /// The computed value.
    pub value:     SolutionValue,
    /// Intermediate steps, in order.
    pub trace:     Vec<String>,
}

impl ComplexSolution {
    /// Human-readable operation name, e.g. `Multiplication`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.operation.label()
    }

    /// The complex result, if the operation produced one.
    #[must_use]
    pub const fn complex(&self) -> Option<ComplexNumber> {
        match self.value {
            SolutionValue::Complex(value) => Some(value),
            _ => None,
        }
    }

    /// Rectangular, polar, modulus and argument forms of a complex result.
    #[must_use]
    pub fn forms(&self) -> Option<ComplexForms> {
        self.complex().map(ComplexForms::from)
    }
}
