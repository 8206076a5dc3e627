use std::{fmt::Display, ops};

use ordered_float::OrderedFloat;

use crate::{
    error::{MathError, MathResult},
    util::fmt::format_shortest,
};

/// `0.0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1.0` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);
/// Absolute tolerance used by [`ComplexNumber::approx_eq`] callers that have
/// no better bound.
pub const COMPLEX_TOLERANCE: f64 = 1e-9;

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    /// Renders `(a+bj)`, or `bj` when the real part is a positive zero.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.real == 0.0 && self.real.is_sign_positive() {
            return write!(f, "{}j", format_shortest(self.imaginary));
        }
        let sign = if self.imaginary.is_sign_negative() { '-' } else { '+' };
        write!(f,
               "({}{sign}{}j)",
               format_shortest(self.real),
               format_shortest(self.imaginary.abs()))
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use mathkit::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// assert_eq!(c.to_string(), "(5-1j)");
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Builds a complex number from its modulus and argument (radians).
    ///
    /// # Example
    /// ```
    /// use mathkit::complex::ComplexNumber;
    /// let c = ComplexNumber::from_polar(2.0, 0.0);
    /// assert_eq!(c, ComplexNumber::new(2.0, 0.0));
    /// ```
    #[must_use]
    pub fn from_polar(modulus: f64, argument: f64) -> Self {
        Self { real:      modulus * argument.cos(),
               imaginary: modulus * argument.sin(), }
    }

    /// Returns `true` when both components are exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Returns `true` when every component of `self` is within `tolerance`
    /// of the matching component of `other`.
    ///
    /// # Example
    /// ```
    /// use mathkit::complex::ComplexNumber;
    /// let a = ComplexNumber::new(1.0, 2.0);
    /// let b = ComplexNumber::new(1.0 + 1e-12, 2.0);
    /// assert!(a.approx_eq(b, 1e-9));
    /// ```
    #[must_use]
    pub fn approx_eq(&self, other: Self, tolerance: f64) -> bool {
        (self.real - other.real).abs() <= tolerance
        && (self.imaginary - other.imaginary).abs() <= tolerance
    }

    /// Returns the absolute value (modulus) of the complex number.
    ///
    /// # Example
    /// ```
    /// use mathkit::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the complex conjugate of the number.
    ///
    /// # Example
    /// ```
    /// use mathkit::complex::ComplexNumber;
    /// let c = ComplexNumber::new(1.0, 5.0);
    /// assert_eq!(c.conj(), ComplexNumber::new(1.0, -5.0));
    /// ```
    #[must_use]
    pub const fn conj(&self) -> Self {
        Self { real:      self.real,
               imaginary: -self.imaginary, }
    }

    /// Returns the argument (phase angle) in radians, in `(-π, π]`.
    ///
    /// # Example
    /// ```
    /// use mathkit::complex::ComplexNumber;
    /// let c = ComplexNumber::new(0.0, 1.0);
    /// assert!((c.arg() - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Returns `[z, z^2, ..., z^n]`, each entry obtained by multiplying the
    /// previous one by `z`.
    ///
    /// # Example
    /// ```
    /// use mathkit::complex::ComplexNumber;
    /// let z = ComplexNumber::new(0.0, 1.0);
    /// let powers = z.successive_powers(2);
    /// assert_eq!(powers, vec![z, ComplexNumber::new(-1.0, 0.0)]);
    /// ```
    #[must_use]
    pub fn successive_powers(self, n: usize) -> Vec<Self> {
        let mut powers = Vec::with_capacity(n);
        let mut current = ONE;
        for _ in 0..n {
            current *= self;
            powers.push(current);
        }
        powers
    }

    /// Raises the number to a complex power using `z^w = e^(w·ln z)`.
    ///
    /// A zero base yields `1` for a zero exponent and `0` for a positive real
    /// exponent.
    ///
    /// # Errors
    /// Returns `MathError::DivisionByZero` when a zero base is raised to a
    /// negative or complex power.
    ///
    /// # Example
    /// ```
    /// use mathkit::complex::ComplexNumber;
    /// let c = ComplexNumber::new(4.0, 0.0);
    /// let res = c.checked_powc(ComplexNumber::new(0.5, 0.0)).unwrap();
    /// assert!((res.real - 2.0).abs() < 1e-10);
    /// assert!(res.imaginary.abs() < 1e-10);
    ///
    /// let zero = ComplexNumber::new(0.0, 0.0);
    /// assert!(zero.checked_powc(ComplexNumber::new(-1.0, 0.0)).is_err());
    /// ```
    pub fn checked_powc(self, exponent: Self) -> MathResult<Self> {
        if self.is_zero() {
            if exponent.is_zero() {
                return Ok(ONE);
            }
            if exponent.imaginary == 0.0 && exponent.real > 0.0 {
                return Ok(ZERO);
            }
            return Err(MathError::DivisionByZero {
                details: "0 cannot be raised to a negative or complex power".to_string(),
            });
        }
        Ok((exponent * self.ln()).exp())
    }

    /// Returns the principal square root of the complex number.
    ///
    /// # Example
    /// ```
    /// use mathkit::complex::ComplexNumber;
    /// let s = ComplexNumber::new(-4.0, 0.0).sqrt();
    /// assert!(s.real.abs() < 1e-10);
    /// assert!((s.imaginary - 2.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        let a = self.real;
        let b = self.imaginary;
        let r = a.hypot(b);

        let real = f64::midpoint(r, a).sqrt();
        let imaginary = ((r - a) / 2.0).sqrt().copysign(b);

        Self { real, imaginary }
    }

    /// Returns the sine of the complex number.
    ///
    /// # Example
    /// ```
    /// use mathkit::complex::ComplexNumber;
    /// let z = ComplexNumber::new(0.0, 0.0);
    /// assert!(z.sin().real.abs() < 1e-10);
    /// assert!(z.sin().imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn sin(self) -> Self {
        Self { real:      self.real.sin() * self.imaginary.cosh(),
               imaginary: self.real.cos() * self.imaginary.sinh(), }
    }

    /// Returns the cosine of the complex number.
    ///
    /// # Example
    /// ```
    /// use mathkit::complex::ComplexNumber;
    /// let z = ComplexNumber::new(0.0, 0.0);
    /// assert!((z.cos().real - 1.0).abs() < 1e-10);
    /// assert!(z.cos().imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn cos(self) -> Self {
        Self { real:      self.real.cos() * self.imaginary.cosh(),
               imaginary: -self.real.sin() * self.imaginary.sinh(), }
    }

    /// Returns the tangent of the complex number.
    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// Returns the exponential of the complex number.
    ///
    /// # Example
    /// ```
    /// use mathkit::complex::ComplexNumber;
    /// let z = ComplexNumber::new(0.0, std::f64::consts::PI);
    /// assert!((z.exp().real + 1.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn exp(self) -> Self {
        let exp_r = self.real.exp();
        Self { real:      exp_r * self.imaginary.cos(),
               imaginary: exp_r * self.imaginary.sin(), }
    }

    /// Returns the principal natural logarithm of the complex number.
    ///
    /// The caller is responsible for rejecting zero; `ln(0)` here is
    /// `-inf + 0j`.
    ///
    /// # Example
    /// ```
    /// use mathkit::complex::ComplexNumber;
    /// let ln = ComplexNumber::new(1.0, 0.0).ln();
    /// assert!(ln.real.abs() < 1e-10);
    /// assert!(ln.imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn ln(self) -> Self {
        Self { real:      self.abs().ln(),
               imaginary: self.arg(), }
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl ops::MulAssign for ComplexNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    /// Divides by multiplying with the conjugate of `rhs`. Division by zero
    /// yields non-finite components; engines check for zero first.
    fn div(self, rhs: Self) -> Self::Output {
        if rhs.imaginary == 0.0 {
            return Self { real:      self.real / rhs.real,
                          imaginary: self.imaginary / rhs.real, };
        }
        let denom = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        Self { real:      self.real.mul_add(rhs.real, self.imaginary * rhs.imaginary) / denom,
               imaginary: self.imaginary
                              .mul_add(rhs.real, -(self.real * rhs.imaginary))
                          / denom, }
    }
}

impl From<f64> for ComplexNumber {
    fn from(value: f64) -> Self {
        Self { real:      value,
               imaginary: 0.0, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}
