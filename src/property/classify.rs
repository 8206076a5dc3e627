use std::fmt::Display;

use tracing::debug;

use crate::{
    complex::ComplexNumber,
    error::{MathError, MathResult, ParseError},
    expression::evaluate,
    property::{prime::is_prime, rational::is_rational},
    util::{fmt::format_real, num::f64_to_u64_checked},
};

/// How the input text was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// Text containing `i` or `j`, evaluated as a complex expression.
    Complex,
    /// Text of the form `numerator/denominator`.
    Fraction,
    /// Any other arithmetic expression.
    Number,
}

/// A parsed number together with the route that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNumber {
    /// The value. Only the complex route can produce a nonzero imaginary part.
    pub value: ComplexNumber,
    /// The parsing route taken.
    pub kind:  NumberKind,
}

impl Display for ParsedNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            NumberKind::Complex => write!(f, "{}", self.value),
            NumberKind::Fraction | NumberKind::Number => write!(f, "{}", format_real(self.value.real)),
        }
    }
}

/// Evaluates `text`, folding every failure except division by zero and the
/// parser's size limits into `fallback`.
fn evaluate_or(text: &str, fallback: impl FnOnce() -> ParseError) -> MathResult<ComplexNumber> {
    match evaluate(text) {
        Ok(value) => Ok(value),
        Err(err @ (MathError::DivisionByZero { .. }
                   | MathError::Parse(ParseError::TooDeep { .. } | ParseError::TooLong { .. }))) => Err(err),
        Err(_) => Err(fallback().into()),
    }
}

/// Reads a number from free text.
///
/// Whitespace is removed first. Text containing `i` or `j` is read as a
/// complex expression (with `i` spelled as `j`); text containing `/` must
/// split into exactly one numerator and one denominator; anything else is
/// read as an arithmetic expression.
///
/// # Errors
/// - `MathError::MissingOperand` for blank input.
/// - `MathError::DivisionByZero` for a zero denominator.
/// - `MathError::Parse` with `InvalidComplex`, `InvalidFraction` or
///   `InvalidNumber` depending on the route.
///
/// # Example
/// ```
/// use mathkit::property::{NumberKind, parse_number};
///
/// let parsed = parse_number("2/3").unwrap();
/// assert_eq!(parsed.kind, NumberKind::Fraction);
/// assert_eq!(parsed.value.real, 2.0 / 3.0);
///
/// let parsed = parse_number("2 + 3i").unwrap();
/// assert_eq!(parsed.kind, NumberKind::Complex);
/// assert_eq!(parsed.to_string(), "(2+3j)");
///
/// assert!(parse_number("1/2/3").is_err());
/// assert!(parse_number("5/0").is_err());
/// ```
pub fn parse_number(input: &str) -> MathResult<ParsedNumber> {
    let text: String = input.chars().filter(|ch| !ch.is_whitespace()).collect();
    if text.is_empty() {
        return Err(MathError::MissingOperand { name: "number".to_string() });
    }

    if text.contains(['i', 'j']) {
        let text = text.replace('i', "j");
        let value = evaluate_or(&text, || ParseError::InvalidComplex { input: input.trim().to_string() })?;
        return Ok(ParsedNumber { value,
                                 kind: NumberKind::Complex });
    }

    if text.contains('/') {
        let invalid = || ParseError::InvalidFraction { input: input.trim().to_string() };
        let (numerator, denominator) = match text.split_once('/') {
            Some(parts) if !parts.1.contains('/') => parts,
            _ => return Err(invalid().into()),
        };
        let numerator = evaluate_or(numerator, invalid)?.real;
        let denominator = evaluate_or(denominator, invalid)?.real;
        if denominator == 0.0 {
            return Err(MathError::DivisionByZero {
                details: "the denominator is zero".to_string(),
            });
        }
        return Ok(ParsedNumber { value: ComplexNumber::from(numerator / denominator),
                                 kind:  NumberKind::Fraction, });
    }

    let value = evaluate_or(&text, || ParseError::InvalidNumber { input: input.trim().to_string() })?;
    Ok(ParsedNumber { value: ComplexNumber::from(value.real),
                      kind:  NumberKind::Number, })
}

/// Properties of a number with no imaginary part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct RealProperties {
    /// Best approximation with a small denominator is within tolerance.
    pub rational:   bool,
    /// Real and not rational.
    pub irrational: bool,
    /// Zero fractional part.
    pub integer:    bool,
    /// Integer and `>= 0`.
    pub whole:      bool,
    /// Integer and `> 0`.
    pub natural:    bool,
    /// `> 0`.
    pub positive:   bool,
    /// `< 0`.
    pub negative:   bool,
    /// `== 0`.
    pub zero:       bool,
    /// Integer divisible by two.
    pub even:       bool,
    /// Integer not divisible by two.
    pub odd:        bool,
    /// Natural number with exactly two divisors.
    pub prime:      bool,
    /// Natural number greater than one that is not prime.
    pub composite:  bool,
}

impl RealProperties {
    /// Classifies a real value.
    ///
    /// # Example
    /// ```
    /// use mathkit::property::RealProperties;
    ///
    /// let props = RealProperties::of(15.0);
    /// assert!(props.integer && props.odd && props.composite);
    /// assert!(!props.prime);
    ///
    /// let props = RealProperties::of(-0.5);
    /// assert!(props.rational && props.negative);
    /// assert!(!props.integer && !props.odd && !props.even);
    /// ```
    #[must_use]
    pub fn of(value: f64) -> Self {
        let rational = is_rational(value);
        let integer = value.fract() == 0.0;
        let base = Self { rational,
                          irrational: !rational,
                          integer,
                          positive: value > 0.0,
                          negative: value < 0.0,
                          zero: value == 0.0,
                          ..Self::default() };
        if !integer {
            return base;
        }

        let natural = value > 0.0;
        // Integral values past 2^53 are all even, so they are never prime.
        let prime = natural && f64_to_u64_checked(value).is_some_and(is_prime);
        let even = value % 2.0 == 0.0;
        Self { whole: value >= 0.0,
               natural,
               even,
               odd: !even,
               prime,
               composite: natural && !prime && value > 1.0,
               ..base }
    }
}

/// Either the complex verdict or the full set of real properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The value has a nonzero imaginary part.
    Complex,
    /// The value is real.
    Real(RealProperties),
}

/// The result of classifying one parsed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberProperties {
    /// The number as parsed.
    pub number:         ParsedNumber,
    /// Its classification.
    pub classification: Classification,
}

/// Labels of the rows reported for a real number, in order.
pub const REAL_ROWS: [&str; 14] = ["Complex Number",
                                   "Real Number",
                                   "Rational Number",
                                   "Irrational Number",
                                   "Integer",
                                   "Whole Number",
                                   "Natural Number",
                                   "Positive",
                                   "Negative",
                                   "Zero",
                                   "Even",
                                   "Odd",
                                   "Prime",
                                   "Composite"];

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

impl NumberProperties {
    /// `true` if the number has a nonzero imaginary part.
    #[must_use]
    pub const fn is_complex(&self) -> bool {
        matches!(self.classification, Classification::Complex)
    }

    /// The real properties, if the number is real.
    #[must_use]
    pub const fn real(&self) -> Option<&RealProperties> {
        match &self.classification {
            Classification::Real(props) => Some(props),
            Classification::Complex => None,
        }
    }

    /// The value shown in summaries: the complex value itself, or its real
    /// part.
    #[must_use]
    pub fn display_value(&self) -> String {
        match self.classification {
            Classification::Complex => self.number.value.to_string(),
            Classification::Real(_) => format_real(self.number.value.real),
        }
    }

    /// `(label, verdict)` rows in presentation order.
    ///
    /// A complex number reports only the first two rows.
    ///
    /// # Example
    /// ```
    /// use mathkit::property::analyze;
    ///
    /// let rows = analyze("4-2j").unwrap().rows();
    /// assert_eq!(rows, vec![("Complex Number", true), ("Real Number", false)]);
    ///
    /// let rows = analyze("0").unwrap().rows();
    /// assert_eq!(rows.len(), 14);
    /// assert_eq!(rows[9], ("Zero", true));
    /// ```
    #[must_use]
    pub fn rows(&self) -> Vec<(&'static str, bool)> {
        match &self.classification {
            Classification::Complex => vec![(REAL_ROWS[0], true), (REAL_ROWS[1], false)],
            Classification::Real(p) => {
                let flags = [false,
                             true,
                             p.rational,
                             p.irrational,
                             p.integer,
                             p.whole,
                             p.natural,
                             p.positive,
                             p.negative,
                             p.zero,
                             p.even,
                             p.odd,
                             p.prime,
                             p.composite];
                REAL_ROWS.into_iter().zip(flags).collect()
            },
        }
    }

    /// The one-line history entry for this analysis.
    ///
    /// # Example
    /// ```
    /// use mathkit::property::analyze;
    ///
    /// assert_eq!(analyze("97").unwrap().summary(),
    ///            "Number: 97.0 - Real: Yes, Rational: Yes, Integer: Yes, Positive: Yes, Prime: Yes");
    /// assert_eq!(analyze("-1.5").unwrap().summary(),
    ///            "Number: -1.5 - Real: Yes, Rational: Yes, Integer: No, Positive: No");
    /// assert_eq!(analyze("2+3j").unwrap().summary(),
    ///            "Number: (2+3j) - Complex Number: Yes, Real Number: No");
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        let number = self.display_value();
        let Classification::Real(p) = &self.classification else {
            return format!("Number: {number} - Complex Number: Yes, Real Number: No");
        };

        let mut clauses = vec!["Real: Yes".to_string(),
                               format!("Rational: {}", yes_no(p.rational)),
                               format!("Integer: {}", yes_no(p.integer)),
                               format!("Positive: {}", yes_no(p.positive))];
        if p.natural {
            clauses.push(format!("Prime: {}", yes_no(p.prime)));
        }
        format!("Number: {number} - {}", clauses.join(", "))
    }
}

/// Classifies an already-parsed number.
#[must_use]
pub fn classify(number: ParsedNumber) -> NumberProperties {
    let classification = if number.value.imaginary == 0.0 {
        Classification::Real(RealProperties::of(number.value.real))
    } else {
        Classification::Complex
    };
    NumberProperties { number,
                       classification }
}

/// Parses and classifies `input`.
///
/// # Errors
/// Fails as [`parse_number`] does.
///
/// # Example
/// ```
/// use mathkit::property::analyze;
///
/// let props = analyze("22/7").unwrap();
/// let real = props.real().unwrap();
/// assert!(real.rational && !real.integer && real.positive);
///
/// let props = analyze("3.14159265358979").unwrap();
/// assert!(props.real().unwrap().irrational);
/// ```
pub fn analyze(input: &str) -> MathResult<NumberProperties> {
    let number = parse_number(input)?;
    let properties = classify(number);
    debug!(input, number = %number, complex = properties.is_complex(), "analyzed number");
    Ok(properties)
}
