use tracing::debug;

use crate::{
    complex::{
        number::{ComplexNumber, ONE},
        operation::ComplexOperation,
        parse::{parse_complex, parse_polar},
        solution::{ComplexSolution, PolarForm, SolutionValue},
    },
    error::{MathError, MathResult},
    util::{fmt::format_real, num::f64_to_usize_checked},
};

/// Largest exponent that is traced as repeated multiplication.
pub const MAX_REPEATED_POWER: usize = 5;

/// Wraps a number in parentheses unless its display already has them.
fn grouped(value: ComplexNumber) -> String {
    let text = value.to_string();
    if text.starts_with('(') { text } else { format!("({text})") }
}

/// Returns the exponent as a count when it is a real integer in
/// `0..=MAX_REPEATED_POWER`.
fn repeated_power(exponent: ComplexNumber) -> Option<usize> {
    if exponent.imaginary != 0.0 {
        return None;
    }
    f64_to_usize_checked(exponent.real).filter(|n| *n <= MAX_REPEATED_POWER)
}

/// Runs one complex operation on raw operand text.
///
/// `first` is parsed as a complex number, except for
/// [`ComplexOperation::Rectangular`] where it must be polar text `r<θ`.
/// `second` is required for binary operations and ignored otherwise.
///
/// # Errors
/// - `MathError::MissingOperand` if a needed operand is blank.
/// - `MathError::Parse` / `MathError::Format` for malformed operands.
/// - `MathError::DivisionByZero` for `/` by zero or `0` raised to a negative
///   or complex power.
/// - `MathError::Domain` for the logarithm of zero.
///
/// # Example
/// ```
/// use mathkit::complex::{ComplexNumber, ComplexOperation, solve};
///
/// let solution = solve(ComplexOperation::Multiply, "2+3j", Some("1-1j")).unwrap();
/// assert_eq!(solution.complex(), Some(ComplexNumber::new(5.0, 1.0)));
/// assert_eq!(solution.equation, "(2+3j) * (1-1j) = (5+1j)");
/// assert!(solution.trace.iter().any(|step| step.starts_with("Real part:")));
/// ```
pub fn solve(operation: ComplexOperation,
             first: &str,
             second: Option<&str>)
             -> MathResult<ComplexSolution> {
    debug!(%operation, first, ?second, "solving complex operation");

    let first = first.trim();
    if first.is_empty() {
        return Err(MathError::MissingOperand { name: "first complex number".to_string() });
    }

    if operation == ComplexOperation::Rectangular {
        return Ok(rectangular(first, parse_polar(first)?));
    }

    let mut trace = vec![format!("Parsing first complex number: {first}")];
    let z1 = parse_complex(first)?;
    trace.push(format!("z1 = {z1}"));

    if operation.is_binary() {
        let second = second.map(str::trim)
                           .filter(|s| !s.is_empty())
                           .ok_or_else(|| MathError::MissingOperand {
                               name: "second complex number for binary operations".to_string(),
                           })?;
        trace.push(format!("Parsing second complex number: {second}"));
        let z2 = parse_complex(second)?;
        trace.push(format!("z2 = {z2}"));
        return binary(operation, z1, z2, trace);
    }

    unary(operation, z1, trace)
}

/// Builds a solution whose value is complex.
fn complex_solution(operation: ComplexOperation,
                    equation: String,
                    value: ComplexNumber,
                    trace: Vec<String>)
                    -> ComplexSolution {
    ComplexSolution { operation,
                      equation,
                      value: SolutionValue::Complex(value),
                      trace }
}

fn binary(operation: ComplexOperation,
          z1: ComplexNumber,
          z2: ComplexNumber,
          mut trace: Vec<String>)
          -> MathResult<ComplexSolution> {
    let (a, b) = (z1.real, z1.imaginary);
    let (c, d) = (z2.real, z2.imaginary);
    let operands = format!("a = {}, b = {}, c = {}, d = {}",
                           format_real(a),
                           format_real(b),
                           format_real(c),
                           format_real(d));

    let result = match operation {
        ComplexOperation::Add => {
            trace.push(format!("Performing addition: {z1} + {z2}"));
            z1 + z2
        },
        ComplexOperation::Subtract => {
            trace.push(format!("Performing subtraction: {z1} - {z2}"));
            z1 - z2
        },
        ComplexOperation::Multiply => {
            let real = a.mul_add(c, -(b * d));
            let imaginary = a.mul_add(d, b * c);
            let result = z1 * z2;
            trace.push(format!("Performing multiplication: {z1} * {z2}"));
            trace.push("Using (a+bi) * (c+di) = (ac-bd) + (ad+bc)i".to_string());
            trace.push(operands);
            trace.push(format!("Real part: {}*{} - {}*{} = {}",
                               format_real(a),
                               format_real(c),
                               format_real(b),
                               format_real(d),
                               format_real(real)));
            trace.push(format!("Imaginary part: {}*{} + {}*{} = {}",
                               format_real(a),
                               format_real(d),
                               format_real(b),
                               format_real(c),
                               format_real(imaginary)));
            trace.push(format!("Result = {} + {}j = {result}",
                               format_real(real),
                               format_real(imaginary)));
            result
        },
        ComplexOperation::Divide => {
            if z2.is_zero() {
                return Err(MathError::DivisionByZero {
                    details: "the second complex number is zero".to_string(),
                });
            }
            let numerator_real = a.mul_add(c, b * d);
            let numerator_imaginary = b.mul_add(c, -(a * d));
            let denominator = c.mul_add(c, d * d);
            let result = z1 / z2;
            trace.push(format!("Performing division: {z1} / {z2}"));
            trace.push("Multiplying numerator and denominator by the conjugate of the denominator"
                .to_string());
            trace.push("(a+bi)/(c+di) = [(a+bi)*(c-di)] / [(c+di)*(c-di)]".to_string());
            trace.push(operands);
            trace.push(format!("Numerator: real = {}*{} + {}*{} = {}, imaginary = {}*{} - {}*{} = {}",
                               format_real(a),
                               format_real(c),
                               format_real(b),
                               format_real(d),
                               format_real(numerator_real),
                               format_real(b),
                               format_real(c),
                               format_real(a),
                               format_real(d),
                               format_real(numerator_imaginary)));
            trace.push(format!("Denominator: {}² + {}² = {}",
                               format_real(c),
                               format_real(d),
                               format_real(denominator)));
            trace.push(format!("Result = ({} + {}j) / {} = {result}",
                               format_real(numerator_real),
                               format_real(numerator_imaginary),
                               format_real(denominator)));
            result
        },
        ComplexOperation::Power => power(z1, z2, &mut trace)?,
        _ => unreachable!("{operation} is not a binary operation"),
    };

    let equation = format!("{} {} {} = {result}", grouped(z1), operation, grouped(z2));
    Ok(complex_solution(operation, equation, result, trace))
}

/// Computes `z1 ^ z2`, tracing repeated multiplication for small
/// non-negative integer exponents and the polar identity otherwise.
fn power(z1: ComplexNumber,
         z2: ComplexNumber,
         trace: &mut Vec<String>)
         -> MathResult<ComplexNumber> {
    trace.push(format!("Calculating power: {z1} ^ {z2}"));

    if let Some(count) = repeated_power(z2) {
        if count == 0 {
            trace.push("Any number raised to the power 0 is 1".to_string());
            return Ok(ONE);
        }
        trace.push("For integer powers, multiplying z1 by itself repeatedly:".to_string());
        let powers = z1.successive_powers(count);
        let mut previous = ONE;
        for (step, current) in powers.iter().enumerate() {
            trace.push(format!("Step {}: {previous} * {z1} = {current}", step + 1));
            previous = *current;
        }
        return Ok(previous);
    }

    let result = z1.checked_powc(z2)?;
    let polar = PolarForm::from(z1);
    trace.push("Using formula: z^w = e^(w*ln(z))".to_string());
    trace.push(format!("Convert {z1} to polar form: r = {}, θ = {} rad",
                       format_real(polar.modulus),
                       format_real(polar.argument)));
    trace.push(format!("Then, {z1}^{z2} = e^({z2} * ln({z1}))"));
    trace.push(format!("Result = {result}"));
    Ok(result)
}

fn unary(operation: ComplexOperation,
         z1: ComplexNumber,
         mut trace: Vec<String>)
         -> MathResult<ComplexSolution> {
    let (a, b) = (z1.real, z1.imaginary);
    let polar = PolarForm::from(z1);
    let (r, theta) = (format_real(polar.modulus), format_real(polar.argument));

    let (equation, result) = match operation {
        ComplexOperation::Sqrt => {
            let result = z1.sqrt();
            trace.push(format!("Calculating square root of {z1}"));
            trace.push(format!("Convert to polar form: {z1} = {r}e^({theta}j)"));
            trace.push("Square root: √r * e^(θ/2 * j)".to_string());
            trace.push(format!("Result = √{r} * e^({}j) = {result}",
                               format_real(polar.argument / 2.0)));
            (format!("√{} = {result}", grouped(z1)), result)
        },
        ComplexOperation::Abs => {
            let modulus = z1.abs();
            trace.push(format!("Calculating absolute value (modulus) of {z1}"));
            trace.push("Using formula: |a+bi| = √(a² + b²)".to_string());
            trace.push(format!("|{z1}| = √({}² + {}²) = √({} + {}) = {}",
                               format_real(a),
                               format_real(b),
                               format_real(a * a),
                               format_real(b * b),
                               format_real(modulus)));
            return Ok(ComplexSolution { operation,
                                        equation: format!("|{z1}| = {}", format_real(modulus)),
                                        value: SolutionValue::Real(modulus),
                                        trace });
        },
        ComplexOperation::Conjugate => {
            let result = z1.conj();
            trace.push(format!("Calculating conjugate of {z1}"));
            trace.push(format!("The conjugate of a+bj is a-bj: {z1} → {result}"));
            (format!("conj{} = {result}", grouped(z1)), result)
        },
        ComplexOperation::Polar => {
            trace.push(format!("Converting {z1} to polar form"));
            trace.push("For a complex number a+bj, r = √(a²+b²) and θ = atan2(b, a)".to_string());
            trace.push(format!("r = √({} + {}) = {r}", format_real(a * a), format_real(b * b)));
            trace.push(format!("θ = atan2({}, {}) = {theta} rad ({}°)",
                               format_real(b),
                               format_real(a),
                               format_real(polar.degrees())));
            return Ok(ComplexSolution { operation,
                                        equation: format!("polar{} = {polar} (r < θ, θ in radians)",
                                                          grouped(z1)),
                                        value: SolutionValue::Polar(polar),
                                        trace });
        },
        ComplexOperation::Sin => {
            let result = z1.sin();
            trace.push(format!("Calculating sine of {z1}"));
            trace.push("Using sin(a+bj) = sin(a)cosh(b) + j*cos(a)sinh(b)".to_string());
            (format!("sin{} = {result}", grouped(z1)), result)
        },
        ComplexOperation::Cos => {
            let result = z1.cos();
            trace.push(format!("Calculating cosine of {z1}"));
            trace.push("Using cos(a+bj) = cos(a)cosh(b) - j*sin(a)sinh(b)".to_string());
            (format!("cos{} = {result}", grouped(z1)), result)
        },
        ComplexOperation::Tan => {
            let result = z1.tan();
            trace.push(format!("Calculating tangent of {z1}"));
            trace.push("Using tan(z) = sin(z) / cos(z)".to_string());
            (format!("tan{} = {result}", grouped(z1)), result)
        },
        ComplexOperation::Exp => {
            let result = z1.exp();
            trace.push(format!("Calculating exponential of {z1}"));
            trace.push("Using Euler's formula: e^(a+bj) = e^a * (cos(b) + j*sin(b))".to_string());
            trace.push(format!("e^{} * (cos({}) + j*sin({}))",
                               format_real(a),
                               format_real(b),
                               format_real(b)));
            trace.push(format!("Result = {} + j*{} = {result}",
                               format_real(a.exp() * b.cos()),
                               format_real(a.exp() * b.sin())));
            (format!("exp{} = {result}", grouped(z1)), result)
        },
        ComplexOperation::Ln => {
            if z1.is_zero() {
                return Err(MathError::Domain {
                    details: "cannot compute the logarithm of zero".to_string(),
                });
            }
            let result = z1.ln();
            trace.push(format!("Calculating natural logarithm of {z1}"));
            trace.push("For a complex number in polar form: ln(r*e^(θj)) = ln(r) + θj".to_string());
            trace.push(format!("r = {r}, θ = {theta}"));
            trace.push(format!("Result = ln({r}) + {theta}j = {result}"));
            (format!("ln{} = {result}", grouped(z1)), result)
        },
        ComplexOperation::Add
        | ComplexOperation::Subtract
        | ComplexOperation::Multiply
        | ComplexOperation::Divide
        | ComplexOperation::Power
        | ComplexOperation::Rectangular => unreachable!("{operation} is not a unary operation"),
    };

    Ok(complex_solution(operation, equation, result, trace))
}

/// Converts validated polar text to rectangular form.
fn rectangular(text: &str, polar: PolarForm) -> ComplexSolution {
    let result = polar.to_rectangular();
    let trace = vec![format!("Converting polar form {text} to rectangular form"),
                     format!("r = {}, θ = {}",
                             format_real(polar.modulus),
                             format_real(polar.argument)),
                     "Rectangular form: r*cos(θ) + r*sin(θ)j".to_string(),
                     format!("Result = {} + {}j = {result}",
                             format_real(result.real),
                             format_real(result.imaginary))];

    complex_solution(ComplexOperation::Rectangular,
                     format!("rect({text}) = {result}"),
                     result,
                     trace)
}
