use crate::{
    complex::{number::ComplexNumber, solution::PolarForm},
    error::{MathError, MathResult, ParseError},
};

/// Parses a finite floating-point literal, ignoring surrounding whitespace.
pub(crate) fn parse_finite(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parses the coefficient in front of `j`. A bare sign means one.
fn parse_coefficient(text: &str) -> Option<f64> {
    match text {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        _ => parse_finite(text),
    }
}

/// Finds the sign that separates the real part from the imaginary part.
///
/// The sign must not be the first character and must not belong to an
/// exponent such as `1e-3`.
fn split_index(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    body.char_indices()
        .rev()
        .find(|&(index, ch)| {
            index > 0 && (ch == '+' || ch == '-') && !matches!(bytes[index - 1], b'e' | b'E')
        })
        .map(|(index, _)| index)
}

/// Parses a native complex literal: `a`, `bj`, `a+bj`, optionally wrapped in
/// one pair of parentheses. Whitespace is ignored.
fn parse_literal(text: &str) -> Option<ComplexNumber> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let body = compact.strip_prefix('(')
                      .and_then(|inner| inner.strip_suffix(')'))
                      .unwrap_or(&compact);

    let Some(imaginary_part) = body.strip_suffix(['j', 'J']) else {
        return parse_finite(body).map(ComplexNumber::from);
    };

    match split_index(imaginary_part) {
        Some(index) => {
            let real = parse_finite(&imaginary_part[..index])?;
            let imaginary = parse_coefficient(&imaginary_part[index..])?;
            Some(ComplexNumber::new(real, imaginary))
        },
        None => parse_coefficient(imaginary_part).map(|imaginary| ComplexNumber::new(0.0, imaginary)),
    }
}

/// Parses complex-number text.
///
/// Two forms are accepted:
/// - `a,b`: two floating-point literals, giving `a + bj`;
/// - a complex literal such as `2+3j`, `-1.5j`, `4` or `(1-1j)`.
///
/// # Errors
/// Returns `ParseError::EmptyLiteral` for blank input and
/// `ParseError::InvalidComplex` when neither form parses.
///
/// # Example
/// ```
/// use mathkit::complex::{ComplexNumber, parse_complex};
///
/// assert_eq!(parse_complex("2,3").unwrap(), ComplexNumber::new(2.0, 3.0));
/// assert_eq!(parse_complex("2 + 3j").unwrap(), ComplexNumber::new(2.0, 3.0));
/// assert_eq!(parse_complex("1e-3j").unwrap(), ComplexNumber::new(0.0, 1e-3));
/// assert_eq!(parse_complex("(1-j)").unwrap(), ComplexNumber::new(1.0, -1.0));
/// assert!(parse_complex("2+3i").is_err());
/// ```
pub fn parse_complex(input: &str) -> MathResult<ComplexNumber> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyLiteral.into());
    }

    if let Some((real, imaginary)) = trimmed.split_once(',')
       && !imaginary.contains(',')
       && let (Some(real), Some(imaginary)) = (parse_finite(real), parse_finite(imaginary))
    {
        return Ok(ComplexNumber::new(real, imaginary));
    }

    parse_literal(trimmed).ok_or_else(|| {
                              ParseError::InvalidComplex { input: input.to_string() }.into()
                          })
}

/// Parses polar text of the form `r<theta`, with `theta` in radians.
///
/// # Errors
/// Returns `MathError::Format` unless the input contains exactly one `<` with
/// a finite number on each side.
///
/// # Example
/// ```
/// use mathkit::complex::parse_polar;
///
/// let polar = parse_polar("2 < 0.5").unwrap();
/// assert_eq!(polar.modulus, 2.0);
/// assert_eq!(polar.argument, 0.5);
/// assert!(parse_polar("2<0.5<1").is_err());
/// assert!(parse_polar("2+3j").is_err());
/// ```
pub fn parse_polar(input: &str) -> MathResult<PolarForm> {
    let format_error = |details: &str| MathError::Format { input:   input.to_string(),
                                                           details: details.to_string(), };

    let parts: Vec<&str> = input.split('<').collect();
    let [modulus, argument] = parts.as_slice() else {
        return Err(format_error("expected polar form r<θ with exactly one '<'"));
    };
    let modulus = parse_finite(modulus).ok_or_else(|| format_error("the modulus r is not a number"))?;
    let argument =
        parse_finite(argument).ok_or_else(|| format_error("the angle θ is not a number"))?;

    Ok(PolarForm { modulus, argument })
}
