use std::f64::consts::{FRAC_PI_4, SQRT_2};

use mathkit::{
    complex::{
        COMPLEX_TOLERANCE, ComplexNumber, ComplexOperation, ComplexSolution, ONE, SolutionValue, parse_complex,
        parse_polar, solve,
    },
    error::{MathError, ParseError},
    util::fmt::{format_real, format_shortest},
};

fn solved(operation: ComplexOperation, first: &str, second: Option<&str>) -> ComplexSolution {
    solve(operation, first, second).unwrap_or_else(|e| panic!("{operation} on {first:?}, {second:?} failed: {e}"))
}

fn assert_close(actual: ComplexNumber, expected: ComplexNumber) {
    assert!(actual.approx_eq(expected, COMPLEX_TOLERANCE),
            "expected {expected}, got {actual}");
}

#[test]
fn operand_forms() {
    assert_eq!(parse_complex("2,3").unwrap(), ComplexNumber::new(2.0, 3.0));
    assert_eq!(parse_complex(" 2 + 3j ").unwrap(), ComplexNumber::new(2.0, 3.0));
    assert_eq!(parse_complex("(1-1j)").unwrap(), ComplexNumber::new(1.0, -1.0));
    assert_eq!(parse_complex("-4.5").unwrap(), ComplexNumber::new(-4.5, 0.0));
    assert_eq!(parse_complex("j").unwrap(), ComplexNumber::new(0.0, 1.0));
    assert_eq!(parse_complex("-2J").unwrap(), ComplexNumber::new(0.0, -2.0));
    assert_eq!(parse_complex("1e2+1e-2j").unwrap(), ComplexNumber::new(100.0, 0.01));
}

#[test]
fn malformed_operands_are_rejected() {
    assert!(matches!(parse_complex(""), Err(MathError::Parse(ParseError::EmptyLiteral))));
    assert!(matches!(parse_complex("2+3i"),
                     Err(MathError::Parse(ParseError::InvalidComplex { .. }))));
    assert!(matches!(parse_complex("two"),
                     Err(MathError::Parse(ParseError::InvalidComplex { .. }))));
    assert!(matches!(parse_polar("5"), Err(MathError::Format { .. })));
    assert!(matches!(parse_polar("5<x"), Err(MathError::Format { .. })));
}

#[test]
fn multiplication_exposes_its_intermediates() {
    let solution = solved(ComplexOperation::Multiply, "2+3j", Some("1-1j"));

    assert_eq!(solution.label(), "Multiplication");
    assert_eq!(solution.equation, "(2+3j) * (1-1j) = (5+1j)");
    assert_eq!(solution.complex(), Some(ComplexNumber::new(5.0, 1.0)));
    assert!(solution.trace
                    .contains(&"Using (a+bi) * (c+di) = (ac-bd) + (ad+bc)i".to_string()));
    assert!(solution.trace
                    .contains(&"Real part: 2.0*1.0 - 3.0*-1.0 = 5.0".to_string()));
    assert!(solution.trace
                    .contains(&"Imaginary part: 2.0*-1.0 + 3.0*1.0 = 1.0".to_string()));
}

#[test]
fn addition_and_subtraction() {
    let sum = solved(ComplexOperation::Add, "1+2j", Some("3-5j"));
    assert_eq!(sum.complex(), Some(ComplexNumber::new(4.0, -3.0)));
    assert_eq!(sum.equation, "(1+2j) + (3-5j) = (4-3j)");

    let difference = solved(ComplexOperation::Subtract, "1,2", Some("1,2"));
    assert_eq!(difference.complex(), Some(ComplexNumber::new(0.0, 0.0)));
}

#[test]
fn division_uses_the_conjugate() {
    let solution = solved(ComplexOperation::Divide, "1+1j", Some("1-1j"));

    assert_close(solution.complex().unwrap(), ComplexNumber::new(0.0, 1.0));
    assert!(solution.trace.iter().any(|step| step.starts_with("Numerator:")));
    assert!(solution.trace.contains(&"Denominator: 1.0² + -1.0² = 2.0".to_string()));
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(solve(ComplexOperation::Divide, "1+1j", Some("0")),
                     Err(MathError::DivisionByZero { .. })));
    assert!(matches!(solve(ComplexOperation::Divide, "1+1j", Some("0,0")),
                     Err(MathError::DivisionByZero { .. })));
}

#[test]
fn small_integer_powers_are_repeated_multiplication() {
    let squared = solved(ComplexOperation::Power, "1+1j", Some("2"));
    assert_eq!(squared.complex(), Some(ComplexNumber::new(0.0, 2.0)));
    assert!(squared.trace
                   .contains(&"For integer powers, multiplying z1 by itself repeatedly:".to_string()));
    assert_eq!(squared.trace.iter().filter(|step| step.starts_with("Step ")).count(), 2);

    let fifth = solved(ComplexOperation::Power, "1+1j", Some("5"));
    assert_eq!(fifth.trace.iter().filter(|step| step.starts_with("Step ")).count(), 5);
    assert_eq!(fifth.complex(), Some(ComplexNumber::new(-4.0, -4.0)));

    let zeroth = solved(ComplexOperation::Power, "7-2j", Some("0"));
    assert_eq!(zeroth.complex(), Some(ONE));
    assert!(zeroth.trace
                  .contains(&"Any number raised to the power 0 is 1".to_string()));
}

#[test]
fn other_powers_use_the_polar_identity() {
    let sixth = solved(ComplexOperation::Power, "1+1j", Some("6"));
    assert_close(sixth.complex().unwrap(), ComplexNumber::new(0.0, -8.0));
    assert!(sixth.trace.contains(&"Using formula: z^w = e^(w*ln(z))".to_string()));

    let root = solved(ComplexOperation::Power, "4", Some("0.5"));
    assert_close(root.complex().unwrap(), ComplexNumber::new(2.0, 0.0));

    assert!(matches!(solve(ComplexOperation::Power, "0", Some("-1")),
                     Err(MathError::DivisionByZero { .. })));
    assert_eq!(solved(ComplexOperation::Power, "0", Some("2.5")).complex(),
               Some(ComplexNumber::new(0.0, 0.0)));
}

#[test]
fn unary_operations() {
    let modulus = solved(ComplexOperation::Abs, "3+4j", None);
    assert_eq!(modulus.value, SolutionValue::Real(5.0));
    assert_eq!(modulus.equation, "|(3+4j)| = 5.0");
    assert_eq!(modulus.complex(), None);

    let conjugate = solved(ComplexOperation::Conjugate, "3+4j", None);
    assert_eq!(conjugate.complex(), Some(ComplexNumber::new(3.0, -4.0)));

    let root = solved(ComplexOperation::Sqrt, "-4", None);
    assert_close(root.complex().unwrap(), ComplexNumber::new(0.0, 2.0));

    let exp = solved(ComplexOperation::Exp, "0,3.141592653589793", None);
    assert_close(exp.complex().unwrap(), ComplexNumber::new(-1.0, 0.0));
    assert!(exp.trace.iter().any(|step| step.starts_with("Using Euler's formula")));

    let ln = solved(ComplexOperation::Ln, "-1", None);
    assert_close(ln.complex().unwrap(), ComplexNumber::new(0.0, std::f64::consts::PI));

    for operation in [ComplexOperation::Sin, ComplexOperation::Cos, ComplexOperation::Tan] {
        let solution = solved(operation, "0", None);
        assert!(solution.complex().is_some(), "{operation} produced no complex value");
    }
}

#[test]
fn logarithm_of_zero_is_error() {
    assert!(matches!(solve(ComplexOperation::Ln, "0", None), Err(MathError::Domain { .. })));
}

#[test]
fn polar_and_rectangular_conversion() {
    let polar = solved(ComplexOperation::Polar, "1+1j", None);
    let SolutionValue::Polar(form) = polar.value else {
        panic!("expected a polar value, got {:?}", polar.value);
    };
    assert!((form.modulus - SQRT_2).abs() < 1e-12);
    assert!((form.argument - FRAC_PI_4).abs() < 1e-12);
    assert!((form.degrees() - 45.0).abs() < 1e-9);

    let rect = solved(ComplexOperation::Rectangular, "2<0", None);
    assert_eq!(rect.complex(), Some(ComplexNumber::new(2.0, 0.0)));
    assert_eq!(rect.equation, "rect(2<0) = (2+0j)");

    assert!(matches!(solve(ComplexOperation::Rectangular, "2+3j", None),
                     Err(MathError::Format { .. })));
}

#[test]
fn result_forms() {
    let solution = solved(ComplexOperation::Multiply, "2+3j", Some("1-1j"));
    let forms = solution.forms().unwrap();

    assert!((forms.modulus() - 26_f64.sqrt()).abs() < 1e-12);
    let rows = forms.rows();
    assert_eq!(rows.iter().map(|(label, _)| *label).collect::<Vec<_>>(),
               ["Rectangular form", "Polar form", "Modulus", "Argument"]);
    assert_eq!(rows[0].1, "5.0 + 1.0j");
}

#[test]
fn missing_operands_are_reported() {
    assert!(matches!(solve(ComplexOperation::Add, "  ", Some("1")),
                     Err(MathError::MissingOperand { .. })));
    assert!(matches!(solve(ComplexOperation::Add, "1", None),
                     Err(MathError::MissingOperand { .. })));
    assert!(matches!(solve(ComplexOperation::Add, "1", Some("")),
                     Err(MathError::MissingOperand { .. })));
    assert!(solve(ComplexOperation::Sqrt, "4", None).is_ok());
}

#[test]
fn operation_names() {
    assert_eq!("*".parse::<ComplexOperation>().unwrap(), ComplexOperation::Multiply);
    assert_eq!("LN".parse::<ComplexOperation>().unwrap(), ComplexOperation::Ln);
    assert_eq!("log".parse::<ComplexOperation>().unwrap(), ComplexOperation::Ln);
    assert!(matches!("cbrt".parse::<ComplexOperation>(),
                     Err(MathError::UnknownOperation { .. })));
    assert!(ComplexOperation::Power.is_binary());
    assert!(!ComplexOperation::Rectangular.is_binary());
}

#[test]
fn extreme_magnitudes_use_exponents() {
    assert_eq!(format_real(1e20), "1e+20");
    assert_eq!(format_real(1e16), "1e+16");
    assert_eq!(format_real(9_999_999_999_999_998.0), "9999999999999998.0");
    assert_eq!(format_real(0.0001), "0.0001");
    assert_eq!(format_real(0.00001), "1e-05");
    assert_eq!(format_real(-2.5e-300), "-2.5e-300");
    assert_eq!(format_real(-0.0), "-0.0");
    assert_eq!(format_shortest(123.0), "123");

    assert_eq!(ComplexNumber::new(1e20, 1e-5).to_string(), "(1e+20+1e-05j)");
    assert_eq!(ComplexNumber::new(0.0, 2e17).to_string(), "2e+17j");
}
