//! End-to-end runs through each engine, one per typical request.

use mathkit::{
    base::{TargetBase, convert},
    complex::{self, ComplexNumber, ComplexOperation},
    logic::{LogicOperation, evaluate_bits},
    property::analyze,
    set::{self, SetValue, parse_set},
};

#[test]
fn hex_to_binary_and_decimal() {
    let conversion = convert("FF", 16, &[TargetBase::Binary, TargetBase::Decimal]).unwrap();
    assert_eq!(conversion.results,
               [("Binary(2)".to_string(), "11111111".to_string()),
                ("Decimal(10)".to_string(), "255".to_string())]);
}

#[test]
fn set_intersection() {
    let solution = set::solve("intersection", "1,2,3", "2,3,4").unwrap();
    assert_eq!(solution.value, SetValue::Elements(parse_set("2 3")));
    assert_eq!(solution.value.to_string(), "{2, 3}");
}

#[test]
fn bitwise_xor() {
    let solution = evaluate_bits(LogicOperation::Xor, "101", "011").unwrap();
    assert_eq!(solution.result, "110");
}

#[test]
fn complex_multiplication() {
    let solution = complex::solve(ComplexOperation::Multiply, "2+3j", Some("1-1j")).unwrap();
    assert_eq!(solution.complex(), Some(ComplexNumber::new(5.0, 1.0)));

    let forms = solution.forms().unwrap();
    assert!((forms.modulus() - 26_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn ninety_seven_is_prime() {
    let properties = analyze("97").unwrap();
    let real = properties.real().unwrap();
    assert!(real.prime);
    assert!(!real.composite);
    assert!(!real.even);
    assert!(real.integer);
    assert!(real.natural);
}

#[test]
fn three_quarters_is_rational() {
    let properties = analyze("3/4").unwrap();
    let real = properties.real().unwrap();
    assert!(real.rational);
    assert!(!real.integer);
    assert!(real.positive);
}
