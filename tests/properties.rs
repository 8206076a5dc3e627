use mathkit::{
    complex::ComplexNumber,
    error::{MathError, ParseError},
    expression::{
        evaluate,
        parser::{MAX_DEPTH, MAX_TOKENS},
    },
    history::History,
    property::{NumberKind, NumberProperties, RealProperties, analyze, is_prime, is_rational, limit_denominator},
};

fn analyzed(input: &str) -> NumberProperties {
    analyze(input).unwrap_or_else(|e| panic!("analyzing {input:?} failed: {e}"))
}

fn real(input: &str) -> RealProperties {
    *analyzed(input).real()
                    .unwrap_or_else(|| panic!("{input:?} should be real"))
}

fn verdict(properties: &NumberProperties, label: &str) -> bool {
    properties.rows()
              .into_iter()
              .find(|(name, _)| *name == label)
              .map(|(_, verdict)| verdict)
              .unwrap_or_else(|| panic!("no row named {label:?}"))
}

#[test]
fn primality() {
    assert!(!is_prime(0));
    assert!(!is_prime(1));
    assert!(is_prime(2));
    assert!(is_prime(3));
    assert!(!is_prime(4));
    assert!(is_prime(17));
    assert!(!is_prime(18));
    assert!(!is_prime(25));
    assert!(!is_prime(49));
    assert!(is_prime(97));
    assert!(is_prime(7919));
    assert!(!is_prime(7917));
    assert!(is_prime(9_007_199_254_740_881));
}

#[test]
fn rational_approximation() {
    assert_eq!(limit_denominator(0.5, 1000), Some((1, 2)));
    assert_eq!(limit_denominator(0.1, 1000), Some((1, 10)));
    assert_eq!(limit_denominator(1.0 / 3.0, 1000), Some((1, 3)));
    assert_eq!(limit_denominator(-1.25, 1000), Some((-5, 4)));
    assert_eq!(limit_denominator(f64::INFINITY, 1000), None);

    assert!(is_rational(0.1));
    assert!(is_rational(123.0));
    assert!(!is_rational(std::f64::consts::E));
    assert!(!is_rational(f64::NEG_INFINITY));
}

#[test]
fn prime_integer() {
    let properties = analyzed("97");
    for (label, expected) in [("Complex Number", false),
                              ("Real Number", true),
                              ("Rational Number", true),
                              ("Irrational Number", false),
                              ("Integer", true),
                              ("Whole Number", true),
                              ("Natural Number", true),
                              ("Positive", true),
                              ("Negative", false),
                              ("Zero", false),
                              ("Even", false),
                              ("Odd", true),
                              ("Prime", true),
                              ("Composite", false)]
    {
        assert_eq!(verdict(&properties, label), expected, "{label}");
    }
}

#[test]
fn special_integers() {
    let zero = real("0");
    assert!(zero.zero && zero.whole && zero.even && zero.integer);
    assert!(!zero.natural && !zero.positive && !zero.prime && !zero.composite);

    let one = real("1");
    assert!(one.natural && one.odd);
    assert!(!one.prime && !one.composite);

    let negative = real("-7");
    assert!(negative.negative && negative.odd && negative.integer);
    assert!(!negative.whole && !negative.natural && !negative.prime);

    let composite = real("91");
    assert!(composite.composite && !composite.prime);
}

#[test]
fn fractions_and_decimals() {
    let quarter = real("3/4");
    assert!(quarter.rational && quarter.positive);
    assert!(!quarter.integer && !quarter.even && !quarter.odd && !quarter.whole);

    let whole_fraction = real("8/4");
    assert!(whole_fraction.integer && whole_fraction.prime);

    let decimal = real("-0.125");
    assert!(decimal.rational && decimal.negative);

    let approx_pi = real("3.14159265358979");
    assert!(approx_pi.irrational && !approx_pi.rational);

    assert!(real("22/7").rational);
}

#[test]
fn complex_numbers() {
    let properties = analyzed("2+3j");
    assert!(properties.is_complex());
    assert_eq!(properties.rows(), [("Complex Number", true), ("Real Number", false)]);
    assert_eq!(properties.number.kind, NumberKind::Complex);

    let spelled_with_i = analyzed("4 - 2i");
    assert_eq!(spelled_with_i.number.value, ComplexNumber::new(4.0, -2.0));

    let no_imaginary_part = analyzed("5+0j");
    assert!(!no_imaginary_part.is_complex());
    assert_eq!(no_imaginary_part.display_value(), "5.0");
    assert_eq!(no_imaginary_part.rows().len(), 14);
}

#[test]
fn expressions_are_evaluated() {
    assert!(real("2*3+1").prime);
    assert!(real("(10 - 4) / 2").integer);
    assert!(real("-(-5)").natural);
}

#[test]
fn summaries() {
    assert_eq!(analyzed("97").summary(),
               "Number: 97.0 - Real: Yes, Rational: Yes, Integer: Yes, Positive: Yes, Prime: Yes");
    assert_eq!(analyzed("12").summary(),
               "Number: 12.0 - Real: Yes, Rational: Yes, Integer: Yes, Positive: Yes, Prime: No");
    assert_eq!(analyzed("-7").summary(),
               "Number: -7.0 - Real: Yes, Rational: Yes, Integer: Yes, Positive: No");
    assert_eq!(analyzed("3/4").summary(),
               "Number: 0.75 - Real: Yes, Rational: Yes, Integer: No, Positive: Yes");
    assert_eq!(analyzed("4-2j").summary(),
               "Number: (4-2j) - Complex Number: Yes, Real Number: No");
}

#[test]
fn bad_input_is_reported_by_route() {
    assert!(matches!(analyze("   "), Err(MathError::MissingOperand { .. })));
    assert!(matches!(analyze("2+j"), Err(MathError::Parse(ParseError::InvalidComplex { .. }))));
    assert!(matches!(analyze("1/2/3"), Err(MathError::Parse(ParseError::InvalidFraction { .. }))));
    assert!(matches!(analyze("x/2"), Err(MathError::Parse(ParseError::InvalidFraction { .. }))));
    assert!(matches!(analyze("2**3"), Err(MathError::Parse(ParseError::InvalidNumber { .. }))));
    assert!(matches!(analyze("abc"), Err(MathError::Parse(ParseError::InvalidNumber { .. }))));
}

#[test]
fn zero_denominators() {
    assert!(matches!(analyze("5/0"), Err(MathError::DivisionByZero { .. })));
    assert!(matches!(analyze("(1+1)/(2-2)"), Err(MathError::DivisionByZero { .. })));
    assert!(matches!(analyze("1j/0"), Err(MathError::DivisionByZero { .. })));
}

#[test]
fn restricted_expressions() {
    assert_eq!(evaluate("2+3*4").unwrap(), ComplexNumber::new(14.0, 0.0));
    assert_eq!(evaluate("(2+3)*4").unwrap(), ComplexNumber::new(20.0, 0.0));
    assert_eq!(evaluate("8/2/2").unwrap(), ComplexNumber::new(2.0, 0.0));
    assert_eq!(evaluate("-(2+3j)*2").unwrap(), ComplexNumber::new(-4.0, -6.0));
    assert_eq!(evaluate("+.5e1").unwrap(), ComplexNumber::new(5.0, 0.0));

    assert!(matches!(evaluate(""), Err(MathError::Parse(ParseError::UnexpectedEndOfInput))));
    assert!(matches!(evaluate("(1+2"),
                     Err(MathError::Parse(ParseError::ExpectedClosingParen { position: 0 }))));
    assert!(matches!(evaluate("1 2"),
                     Err(MathError::Parse(ParseError::UnexpectedTrailingTokens { position: 2, .. }))));
    assert!(matches!(evaluate("2 $ 3"),
                     Err(MathError::Parse(ParseError::UnexpectedToken { position: 2, .. }))));
    assert_eq!(evaluate("10 / 0").unwrap_err().to_string(),
               "Division by zero: divisor at position 5 is zero.");
    assert!(matches!(evaluate("2 * / 3"),
                     Err(MathError::Parse(ParseError::UnexpectedToken { position: 4, .. }))));
}

#[test]
fn nesting_is_bounded() {
    let deepest = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert_eq!(evaluate(&deepest).unwrap(), ComplexNumber::new(1.0, 0.0));

    let too_deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
    assert!(matches!(evaluate(&too_deep),
                     Err(MathError::Parse(ParseError::TooDeep { position, .. })) if position == MAX_DEPTH));

    let signs = format!("{}1", "-".repeat(MAX_DEPTH + 1));
    assert!(matches!(evaluate(&signs), Err(MathError::Parse(ParseError::TooDeep { .. }))));
}

#[test]
fn long_input_is_bounded() {
    let chain = format!("{}1", "1+".repeat(2000));
    assert_eq!(evaluate(&chain).unwrap(), ComplexNumber::new(2001.0, 0.0));
    assert_eq!(evaluate(&format!("{}1", "2/".repeat(500))).unwrap().real, 2_f64.powi(-498));

    let huge_chain = format!("{}1", "1+".repeat(200_000));
    assert!(matches!(evaluate(&huge_chain),
                     Err(MathError::Parse(ParseError::TooLong { limit, .. })) if limit == MAX_TOKENS));

    let huge_nesting = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert!(matches!(analyze(&huge_nesting), Err(MathError::Parse(ParseError::TooLong { .. }))));
    assert!(matches!(analyze(&huge_chain), Err(MathError::Parse(ParseError::TooLong { .. }))));
}

#[test]
fn history_export() {
    let mut history = History::new();
    assert_eq!(history.export_lines(), ["Number Properties Analysis", "=========================", ""]);

    history.record(&analyzed("3/4"));
    history.push("custom note");
    assert_eq!(history.len(), 2);
    assert_eq!(history.export_lines()[3],
               "Number: 0.75 - Real: Yes, Rational: Yes, Integer: No, Positive: Yes");
    assert_eq!(history.entries()[1], "custom note");

    history.clear();
    assert!(history.is_empty());
}

#[test]
fn batch_analysis_keeps_going_past_bad_input() {
    let mut history = History::new();
    let outcomes = history.analyze_all(["97", "abc", "5/0", "3/4"]);

    let failed: Vec<&str> = outcomes.iter()
                                    .filter(|(_, outcome)| outcome.is_err())
                                    .map(|(input, _)| *input)
                                    .collect();
    assert_eq!(failed, ["abc", "5/0"]);
    assert!(matches!(outcomes[2].1, Err(MathError::DivisionByZero { .. })));

    assert_eq!(history.entries(),
               ["Number: 97.0 - Real: Yes, Rational: Yes, Integer: Yes, Positive: Yes, Prime: Yes",
                "Number: 0.75 - Real: Yes, Rational: Yes, Integer: No, Positive: Yes"]);
}
