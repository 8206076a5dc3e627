use mathkit::{
    error::MathError,
    logic::{LogicOperation, evaluate_bits, evaluate_bools, truth_table},
};

fn bits(operation: LogicOperation, a: &str, b: &str) -> String {
    evaluate_bits(operation, a, b).unwrap_or_else(|e| panic!("{operation} on {a:?}, {b:?} failed: {e}"))
                                  .result
}

#[test]
fn bitwise_operations() {
    assert_eq!(bits(LogicOperation::And, "1100", "1010"), "1000");
    assert_eq!(bits(LogicOperation::Or, "1100", "1010"), "1110");
    assert_eq!(bits(LogicOperation::Xor, "1100", "1010"), "0110");
    assert_eq!(bits(LogicOperation::Nand, "1100", "1010"), "0111");
    assert_eq!(bits(LogicOperation::Nor, "1100", "1010"), "0001");
    assert_eq!(bits(LogicOperation::Xnor, "1100", "1010"), "1001");
    assert_eq!(bits(LogicOperation::Implies, "1100", "1010"), "1011");
    assert_eq!(bits(LogicOperation::NotA, "1100", ""), "0011");
}

#[test]
fn shorter_operand_is_zero_padded() {
    assert_eq!(bits(LogicOperation::Or, "1", "1000"), "1001");
    assert_eq!(bits(LogicOperation::Nor, "", "01"), "10");
}

#[test]
fn rendered_expressions() {
    let xor = evaluate_bits(LogicOperation::Xor, "101", "011").unwrap();
    assert_eq!(xor.expression(), "101 ⊕ 011 = 110");

    let not = evaluate_bits(LogicOperation::NotA, "101", "").unwrap();
    assert_eq!(not.expression(), "¬101 = 010");

    let boolean = evaluate_bools(LogicOperation::And, true, false);
    assert_eq!(boolean.expression(), "True ∧ False = False");
}

#[test]
fn invalid_bits_are_rejected() {
    match evaluate_bits(LogicOperation::And, "1021", "1") {
        Err(MathError::InvalidDigit { digit,
                                      allowed,
                                      context, }) => {
            assert_eq!(digit, '2');
            assert_eq!(allowed, "01");
            assert_eq!(context, "input A");
        },
        other => panic!("expected an invalid digit, got {other:?}"),
    }

    assert!(matches!(evaluate_bits(LogicOperation::Or, "1", "1x"),
                     Err(MathError::InvalidDigit { digit: 'x', .. })));
}

#[test]
fn negation_ignores_b() {
    assert_eq!(bits(LogicOperation::NotA, "0110", "not even bits"), "1001");
}

#[test]
fn boolean_mode() {
    assert!(evaluate_bools(LogicOperation::Implies, false, true).result);
    assert!(!evaluate_bools(LogicOperation::Implies, true, false).result);
    assert!(evaluate_bools(LogicOperation::Xnor, false, false).result);
    assert!(evaluate_bools(LogicOperation::NotA, false, false).result);
}

#[test]
fn truth_tables() {
    for operation in LogicOperation::ALL {
        let table = truth_table(operation);
        assert_eq!(table.len(), 4);
        for row in &table {
            assert_eq!(row.result, operation.apply(row.a, row.b.unwrap_or(false)));
        }
    }

    let nor: Vec<bool> = truth_table(LogicOperation::Nor).iter().map(|row| row.result).collect();
    assert_eq!(nor, [true, false, false, false]);

    let not = truth_table(LogicOperation::NotA);
    assert!(not.iter().all(|row| row.b.is_none() && row.result != row.a));
}

#[test]
fn operation_names() {
    assert_eq!("NOT_A".parse::<LogicOperation>().unwrap(), LogicOperation::NotA);
    assert!(matches!("nimply".parse::<LogicOperation>(),
                     Err(MathError::UnknownOperation { .. })));
}
