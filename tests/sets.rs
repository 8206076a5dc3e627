use mathkit::{
    error::MathError,
    set::{SetOperation, SetSolution, SetValue, parse_set, solve, tokenize},
};

fn solved(operation: &str, a: &str, b: &str) -> SetSolution {
    solve(operation, a, b).unwrap_or_else(|e| panic!("{operation} on {a:?}, {b:?} failed: {e}"))
}

fn result(operation: &str, a: &str, b: &str) -> String {
    solved(operation, a, b).value.to_string()
}

#[test]
fn element_lists() {
    assert_eq!(tokenize("a,b c"), ["a", "b", "c"]);
    assert_eq!(tokenize("  ,, "), Vec::<String>::new());
    assert_eq!(tokenize(r#"'x, y' "z""#), ["x, y", "z"]);
    assert_eq!(tokenize(r#""open ended"#), ["open ended"]);
    assert_eq!(parse_set("b a b").len(), 2);
}

#[test]
fn elements_are_raw_strings() {
    let union = solved("union", "5", "05");
    assert_eq!(union.value, SetValue::Elements(parse_set("05 5")));
    assert_eq!(result("intersection", "1.0", "1"), "∅ (Empty Set)");
}

#[test]
fn set_valued_operations() {
    assert_eq!(result("union", "1, 2", "2, 3"), "{1, 2, 3}");
    assert_eq!(result("intersection", "1 2 3", "2 3 4"), "{2, 3}");
    assert_eq!(result("difference", "1 2 3", "2 3 4"), "{1}");
    assert_eq!(result("symmetric_difference", "1 2 3", "2 3 4"), "{1, 4}");
    assert_eq!(result("difference", "1 2", "1 2"), "∅ (Empty Set)");
}

#[test]
fn cartesian_product_pairs() {
    assert_eq!(result("cartesian_product", "a b", "1"), "{(a, 1), (b, 1)}");
    assert_eq!(result("cartesian_product", "a b", ""), "∅ (Empty Set)");

    let SetValue::Pairs(pairs) = solved("cartesian_product", "a b c", "x y").value else {
        panic!("expected pairs");
    };
    assert_eq!(pairs.len(), 6);
}

#[test]
fn predicates() {
    assert_eq!(solved("is_subset", "1 2", "1 2 3").value, SetValue::Truth(true));
    assert_eq!(solved("is_superset", "1 2", "1 2 3").value, SetValue::Truth(false));
    assert_eq!(solved("is_disjoint", "1 2", "3 4").value, SetValue::Truth(true));
    assert_eq!(result("is_disjoint", "1 2", "2"), "False");
    assert_eq!(solved("is_subset", "", "1").value, SetValue::Truth(true));
    assert!(SetOperation::IsDisjoint.is_predicate());
    assert!(!SetOperation::Union.is_predicate());
}

#[test]
fn quoted_elements() {
    let solution = solved("union", r#""New York", Boston"#, "Boston 'Los Angeles'");
    assert_eq!(solution.value.to_string(), "{Boston, Los Angeles, New York}");
}

#[test]
fn rendered_expression() {
    let solution = solved("intersection", "1, 2, 3", "2 3 4");
    assert_eq!(solution.label(), "Intersection (A ∩ B)");
    assert_eq!(solution.expression(), "{1, 2, 3} INTERSECTION {2, 3, 4}");

    let empty = solved("union", "", "1");
    assert_eq!(empty.expression(), "∅ UNION {1}");
}

#[test]
fn unknown_operation_is_error() {
    assert!(matches!(solve("power_set", "1", "2"), Err(MathError::UnknownOperation { .. })));
    assert!(solve("UNION", "1", "2").is_ok());
}
