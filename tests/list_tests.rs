//! Integration tests for building and navigating chains.

use constree::{TreeError, Value, build_list, cdr, cons, is_singleton, list};

fn sym(name: &str) -> Value {
    Value::symbol(name)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_empty_build_is_nil() {
    let list = build_list(Vec::new());
    assert!(list.is_empty());
    assert_eq!(list.length(), 0);
    assert_eq!(list.to_string(), "()");
}

#[test]
fn test_three_items_in_order() {
    let (a, b, c) = (sym("a"), sym("b"), sym("c"));
    let list = build_list([a.clone(), b.clone(), c.clone()]);
    assert_eq!(list.length(), 3);
    assert!(list.item(0).unwrap().ptr_eq(&a));
    assert!(list.item(1).unwrap().ptr_eq(&b));
    assert!(list.item(2).unwrap().ptr_eq(&c));
    assert_eq!(
        list.item(3).unwrap_err(),
        TreeError::Index { index: 3, len: 3 }
    );
}

#[test]
fn test_cons_shape_error() {
    let err = cons(sym("a"), Value::integer(1)).unwrap_err();
    assert!(matches!(err, TreeError::Shape { ref found } if found == "Number"));
}

#[test]
fn test_collect_into_value() {
    let list: Value = ["x", "y", "z"].into_iter().map(Value::symbol).collect();
    assert_eq!(list.to_string(), "(x (y (z ())))");
}

// ============================================================================
// Foo/Bar Scenario
// ============================================================================

#[test]
fn test_foo_bar_scenario() {
    let foo = sym("foo");
    let bar = sym("bar");
    let x = list![foo.clone()];
    let y = list![foo.clone(), bar.clone()];

    assert!(is_singleton(&x));
    assert!(!is_singleton(&y));
    assert!(!x.equals(&y));
    assert_eq!(y.item(1).unwrap(), &bar);
    assert_eq!(y.to_string(), "(foo (bar ()))");
}

#[test]
fn test_error_scenario() {
    assert!(matches!(
        Value::Nil.tail(),
        Err(TreeError::EmptyList { operation: "tail" })
    ));
    assert!(matches!(
        list![sym("foo")].item(-1),
        Err(TreeError::Index { index: -1, .. })
    ));
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_tail_round_trip_preserves_identity() {
    let items = vec![sym("a"), Value::integer(1), list![sym("b")]];
    let list = build_list(items.clone());
    let tail = list.tail().unwrap();
    assert_eq!(tail.len(), items.len() - 1);
    for (got, want) in tail.iter().zip(&items[1..]) {
        assert!(got.ptr_eq(want));
    }
}

#[test]
fn test_length_recurrence() {
    let list = list![sym("a"), sym("b"), sym("c")];
    assert_eq!(list.length(), 1 + cdr(&list).length());
    assert_eq!(cdr(cdr(cdr(&list))).length(), 0);
}

#[test]
fn test_map_keeps_order_and_length() {
    let list = list![Value::integer(1), Value::integer(2), Value::integer(3)];
    let labels = list.map(|v| Value::symbol(&format!("n{v}")));
    assert_eq!(labels.length(), 3);
    assert_eq!(labels.to_string(), "(n1 (n2 (n3 ())))");
    // Source chain is untouched.
    assert_eq!(list.to_string(), "(1 (2 (3 ())))");
}

#[test]
fn test_for_loop_over_chain() {
    let list = list![sym("a"), sym("b")];
    let mut names = Vec::new();
    for item in &list {
        names.push(item.to_string());
    }
    assert_eq!(names, ["a", "b"]);
    assert_eq!(list.to_vec().len(), 2);
}

#[test]
fn test_algebraic_tree() {
    // a*b + c
    let product = list![sym("*"), sym("a"), sym("b")];
    let sum = list![sym("+"), product.clone(), sym("c")];

    assert_eq!(sum.operator().unwrap(), &sym("+"));
    assert!(sum.left_operand().unwrap().ptr_eq(&product));
    assert_eq!(sum.right_operand().unwrap(), &sym("c"));
    assert_eq!(
        sum.left_operand().unwrap().right_operand().unwrap(),
        &sym("b")
    );
    assert_eq!(sum.to_string(), "(+ ((* (a (b ()))) (c ())))");
}
