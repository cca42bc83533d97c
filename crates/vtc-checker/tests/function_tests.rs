//! Function expressions, arrow functions and parameter patterns.

mod common;

use common::*;
use vtc_ast::NodeArena;
use vtc_solver::{SymbolTable, is_any};

#[test]
fn test_function_expression_is_rejected_without_visiting_body() {
    // function () { return foo }
    let mut arena = NodeArena::new();
    let foo = arena.add_identifier(21, 24, "foo");
    let body = arena.add_block(12, 26, vec![foo]);
    let func = arena.add_function(0, 26, Vec::new(), body);

    let (ty, diagnostics) = infer(&arena, func, &SymbolTable::empty());
    assert!(is_any(&ty));
    assert_eq!(
        diagnostics,
        vec![diag(
            0,
            26,
            "Function expression is not allowed in a template, use arrow function expression instead"
        )]
    );
}

#[test]
fn test_arrow_with_block_body_is_rejected() {
    // () => { 123 + foo }
    let mut arena = NodeArena::new();
    let n = arena.add_number(8, 11, 123.0);
    let foo = arena.add_identifier(14, 17, "foo");
    let sum = arena.add_binary(8, 17, n, "+", foo);
    let body = arena.add_block(6, 19, vec![sum]);
    let arrow = arena.add_arrow(0, 19, Vec::new(), body, false);

    let (ty, diagnostics) = infer(&arena, arrow, &SymbolTable::empty());
    assert!(is_any(&ty));
    assert_eq!(
        diagnostics,
        vec![diag(0, 19, "An arrow function that has curly braces is not allowed")]
    );
}

#[test]
fn test_arrow_body_type_and_parameter_scope() {
    // x => x + 1
    let mut arena = NodeArena::new();
    let param = arena.add_identifier(0, 1, "x");
    let x = arena.add_identifier(5, 6, "x");
    let one = arena.add_number(9, 10, 1.0);
    let body = arena.add_binary(5, 10, x, "+", one);
    let arrow = arena.add_arrow(0, 10, vec![param], body, false);

    // `x` is bound to `any`, so `x + 1` is `any` as well.
    let (ty, diagnostics) = infer(&arena, arrow, &SymbolTable::empty());
    assert!(is_any(&ty));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_arrow_parameters_shadow_outer_names() {
    // foo => foo * 2, with an outer `foo: string`
    let mut arena = NodeArena::new();
    let param = arena.add_identifier(0, 3, "foo");
    let foo = arena.add_identifier(7, 10, "foo");
    let two = arena.add_number(13, 14, 2.0);
    let body = arena.add_binary(7, 14, foo, "*", two);
    let arrow = arena.add_arrow(0, 14, vec![param], body, false);

    let (ty, diagnostics) = infer(&arena, arrow, &scope(&[("foo", string())]));
    assert_eq!(ty, number());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_arrow_body_sees_outer_scope() {
    // () => count + 1
    let mut arena = NodeArena::new();
    let count = arena.add_identifier(6, 11, "count");
    let one = arena.add_number(14, 15, 1.0);
    let body = arena.add_binary(6, 15, count, "+", one);
    let arrow = arena.add_arrow(0, 15, Vec::new(), body, false);

    let (ty, diagnostics) = infer(&arena, arrow, &scope(&[("count", number())]));
    assert_eq!(ty, number());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_async_arrow_is_reported_but_checked() {
    // async () => foo
    let mut arena = NodeArena::new();
    let foo = arena.add_identifier(12, 15, "foo");
    let arrow = arena.add_arrow(0, 15, Vec::new(), foo, true);

    let (_, diagnostics) = infer(&arena, arrow, &SymbolTable::empty());
    assert_eq!(
        diagnostics,
        vec![
            diag(0, 15, "An async function expression is not allowed in a template"),
            diag(12, 15, "'foo' is not defined"),
        ]
    );
}

#[test]
fn test_parameter_scope_is_popped_after_arrow() {
    // (x => x)(x)
    let mut arena = NodeArena::new();
    let param = arena.add_identifier(1, 2, "x");
    let x_body = arena.add_identifier(6, 7, "x");
    let arrow = arena.add_arrow(1, 7, vec![param], x_body, false);
    let x_arg = arena.add_identifier(9, 10, "x");
    let call = arena.add_call(0, 11, arrow, vec![x_arg]);

    let diagnostics = check_expr(&arena, call, &SymbolTable::empty());
    assert_eq!(diagnostics, vec![diag(9, 10, "'x' is not defined")]);
}

#[test]
fn test_destructuring_patterns_bind_every_name() {
    // ({ a, b: [c, , ...d] }, e = f) => a + c + d + e
    let mut arena = NodeArena::new();
    let a_key = arena.add_identifier(3, 4, "a");
    let a_value = arena.add_identifier(3, 4, "a");
    let a_prop = arena.add_property(3, 4, a_key, a_value, true);
    let b_key = arena.add_identifier(6, 7, "b");
    let c = arena.add_identifier(10, 11, "c");
    let d = arena.add_identifier(18, 19, "d");
    let rest = arena.add_rest_element(15, 19, d);
    let array = arena.add_array_pattern(9, 20, vec![c, vtc_ast::NodeIndex::NONE, rest]);
    let b_prop = arena.add_property(6, 20, b_key, array, false);
    let object = arena.add_object_pattern(1, 22, vec![a_prop, b_prop]);
    let e = arena.add_identifier(24, 25, "e");
    let f = arena.add_identifier(28, 29, "f");
    let assign = arena.add_assignment_pattern(24, 29, e, f);

    let a_use = arena.add_identifier(34, 35, "a");
    let c_use = arena.add_identifier(38, 39, "c");
    let d_use = arena.add_identifier(42, 43, "d");
    let e_use = arena.add_identifier(46, 47, "e");
    let ac = arena.add_binary(34, 39, a_use, "+", c_use);
    let acd = arena.add_binary(34, 43, ac, "+", d_use);
    let body = arena.add_binary(34, 47, acd, "+", e_use);
    let arrow = arena.add_arrow(0, 47, vec![object, assign], body, false);

    // Neither the bound names nor the unchecked default `f` are reported.
    let diagnostics = check_expr(&arena, arrow, &SymbolTable::empty());
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

#[test]
fn test_object_pattern_rest_property_binds_argument() {
    // ({ ...rest }) => rest
    let mut arena = NodeArena::new();
    let rest_name = arena.add_identifier(6, 10, "rest");
    let rest = arena.add_rest_element(3, 10, rest_name);
    let pattern = arena.add_object_pattern(1, 12, vec![rest]);
    let body = arena.add_identifier(17, 21, "rest");
    let arrow = arena.add_arrow(0, 21, vec![pattern], body, false);

    let diagnostics = check_expr(&arena, arrow, &SymbolTable::empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_unexpected_parameter_shape_is_reported() {
    // (1) => 1
    let mut arena = NodeArena::new();
    let param = arena.add_number(1, 2, 1.0);
    let body = arena.add_number(7, 8, 1.0);
    let arrow = arena.add_arrow(0, 8, vec![param], body, false);

    let (ty, diagnostics) = infer(&arena, arrow, &SymbolTable::empty());
    assert_eq!(ty, number());
    assert_eq!(diagnostics, vec![diag(1, 2, "Unexpected token type Literal")]);
}
