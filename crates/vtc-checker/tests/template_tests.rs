//! Markup mode: elements, attributes, interpolations and loop scopes.

mod common;

use common::*;
use vtc_ast::{NodeArena, NodeIndex};
use vtc_solver::{StructuralType, SymbolTable};

/// `v-for="<left> in <right>"` spanning `pos..end`; the value container
/// starts at `pos + 6`.
fn add_v_for(arena: &mut NodeArena, pos: u32, end: u32, left: Vec<NodeIndex>, right: NodeIndex) -> NodeIndex {
    let key = arena.add_directive_key(pos, pos + 5, "for", None);
    let for_expr = arena.add_for_expression(pos + 7, end - 1, left, right);
    let value = arena.add_expression_container(pos + 6, end, for_expr);
    arena.add_attribute(pos, end, key, value, true)
}

/// `:name="<expr>"` spanning `pos..end`.
fn add_bind(arena: &mut NodeArena, pos: u32, end: u32, name: &str, expr: NodeIndex) -> NodeIndex {
    let key_end = pos + 1 + name.len() as u32;
    let key = arena.add_directive_key(pos, key_end, "bind", Some(name));
    let value = arena.add_expression_container(key_end + 1, end, expr);
    arena.add_attribute(pos, end, key, value, true)
}

#[test]
fn test_interpolation_reports_undefined_name() {
    // <div>{{ foo }}</div>
    let mut arena = NodeArena::new();
    let foo = arena.add_identifier(8, 11, "foo");
    let container = arena.add_expression_container(5, 14, foo);
    let div = arena.add_element(0, 20, "div", Vec::new(), vec![container]);

    let diagnostics = check_markup(&arena, div, &SymbolTable::empty());
    assert_eq!(diagnostics, vec![diag(8, 11, "'foo' is not defined")]);

    let diagnostics = check_markup(&arena, div, &scope(&[("foo", string())]));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_plain_attributes_and_text_are_ignored() {
    // <p class="title">Hello</p>
    let mut arena = NodeArena::new();
    let key = arena.add_markup_identifier(3, 8, "class");
    let value = arena.add_markup_literal(9, 16, "title");
    let attr = arena.add_attribute(3, 16, key, value, false);
    let text = arena.add_text(17, 22, "Hello");
    let p = arena.add_element(0, 26, "p", vec![attr], vec![text]);

    let diagnostics = check_markup(&arena, p, &SymbolTable::empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_directive_value_is_checked() {
    // <a :href="url + 1"></a>
    let mut arena = NodeArena::new();
    let url = arena.add_identifier(10, 13, "url");
    let one = arena.add_number(16, 17, 1.0);
    let sum = arena.add_binary(10, 17, url, "+", one);
    let attr = add_bind(&mut arena, 3, 18, "href", sum);
    let a = arena.add_element(0, 23, "a", vec![attr], Vec::new());

    let diagnostics = check_markup(&arena, a, &scope(&[("url", boolean())]));
    assert_eq!(
        diagnostics,
        vec![diag(
            10,
            17,
            "The binary operator '+' cannot be applied to type 'boolean' and 'number'"
        )]
    );
}

#[test]
fn test_loop_variable_is_bound_inside_element() {
    // <li v-for="item in items">{{ item.label }}</li>
    let mut arena = NodeArena::new();
    let item = arena.add_identifier(11, 15, "item");
    let items = arena.add_identifier(19, 24, "items");
    let v_for = add_v_for(&mut arena, 4, 25, vec![item], items);
    let item_use = arena.add_identifier(29, 33, "item");
    let label = arena.add_identifier(34, 39, "label");
    let member = arena.add_member(29, 39, item_use, label, false);
    let container = arena.add_expression_container(26, 42, member);
    let li = arena.add_element(0, 47, "li", vec![v_for], vec![container]);

    let list = StructuralType::new("Item[]").into_type();
    let diagnostics = check_markup(&arena, li, &scope(&[("items", list)]));
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

#[test]
fn test_loop_source_resolves_against_outer_scope() {
    // <li v-for="item in item">{{ item }}</li>
    let mut arena = NodeArena::new();
    let item = arena.add_identifier(11, 15, "item");
    let source = arena.add_identifier(19, 23, "item");
    let v_for = add_v_for(&mut arena, 4, 24, vec![item], source);
    let item_use = arena.add_identifier(28, 32, "item");
    let container = arena.add_expression_container(25, 35, item_use);
    let li = arena.add_element(0, 40, "li", vec![v_for], vec![container]);

    let diagnostics = check_markup(&arena, li, &SymbolTable::empty());
    assert_eq!(diagnostics, vec![diag(19, 23, "'item' is not defined")]);
}

#[test]
fn test_loop_variable_shadows_host_member() {
    // <li v-for="foo in list">{{ foo * 2 }}</li>, host has `foo: string`
    let mut arena = NodeArena::new();
    let foo = arena.add_identifier(11, 14, "foo");
    let list = arena.add_identifier(18, 22, "list");
    let v_for = add_v_for(&mut arena, 4, 23, vec![foo], list);
    let foo_use = arena.add_identifier(27, 30, "foo");
    let two = arena.add_number(33, 34, 2.0);
    let product = arena.add_binary(27, 34, foo_use, "*", two);
    let container = arena.add_expression_container(24, 37, product);
    let li = arena.add_element(0, 42, "li", vec![v_for], vec![container]);

    let host = scope(&[("foo", string()), ("list", any())]);
    let diagnostics = check_markup(&arena, li, &host);
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

#[test]
fn test_attributes_before_loop_directive_see_loop_scope() {
    // <li :key="item" v-for="item in items"></li>
    let mut arena = NodeArena::new();
    let key_item = arena.add_identifier(10, 14, "item");
    let bind = add_bind(&mut arena, 4, 15, "key", key_item);
    let item = arena.add_identifier(23, 27, "item");
    let items = arena.add_identifier(31, 36, "items");
    let v_for = add_v_for(&mut arena, 16, 37, vec![item], items);
    let li = arena.add_element(0, 43, "li", vec![bind, v_for], Vec::new());

    let diagnostics = check_markup(&arena, li, &scope(&[("items", any())]));
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

#[test]
fn test_loop_scope_ends_with_element() {
    // <ul><li v-for="(value, key) in obj"></li>{{ key }}</ul>
    let mut arena = NodeArena::new();
    let value = arena.add_identifier(16, 21, "value");
    let key = arena.add_identifier(23, 26, "key");
    let obj = arena.add_identifier(31, 34, "obj");
    let v_for = add_v_for(&mut arena, 8, 35, vec![value, key], obj);
    let li = arena.add_element(4, 41, "li", vec![v_for], Vec::new());
    let key_use = arena.add_identifier(44, 47, "key");
    let container = arena.add_expression_container(41, 50, key_use);
    let ul = arena.add_element(0, 55, "ul", Vec::new(), vec![li, container]);

    let diagnostics = check_markup(&arena, ul, &scope(&[("obj", any())]));
    assert_eq!(diagnostics, vec![diag(44, 47, "'key' is not defined")]);
}

#[test]
fn test_nested_loops_see_outer_loop_variables() {
    // <ul v-for="row in rows"><li v-for="cell in row">{{ cell }}</li></ul>
    let mut arena = NodeArena::new();
    let row = arena.add_identifier(11, 14, "row");
    let rows = arena.add_identifier(18, 22, "rows");
    let outer_for = add_v_for(&mut arena, 4, 23, vec![row], rows);
    let cell = arena.add_identifier(35, 39, "cell");
    let row_use = arena.add_identifier(43, 46, "row");
    let inner_for = add_v_for(&mut arena, 28, 47, vec![cell], row_use);
    let cell_use = arena.add_identifier(51, 55, "cell");
    let container = arena.add_expression_container(48, 58, cell_use);
    let li = arena.add_element(24, 63, "li", vec![inner_for], vec![container]);
    let ul = arena.add_element(0, 68, "ul", vec![outer_for], vec![li]);

    let diagnostics = check_markup(&arena, ul, &scope(&[("rows", any())]));
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

#[test]
fn test_syntax_error_is_reported_over_container() {
    // <div>{{ foo + }}</div>
    let mut arena = NodeArena::new();
    let container = arena.add_erroneous_container(5, 16, "Unexpected token '}'");
    let div = arena.add_element(0, 22, "div", Vec::new(), vec![container]);

    let diagnostics = check_markup(&arena, div, &SymbolTable::empty());
    assert_eq!(diagnostics, vec![diag(5, 16, "Unexpected token '}'")]);
}

#[test]
fn test_unknown_kind_is_reported_in_template_mode() {
    // <div>{{ this }}</div>
    let mut arena = NodeArena::new();
    let this = arena.add_node(vtc_common::Span::new(8, 12), vtc_ast::NodeData::ThisExpression);
    let container = arena.add_expression_container(5, 15, this);
    let div = arena.add_element(0, 21, "div", Vec::new(), vec![container]);

    let diagnostics = check_markup(&arena, div, &SymbolTable::empty());
    assert_eq!(diagnostics, vec![diag(8, 12, "Unexpected token 'ThisExpression'")]);
}

#[test]
fn test_diagnostics_follow_document_order() {
    // <div :title="a"><span>{{ b }}</span>{{ c }}</div>
    let mut arena = NodeArena::new();
    let a = arena.add_identifier(13, 14, "a");
    let title = add_bind(&mut arena, 5, 15, "title", a);
    let b = arena.add_identifier(25, 26, "b");
    let b_container = arena.add_expression_container(22, 29, b);
    let span = arena.add_element(16, 36, "span", Vec::new(), vec![b_container]);
    let c = arena.add_identifier(39, 40, "c");
    let c_container = arena.add_expression_container(36, 43, c);
    let div = arena.add_element(0, 49, "div", vec![title], vec![span, c_container]);

    let diagnostics = check_markup(&arena, div, &SymbolTable::empty());
    assert_eq!(
        messages(&diagnostics),
        vec!["'a' is not defined", "'b' is not defined", "'c' is not defined"]
    );
}
