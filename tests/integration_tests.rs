//! Integration tests for the template checker
//!
//! These tests go through the public facade the way a host would:
//! - describing the component through a host shape
//! - handing over the tree as JSON
//! - substituting host primitive types in the repository
//! - checking templates and desugared listeners

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use vtc::{
    CallSignature, ComponentHost, Diagnostic, HostShape, IntrinsicRepository, LazyType,
    ListenerKind, NodeArena, StructuralType, Symbol, SymbolTable, Type, TypeKind, TypeRepository,
    check_expression, check_template, desugar_listener,
};

fn intrinsic(kind: TypeKind) -> Type {
    IntrinsicRepository::new().get_type_by_kind(kind)
}

/// Instance shape of a component declaring `msg: string` and
/// `greet(): string`, counting how often its properties are requested.
struct GreeterInstance {
    property_requests: Arc<AtomicUsize>,
}

impl HostShape for GreeterInstance {
    fn name(&self) -> Option<String> {
        Some("Greeter".to_string())
    }

    fn kind(&self) -> TypeKind {
        TypeKind::Other
    }

    fn properties(&self) -> Vec<Symbol> {
        self.property_requests.fetch_add(1, Ordering::SeqCst);
        let greet = StructuralType::new("() => string")
            .with_call_signature(CallSignature::new(Vec::new(), intrinsic(TypeKind::String)))
            .into_type();
        vec![
            Symbol::new("msg", intrinsic(TypeKind::String)),
            Symbol::new("greet", greet),
        ]
    }

    fn call_signatures(&self) -> Vec<CallSignature> {
        Vec::new()
    }
}

fn greeter_host() -> (ComponentHost, Arc<AtomicUsize>) {
    let requests = Arc::new(AtomicUsize::new(0));
    let instance = Type::new(LazyType::new(GreeterInstance {
        property_requests: requests.clone(),
    }));
    (ComponentHost::from_type(&instance), requests)
}

fn diag(start: u32, end: u32, message: &str) -> Diagnostic {
    Diagnostic {
        message: message.to_string(),
        start,
        end,
    }
}

#[test]
fn test_expression_against_lazy_host() {
    // 123 - msg + ", Vue.js!" + foo
    let mut arena = NodeArena::new();
    let n = arena.add_number(0, 3, 123.0);
    let msg = arena.add_identifier(6, 9, "msg");
    let diff = arena.add_binary(0, 9, n, "-", msg);
    let text = arena.add_string(12, 23, ", Vue.js!");
    let concat = arena.add_binary(0, 23, diff, "+", text);
    let foo = arena.add_identifier(26, 29, "foo");
    let root = arena.add_binary(0, 29, concat, "+", foo);

    let (host, requests) = greeter_host();
    let diagnostics =
        check_expression(&arena, root, host.members(), &IntrinsicRepository::new()).unwrap();

    assert_eq!(
        diagnostics,
        vec![
            diag(
                6,
                9,
                "The right-hand side of a binary operator '-' must be of type 'number' or 'any'"
            ),
            diag(26, 29, "'foo' is not defined"),
        ]
    );
    assert_eq!(requests.load(Ordering::SeqCst), 1);
}

#[test]
fn test_template_against_lazy_host() {
    // <p @click="greet()">{{ msg.length }}</p>
    let mut arena = NodeArena::new();
    let greet = arena.add_identifier(11, 16, "greet");
    let call = arena.add_call(11, 18, greet, Vec::new());
    let handler = desugar_listener(&mut arena, call, ListenerKind::Native);
    let key = arena.add_directive_key(3, 9, "on", Some("click"));
    let value = arena.add_expression_container(10, 19, handler);
    let listener = arena.add_attribute(3, 19, key, value, true);

    let msg = arena.add_identifier(23, 26, "msg");
    let length = arena.add_identifier(27, 33, "length");
    let member = arena.add_member(23, 33, msg, length, false);
    let container = arena.add_expression_container(20, 36, member);
    let p = arena.add_element(0, 40, "p", vec![listener], vec![container]);

    let (host, _) = greeter_host();
    let diagnostics = check_template(&arena, p, host.members(), &IntrinsicRepository::new()).unwrap();
    assert_eq!(
        diagnostics,
        vec![diag(23, 33, "Property 'length' does not exist on type 'string'")]
    );
}

#[test]
fn test_host_string_type_from_repository() {
    // "abc".length
    let mut arena = NodeArena::new();
    let abc = arena.add_string(0, 5, "abc");
    let length = arena.add_identifier(6, 12, "length");
    let root = arena.add_member(0, 12, abc, length, false);

    let bare = check_expression(&arena, root, &SymbolTable::empty(), &IntrinsicRepository::new())
        .unwrap();
    assert_eq!(bare.len(), 1);

    let host_string = StructuralType::new("String")
        .with_kind(TypeKind::String)
        .with_member("length", intrinsic(TypeKind::Number))
        .into_type();
    let repository = IntrinsicRepository::new()
        .with_override(TypeKind::String, host_string)
        .unwrap();
    let diagnostics = check_expression(&arena, root, &SymbolTable::empty(), &repository).unwrap();
    assert!(diagnostics.is_empty());
}

#[test]
fn test_arena_handed_over_as_json() {
    // <div>{{ count + 1 }}</div>
    let mut arena = NodeArena::new();
    let count = arena.add_identifier(8, 13, "count");
    let one = arena.add_number(16, 17, 1.0);
    let sum = arena.add_binary(8, 17, count, "+", one);
    let container = arena.add_expression_container(5, 20, sum);
    let div = arena.add_element(0, 26, "div", Vec::new(), vec![container]);

    let json = serde_json::to_string(&arena).unwrap();
    let received: NodeArena = serde_json::from_str(&json).unwrap();
    assert_eq!(received, arena);

    let host = ComponentHost::from_properties([Symbol::new("count", intrinsic(TypeKind::Boolean))]);
    let diagnostics =
        check_template(&received, div, host.members(), &IntrinsicRepository::new()).unwrap();
    assert_eq!(
        diagnostics,
        vec![diag(
            8,
            17,
            "The binary operator '+' cannot be applied to type 'boolean' and 'number'"
        )]
    );
    assert_eq!(
        serde_json::to_value(&diagnostics).unwrap(),
        serde_json::json!([{
            "message": "The binary operator '+' cannot be applied to type 'boolean' and 'number'",
            "start": 8,
            "end": 17
        }])
    );
}

#[test]
fn test_any_host_accepts_every_name() {
    // foo.bar(baz)
    let mut arena = NodeArena::new();
    let foo = arena.add_identifier(0, 3, "foo");
    let bar = arena.add_identifier(4, 7, "bar");
    let member = arena.add_member(0, 7, foo, bar, false);
    let baz = arena.add_identifier(8, 11, "baz");
    let root = arena.add_call(0, 12, member, vec![baz]);

    let host = ComponentHost::from_type(&Type::any());
    assert!(host.members().is_any_fallback());
    let diagnostics =
        check_expression(&arena, root, host.members(), &IntrinsicRepository::new()).unwrap();
    assert!(diagnostics.is_empty());
}

/// A prop the host compiler declared as `any`.
struct UntypedProp;

impl HostShape for UntypedProp {
    fn name(&self) -> Option<String> {
        Some("any".to_string())
    }

    fn kind(&self) -> TypeKind {
        TypeKind::Any
    }

    fn properties(&self) -> Vec<Symbol> {
        Vec::new()
    }

    fn call_signatures(&self) -> Vec<CallSignature> {
        Vec::new()
    }
}

#[test]
fn test_host_declared_any_absorbs_member_diagnostics() {
    // payload.items.length
    let mut arena = NodeArena::new();
    let payload = arena.add_identifier(0, 7, "payload");
    let items = arena.add_identifier(8, 13, "items");
    let inner = arena.add_member(0, 13, payload, items, false);
    let length = arena.add_identifier(14, 20, "length");
    let root = arena.add_member(0, 20, inner, length, false);

    let untyped = Type::new(LazyType::new(UntypedProp));
    let host = ComponentHost::from_properties([Symbol::new("payload", untyped.clone())]);
    let diagnostics =
        check_expression(&arena, root, host.members(), &IntrinsicRepository::new()).unwrap();
    assert!(diagnostics.is_empty());

    let any_host = ComponentHost::from_type(&untyped);
    assert!(any_host.members().is_any_fallback());
}

#[test]
fn test_init_tracing_is_idempotent() {
    vtc::tracing_config::init_tracing();
    vtc::tracing_config::init_tracing();
    assert_eq!(
        vtc::tracing_config::LogFormat::parse("JSON"),
        vtc::tracing_config::LogFormat::Json
    );
    assert_eq!(
        vtc::tracing_config::LogFormat::parse("tree"),
        vtc::tracing_config::LogFormat::Text
    );
}
