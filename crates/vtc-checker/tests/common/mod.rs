//! Shared helpers for checker integration tests.
#![allow(dead_code)]

use vtc_ast::{NodeArena, NodeIndex};
use vtc_checker::{CheckError, CheckerOptions, CheckerState};
use vtc_common::Diagnostic;
use vtc_solver::{
    CallSignature, IntrinsicRepository, StructuralType, Symbol, SymbolTable, Type, TypeKind,
    intrinsic_type,
};

pub fn ty(kind: TypeKind) -> Type {
    intrinsic_type(kind).unwrap()
}

pub fn number() -> Type {
    ty(TypeKind::Number)
}

pub fn string() -> Type {
    ty(TypeKind::String)
}

pub fn boolean() -> Type {
    ty(TypeKind::Boolean)
}

pub fn any() -> Type {
    Type::any()
}

/// A callable structural type: `() => number`.
pub fn function_type(name: &str) -> Type {
    StructuralType::new(name)
        .with_call_signature(CallSignature::new(Vec::new(), number()))
        .into_type()
}

pub fn scope(symbols: &[(&str, Type)]) -> SymbolTable {
    SymbolTable::from_symbols(
        symbols
            .iter()
            .map(|(name, ty)| Symbol::new(*name, ty.clone())),
    )
}

/// Infer the type of `root` in expression mode, returning the type and the
/// diagnostics recorded on the way.
pub fn infer(arena: &NodeArena, root: NodeIndex, scope: &SymbolTable) -> (Type, Vec<Diagnostic>) {
    infer_with(arena, root, scope, CheckerOptions::expression())
}

pub fn infer_with(
    arena: &NodeArena,
    root: NodeIndex,
    scope: &SymbolTable,
    options: CheckerOptions,
) -> (Type, Vec<Diagnostic>) {
    let repository = IntrinsicRepository::new();
    let mut checker = CheckerState::new(arena, &repository, scope.clone(), options);
    let ty = checker.type_of(root).unwrap();
    (ty, checker.diagnostics().to_vec())
}

pub fn check_expr(arena: &NodeArena, root: NodeIndex, scope: &SymbolTable) -> Vec<Diagnostic> {
    try_check_expr(arena, root, scope).unwrap()
}

pub fn try_check_expr(
    arena: &NodeArena,
    root: NodeIndex,
    scope: &SymbolTable,
) -> Result<Vec<Diagnostic>, CheckError> {
    vtc_checker::check_expression(arena, root, scope, &IntrinsicRepository::new())
}

pub fn check_markup(arena: &NodeArena, root: NodeIndex, scope: &SymbolTable) -> Vec<Diagnostic> {
    vtc_checker::check_template(arena, root, scope, &IntrinsicRepository::new()).unwrap()
}

pub fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}

pub fn diag(start: u32, end: u32, message: &str) -> Diagnostic {
    Diagnostic {
        message: message.to_string(),
        start,
        end,
    }
}
