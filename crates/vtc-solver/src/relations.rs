//! Kind predicates and the two type relations the checker needs.
//!
//! There are no real union types. Widening two different types yields
//! `any`, which keeps every downstream rule silent.

use crate::types::{Type, TypeKind};

#[inline]
pub fn is_any(ty: &Type) -> bool {
    ty.kind() == TypeKind::Any
}

#[inline]
pub fn is_number(ty: &Type) -> bool {
    ty.kind() == TypeKind::Number
}

#[inline]
pub fn is_string(ty: &Type) -> bool {
    ty.kind() == TypeKind::String
}

#[inline]
pub fn is_symbol(ty: &Type) -> bool {
    ty.kind() == TypeKind::Symbol
}

/// Has at least one call signature.
pub fn is_function(ty: &Type) -> bool {
    !ty.call_signatures().is_empty()
}

/// Structural types and functions.
pub fn is_object(ty: &Type) -> bool {
    ty.kind() == TypeKind::Other || is_function(ty)
}

/// `any` satisfies every operand requirement.
#[inline]
pub fn is_any_or(ty: &Type, predicate: impl FnOnce(&Type) -> bool) -> bool {
    is_any(ty) || predicate(ty)
}

/// `a` when both are the same type, otherwise `any`.
pub fn union_type(a: &Type, b: &Type) -> Type {
    if a == b { a.clone() } else { Type::any() }
}

/// [`union_type`] folded over `types`. Empty input yields `any`.
pub fn union_types<'a>(types: impl IntoIterator<Item = &'a Type>) -> Type {
    let mut iter = types.into_iter();
    let Some(first) = iter.next() else {
        return Type::any();
    };
    iter.fold(first.clone(), |acc, ty| union_type(&acc, ty))
}

/// Loose assignability: either side is `any`, or the kinds match.
pub fn subtype_of(sub: &Type, parent: &Type) -> bool {
    is_any(sub) || is_any(parent) || sub.kind() == parent.kind()
}

#[cfg(test)]
#[path = "../tests/relations_tests.rs"]
mod relations_tests;
