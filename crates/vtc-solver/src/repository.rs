//! Source of the canonical intrinsic types.
//!
//! The checker never builds primitive types itself; it asks a
//! [`TypeRepository`]. The default [`IntrinsicRepository`] hands out the
//! process-wide singletons, and a host can substitute its own
//! representatives for the primitive kinds (e.g. its `String` interface, so
//! that `name.length` resolves).

use crate::types::{Type, TypeKind, intrinsic_type};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Provider of the type for each intrinsic kind.
pub trait TypeRepository: Send + Sync {
    /// The type checked expressions of `kind` evaluate to.
    ///
    /// # Panics
    ///
    /// Panics when `kind` is [`TypeKind::Other`]: structural types are not
    /// served by kind.
    fn get_type_by_kind(&self, kind: TypeKind) -> Type;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("type kind '{kind}' cannot be overridden")]
    NotOverridable { kind: TypeKind },
    #[error("override for '{expected}' has kind '{actual}'")]
    KindMismatch { expected: TypeKind, actual: TypeKind },
}

/// Repository serving the canonical intrinsics, optionally with host
/// representatives for `string`, `number`, `boolean` and `symbol`.
#[derive(Clone, Debug, Default)]
pub struct IntrinsicRepository {
    overrides: FxHashMap<TypeKind, Type>,
}

impl IntrinsicRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `ty` for `kind` instead of the intrinsic singleton.
    ///
    /// `any`, `null`, `undefined` and structural kinds always stay canonical.
    pub fn with_override(mut self, kind: TypeKind, ty: Type) -> Result<Self, RepositoryError> {
        match kind {
            TypeKind::String | TypeKind::Number | TypeKind::Boolean | TypeKind::Symbol => {}
            _ => return Err(RepositoryError::NotOverridable { kind }),
        }
        if ty.kind() != kind {
            return Err(RepositoryError::KindMismatch {
                expected: kind,
                actual: ty.kind(),
            });
        }
        self.overrides.insert(kind, ty);
        Ok(self)
    }

    pub fn has_override(&self, kind: TypeKind) -> bool {
        self.overrides.contains_key(&kind)
    }
}

impl TypeRepository for IntrinsicRepository {
    fn get_type_by_kind(&self, kind: TypeKind) -> Type {
        if let Some(ty) = self.overrides.get(&kind) {
            return ty.clone();
        }
        match intrinsic_type(kind) {
            Some(ty) => ty,
            None => panic!("no intrinsic type for kind '{kind}'"),
        }
    }
}

#[cfg(test)]
#[path = "../tests/repository_tests.rs"]
mod repository_tests;
