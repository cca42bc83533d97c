//! Structural type model for template checking.
//!
//! This crate holds the value types the checker reasons about:
//!
//! - **Types**: a `Type` is a shared handle to a [`TypeShape`]: a name, a
//!   [`TypeKind`], a member table and a list of call signatures. Intrinsic
//!   kinds are process-wide singletons compared by identity.
//! - **Host shapes**: [`LazyType`] adapts a host compiler's type through the
//!   [`HostShape`] boundary trait, populating members on first access.
//! - **Symbol tables**: persistent, scope-layering name lookup with an
//!   absorbing `any` variant.
//! - **Repository**: the pluggable source of canonical intrinsic types.
//! - **Relations**: kind predicates, widening (`union_type`) and `subtype_of`.

pub mod lazy;
pub mod relations;
pub mod repository;
pub mod symbols;
pub mod types;

pub use lazy::{HostShape, LazyType};
pub use relations::{
    is_any, is_any_or, is_function, is_number, is_object, is_string, is_symbol, subtype_of,
    union_type, union_types,
};
pub use repository::{IntrinsicRepository, RepositoryError, TypeRepository};
pub use symbols::{Symbol, SymbolTable};
pub use types::{
    CallSignature, ParameterTypes, StructuralType, Type, TypeKind, TypeShape, intrinsic_type,
};
