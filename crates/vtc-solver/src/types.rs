//! Type representation.
//!
//! Every type is reached through a [`Type`] handle wrapping an
//! `Arc<dyn TypeShape>`. Handles compare by identity: two handles are equal
//! only if they point at the same shape. Intrinsic types (`any`, `string`,
//! `number`, ...) are created once per process, so identity is also kind
//! equality for them.
//!
//! Shapes expose their members and call signatures through accessors, never
//! as resolved fields, so eager shapes ([`StructuralType`]) and lazily
//! populated host shapes ([`LazyType`](crate::LazyType)) look the same to the
//! checker.

use crate::symbols::{Symbol, SymbolTable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, LazyLock, OnceLock};

// =============================================================================
// TypeKind
// =============================================================================

/// Discrete tag of a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Any,
    String,
    Number,
    Boolean,
    Symbol,
    Null,
    Undefined,
    /// Any structural type produced by a host (objects, functions, classes).
    Other,
}

impl TypeKind {
    /// Kinds that have a canonical intrinsic representative.
    pub const INTRINSICS: [TypeKind; 7] = [
        TypeKind::Any,
        TypeKind::String,
        TypeKind::Number,
        TypeKind::Boolean,
        TypeKind::Symbol,
        TypeKind::Null,
        TypeKind::Undefined,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TypeKind::Any => "any",
            TypeKind::String => "string",
            TypeKind::Number => "number",
            TypeKind::Boolean => "boolean",
            TypeKind::Symbol => "symbol",
            TypeKind::Null => "null",
            TypeKind::Undefined => "undefined",
            TypeKind::Other => "other",
        }
    }

    /// `null` and `undefined` never carry members or call signatures.
    pub fn is_nullish(self) -> bool {
        matches!(self, TypeKind::Null | TypeKind::Undefined)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TypeShape / Type
// =============================================================================

/// Accessor interface shared by every type representation.
pub trait TypeShape: Send + Sync {
    /// Display name used in diagnostics.
    fn name(&self) -> &str;
    fn kind(&self) -> TypeKind;
    fn members(&self) -> &SymbolTable;
    fn call_signatures(&self) -> &[CallSignature];
}

/// Shared, identity-compared handle to a type shape.
#[derive(Clone)]
pub struct Type(Arc<dyn TypeShape>);

impl Type {
    pub fn new(shape: impl TypeShape + 'static) -> Type {
        Type(Arc::new(shape))
    }

    pub fn from_arc(shape: Arc<dyn TypeShape>) -> Type {
        Type(shape)
    }

    /// The canonical `any` type.
    pub fn any() -> Type {
        ANY.clone()
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.0.name()
    }

    #[inline]
    pub fn kind(&self) -> TypeKind {
        self.0.kind()
    }

    #[inline]
    pub fn members(&self) -> &SymbolTable {
        self.0.members()
    }

    #[inline]
    pub fn call_signatures(&self) -> &[CallSignature] {
        self.0.call_signatures()
    }

    /// Member lookup by name. `any` resolves every name.
    pub fn member(&self, name: &str) -> Option<Symbol> {
        self.members().get_by_name(name)
    }

    /// Identity comparison: `true` only for handles to the same shape.
    #[inline]
    pub fn ptr_eq(&self, other: &Type) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Type {}

// Shallow on purpose: `any` is its own call signature's return type.
impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({}: {})", self.name(), self.kind())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Call signatures
// =============================================================================

/// Parameter list of a call signature.
#[derive(Clone, Debug)]
pub enum ParameterTypes {
    /// Accepts any number of arguments of any type.
    Any,
    List(Vec<Type>),
}

impl ParameterTypes {
    /// Declared parameter count; `None` when unbounded.
    pub fn len(&self) -> Option<usize> {
        match self {
            ParameterTypes::Any => None,
            ParameterTypes::List(types) => Some(types.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Type of the parameter at `index`.
    pub fn get(&self, index: usize) -> Option<Type> {
        match self {
            ParameterTypes::Any => Some(Type::any()),
            ParameterTypes::List(types) => types.get(index).cloned(),
        }
    }
}

/// A `(parameters) => return` description making a type callable.
#[derive(Clone, Debug)]
pub struct CallSignature {
    pub parameters: ParameterTypes,
    pub return_type: Type,
}

impl CallSignature {
    pub fn new(parameters: Vec<Type>, return_type: Type) -> Self {
        CallSignature {
            parameters: ParameterTypes::List(parameters),
            return_type,
        }
    }

    /// A signature accepting any arguments.
    pub fn any_arguments(return_type: Type) -> Self {
        CallSignature {
            parameters: ParameterTypes::Any,
            return_type,
        }
    }
}

// =============================================================================
// Intrinsic types
// =============================================================================

#[derive(Debug)]
struct IntrinsicShape {
    kind: TypeKind,
    members: SymbolTable,
    call_signatures: OnceLock<Vec<CallSignature>>,
}

impl IntrinsicShape {
    fn new(kind: TypeKind) -> Self {
        let members = if kind == TypeKind::Any {
            SymbolTable::any_fallback()
        } else {
            SymbolTable::empty()
        };
        IntrinsicShape {
            kind,
            members,
            call_signatures: OnceLock::new(),
        }
    }
}

impl TypeShape for IntrinsicShape {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn kind(&self) -> TypeKind {
        self.kind
    }

    fn members(&self) -> &SymbolTable {
        &self.members
    }

    fn call_signatures(&self) -> &[CallSignature] {
        // `any` is callable with anything and returns itself. The signature
        // is built on first use because it refers back to the `ANY` static.
        self.call_signatures.get_or_init(|| {
            if self.kind == TypeKind::Any {
                vec![CallSignature::any_arguments(Type::any())]
            } else {
                Vec::new()
            }
        })
    }
}

fn intrinsic(kind: TypeKind) -> Type {
    Type::new(IntrinsicShape::new(kind))
}

static ANY: LazyLock<Type> = LazyLock::new(|| intrinsic(TypeKind::Any));
static STRING: LazyLock<Type> = LazyLock::new(|| intrinsic(TypeKind::String));
static NUMBER: LazyLock<Type> = LazyLock::new(|| intrinsic(TypeKind::Number));
static BOOLEAN: LazyLock<Type> = LazyLock::new(|| intrinsic(TypeKind::Boolean));
static SYMBOL: LazyLock<Type> = LazyLock::new(|| intrinsic(TypeKind::Symbol));
static NULL: LazyLock<Type> = LazyLock::new(|| intrinsic(TypeKind::Null));
static UNDEFINED: LazyLock<Type> = LazyLock::new(|| intrinsic(TypeKind::Undefined));

/// Canonical intrinsic type for `kind`; `None` for [`TypeKind::Other`].
pub fn intrinsic_type(kind: TypeKind) -> Option<Type> {
    let ty = match kind {
        TypeKind::Any => &ANY,
        TypeKind::String => &STRING,
        TypeKind::Number => &NUMBER,
        TypeKind::Boolean => &BOOLEAN,
        TypeKind::Symbol => &SYMBOL,
        TypeKind::Null => &NULL,
        TypeKind::Undefined => &UNDEFINED,
        TypeKind::Other => return None,
    };
    Some(Type::clone(ty))
}

// =============================================================================
// StructuralType
// =============================================================================

/// Eager, data-carrying type shape.
///
/// Used for component hosts, host-provided primitive representatives and
/// tests. Built with the `with_*` methods and frozen by [`into_type`].
///
/// [`into_type`]: StructuralType::into_type
#[derive(Clone, Debug)]
pub struct StructuralType {
    name: String,
    kind: TypeKind,
    members: SymbolTable,
    call_signatures: Vec<CallSignature>,
}

impl StructuralType {
    /// A structural (`Other`) type with no members and no call signatures.
    pub fn new(name: impl Into<String>) -> Self {
        StructuralType {
            name: name.into(),
            kind: TypeKind::Other,
            members: SymbolTable::empty(),
            call_signatures: Vec::new(),
        }
    }

    /// Override the kind, e.g. for a host's `String` interface type.
    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_members(mut self, members: impl IntoIterator<Item = Symbol>) -> Self {
        self.members = self.members.concat(members);
        self
    }

    pub fn with_member(self, name: impl Into<String>, ty: Type) -> Self {
        self.with_members([Symbol::new(name, ty)])
    }

    pub fn with_call_signature(mut self, signature: CallSignature) -> Self {
        self.call_signatures.push(signature);
        self
    }

    /// Freeze into a shared [`Type`].
    ///
    /// `null`/`undefined` kinds drop any members or signatures given; `any`
    /// kinds resolve every member to `any`.
    pub fn into_type(mut self) -> Type {
        if self.kind.is_nullish() {
            self.members = SymbolTable::empty();
            self.call_signatures.clear();
        }
        if self.kind == TypeKind::Any {
            self.members = SymbolTable::any_fallback();
        }
        Type::new(self)
    }
}

impl TypeShape for StructuralType {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> TypeKind {
        self.kind
    }

    fn members(&self) -> &SymbolTable {
        &self.members
    }

    fn call_signatures(&self) -> &[CallSignature] {
        &self.call_signatures
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod types_tests;
