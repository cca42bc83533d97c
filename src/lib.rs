//! Static type checker for expressions embedded in component templates.
//!
//! Given a template (or a single expression) as a [`NodeArena`], the names a
//! component exposes as a [`SymbolTable`] and a [`TypeRepository`], the
//! checker reports undefined names, missing properties, operator misuse and
//! disallowed function forms without running anything.
//!
//! ```
//! use vtc::{IntrinsicRepository, NodeArena, SymbolTable, check_expression};
//!
//! // foo + 1
//! let mut arena = NodeArena::new();
//! let foo = arena.add_identifier(0, 3, "foo");
//! let one = arena.add_number(6, 7, 1.0);
//! let root = arena.add_binary(0, 7, foo, "+", one);
//!
//! let diagnostics =
//!     check_expression(&arena, root, &SymbolTable::empty(), &IntrinsicRepository::new()).unwrap();
//! assert_eq!(diagnostics[0].message, "'foo' is not defined");
//! ```
//!
//! The member crates can also be used directly:
//! - `vtc_common` - spans, diagnostics, limits
//! - `vtc_ast` - the node arena and listener desugaring
//! - `vtc_solver` - types, symbol tables and the type repository
//! - `vtc_checker` - the checker itself

pub mod tracing_config;

pub use vtc_ast as ast;
pub use vtc_checker as checker;
pub use vtc_common as common;
pub use vtc_solver as solver;

pub use vtc_ast::{ListenerKind, NodeArena, NodeIndex, desugar_listener};
pub use vtc_checker::{
    CheckError, CheckMode, CheckerOptions, CheckerState, ComponentHost, check_expression,
    check_template,
};
pub use vtc_common::{Diagnostic, Span};
pub use vtc_solver::{
    CallSignature, HostShape, IntrinsicRepository, LazyType, RepositoryError, StructuralType,
    Symbol, SymbolTable, Type, TypeKind, TypeRepository,
};
