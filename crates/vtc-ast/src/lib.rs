//! Expression and markup AST for the vtc template checker.
//!
//! The tree is produced by an external parser and handed over as a
//! [`NodeArena`]: every node is stored once and referenced by [`NodeIndex`].
//! Nodes follow the ESTree expression grammar plus the template markup
//! grammar (elements, attributes, interpolations, loop directives).
//!
//! - `node` - Node header and per-kind data
//! - `arena` - Storage and builder methods
//! - `operators` - Classification of operator tokens
//! - `desugar` - Event listener shorthand rewriting

pub mod arena;
pub mod desugar;
pub mod node;
pub mod operators;

pub use arena::NodeArena;
pub use desugar::{ListenerKind, desugar_listener};
pub use node::*;
pub use operators::{BinaryOperator, LogicalOperator, OperatorKind, UnaryOperator, UpdateOperator};
