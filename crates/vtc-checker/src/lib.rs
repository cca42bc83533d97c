//! Type inference and diagnostics for template expressions.
//!
//! This crate is organized into several modules:
//! - `context` - `CheckerOptions` and `CheckMode`
//! - `state` - `CheckerState`, the recursive `type_of` walk and scope handling
//! - `dispatch` - Node kind to typing rule routing
//! - `expr`, `operators` - Literal, identifier and operator rules
//! - `call_checker`, `property_checker` - Calls and member access
//! - `function_checker`, `parameter_checker` - Arrow functions and pattern bindings
//! - `template_checker` - Elements, attributes, interpolations and loops
//! - `host` - The component providing the template's names
//!
//! Checking never fails on user code: problems become [`Diagnostic`]s and
//! the offending expression is typed `any`. A [`CheckError`] is returned
//! only when the tree itself is malformed.

mod call_checker;
pub mod context;
mod dispatch;
pub mod error;
mod expr;
mod function_checker;
pub mod host;
mod operators;
mod parameter_checker;
mod property_checker;
pub mod state;
mod template_checker;

pub use context::{CheckMode, CheckerOptions};
pub use error::CheckError;
pub use host::ComponentHost;
pub use state::CheckerState;

use vtc_ast::{NodeArena, NodeIndex};
use vtc_common::Diagnostic;
use vtc_solver::{SymbolTable, TypeRepository};

/// Check a markup tree rooted at `root` against `scope`.
pub fn check_template(
    arena: &NodeArena,
    root: NodeIndex,
    scope: &SymbolTable,
    repository: &dyn TypeRepository,
) -> Result<Vec<Diagnostic>, CheckError> {
    CheckerState::new(arena, repository, scope.clone(), CheckerOptions::template()).check(root)
}

/// Check a bare expression rooted at `root` against `scope`.
pub fn check_expression(
    arena: &NodeArena,
    root: NodeIndex,
    scope: &SymbolTable,
    repository: &dyn TypeRepository,
) -> Result<Vec<Diagnostic>, CheckError> {
    CheckerState::new(arena, repository, scope.clone(), CheckerOptions::expression()).check(root)
}
