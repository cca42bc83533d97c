//! Internal errors that abort a check.
//!
//! User-facing problems are [`Diagnostic`](vtc_common::Diagnostic)s and never
//! surface here. A `CheckError` means the tree handed to the checker broke
//! the AST contract.

use thiserror::Error;
use vtc_ast::{NodeIndex, OperatorKind};
use vtc_common::Span;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("unknown {kind} operator '{operator}' at {span}")]
    UnknownOperator {
        kind: OperatorKind,
        operator: String,
        span: Span,
    },
    #[error("node index {} is not in the arena", index.0)]
    MissingNode { index: NodeIndex },
}
