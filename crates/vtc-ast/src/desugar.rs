//! Event listener desugaring.
//!
//! A listener directive (`@click="..."`) accepts either a method reference or
//! an arbitrary statement-like expression. Before checking, the expression is
//! rewritten into the function the runtime would actually build:
//!
//! - `onClick` stays as is (the runtime calls it with the event).
//! - `count += 1` on a native element becomes `($event) => count += 1`.
//! - `select(item)` on a component becomes `(...arguments) => select(item)`.
//!
//! Synthesized nodes reuse the original expression's span so diagnostics
//! still point at the user's source.

use crate::arena::NodeArena;
use crate::node::{FunctionData, NodeData, NodeIndex};
use tracing::trace;
use vtc_common::Span;

/// Where the listener is attached, which decides the implicit parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerKind {
    /// A native DOM element: the handler receives `$event`.
    Native,
    /// A component: the handler receives the emitted values as `arguments`.
    Component,
}

/// Rewrite a listener expression into its function form.
///
/// Returns `expr` itself for identifiers (and for indices that do not
/// resolve, leaving the checker to report them); otherwise returns the
/// index of a new concise arrow function wrapping `expr`.
pub fn desugar_listener(arena: &mut NodeArena, expr: NodeIndex, kind: ListenerKind) -> NodeIndex {
    let Some(node) = arena.get(expr) else {
        return expr;
    };
    if matches!(node.data, NodeData::Identifier(_)) {
        return expr;
    }

    let span = node.span;
    let param_span = Span::at(span.start);
    let param = match kind {
        ListenerKind::Native => {
            arena.add_identifier(param_span.start, param_span.end, "$event")
        }
        ListenerKind::Component => {
            let argument = arena.add_identifier(param_span.start, param_span.end, "arguments");
            arena.add_rest_element(param_span.start, param_span.end, argument)
        }
    };

    trace!(?expr, ?kind, "desugaring listener expression");
    arena.add_node(
        span,
        NodeData::ArrowFunctionExpression(FunctionData {
            params: vec![param],
            body: expr,
            is_async: false,
            expression: true,
        }),
    )
}

#[cfg(test)]
#[path = "../tests/desugar_tests.rs"]
mod desugar_tests;
