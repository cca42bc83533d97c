//! Checker configuration.

use serde::{Deserialize, Serialize};
use vtc_common::limits::MAX_EXPR_CHECK_DEPTH;

/// Which grammar the root node belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckMode {
    /// Markup tree: elements, attributes and interpolations. Unknown node
    /// kinds are reported.
    #[default]
    Template,
    /// A bare expression. Unknown node kinds are typed `any` silently.
    Expression,
}

/// Options controlling a [`CheckerState`](crate::CheckerState).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckerOptions {
    pub mode: CheckMode,
    /// Nesting depth past which nodes are reported and typed `any`.
    pub max_depth: u32,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        CheckerOptions {
            mode: CheckMode::Template,
            max_depth: MAX_EXPR_CHECK_DEPTH,
        }
    }
}

impl CheckerOptions {
    pub fn template() -> Self {
        Self::default()
    }

    pub fn expression() -> Self {
        CheckerOptions {
            mode: CheckMode::Expression,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
#[path = "../tests/context_tests.rs"]
mod context_tests;
