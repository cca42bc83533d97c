//! Diagnostic types and message templates for the template checker.
//!
//! Diagnostics carry no category or code: every diagnostic is a blocking
//! error for consumers. Messages are produced from the templates in
//! [`diagnostic_messages`] with [`format_message`].

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Diagnostic
// =============================================================================

/// A single checker finding anchored to a source range.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    pub start: u32,
    pub end: u32,
}

impl Diagnostic {
    #[must_use]
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            start: span.start,
            end: span.end,
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span(), self.message)
    }
}

// =============================================================================
// Message templates
// =============================================================================

/// Message templates with `{0}`, `{1}`, ... placeholders.
pub mod diagnostic_messages {
    pub const NAME_IS_NOT_DEFINED: &str = "'{0}' is not defined";
    pub const UNEXPECTED_TOKEN: &str = "Unexpected token '{0}'";
    pub const UNEXPECTED_TOKEN_TYPE: &str = "Unexpected token type {0}";

    pub const UPDATE_OPERAND_MUST_BE_NUMBER: &str =
        "The operand of the '{0}' must be of type 'any' or 'number'";
    pub const OPERATOR_CANNOT_BE_APPLIED_TO_TYPES: &str =
        "The binary operator '{0}' cannot be applied to types '{1}' and '{2}'";
    pub const PLUS_CANNOT_BE_APPLIED_TO_TYPES: &str =
        "The binary operator '+' cannot be applied to type '{0}' and '{1}'";
    pub const ARITHMETIC_LEFT_MUST_BE_NUMBER: &str =
        "The left-hand side of a binary operator '{0}' must be of type 'number' or 'any'";
    pub const ARITHMETIC_RIGHT_MUST_BE_NUMBER: &str =
        "The right-hand side of a binary operator '{0}' must be of type 'number' or 'any'";
    pub const INSTANCEOF_LEFT_MUST_BE_OBJECT: &str =
        "The left-hand side of 'instanceof' must be of type 'any' or 'object'";
    pub const INSTANCEOF_RIGHT_MUST_BE_FUNCTION: &str =
        "The right-hand side of 'instanceof' must be of type 'any' or 'Function'";
    pub const IN_LEFT_MUST_BE_KEY: &str =
        "The left-hand side of a 'in' operator must be of type 'any', 'number', 'string' or 'symbol'";
    pub const IN_RIGHT_MUST_BE_OBJECT: &str =
        "The right-hand side of a 'in' operator must be of type 'any' or 'object'";

    pub const NO_COMPATIBLE_CALL_SIGNATURES: &str = "Type '{0}' has no compatible call signatures";
    pub const PROPERTY_DOES_NOT_EXIST_ON_TYPE: &str = "Property '{0}' does not exist on type '{1}'";

    pub const FUNCTION_EXPRESSION_NOT_ALLOWED: &str = "Function expression is not allowed in a template, use arrow function expression instead";
    pub const ARROW_FUNCTION_BLOCK_BODY_NOT_ALLOWED: &str =
        "An arrow function that has curly braces is not allowed";
    pub const ASYNC_FUNCTION_NOT_ALLOWED: &str =
        "An async function expression is not allowed in a template";

    pub const EXPRESSION_TOO_DEEPLY_NESTED: &str = "Expression is too deeply nested to be checked";
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod diagnostics_tests;
