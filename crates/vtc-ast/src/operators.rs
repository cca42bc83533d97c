//! Operator token classification.
//!
//! The AST keeps operators as token text. These enums are the closed sets of
//! operators each expression kind may carry; `from_token` returns `None` for
//! anything outside the set, which consumers treat as a producer bug.

use std::fmt;

/// Which operator family a token was expected to belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Unary,
    Update,
    Binary,
    Logical,
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperatorKind::Unary => "unary",
            OperatorKind::Update => "update",
            OperatorKind::Binary => "binary",
            OperatorKind::Logical => "logical",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Minus,
    Plus,
    BitwiseNot,
    LogicalNot,
    Delete,
    Void,
    TypeOf,
}

impl UnaryOperator {
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "-" => UnaryOperator::Minus,
            "+" => UnaryOperator::Plus,
            "~" => UnaryOperator::BitwiseNot,
            "!" => UnaryOperator::LogicalNot,
            "delete" => UnaryOperator::Delete,
            "void" => UnaryOperator::Void,
            "typeof" => UnaryOperator::TypeOf,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Minus => "-",
            UnaryOperator::Plus => "+",
            UnaryOperator::BitwiseNot => "~",
            UnaryOperator::LogicalNot => "!",
            UnaryOperator::Delete => "delete",
            UnaryOperator::Void => "void",
            UnaryOperator::TypeOf => "typeof",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

impl UpdateOperator {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "++" => Some(UpdateOperator::Increment),
            "--" => Some(UpdateOperator::Decrement),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UpdateOperator::Increment => "++",
            UpdateOperator::Decrement => "--",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    // comparison
    LessThan,
    GreaterThan,
    LessThanEquals,
    GreaterThanEquals,
    Equals,
    NotEquals,
    StrictEquals,
    StrictNotEquals,
    // arithmetic and bitwise
    Multiply,
    Divide,
    Remainder,
    Subtract,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    Exponent,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    // others
    Add,
    InstanceOf,
    In,
}

impl BinaryOperator {
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "<" => BinaryOperator::LessThan,
            ">" => BinaryOperator::GreaterThan,
            "<=" => BinaryOperator::LessThanEquals,
            ">=" => BinaryOperator::GreaterThanEquals,
            "==" => BinaryOperator::Equals,
            "!=" => BinaryOperator::NotEquals,
            "===" => BinaryOperator::StrictEquals,
            "!==" => BinaryOperator::StrictNotEquals,
            "*" => BinaryOperator::Multiply,
            "/" => BinaryOperator::Divide,
            "%" => BinaryOperator::Remainder,
            "-" => BinaryOperator::Subtract,
            "<<" => BinaryOperator::LeftShift,
            ">>" => BinaryOperator::RightShift,
            ">>>" => BinaryOperator::UnsignedRightShift,
            "**" => BinaryOperator::Exponent,
            "&" => BinaryOperator::BitwiseAnd,
            "|" => BinaryOperator::BitwiseOr,
            "^" => BinaryOperator::BitwiseXor,
            "+" => BinaryOperator::Add,
            "instanceof" => BinaryOperator::InstanceOf,
            "in" => BinaryOperator::In,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThanEquals => "<=",
            BinaryOperator::GreaterThanEquals => ">=",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::StrictEquals => "===",
            BinaryOperator::StrictNotEquals => "!==",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Remainder => "%",
            BinaryOperator::Subtract => "-",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::RightShift => ">>",
            BinaryOperator::UnsignedRightShift => ">>>",
            BinaryOperator::Exponent => "**",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::BitwiseXor => "^",
            BinaryOperator::Add => "+",
            BinaryOperator::InstanceOf => "instanceof",
            BinaryOperator::In => "in",
        }
    }

    /// Relational and equality operators.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOperator::LessThan
                | BinaryOperator::GreaterThan
                | BinaryOperator::LessThanEquals
                | BinaryOperator::GreaterThanEquals
                | BinaryOperator::Equals
                | BinaryOperator::NotEquals
                | BinaryOperator::StrictEquals
                | BinaryOperator::StrictNotEquals
        )
    }

    /// Operators whose both operands must be numeric (`+` excluded).
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOperator::Multiply
                | BinaryOperator::Divide
                | BinaryOperator::Remainder
                | BinaryOperator::Subtract
                | BinaryOperator::LeftShift
                | BinaryOperator::RightShift
                | BinaryOperator::UnsignedRightShift
                | BinaryOperator::Exponent
                | BinaryOperator::BitwiseAnd
                | BinaryOperator::BitwiseOr
                | BinaryOperator::BitwiseXor
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
    NullishCoalescing,
}

impl LogicalOperator {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "&&" => Some(LogicalOperator::And),
            "||" => Some(LogicalOperator::Or),
            "??" => Some(LogicalOperator::NullishCoalescing),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOperator::And => "&&",
            LogicalOperator::Or => "||",
            LogicalOperator::NullishCoalescing => "??",
        }
    }
}

#[cfg(test)]
#[path = "../tests/operators_tests.rs"]
mod operators_tests;
