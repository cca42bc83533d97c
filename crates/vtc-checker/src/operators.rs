//! Operator typing rules.
//!
//! Follows the unary, binary and logical operator sections of the
//! TypeScript 2.3 language specification (4.18 and 4.19). `any` on either
//! side satisfies every operand requirement; the check goes through
//! [`is_any_or`] everywhere.
//!
//! Operands are typed before the operator rule runs, left before right, so
//! their own diagnostics precede the operator's.

use crate::error::CheckError;
use crate::state::CheckerState;
use vtc_ast::{
    BinaryExprData, BinaryOperator, LogicalOperator, Node, NodeIndex, OperatorKind,
    UnaryExprData, UnaryOperator, UpdateExprData, UpdateOperator,
};
use vtc_common::{diagnostic_messages, format_message};
use vtc_solver::{
    Type, TypeKind, is_any, is_any_or, is_function, is_number, is_object, is_string, is_symbol,
    union_type,
};

fn unknown_operator(kind: OperatorKind, operator: &str, node: &Node) -> CheckError {
    CheckError::UnknownOperator {
        kind,
        operator: operator.to_string(),
        span: node.span,
    }
}

impl<'a> CheckerState<'a> {
    pub(crate) fn get_type_of_unary(
        &mut self,
        node: &Node,
        unary: &UnaryExprData,
    ) -> Result<Type, CheckError> {
        self.type_of(unary.argument)?;

        let op = UnaryOperator::from_token(&unary.operator)
            .ok_or_else(|| unknown_operator(OperatorKind::Unary, &unary.operator, node))?;
        let kind = match op {
            UnaryOperator::Minus | UnaryOperator::Plus | UnaryOperator::BitwiseNot => TypeKind::Number,
            UnaryOperator::LogicalNot | UnaryOperator::Delete => TypeKind::Boolean,
            UnaryOperator::Void => TypeKind::Undefined,
            UnaryOperator::TypeOf => TypeKind::String,
        };
        Ok(self.get_type(kind))
    }

    pub(crate) fn get_type_of_update(
        &mut self,
        node: &Node,
        update: &UpdateExprData,
    ) -> Result<Type, CheckError> {
        let operand = self.type_of(update.argument)?;

        let op = UpdateOperator::from_token(&update.operator)
            .ok_or_else(|| unknown_operator(OperatorKind::Update, &update.operator, node))?;
        if !is_any_or(&operand, is_number) {
            let message =
                format_message(diagnostic_messages::UPDATE_OPERAND_MUST_BE_NUMBER, &[op.as_str()]);
            self.error(node.span, message);
        }
        Ok(self.get_type(TypeKind::Number))
    }

    pub(crate) fn get_type_of_binary(
        &mut self,
        node: &Node,
        binary: &BinaryExprData,
    ) -> Result<Type, CheckError> {
        let left = self.type_of(binary.left)?;
        let right = self.type_of(binary.right)?;

        let op = BinaryOperator::from_token(&binary.operator)
            .ok_or_else(|| unknown_operator(OperatorKind::Binary, &binary.operator, node))?;

        Ok(match op {
            BinaryOperator::LessThan
            | BinaryOperator::GreaterThan
            | BinaryOperator::LessThanEquals
            | BinaryOperator::GreaterThanEquals
            | BinaryOperator::Equals
            | BinaryOperator::NotEquals
            | BinaryOperator::StrictEquals
            | BinaryOperator::StrictNotEquals => self.check_comparison(node, op, &left, &right),
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
            | BinaryOperator::BitwiseXor => self.check_arithmetic(binary, op, &left, &right),
            BinaryOperator::Add => self.check_addition(node, &left, &right),
            BinaryOperator::InstanceOf => self.check_instanceof(binary, &left, &right),
            BinaryOperator::In => self.check_in(binary, &left, &right),
        })
    }

    /// `< > <= >= == != === !==`: operands must share a kind.
    fn check_comparison(&mut self, node: &Node, op: BinaryOperator, left: &Type, right: &Type) -> Type {
        if left.kind() != right.kind() && !is_any(left) && !is_any(right) {
            let message = format_message(
                diagnostic_messages::OPERATOR_CANNOT_BE_APPLIED_TO_TYPES,
                &[op.as_str(), left.name(), right.name()],
            );
            self.error(node.span, message);
        }
        self.get_type(TypeKind::Boolean)
    }

    /// `* / % - << >> >>> ** & | ^`: both operands numeric. Only the first
    /// offending side is reported.
    fn check_arithmetic(
        &mut self,
        binary: &BinaryExprData,
        op: BinaryOperator,
        left: &Type,
        right: &Type,
    ) -> Type {
        if !is_any_or(left, is_number) {
            let message =
                format_message(diagnostic_messages::ARITHMETIC_LEFT_MUST_BE_NUMBER, &[op.as_str()]);
            self.error_at_node(binary.left, message);
            return self.any();
        }
        if !is_any_or(right, is_number) {
            let message =
                format_message(diagnostic_messages::ARITHMETIC_RIGHT_MUST_BE_NUMBER, &[op.as_str()]);
            self.error_at_node(binary.right, message);
            return self.any();
        }
        self.get_type(TypeKind::Number)
    }

    /// `+`: string concatenation wins over numeric addition, then `any`.
    fn check_addition(&mut self, node: &Node, left: &Type, right: &Type) -> Type {
        if is_string(left) || is_string(right) {
            return self.get_type(TypeKind::String);
        }
        if is_number(left) && is_number(right) {
            return self.get_type(TypeKind::Number);
        }
        if is_any(left) || is_any(right) {
            return self.any();
        }
        let message = format_message(
            diagnostic_messages::PLUS_CANNOT_BE_APPLIED_TO_TYPES,
            &[left.name(), right.name()],
        );
        self.error(node.span, message);
        self.any()
    }

    fn check_instanceof(&mut self, binary: &BinaryExprData, left: &Type, right: &Type) -> Type {
        if !is_any_or(left, is_object) {
            self.report_operand(binary.left, diagnostic_messages::INSTANCEOF_LEFT_MUST_BE_OBJECT);
            return self.any();
        }
        if !is_any_or(right, is_function) {
            self.report_operand(binary.right, diagnostic_messages::INSTANCEOF_RIGHT_MUST_BE_FUNCTION);
            return self.any();
        }
        self.get_type(TypeKind::Boolean)
    }

    fn check_in(&mut self, binary: &BinaryExprData, left: &Type, right: &Type) -> Type {
        let is_key = |ty: &Type| is_number(ty) || is_string(ty) || is_symbol(ty);
        if !is_any_or(left, is_key) {
            self.report_operand(binary.left, diagnostic_messages::IN_LEFT_MUST_BE_KEY);
            return self.any();
        }
        if !is_any_or(right, is_object) {
            self.report_operand(binary.right, diagnostic_messages::IN_RIGHT_MUST_BE_OBJECT);
            return self.any();
        }
        self.get_type(TypeKind::Boolean)
    }

    fn report_operand(&mut self, operand: NodeIndex, message: &str) {
        self.error_at_node(operand, message);
    }

    /// `&&` yields the right operand; `||` and `??` widen both sides.
    pub(crate) fn get_type_of_logical(
        &mut self,
        node: &Node,
        logical: &BinaryExprData,
    ) -> Result<Type, CheckError> {
        let left = self.type_of(logical.left)?;
        let right = self.type_of(logical.right)?;

        let op = LogicalOperator::from_token(&logical.operator)
            .ok_or_else(|| unknown_operator(OperatorKind::Logical, &logical.operator, node))?;
        Ok(match op {
            LogicalOperator::And => right,
            LogicalOperator::Or | LogicalOperator::NullishCoalescing => union_type(&left, &right),
        })
    }
}
