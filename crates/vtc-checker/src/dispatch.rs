//! Expression type computation dispatcher.
//!
//! Routes a node to the typing rule for its kind. Markup kinds are only
//! recognized in template mode; in expression mode they fall through to the
//! unknown-kind handling like any other unmodeled node.

use crate::context::CheckMode;
use crate::error::CheckError;
use crate::state::CheckerState;
use vtc_ast::{Node, NodeData, NodeIndex};
use vtc_common::{diagnostic_messages, format_message};
use vtc_solver::Type;

/// Dispatcher for expression type computation.
pub(crate) struct ExpressionDispatcher<'s, 'a> {
    checker: &'s mut CheckerState<'a>,
}

impl<'s, 'a> ExpressionDispatcher<'s, 'a> {
    pub(crate) fn new(checker: &'s mut CheckerState<'a>) -> Self {
        Self { checker }
    }

    pub(crate) fn dispatch_type_computation(
        &mut self,
        idx: NodeIndex,
        node: &'a Node,
    ) -> Result<Type, CheckError> {
        let template = self.checker.options.mode == CheckMode::Template;
        let checker = &mut *self.checker;
        match &node.data {
            NodeData::Literal(literal) => Ok(checker.get_type_of_literal(&literal.value)),
            NodeData::Identifier(ident) => Ok(checker.get_type_of_identifier(node, &ident.name)),
            NodeData::UnaryExpression(unary) => checker.get_type_of_unary(node, unary),
            NodeData::UpdateExpression(update) => checker.get_type_of_update(node, update),
            NodeData::BinaryExpression(binary) => checker.get_type_of_binary(node, binary),
            NodeData::LogicalExpression(logical) => checker.get_type_of_logical(node, logical),
            NodeData::ConditionalExpression(cond) => checker.get_type_of_conditional(cond),
            // Object literal shapes are not inferred; properties stay unvisited.
            NodeData::ObjectExpression(_) => Ok(checker.any()),
            NodeData::TemplateLiteral(data) => checker.get_type_of_template(data),
            NodeData::CallExpression(call) => checker.get_type_of_call(node, call),
            NodeData::MemberExpression(access) => checker.get_type_of_member(node, access),
            NodeData::FunctionExpression(_) => Ok(checker.get_type_of_function_expression(node)),
            NodeData::ArrowFunctionExpression(func) => checker.get_type_of_arrow(node, func),

            NodeData::VElement(element) if template => checker.get_type_of_element(element),
            NodeData::VAttribute(attr) if template => checker.get_type_of_attribute(attr),
            NodeData::VExpressionContainer(container) if template => {
                checker.get_type_of_expression_container(node, container)
            }
            NodeData::VForExpression(for_expr) if template => checker.type_of(for_expr.right),
            NodeData::VIdentifier(_)
            | NodeData::VDirectiveKey(_)
            | NodeData::VLiteral(_)
            | NodeData::VText(_)
                if template =>
            {
                Ok(checker.any())
            }

            _ => Ok(Self::unexpected_node(checker, idx, node, template)),
        }
    }

    /// Unknown kinds are reported in template mode and typed `any` in both.
    fn unexpected_node(
        checker: &mut CheckerState<'a>,
        idx: NodeIndex,
        node: &Node,
        report: bool,
    ) -> Type {
        if report {
            let message = format_message(diagnostic_messages::UNEXPECTED_TOKEN, &[node.kind_name()]);
            checker.error_at_node(idx, message);
        }
        checker.any()
    }
}
