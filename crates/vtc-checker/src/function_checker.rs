//! Function expressions.
//!
//! Templates only allow concise arrow functions. Anything else is reported
//! without looking inside the body.

use crate::error::CheckError;
use crate::state::CheckerState;
use tracing::trace;
use vtc_ast::{FunctionData, Node};
use vtc_common::diagnostic_messages;
use vtc_solver::Type;

impl<'a> CheckerState<'a> {
    pub(crate) fn get_type_of_function_expression(&mut self, node: &Node) -> Type {
        self.error(node.span, diagnostic_messages::FUNCTION_EXPRESSION_NOT_ALLOWED);
        self.any()
    }

    /// A concise arrow is typed as its body, with its parameters bound to
    /// `any` in a fresh scope.
    pub(crate) fn get_type_of_arrow(
        &mut self,
        node: &Node,
        func: &FunctionData,
    ) -> Result<Type, CheckError> {
        if !func.expression {
            self.error(node.span, diagnostic_messages::ARROW_FUNCTION_BLOCK_BODY_NOT_ALLOWED);
            return Ok(self.any());
        }
        if func.is_async {
            self.error(node.span, diagnostic_messages::ASYNC_FUNCTION_NOT_ALLOWED);
        }

        let params = self.collect_bindings(&func.params)?;
        trace!(count = params.len(), "binding arrow parameters");
        let body = func.body;
        self.with_scope(params, |checker| checker.type_of(body))
    }
}
