//! Call expressions.
//!
//! Only callability is checked. Argument count and argument types are not
//! matched against the signatures, and the call is typed `any`.

use crate::error::CheckError;
use crate::state::CheckerState;
use vtc_ast::{CallExprData, Node};
use vtc_common::{diagnostic_messages, format_message};
use vtc_solver::{Type, is_any_or, is_function};

impl<'a> CheckerState<'a> {
    pub(crate) fn get_type_of_call(
        &mut self,
        node: &Node,
        call: &CallExprData,
    ) -> Result<Type, CheckError> {
        let callee = self.type_of(call.callee)?;
        for &arg in &call.arguments {
            self.type_of(arg)?;
        }

        if !is_any_or(&callee, is_function) {
            let message = format_message(
                diagnostic_messages::NO_COMPATIBLE_CALL_SIGNATURES,
                &[callee.name()],
            );
            self.error(node.span, message);
        }
        Ok(self.any())
    }
}
