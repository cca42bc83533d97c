//! Member access.

use crate::error::CheckError;
use crate::state::CheckerState;
use vtc_ast::{AccessExprData, Node};
use vtc_common::{diagnostic_messages, format_message};
use vtc_solver::{Type, is_any};

impl<'a> CheckerState<'a> {
    /// `obj.name` resolves `name` in the object type's members. Any member
    /// of an `any` object is `any`.
    ///
    /// `obj[expr]` is not checked against the object type: both sides are
    /// visited for their own diagnostics and the access is `any`.
    pub(crate) fn get_type_of_member(
        &mut self,
        node: &Node,
        access: &AccessExprData,
    ) -> Result<Type, CheckError> {
        let object = self.type_of(access.object)?;

        if access.computed {
            self.type_of(access.property)?;
            return Ok(self.any());
        }

        if is_any(&object) {
            return Ok(self.any());
        }

        let arena = self.arena;
        let Some(name) = arena.identifier_name(access.property) else {
            return Ok(self.any());
        };
        match object.member(name) {
            Some(symbol) => Ok(symbol.ty().clone()),
            None => {
                let message = format_message(
                    diagnostic_messages::PROPERTY_DOES_NOT_EXIST_ON_TYPE,
                    &[name, object.name()],
                );
                self.error(node.span, message);
                Ok(self.any())
            }
        }
    }
}
