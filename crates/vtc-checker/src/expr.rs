//! Leaf and structural expression rules: literals, identifiers,
//! conditionals and template literals.

use crate::error::CheckError;
use crate::state::CheckerState;
use vtc_ast::{ConditionalExprData, LiteralValue, Node, TemplateData};
use vtc_common::{diagnostic_messages, format_message};
use vtc_solver::{Type, TypeKind, union_types};

impl<'a> CheckerState<'a> {
    pub(crate) fn get_type_of_literal(&self, value: &LiteralValue) -> Type {
        match value {
            LiteralValue::String(_) => self.get_type(TypeKind::String),
            LiteralValue::Number(_) => self.get_type(TypeKind::Number),
            LiteralValue::Boolean(_) => self.get_type(TypeKind::Boolean),
            LiteralValue::Null => self.get_type(TypeKind::Null),
            LiteralValue::RegExp { .. } | LiteralValue::BigInt(_) => self.any(),
        }
    }

    /// Resolve an identifier against the current scope.
    pub(crate) fn get_type_of_identifier(&mut self, node: &Node, name: &str) -> Type {
        match self.scope.get_by_name(name) {
            Some(symbol) => symbol.ty().clone(),
            None => {
                let message = format_message(diagnostic_messages::NAME_IS_NOT_DEFINED, &[name]);
                self.error(node.span, message);
                self.any()
            }
        }
    }

    /// `test ? consequent : alternate` widens the two branches.
    pub(crate) fn get_type_of_conditional(
        &mut self,
        cond: &ConditionalExprData,
    ) -> Result<Type, CheckError> {
        self.type_of(cond.test)?;
        let consequent = self.type_of(cond.consequent)?;
        let alternate = self.type_of(cond.alternate)?;
        Ok(union_types([&consequent, &alternate]))
    }

    /// Template literals are strings; embedded expressions are still checked.
    pub(crate) fn get_type_of_template(&mut self, template: &TemplateData) -> Result<Type, CheckError> {
        for &expr in &template.expressions {
            self.type_of(expr)?;
        }
        Ok(self.get_type(TypeKind::String))
    }
}
