//! Binding collection for parameter and loop patterns.
//!
//! Every name a pattern binds is typed `any`. Default values of assignment
//! patterns are not checked.

use crate::error::CheckError;
use crate::state::CheckerState;
use smallvec::SmallVec;
use vtc_ast::{NodeData, NodeIndex};
use vtc_common::limits::INLINE_PATTERN_BINDINGS;
use vtc_common::{diagnostic_messages, format_message};
use vtc_solver::Symbol;

pub(crate) type Bindings = SmallVec<[Symbol; INLINE_PATTERN_BINDINGS]>;

impl<'a> CheckerState<'a> {
    /// Bindings introduced by a list of patterns, in source order.
    pub(crate) fn collect_bindings(&mut self, patterns: &[NodeIndex]) -> Result<Bindings, CheckError> {
        let mut bindings = Bindings::new();
        for &pattern in patterns {
            self.collect_params(pattern, &mut bindings)?;
        }
        Ok(bindings)
    }

    fn collect_params(&mut self, pattern: NodeIndex, acc: &mut Bindings) -> Result<(), CheckError> {
        let node = self.node(pattern)?;
        match &node.data {
            NodeData::Identifier(ident) => {
                acc.push(Symbol::new(ident.name.as_str(), self.any()));
            }
            NodeData::ObjectPattern(object) => {
                for &property in &object.properties {
                    match &self.node(property)?.data {
                        NodeData::Property(prop) => self.collect_params(prop.value, acc)?,
                        _ => self.collect_params(property, acc)?,
                    }
                }
            }
            NodeData::ArrayPattern(array) => {
                // Holes (`[, b]`) bind nothing.
                for &element in array.elements.iter().filter(|e| e.is_some()) {
                    self.collect_params(element, acc)?;
                }
            }
            NodeData::RestElement(rest) => self.collect_params(rest.argument, acc)?,
            NodeData::AssignmentPattern(assign) => self.collect_params(assign.left, acc)?,
            _ => {
                let message =
                    format_message(diagnostic_messages::UNEXPECTED_TOKEN_TYPE, &[node.kind_name()]);
                self.error(node.span, message);
            }
        }
        Ok(())
    }
}
