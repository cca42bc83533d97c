//! Markup rules: elements, attributes, interpolations and loop directives.
//!
//! Every element opens exactly one scope. A `v-for` directive binds its loop
//! variables in that scope, while its source collection is typed against the
//! enclosing one:
//!
//! ```text
//! <li v-for="item in items" :key="item.id">{{ item.label }}</li>
//!             ^^^^    ^^^^^        ^^^^         ^^^^
//!             bound   outer        inner        inner
//! ```

use crate::error::CheckError;
use crate::parameter_checker::Bindings;
use crate::state::CheckerState;
use tracing::trace;
use vtc_ast::{AttributeData, ElementData, ExpressionContainerData, Node, NodeData, NodeIndex};
use vtc_solver::Type;

/// Directive name of the loop directive (`v-for`).
const FOR_DIRECTIVE: &str = "for";

impl<'a> CheckerState<'a> {
    pub(crate) fn get_type_of_element(&mut self, element: &ElementData) -> Result<Type, CheckError> {
        let arena = self.arena;
        let loop_attr = element
            .attributes
            .iter()
            .copied()
            .find(|&attr| arena.directive_name(attr) == Some(FOR_DIRECTIVE));

        let mut bindings = Bindings::new();
        if let Some(attr) = loop_attr {
            self.type_of(attr)?;
            if let Some(patterns) = self.loop_patterns(attr)? {
                bindings = self.collect_bindings(patterns)?;
            }
        }
        trace!(element = %element.name, bindings = bindings.len(), "entering element scope");

        self.with_scope(bindings, |checker| {
            for &attr in &element.attributes {
                if Some(attr) != loop_attr {
                    checker.type_of(attr)?;
                }
            }
            for &child in &element.children {
                checker.type_of(child)?;
            }
            Ok(checker.any())
        })
    }

    /// Left-hand patterns of a loop directive, or `None` when the directive
    /// has no (parsed) value.
    fn loop_patterns(&self, attr: NodeIndex) -> Result<Option<&'a [NodeIndex]>, CheckError> {
        let NodeData::VAttribute(data) = &self.node(attr)?.data else {
            return Ok(None);
        };
        if data.value.is_none() {
            return Ok(None);
        }
        let NodeData::VExpressionContainer(container) = &self.node(data.value)?.data else {
            return Ok(None);
        };
        if container.expression.is_none() {
            return Ok(None);
        }
        match &self.node(container.expression)?.data {
            NodeData::VForExpression(for_expr) => Ok(Some(for_expr.left.as_slice())),
            _ => Ok(None),
        }
    }

    pub(crate) fn get_type_of_attribute(&mut self, attr: &AttributeData) -> Result<Type, CheckError> {
        if attr.value.is_some() {
            return self.type_of(attr.value);
        }
        Ok(self.any())
    }

    /// `{{ expr }}` and directive values. Parse errors from the front end are
    /// reported as-is over the whole container.
    pub(crate) fn get_type_of_expression_container(
        &mut self,
        node: &Node,
        container: &ExpressionContainerData,
    ) -> Result<Type, CheckError> {
        if let Some(message) = &container.syntax_error {
            self.error(node.span, message.as_str());
        }
        if container.expression.is_some() {
            return self.type_of(container.expression);
        }
        Ok(self.any())
    }
}
