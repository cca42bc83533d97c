//! Node storage.
//!
//! `NodeArena` owns every node of one parsed template or expression. Nodes
//! are appended bottom-up (children before parents) and addressed by
//! [`NodeIndex`]. The builder methods mirror the node kinds and are what an
//! upstream parser (or a test) uses to assemble a tree.

use crate::node::*;
use serde::{Deserialize, Serialize};
use vtc_common::Span;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.0 as usize)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Span of `idx`, if the node exists.
    pub fn span(&self, idx: NodeIndex) -> Option<Span> {
        self.get(idx).map(|node| node.span)
    }

    /// Name of an `Identifier` or `VIdentifier` node.
    pub fn identifier_name(&self, idx: NodeIndex) -> Option<&str> {
        match &self.get(idx)?.data {
            NodeData::Identifier(ident) | NodeData::VIdentifier(ident) => Some(&ident.name),
            _ => None,
        }
    }

    /// Directive name of a `VAttribute` node (`for` for `v-for`), or `None`
    /// for plain attributes.
    pub fn directive_name(&self, attr: NodeIndex) -> Option<&str> {
        let NodeData::VAttribute(data) = &self.get(attr)?.data else {
            return None;
        };
        if !data.directive {
            return None;
        }
        match &self.get(data.key)?.data {
            NodeData::VDirectiveKey(key) => Some(&key.name),
            _ => None,
        }
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Add a node with arbitrary data
    pub fn add_node(&mut self, span: Span, data: NodeData) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(Node::new(span, data));
        NodeIndex(index)
    }

    pub fn add_literal(&mut self, pos: u32, end: u32, value: LiteralValue) -> NodeIndex {
        self.add_node(Span::new(pos, end), NodeData::Literal(LiteralData { value }))
    }

    pub fn add_string(&mut self, pos: u32, end: u32, value: &str) -> NodeIndex {
        self.add_literal(pos, end, LiteralValue::String(value.to_string()))
    }

    pub fn add_number(&mut self, pos: u32, end: u32, value: f64) -> NodeIndex {
        self.add_literal(pos, end, LiteralValue::Number(value))
    }

    pub fn add_boolean(&mut self, pos: u32, end: u32, value: bool) -> NodeIndex {
        self.add_literal(pos, end, LiteralValue::Boolean(value))
    }

    pub fn add_null(&mut self, pos: u32, end: u32) -> NodeIndex {
        self.add_literal(pos, end, LiteralValue::Null)
    }

    pub fn add_identifier(&mut self, pos: u32, end: u32, name: &str) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::Identifier(IdentifierData {
                name: name.to_string(),
            }),
        )
    }

    pub fn add_unary(&mut self, pos: u32, end: u32, operator: &str, argument: NodeIndex) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::UnaryExpression(UnaryExprData {
                operator: operator.to_string(),
                argument,
            }),
        )
    }

    pub fn add_update(
        &mut self,
        pos: u32,
        end: u32,
        operator: &str,
        prefix: bool,
        argument: NodeIndex,
    ) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::UpdateExpression(UpdateExprData {
                operator: operator.to_string(),
                prefix,
                argument,
            }),
        )
    }

    pub fn add_binary(
        &mut self,
        pos: u32,
        end: u32,
        left: NodeIndex,
        operator: &str,
        right: NodeIndex,
    ) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::BinaryExpression(BinaryExprData {
                left,
                operator: operator.to_string(),
                right,
            }),
        )
    }

    pub fn add_logical(
        &mut self,
        pos: u32,
        end: u32,
        left: NodeIndex,
        operator: &str,
        right: NodeIndex,
    ) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::LogicalExpression(BinaryExprData {
                left,
                operator: operator.to_string(),
                right,
            }),
        )
    }

    pub fn add_conditional(
        &mut self,
        pos: u32,
        end: u32,
        test: NodeIndex,
        consequent: NodeIndex,
        alternate: NodeIndex,
    ) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::ConditionalExpression(ConditionalExprData {
                test,
                consequent,
                alternate,
            }),
        )
    }

    pub fn add_object(&mut self, pos: u32, end: u32, properties: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::ObjectExpression(ObjectExprData { properties }),
        )
    }

    pub fn add_property(
        &mut self,
        pos: u32,
        end: u32,
        key: NodeIndex,
        value: NodeIndex,
        shorthand: bool,
    ) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::Property(PropertyData {
                key,
                value,
                computed: false,
                shorthand,
            }),
        )
    }

    pub fn add_template(
        &mut self,
        pos: u32,
        end: u32,
        quasis: Vec<String>,
        expressions: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::TemplateLiteral(TemplateData {
                quasis,
                expressions,
            }),
        )
    }

    pub fn add_call(
        &mut self,
        pos: u32,
        end: u32,
        callee: NodeIndex,
        arguments: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::CallExpression(CallExprData { callee, arguments }),
        )
    }

    pub fn add_member(
        &mut self,
        pos: u32,
        end: u32,
        object: NodeIndex,
        property: NodeIndex,
        computed: bool,
    ) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::MemberExpression(AccessExprData {
                object,
                property,
                computed,
            }),
        )
    }

    pub fn add_function(&mut self, pos: u32, end: u32, params: Vec<NodeIndex>, body: NodeIndex) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::FunctionExpression(FunctionData {
                params,
                body,
                is_async: false,
                expression: false,
            }),
        )
    }

    pub fn add_arrow(
        &mut self,
        pos: u32,
        end: u32,
        params: Vec<NodeIndex>,
        body: NodeIndex,
        is_async: bool,
    ) -> NodeIndex {
        // A block body is recognizable from the body node itself.
        let expression = !matches!(
            self.get(body).map(|node| &node.data),
            Some(NodeData::BlockStatement(_))
        );
        self.add_node(
            Span::new(pos, end),
            NodeData::ArrowFunctionExpression(FunctionData {
                params,
                body,
                is_async,
                expression,
            }),
        )
    }

    pub fn add_block(&mut self, pos: u32, end: u32, body: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(Span::new(pos, end), NodeData::BlockStatement(BlockData { body }))
    }

    pub fn add_object_pattern(&mut self, pos: u32, end: u32, properties: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::ObjectPattern(ObjectExprData { properties }),
        )
    }

    pub fn add_array_pattern(&mut self, pos: u32, end: u32, elements: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(Span::new(pos, end), NodeData::ArrayPattern(ArrayData { elements }))
    }

    pub fn add_rest_element(&mut self, pos: u32, end: u32, argument: NodeIndex) -> NodeIndex {
        self.add_node(Span::new(pos, end), NodeData::RestElement(SpreadData { argument }))
    }

    pub fn add_assignment_pattern(
        &mut self,
        pos: u32,
        end: u32,
        left: NodeIndex,
        right: NodeIndex,
    ) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::AssignmentPattern(AssignmentPatternData { left, right }),
        )
    }

    pub fn add_array(&mut self, pos: u32, end: u32, elements: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(Span::new(pos, end), NodeData::ArrayExpression(ArrayData { elements }))
    }

    // ---- markup ----

    pub fn add_element(
        &mut self,
        pos: u32,
        end: u32,
        name: &str,
        attributes: Vec<NodeIndex>,
        children: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::VElement(ElementData {
                name: name.to_string(),
                attributes,
                children,
            }),
        )
    }

    pub fn add_attribute(
        &mut self,
        pos: u32,
        end: u32,
        key: NodeIndex,
        value: NodeIndex,
        directive: bool,
    ) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::VAttribute(AttributeData {
                key,
                value,
                directive,
            }),
        )
    }

    pub fn add_directive_key(
        &mut self,
        pos: u32,
        end: u32,
        name: &str,
        argument: Option<&str>,
    ) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::VDirectiveKey(DirectiveKeyData {
                name: name.to_string(),
                argument: argument.map(str::to_string),
                modifiers: Vec::new(),
            }),
        )
    }

    pub fn add_markup_identifier(&mut self, pos: u32, end: u32, name: &str) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::VIdentifier(IdentifierData {
                name: name.to_string(),
            }),
        )
    }

    pub fn add_markup_literal(&mut self, pos: u32, end: u32, value: &str) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::VLiteral(TextData {
                value: value.to_string(),
            }),
        )
    }

    pub fn add_text(&mut self, pos: u32, end: u32, value: &str) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::VText(TextData {
                value: value.to_string(),
            }),
        )
    }

    pub fn add_expression_container(&mut self, pos: u32, end: u32, expression: NodeIndex) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::VExpressionContainer(ExpressionContainerData {
                expression,
                syntax_error: None,
            }),
        )
    }

    /// Add an expression container whose source failed to parse.
    pub fn add_erroneous_container(&mut self, pos: u32, end: u32, message: &str) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::VExpressionContainer(ExpressionContainerData {
                expression: NodeIndex::NONE,
                syntax_error: Some(message.to_string()),
            }),
        )
    }

    pub fn add_for_expression(
        &mut self,
        pos: u32,
        end: u32,
        left: Vec<NodeIndex>,
        right: NodeIndex,
    ) -> NodeIndex {
        self.add_node(
            Span::new(pos, end),
            NodeData::VForExpression(ForExpressionData { left, right }),
        )
    }
}

#[cfg(test)]
#[path = "../tests/arena_tests.rs"]
mod arena_tests;
