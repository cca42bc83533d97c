//! Node header and per-kind node data.
//!
//! A `Node` is a span plus a `NodeData` payload. Child references are
//! `NodeIndex` values into the owning [`NodeArena`](crate::NodeArena);
//! optional children use [`NodeIndex::NONE`].
//!
//! Operators are carried as the raw token text the parser saw. Classifying
//! them is the consumer's job, so an unknown token survives until it reaches
//! the checker.

use serde::{Deserialize, Serialize};
use vtc_common::Span;

/// Index of a node within a [`NodeArena`](crate::NodeArena).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self != Self::NONE
    }

    /// `None` for [`NodeIndex::NONE`], otherwise `Some(self)`.
    #[inline]
    pub fn into_option(self) -> Option<NodeIndex> {
        if self.is_none() { None } else { Some(self) }
    }
}

/// A node: its source range and kind-specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub span: Span,
    pub data: NodeData,
}

impl Node {
    #[inline]
    pub fn new(span: Span, data: NodeData) -> Self {
        Node { span, data }
    }

    /// ESTree / template AST type name of this node, e.g. `BinaryExpression`.
    pub fn kind_name(&self) -> &'static str {
        self.data.kind_name()
    }

    /// Returns `true` for nodes of the markup grammar.
    pub fn is_markup(&self) -> bool {
        self.data.is_markup()
    }
}

// =============================================================================
// Node Data
// =============================================================================

/// Kind-specific payload of a node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeData {
    // ---- expression grammar ----
    Literal(LiteralData),
    Identifier(IdentifierData),
    UnaryExpression(UnaryExprData),
    UpdateExpression(UpdateExprData),
    BinaryExpression(BinaryExprData),
    LogicalExpression(BinaryExprData),
    ConditionalExpression(ConditionalExprData),
    ObjectExpression(ObjectExprData),
    Property(PropertyData),
    TemplateLiteral(TemplateData),
    CallExpression(CallExprData),
    MemberExpression(AccessExprData),
    FunctionExpression(FunctionData),
    ArrowFunctionExpression(FunctionData),
    ObjectPattern(ObjectExprData),
    ArrayPattern(ArrayData),
    RestElement(SpreadData),
    AssignmentPattern(AssignmentPatternData),

    // ---- host grammar shapes without dedicated typing rules ----
    ArrayExpression(ArrayData),
    SequenceExpression(ArrayData),
    NewExpression(CallExprData),
    ThisExpression,
    SpreadElement(SpreadData),
    BlockStatement(BlockData),

    // ---- markup grammar ----
    VElement(ElementData),
    VAttribute(AttributeData),
    VDirectiveKey(DirectiveKeyData),
    VIdentifier(IdentifierData),
    VLiteral(TextData),
    VText(TextData),
    VExpressionContainer(ExpressionContainerData),
    VForExpression(ForExpressionData),
}

impl NodeData {
    pub fn kind_name(&self) -> &'static str {
        match self {
            NodeData::Literal(_) => "Literal",
            NodeData::Identifier(_) => "Identifier",
            NodeData::UnaryExpression(_) => "UnaryExpression",
            NodeData::UpdateExpression(_) => "UpdateExpression",
            NodeData::BinaryExpression(_) => "BinaryExpression",
            NodeData::LogicalExpression(_) => "LogicalExpression",
            NodeData::ConditionalExpression(_) => "ConditionalExpression",
            NodeData::ObjectExpression(_) => "ObjectExpression",
            NodeData::Property(_) => "Property",
            NodeData::TemplateLiteral(_) => "TemplateLiteral",
            NodeData::CallExpression(_) => "CallExpression",
            NodeData::MemberExpression(_) => "MemberExpression",
            NodeData::FunctionExpression(_) => "FunctionExpression",
            NodeData::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
            NodeData::ObjectPattern(_) => "ObjectPattern",
            NodeData::ArrayPattern(_) => "ArrayPattern",
            NodeData::RestElement(_) => "RestElement",
            NodeData::AssignmentPattern(_) => "AssignmentPattern",
            NodeData::ArrayExpression(_) => "ArrayExpression",
            NodeData::SequenceExpression(_) => "SequenceExpression",
            NodeData::NewExpression(_) => "NewExpression",
            NodeData::ThisExpression => "ThisExpression",
            NodeData::SpreadElement(_) => "SpreadElement",
            NodeData::BlockStatement(_) => "BlockStatement",
            NodeData::VElement(_) => "VElement",
            NodeData::VAttribute(_) => "VAttribute",
            NodeData::VDirectiveKey(_) => "VDirectiveKey",
            NodeData::VIdentifier(_) => "VIdentifier",
            NodeData::VLiteral(_) => "VLiteral",
            NodeData::VText(_) => "VText",
            NodeData::VExpressionContainer(_) => "VExpressionContainer",
            NodeData::VForExpression(_) => "VForExpression",
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(
            self,
            NodeData::VElement(_)
                | NodeData::VAttribute(_)
                | NodeData::VDirectiveKey(_)
                | NodeData::VIdentifier(_)
                | NodeData::VLiteral(_)
                | NodeData::VText(_)
                | NodeData::VExpressionContainer(_)
                | NodeData::VForExpression(_)
        )
    }
}

// =============================================================================
// Expression Data
// =============================================================================

/// Value of a literal node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    RegExp { pattern: String, flags: String },
    BigInt(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiteralData {
    pub value: LiteralValue,
}

/// Data for identifier nodes (expression identifiers and markup names)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierData {
    pub name: String,
}

/// Data for unary expressions (`-x`, `typeof x`, ...)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnaryExprData {
    pub operator: String,
    pub argument: NodeIndex,
}

/// Data for update expressions (`x++`, `--x`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateExprData {
    pub operator: String,
    pub prefix: bool,
    pub argument: NodeIndex,
}

/// Data for binary and logical expressions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator: String,
    pub right: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalExprData {
    pub test: NodeIndex,
    pub consequent: NodeIndex,
    pub alternate: NodeIndex,
}

/// Data for object literals and object patterns.
///
/// Each entry is a `Property` node; patterns may also hold a trailing
/// `RestElement`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectExprData {
    pub properties: Vec<NodeIndex>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyData {
    pub key: NodeIndex,
    pub value: NodeIndex,
    pub computed: bool,
    pub shorthand: bool,
}

/// Data for template literals. `quasis` holds the cooked text chunks between
/// the embedded expressions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateData {
    pub quasis: Vec<String>,
    pub expressions: Vec<NodeIndex>,
}

/// Data for call and `new` expressions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExprData {
    pub callee: NodeIndex,
    pub arguments: Vec<NodeIndex>,
}

/// Data for member access (`a.b` and `a[b]`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessExprData {
    pub object: NodeIndex,
    pub property: NodeIndex,
    pub computed: bool,
}

/// Data for function expressions and arrow functions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionData {
    pub params: Vec<NodeIndex>,
    pub body: NodeIndex,
    pub is_async: bool,
    /// Concise body (`x => x + 1`) rather than a block body.
    pub expression: bool,
}

/// Data for array literals, array patterns and sequences.
///
/// Array pattern holes are [`NodeIndex::NONE`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayData {
    pub elements: Vec<NodeIndex>,
}

/// Data for rest elements and spread elements
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadData {
    pub argument: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentPatternData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockData {
    pub body: Vec<NodeIndex>,
}

// =============================================================================
// Markup Data
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementData {
    pub name: String,
    pub attributes: Vec<NodeIndex>,
    pub children: Vec<NodeIndex>,
}

/// Data for element attributes.
///
/// `key` is a `VIdentifier` for plain attributes and a `VDirectiveKey` for
/// directives. `value` is a `VLiteral` for plain attributes and a
/// `VExpressionContainer` for directives, or [`NodeIndex::NONE`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeData {
    pub key: NodeIndex,
    pub value: NodeIndex,
    pub directive: bool,
}

/// Data for directive keys: `v-for`, `:foo` (`bind` with argument `foo`),
/// `@click.stop` (`on` with argument `click` and modifier `stop`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveKeyData {
    pub name: String,
    pub argument: Option<String>,
    pub modifiers: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextData {
    pub value: String,
}

/// Data for `{{ }}` interpolations and directive values.
///
/// A container whose source failed to parse carries the parser's message in
/// `syntax_error` and usually no expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionContainerData {
    pub expression: NodeIndex,
    pub syntax_error: Option<String>,
}

/// Data for the `item in list` expression of a loop directive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForExpressionData {
    pub left: Vec<NodeIndex>,
    pub right: NodeIndex,
}
