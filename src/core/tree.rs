//! Arena syntax tree consumed by the rules.
//!
//! Nodes live in a single `Vec` and refer to their parent by [`NodeId`].
//! The parent link is navigation-only: the tree owns every node, and nodes
//! never own each other. Nodes are stored in depth-first pre-order, so
//! iterating the arena visits the program the same way a recursive walk would.

use swc_common::{DUMMY_SP, Span};

/// Stable index of a node inside one [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Value carried by a literal node.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Boolean(bool),
    Number(f64),
    Null,
    /// Regex and BigInt literals. Never inspected.
    Other,
}

/// Closed set of node kinds the rules distinguish.
///
/// Anything the rules do not care about is lowered to [`NodeKind::Other`],
/// which still takes part in parent chains.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Program,
    /// String, boolean, numeric and null literals, plus JSX text.
    Literal(LiteralValue),
    /// Template literal with its static text segments in source order.
    TemplateLiteral {
        quasis: Vec<String>,
    },
    /// Tagged template, e.g. `` t`Hello` ``. `tag` is set for identifier tags.
    TaggedTemplate {
        tag: Option<String>,
    },
    /// JSX element; `name` is the rendered tag name (`div`, `Trans`, `Foo.Bar`).
    JsxElement {
        name: Option<String>,
    },
    JsxFragment,
    JsxAttribute {
        name: Option<String>,
    },
    /// `{...}` inside JSX children or attribute values.
    JsxExpressionContainer,
    CallExpression {
        callee: Option<NodeId>,
    },
    /// `object.property`; `property` is `None` for computed access.
    MemberExpression {
        object: Option<NodeId>,
        property: Option<String>,
    },
    Identifier {
        name: String,
    },
    ThisExpression,
    ArrowFunction,
    /// `const name = init`; `name` is set for plain identifier bindings.
    VariableDeclarator {
        name: Option<String>,
    },
    ReturnStatement,
    BinaryExpression,
    /// `&&`, `||` and `??`.
    LogicalExpression,
    ConditionalExpression,
    ArrayExpression,
    ObjectExpression,
    /// Key-value property of an object literal.
    Property,
    AssignmentExpression,
    NewExpression,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            span: DUMMY_SP,
        }
    }

    /// Text of a string literal. `None` for every other node, including
    /// boolean and numeric literals.
    pub fn string_value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Literal(LiteralValue::String(value)) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
}

impl SyntaxTree {
    /// Build a tree from nodes that already carry their parent links.
    ///
    /// No validation is done: parent links may dangle or even form cycles,
    /// and every consumer must cope with that.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.get(id).map(|node| &node.kind)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// Nodes in depth-first pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index), node))
    }
}

/// Builds a [`SyntaxTree`] with a stack of open nodes.
///
/// Every node opened or added becomes a child of the innermost open node.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    stack: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and make it the parent of subsequent nodes until [`close`](Self::close).
    pub fn open(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = self.leaf(kind, span);
        self.stack.push(id);
        id
    }

    pub fn close(&mut self) {
        self.stack.pop();
    }

    /// Add a node without children.
    pub fn leaf(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = self.next_id();
        self.nodes.push(Node {
            kind,
            parent: self.stack.last().copied(),
            span,
        });
        id
    }

    /// Id the next added node will receive.
    pub fn next_id(&self) -> NodeId {
        NodeId::new(self.nodes.len())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Fill in links (callee, member object) that are only known after the
    /// node's children were added.
    pub fn kind_mut(&mut self, id: NodeId) -> Option<&mut NodeKind> {
        self.nodes.get_mut(id.index()).map(|node| &mut node.kind)
    }

    pub fn finish(self) -> SyntaxTree {
        SyntaxTree { nodes: self.nodes }
    }
}
