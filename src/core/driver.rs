//! Depth-first dispatch of arena nodes to rule handlers.

use std::collections::HashMap;

use super::tree::{NodeId, NodeKind, SyntaxTree};

/// Destination for findings produced by a rule.
pub trait ReportSink {
    fn report(&mut self, node: NodeId, message: &'static str);
}

/// A single report: one node and the rule's fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub node: NodeId,
    pub message: &'static str,
}

impl ReportSink for Vec<Finding> {
    fn report(&mut self, node: NodeId, message: &'static str) {
        self.push(Finding { node, message });
    }
}

/// Node kinds a rule can register a handler for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    TemplateLiteral,
    Literal,
}

impl HandlerKind {
    pub fn of(kind: &NodeKind) -> Option<Self> {
        match kind {
            NodeKind::TemplateLiteral { .. } => Some(Self::TemplateLiteral),
            NodeKind::Literal(_) => Some(Self::Literal),
            NodeKind::Program
            | NodeKind::TaggedTemplate { .. }
            | NodeKind::JsxElement { .. }
            | NodeKind::JsxFragment
            | NodeKind::JsxAttribute { .. }
            | NodeKind::JsxExpressionContainer
            | NodeKind::CallExpression { .. }
            | NodeKind::MemberExpression { .. }
            | NodeKind::Identifier { .. }
            | NodeKind::ThisExpression
            | NodeKind::ArrowFunction
            | NodeKind::VariableDeclarator { .. }
            | NodeKind::ReturnStatement
            | NodeKind::BinaryExpression
            | NodeKind::LogicalExpression
            | NodeKind::ConditionalExpression
            | NodeKind::ArrayExpression
            | NodeKind::ObjectExpression
            | NodeKind::Property
            | NodeKind::AssignmentExpression
            | NodeKind::NewExpression
            | NodeKind::Other => None,
        }
    }
}

pub type Handler<'a> = Box<dyn Fn(&SyntaxTree, NodeId, &mut dyn ReportSink) + 'a>;

/// Mapping from node kind to the handler invoked for it.
#[derive(Default)]
pub struct Handlers<'a> {
    handlers: HashMap<HandlerKind, Handler<'a>>,
}

impl<'a> Handlers<'a> {
    pub fn on<F>(mut self, kind: HandlerKind, handler: F) -> Self
    where
        F: Fn(&SyntaxTree, NodeId, &mut dyn ReportSink) + 'a,
    {
        self.handlers.insert(kind, Box::new(handler));
        self
    }

    pub fn get(&self, kind: HandlerKind) -> Option<&Handler<'a>> {
        self.handlers.get(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Visit every node of `tree` in depth-first pre-order and invoke the
/// registered handler for its kind.
pub fn run(tree: &SyntaxTree, handlers: &Handlers<'_>, sink: &mut dyn ReportSink) {
    if handlers.is_empty() {
        return;
    }
    for (id, node) in tree.iter() {
        if let Some(kind) = HandlerKind::of(&node.kind)
            && let Some(handler) = handlers.get(kind)
        {
            handler(tree, id, sink);
        }
    }
}
