//! Queries over a node's parent chain.
//!
//! Every walk is bounded by [`MAX_ANCESTOR_DEPTH`], so a malformed tree with
//! a cyclic parent chain yields "not found" instead of looping forever.

use crate::core::{NodeId, NodeKind, SyntaxTree};

/// Upper bound on parent links followed by any single query.
pub const MAX_ANCESTOR_DEPTH: usize = 1024;

/// Iterator over the ancestors of a node, nearest first.
pub struct Ancestors<'t> {
    tree: &'t SyntaxTree,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'t> Iterator for Ancestors<'t> {
    type Item = (NodeId, &'t NodeKind);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let id = self.next?;
        let kind = self.tree.kind(id)?;
        self.next = self.tree.parent(id);
        Some((id, kind))
    }
}

pub fn ancestors(tree: &SyntaxTree, node: NodeId) -> Ancestors<'_> {
    Ancestors {
        tree,
        next: tree.parent(node),
        remaining: MAX_ANCESTOR_DEPTH,
    }
}

pub fn nearest_ancestor<P>(tree: &SyntaxTree, node: NodeId, predicate: P) -> Option<NodeId>
where
    P: Fn(&NodeKind) -> bool,
{
    ancestors(tree, node)
        .find(|(_, kind)| predicate(kind))
        .map(|(id, _)| id)
}

pub fn enclosing_attribute(tree: &SyntaxTree, node: NodeId) -> Option<NodeId> {
    nearest_ancestor(tree, node, |kind| {
        matches!(kind, NodeKind::JsxAttribute { .. })
    })
}

pub fn enclosing_element(tree: &SyntaxTree, node: NodeId) -> Option<NodeId> {
    nearest_ancestor(tree, node, |kind| matches!(kind, NodeKind::JsxElement { .. }))
}

pub fn enclosing_call(tree: &SyntaxTree, node: NodeId) -> Option<NodeId> {
    nearest_ancestor(tree, node, |kind| {
        matches!(kind, NodeKind::CallExpression { .. })
    })
}

pub fn element_name(tree: &SyntaxTree, element: NodeId) -> Option<&str> {
    match tree.kind(element)? {
        NodeKind::JsxElement { name } => name.as_deref(),
        _ => None,
    }
}

pub fn attribute_name(tree: &SyntaxTree, attribute: NodeId) -> Option<&str> {
    match tree.kind(attribute)? {
        NodeKind::JsxAttribute { name } => name.as_deref(),
        _ => None,
    }
}

/// Dotted path of a call's callee, outermost object first.
///
/// `a.b.c()` yields `["a", "b", "c"]`, `this.save()` yields `["save"]`, and
/// `foo()` yields `["foo"]`. The path ends at a computed member, so
/// `a[0].b()` yields `["b"]`, and it is empty when the callee is not an
/// identifier or member chain.
pub fn call_path(tree: &SyntaxTree, call: NodeId) -> Vec<&str> {
    let mut path = Vec::new();
    let mut current = match tree.kind(call) {
        Some(NodeKind::CallExpression { callee }) => *callee,
        _ => None,
    };

    for _ in 0..MAX_ANCESTOR_DEPTH {
        let Some(id) = current else {
            break;
        };
        match tree.kind(id) {
            Some(NodeKind::MemberExpression {
                object,
                property: Some(property),
            }) => {
                path.push(property.as_str());
                current = *object;
            }
            Some(NodeKind::Identifier { name }) => {
                path.push(name.as_str());
                break;
            }
            _ => break,
        }
    }

    path.reverse();
    path
}

/// Name of the nearest arrow function bound with `const name = () => ...`.
pub fn named_arrow_function(tree: &SyntaxTree, node: NodeId) -> Option<&str> {
    ancestors(tree, node)
        .filter(|(_, kind)| matches!(kind, NodeKind::ArrowFunction))
        .find_map(|(arrow, _)| match tree.kind(tree.parent(arrow)?)? {
            NodeKind::VariableDeclarator { name } => name.as_deref(),
            _ => None,
        })
}
