//! `string-is-marked-for-translation`: flags user-facing string and template
//! literals that are not wrapped in a localization call.
//!
//! A literal is judged from its position in the tree:
//! - Bare JSX text is reported unless an ignored tag encloses it.
//! - `{"..."}` containers are reported unless they are the value of an
//!   ignored attribute or sit under `i18n._(...)`.
//! - Attribute values and expression positions (return values, operands,
//!   arguments, initializers) are reported only when the text looks like
//!   prose and no ignore list applies.

pub mod ancestry;
pub mod heuristics;
pub mod ignore;


pub use heuristics::is_localizable;
pub use ignore::{IgnorePolicy, RuleOptions};

use crate::core::{HandlerKind, Handlers, NodeId, NodeKind, SyntaxTree};
use crate::utils::contains_alphabetic;
use ignore::is_inside_localization_call;

pub const RULE_NAME: &str = "string-is-marked-for-translation";
pub const MESSAGE: &str = "String is not marked for translation.";

pub struct StringMarkedForTranslation {
    policy: IgnorePolicy,
}

impl StringMarkedForTranslation {
    /// Build the rule, or `None` when it is switched off.
    pub fn create(options: &RuleOptions, enabled: bool) -> Option<Self> {
        enabled.then(|| Self {
            policy: IgnorePolicy::new(options),
        })
    }

    pub fn policy(&self) -> &IgnorePolicy {
        &self.policy
    }

    pub fn handlers(&self) -> Handlers<'_> {
        Handlers::default()
            .on(HandlerKind::TemplateLiteral, move |tree, node, sink| {
                if self.check_template_literal(tree, node) {
                    sink.report(node, MESSAGE);
                }
            })
            .on(HandlerKind::Literal, move |tree, node, sink| {
                if self.check_literal(tree, node) {
                    sink.report(node, MESSAGE);
                }
            })
    }

    /// True if the template literal at `node` should be reported.
    pub fn check_template_literal(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        let Some(NodeKind::TemplateLiteral { quasis }) = tree.kind(node) else {
            return false;
        };
        if self.policy.has_ignored_attribute(tree, node)
            || is_inside_localization_call(tree, node)
        {
            return false;
        }
        quasis
            .iter()
            .any(|quasi| !quasi.is_empty() && contains_alphabetic(quasi) && is_localizable(quasi))
    }

    /// True if the string literal at `node` should be reported.
    pub fn check_literal(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        let Some(text) = tree.get(node).and_then(|n| n.string_value()) else {
            return false;
        };
        if !contains_alphabetic(text) {
            return false;
        }
        let Some(parent) = tree.parent(node).and_then(|p| tree.kind(p)) else {
            return false;
        };

        match parent {
            NodeKind::JsxElement { .. } | NodeKind::JsxFragment => {
                !self.policy.is_tag_suppressed(tree, node)
            }
            NodeKind::JsxExpressionContainer => {
                !self.policy.is_attribute_suppressed(tree, node)
                    && !is_inside_localization_call(tree, node)
            }
            NodeKind::JsxAttribute { .. } => {
                !self.policy.is_attribute_suppressed(tree, node)
                    && !self.policy.is_tag_suppressed(tree, node)
                    && is_localizable(text)
            }
            NodeKind::ReturnStatement
            | NodeKind::BinaryExpression
            | NodeKind::LogicalExpression
            | NodeKind::ConditionalExpression
            | NodeKind::ArrayExpression
            | NodeKind::AssignmentExpression
            | NodeKind::NewExpression
            | NodeKind::VariableDeclarator { .. }
            | NodeKind::Property
            | NodeKind::ArrowFunction
            | NodeKind::CallExpression { .. } => {
                is_localizable(text) && !self.policy.is_suppressed(tree, node)
            }
            NodeKind::Program
            | NodeKind::Literal(_)
            | NodeKind::TemplateLiteral { .. }
            | NodeKind::TaggedTemplate { .. }
            | NodeKind::MemberExpression { .. }
            | NodeKind::Identifier { .. }
            | NodeKind::ThisExpression
            | NodeKind::ObjectExpression
            | NodeKind::Other => false,
        }
    }
}
