//! Configurable allow-lists that suppress findings.

use serde::{Deserialize, Serialize};

use super::ancestry::{
    ancestors, attribute_name, call_path, element_name, enclosing_attribute, enclosing_call,
    enclosing_element, named_arrow_function,
};
use crate::core::{NodeId, NodeKind, SyntaxTree};

pub const DEFAULT_IGNORED_ATTRIBUTES: &[&str] = &["className", "key"];
pub const DEFAULT_IGNORED_TAGS: &[&str] = &["Trans", "Plural"];

/// User-supplied rule options. Entries are added to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleOptions {
    #[serde(default)]
    pub ignore_attributes: Vec<String>,
    #[serde(default)]
    pub ignore_tags: Vec<String>,
    /// Function names or dotted call paths such as `lodash.something`.
    #[serde(default)]
    pub ignore_functions: Vec<String>,
}

/// Merged ignore lists consulted by the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnorePolicy {
    attributes: Vec<String>,
    tags: Vec<String>,
    /// Each entry split on `.` and stored innermost segment first.
    functions: Vec<Vec<String>>,
}

fn with_defaults(defaults: &[&str], extra: &[String]) -> Vec<String> {
    defaults
        .iter()
        .map(|s| s.to_string())
        .chain(extra.iter().cloned())
        .collect()
}

impl IgnorePolicy {
    pub fn new(options: &RuleOptions) -> Self {
        let functions = options
            .ignore_functions
            .iter()
            .map(|entry| entry.split('.').rev().map(str::to_owned).collect())
            .collect();

        Self {
            attributes: with_defaults(DEFAULT_IGNORED_ATTRIBUTES, &options.ignore_attributes),
            tags: with_defaults(DEFAULT_IGNORED_TAGS, &options.ignore_tags),
            functions,
        }
    }

    pub fn ignores_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }

    pub fn ignores_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }

    /// True if an ignored function entry matches the tail of `path`.
    ///
    /// `path` is outermost first (`["a", "b", "c"]` for `a.b.c()`), so the
    /// entries `c`, `b.c` and `a.b.c` all match it while `a` and `a.b` do not.
    pub fn ignores_call_path(&self, path: &[&str]) -> bool {
        self.functions.iter().any(|entry| {
            entry.len() <= path.len()
                && entry
                    .iter()
                    .zip(path.iter().rev())
                    .all(|(expected, actual)| expected == actual)
        })
    }

    pub fn ignores_function_name(&self, name: &str) -> bool {
        self.ignores_call_path(&[name])
    }

    fn element_is_ignored(&self, tree: &SyntaxTree, element: NodeId) -> bool {
        element_name(tree, element).is_some_and(|name| self.ignores_tag(name))
    }

    /// The nearest attribute is ignored by name, without looking at its owner.
    pub fn has_ignored_attribute(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        enclosing_attribute(tree, node)
            .and_then(|attr| attribute_name(tree, attr))
            .is_some_and(|name| self.ignores_attribute(name))
    }

    /// The nearest attribute is ignored and its owning element is not an
    /// ignored tag.
    pub fn is_attribute_suppressed(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        let Some(attr) = enclosing_attribute(tree, node) else {
            return false;
        };
        if !attribute_name(tree, attr).is_some_and(|name| self.ignores_attribute(name)) {
            return false;
        }
        !enclosing_element(tree, attr).is_some_and(|owner| self.element_is_ignored(tree, owner))
    }

    /// Inside an attribute only the attribute's owner counts; elsewhere any
    /// enclosing element may be an ignored tag.
    pub fn is_tag_suppressed(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        let mut inside_attribute = false;
        for (id, kind) in ancestors(tree, node) {
            match kind {
                NodeKind::JsxAttribute { .. } => inside_attribute = true,
                NodeKind::JsxElement { .. } => {
                    if self.element_is_ignored(tree, id) {
                        return true;
                    }
                    if inside_attribute {
                        return false;
                    }
                }
                _ => {}
            }
        }
        false
    }

    pub fn is_function_suppressed(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        if self.functions.is_empty() {
            return false;
        }
        let by_call = enclosing_call(tree, node)
            .is_some_and(|call| self.ignores_call_path(&call_path(tree, call)));
        by_call
            || named_arrow_function(tree, node).is_some_and(|name| self.ignores_function_name(name))
    }

    pub fn is_suppressed(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        self.is_attribute_suppressed(tree, node)
            || self.is_tag_suppressed(tree, node)
            || self.is_function_suppressed(tree, node)
            || is_inside_localization_call(tree, node)
    }
}

/// `i18n._(...)`: a one-character method on an object named `i18n`.
pub fn is_localization_call(tree: &SyntaxTree, call: NodeId) -> bool {
    let Some(NodeKind::CallExpression {
        callee: Some(callee),
    }) = tree.kind(call)
    else {
        return false;
    };
    let Some(NodeKind::MemberExpression {
        object: Some(object),
        property: Some(property),
    }) = tree.kind(*callee)
    else {
        return false;
    };
    let is_i18n_object = matches!(
        tree.kind(*object),
        Some(NodeKind::Identifier { name }) if name.eq_ignore_ascii_case("i18n")
    );
    is_i18n_object && property.chars().count() == 1
}

pub fn is_inside_localization_call(tree: &SyntaxTree, node: NodeId) -> bool {
    ancestors(tree, node).any(|(id, kind)| {
        matches!(kind, NodeKind::CallExpression { .. }) && is_localization_call(tree, id)
    })
}
