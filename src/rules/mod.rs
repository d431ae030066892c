//! Lint rules and the glue that runs them over a [`CheckContext`].
//!
//! ## Module Structure
//!
//! - `marked_for_translation`: the `string-is-marked-for-translation` rule

pub mod marked_for_translation;

use rayon::prelude::*;
use swc_common::{SourceMap, SourceMapper, Span};

use crate::{
    core::{CheckContext, Finding, LoweredFile, NodeId, NodeKind, SyntaxTree, run},
    issues::{SourceLocation, UnmarkedStringIssue},
};
use marked_for_translation::StringMarkedForTranslation;

/// Run the rule over every lowered file and turn its findings into issues.
pub fn check_unmarked_string_issues(
    ctx: &CheckContext,
    rule: &StringMarkedForTranslation,
) -> Vec<UnmarkedStringIssue> {
    ctx.lowered_files()
        .par_iter()
        .flat_map_iter(|(file_path, file)| check_file(file_path, file, rule))
        .collect()
}

fn check_file(
    file_path: &str,
    file: &LoweredFile,
    rule: &StringMarkedForTranslation,
) -> Vec<UnmarkedStringIssue> {
    let mut findings: Vec<Finding> = Vec::new();
    run(&file.tree, &rule.handlers(), &mut findings);

    findings
        .into_iter()
        .filter_map(|finding| to_issue(file_path, file, finding.node))
        .collect()
}

fn to_issue(file_path: &str, file: &LoweredFile, node: NodeId) -> Option<UnmarkedStringIssue> {
    let span = file.tree.get(node)?.span;
    let loc = file.source_map.lookup_char_pos(span.lo);
    let source_line = loc
        .file
        .get_line(loc.line - 1)
        .map(|cow| cow.to_string())
        .unwrap_or_default();

    Some(UnmarkedStringIssue {
        location: SourceLocation::new(file_path, loc.line, loc.col_display + 1),
        source_line,
        text: node_text(&file.tree, &file.source_map, node, span),
    })
}

/// Display text of a reported node: the trimmed string value, or the
/// template's source with its `${...}` holes.
fn node_text(tree: &SyntaxTree, source_map: &SourceMap, node: NodeId, span: Span) -> String {
    match tree.kind(node) {
        Some(NodeKind::TemplateLiteral { quasis }) => source_map
            .span_to_snippet(span)
            .map(|snippet| snippet.trim_matches('`').to_string())
            .unwrap_or_else(|_| quasis.concat()),
        _ => tree
            .get(node)
            .and_then(|n| n.string_value())
            .unwrap_or_default()
            .trim()
            .to_string(),
    }
}
