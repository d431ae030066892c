//! Issue types produced by a check run.
//!
//! Each issue carries everything the reporter needs: location, the source
//! line for the caret excerpt, and the message. Every issue is an error.

use crate::rules::marked_for_translation::{MESSAGE, RULE_NAME};

// ============================================================
// Rule
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnmarkedString,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnmarkedString => write!(f, "{}", RULE_NAME),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Locations
// ============================================================

/// Position in a source file. `line` and `col` are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A string literal or template literal that is not marked for translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmarkedStringIssue {
    pub location: SourceLocation,
    /// The full source line containing the literal.
    pub source_line: String,
    /// The literal's text, trimmed.
    pub text: String,
}

impl UnmarkedStringIssue {
    pub fn rule() -> Rule {
        Rule::UnmarkedString
    }
}

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnmarkedString(UnmarkedStringIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn rule(&self) -> Rule {
        match self {
            Issue::UnmarkedString(_) => UnmarkedStringIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }

    pub fn file_path(&self) -> &str {
        match self {
            Issue::UnmarkedString(issue) => &issue.location.file_path,
            Issue::ParseError(issue) => &issue.file_path,
        }
    }

    /// `(line, col)`; parse errors sit at `(0, 0)` so they sort first in their file.
    pub fn position(&self) -> (usize, usize) {
        match self {
            Issue::UnmarkedString(issue) => (issue.location.line, issue.location.col),
            Issue::ParseError(_) => (0, 0),
        }
    }

    /// Source line for the caret excerpt, if the issue has one.
    pub fn source_line(&self) -> Option<&str> {
        match self {
            Issue::UnmarkedString(issue) => Some(&issue.source_line),
            Issue::ParseError(_) => None,
        }
    }

    /// Primary message shown after `error:`.
    pub fn message(&self) -> &str {
        match self {
            Issue::UnmarkedString(issue) => &issue.text,
            Issue::ParseError(issue) => &issue.error,
        }
    }

    /// Text for the `= note:` line.
    pub fn details(&self) -> Option<&str> {
        match self {
            Issue::UnmarkedString(_) => Some(MESSAGE),
            Issue::ParseError(_) => None,
        }
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.position().cmp(&other.position()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(other.message()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn unmarked(file: &str, line: usize, col: usize, text: &str) -> Issue {
        Issue::UnmarkedString(UnmarkedStringIssue {
            location: SourceLocation::new(file, line, col),
            source_line: String::new(),
            text: text.to_string(),
        })
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(
            Rule::UnmarkedString.to_string(),
            "string-is-marked-for-translation"
        );
        assert_eq!(Rule::ParseError.to_string(), "parse-error");
    }

    #[test]
    fn test_issues_sort_by_path_then_position() {
        let mut issues = vec![
            unmarked("b.tsx", 1, 1, "B"),
            unmarked("a.tsx", 3, 5, "A2"),
            unmarked("a.tsx", 3, 2, "A1"),
            Issue::ParseError(ParseErrorIssue {
                file_path: "a.tsx".into(),
                error: "boom".into(),
            }),
        ];
        issues.sort();

        let order: Vec<_> = issues.iter().map(|i| i.message()).collect();
        assert_eq!(order, vec!["boom", "A1", "A2", "B"]);
    }

    #[test]
    fn test_details_only_for_unmarked_strings() {
        assert_eq!(
            unmarked("a.tsx", 1, 1, "Hi").details(),
            Some("String is not marked for translation.")
        );
        let parse_error = Issue::ParseError(ParseErrorIssue {
            file_path: "a.tsx".into(),
            error: "boom".into(),
        });
        assert_eq!(parse_error.details(), None);
        assert_eq!(parse_error.source_line(), None);
    }
}
