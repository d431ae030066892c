use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    /// `check` ran without `--enable`; nothing was analyzed.
    Disabled,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    /// Set when the config file already existed.
    pub error: Option<String>,
}

/// Result of running a transmark command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// All issues found, sorted by path, line and column.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of source files that were checked.
    pub source_files_checked: usize,
}

impl CommandResult {
    pub fn new(
        summary: CommandSummary,
        mut issues: Vec<Issue>,
        source_files_checked: usize,
    ) -> Self {
        issues.sort();

        let parse_error_count = issues
            .iter()
            .filter(|i| matches!(i, Issue::ParseError(_)))
            .count();

        let mut error_count = issues.len();

        if let CommandSummary::Init(ref summary) = summary
            && summary.error.is_some()
        {
            error_count += 1;
        }

        Self {
            summary,
            error_count,
            issues,
            parse_error_count,
            source_files_checked,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::issues::{ParseErrorIssue, SourceLocation, UnmarkedStringIssue};

    #[test]
    fn test_counts_and_sorting() {
        let result = CommandResult::new(
            CommandSummary::Check,
            vec![
                Issue::UnmarkedString(UnmarkedStringIssue {
                    location: SourceLocation::new("b.tsx", 1, 1),
                    source_line: String::new(),
                    text: "Hello".into(),
                }),
                Issue::ParseError(ParseErrorIssue {
                    file_path: "a.tsx".into(),
                    error: "boom".into(),
                }),
            ],
            2,
        );

        assert_eq!(result.error_count, 2);
        assert_eq!(result.parse_error_count, 1);
        assert_eq!(result.issues[0].file_path(), "a.tsx");
    }

    #[test]
    fn test_failed_init_counts_as_error() {
        let result = CommandResult::new(
            CommandSummary::Init(InitSummary {
                error: Some("exists".into()),
            }),
            Vec::new(),
            0,
        );
        assert_eq!(result.error_count, 1);
    }
}
