use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for linter tools.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and found nothing to report.
    Success,
    /// Command completed but found unmarked strings or unparsable files.
    Failure,
    /// Command failed before finishing (bad config, unreadable root, ...).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
