use anyhow::Result;
use tracing::debug;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary};
use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{check_unmarked_string_issues, marked_for_translation::StringMarkedForTranslation},
};

fn disabled() -> CommandResult {
    CommandResult::new(CommandSummary::Disabled, Vec::new(), 0)
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    // The switch is checked before the config is loaded or any file is scanned.
    if !cmd.enable {
        debug!("rule disabled, skipping analysis");
        return Ok(disabled());
    }

    let ctx = CheckContext::new(&cmd.common)?;
    let Some(rule) = StringMarkedForTranslation::create(&ctx.config.rule_options(), cmd.enable)
    else {
        return Ok(disabled());
    };
    debug!(policy = ?rule.policy(), "rule enabled");

    let mut issues: Vec<Issue> = check_unmarked_string_issues(&ctx, &rule)
        .into_iter()
        .map(Issue::UnmarkedString)
        .collect();
    issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));

    Ok(CommandResult::new(
        CommandSummary::Check,
        issues,
        ctx.files().len(),
    ))
}
