//! Command-line interface layer.
//!
//! - `args`: clap definitions
//! - `commands`: command handlers producing a [`commands::CommandResult`]
//! - `report`: cargo-style printing of results
//! - `exit_status`: process exit codes

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    let status = if result.error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    };
    Ok(status.into())
}
