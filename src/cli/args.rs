//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report strings that are not marked for translation
//! - `init`: Write a default `.transmarkrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that read sources.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory; the config file is searched from here
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Turn the rule on; without it no file is analyzed
    #[arg(long, env = "TRANSMARK_ENABLED")]
    pub enable: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report string literals that are not marked for translation
    Check(CheckCommand),
    /// Initialize a new .transmarkrc.json configuration file
    Init,
}
