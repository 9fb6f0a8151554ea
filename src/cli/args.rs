//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Check comment spacing in JS/TS source files
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::rules::spaced_comment::Mode;

#[derive(Debug, Parser)]
#[command(name = "spaced-comment", author, version, about, long_about = None)]
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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Files, directories or glob patterns to check (overrides `includes`)
    pub paths: Vec<PathBuf>,

    /// Source code root directory (default: current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Whether comments must start with whitespace (overrides config file)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Marker allowed to fill a comment on its own, e.g. `-` for `//-----`.
    /// Can be specified multiple times (overrides config file)
    #[arg(long = "exception", value_name = "STR")]
    pub exceptions: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that comments start with (or without) whitespace
    Check(CheckCommand),
    /// Initialize a new .spacedcommentrc.json configuration file
    Init,
}
