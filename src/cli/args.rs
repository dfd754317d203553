//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `resolve`: Resolve raw annotation texts and print the result
//! - `localize`: Rewrite documentation JSON files in the configured locale
//! - `check`: Report markers whose keys no backend can resolve
//! - `init`: Initialize the configuration file

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Localize(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Locale for catalog lookups (overrides config file)
    #[arg(long, env = "APIDOC_I18N_LOCALE")]
    pub locale: Option<String>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Raw texts, e.g. '#{user.list}'
    #[arg(required = true)]
    pub texts: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LocalizeCommand {
    /// Documentation JSON files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Write localized copies into this directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Overwrite the input files (default is dry-run)
    #[arg(long, conflicts_with = "out_dir")]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Documentation JSON files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve #{key} markers in the given texts
    Resolve(ResolveCommand),
    /// Localize documentation JSON files
    Localize(LocalizeCommand),
    /// Report #{key} markers that no message backend resolves
    Check(CheckCommand),
    /// Initialize a new .apidoc-i18n.json configuration file
    Init,
}
