//! Command-line interface definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::sync::SyncArgs;

/// Publish today's and tomorrow's review tasks to a secret GitHub Gist
#[derive(Parser)]
#[command(name = "review-sync")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(flatten)]
    pub sync: SyncArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
