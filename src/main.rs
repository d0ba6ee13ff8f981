//! review-sync - Publish today's and tomorrow's review tasks to a secret GitHub Gist

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use review_sync::cli::{self, Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if std::env::var("REVIEW_SYNC_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("review_sync=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "review-sync", &mut std::io::stdout());
            Ok(())
        }
        None => cli::sync::run(cli.sync).await,
    }
}
