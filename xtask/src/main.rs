//! xtask - Development tasks for review-sync

use clap::{Parser, Subcommand};
use review_sync::config::settings::{
    API_URL_KEY, DEFAULT_API_URL, DEFAULT_REVIEW_FILE_PATH, GIST_ID_KEY, REVIEW_FILE_PATH_KEY,
    TOKEN_KEY, VAULT_PATH_KEY,
};
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for review-sync")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate docs/cli/reference.md from the clap definitions
    GenDocs,

    /// Write .env.example listing every recognized setting
    GenEnvExample,
}

fn main() {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs => generate_cli_docs(),
        Commands::GenEnvExample => generate_env_example(),
    }
}

fn generate_cli_docs() {
    let markdown = clap_markdown::help_markdown::<review_sync::cli::Cli>();

    let docs_dir = Path::new("docs/cli");
    fs::create_dir_all(docs_dir).expect("Failed to create docs/cli directory");

    let output_path = docs_dir.join("reference.md");
    fs::write(&output_path, markdown).expect("Failed to write CLI reference");

    println!("Generated CLI documentation at {}", output_path.display());
}

fn generate_env_example() {
    let lines = [
        "# review-sync settings. Environment variables override these values.".to_string(),
        "# Required: token with the `gist` scope".to_string(),
        format!("{}=", TOKEN_KEY),
        "# Leave empty on the first run, then paste the printed Gist ID here".to_string(),
        format!("{}=", GIST_ID_KEY),
        "# Defaults to ~/Obsidian/MainVault".to_string(),
        format!("# {}=", VAULT_PATH_KEY),
        format!("# {}={}", REVIEW_FILE_PATH_KEY, DEFAULT_REVIEW_FILE_PATH),
        format!("# {}={}", API_URL_KEY, DEFAULT_API_URL),
    ];

    let output_path = Path::new(".env.example");
    fs::write(output_path, lines.join("\n") + "\n").expect("Failed to write .env.example");

    println!("Generated {}", output_path.display());
}
