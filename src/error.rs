use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("GITHUB_GIST_TOKEN is not set in .env or environment")]
    MissingToken,

    #[error("Review file not found: {}", .0.display())]
    ReviewFileNotFound(PathBuf),

    #[error("Failed to read review file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read settings file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Gist API rejected the request: HTTP {status}: {body}")]
    RemoteRejected { status: u16, body: String },

    #[error("Unexpected response from gist API: {0}")]
    InvalidResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to serialize review snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;
