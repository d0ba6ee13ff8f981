//! Effective settings for one sync run

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, SyncError};

use super::env_file::resolve_env;

pub const TOKEN_KEY: &str = "GITHUB_GIST_TOKEN";
pub const GIST_ID_KEY: &str = "REVIEW_GIST_ID";
pub const VAULT_PATH_KEY: &str = "VAULT_PATH";
pub const REVIEW_FILE_PATH_KEY: &str = "REVIEW_FILE_PATH";
pub const API_URL_KEY: &str = "GIST_API_URL";

pub const DEFAULT_REVIEW_FILE_PATH: &str = "03_知識/復習管理_20251001開始.md";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Resolved, read-only configuration handed to each pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Gist API token
    pub token: String,

    /// Existing gist to update; `None` creates a new one
    pub gist_id: Option<String>,

    /// Root of the notes vault
    pub vault_path: PathBuf,

    /// Review file, relative to the vault unless absolute
    pub review_file_path: PathBuf,

    /// Base URL of the gist API
    pub api_base_url: String,
}

impl Settings {
    /// Read `env_file`, overlay `env` and build settings.
    pub fn resolve<I>(env_file: &Path, env: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::from_map(&resolve_env(env_file, env)?)
    }

    /// Build settings from an already merged mapping.
    pub fn from_map(values: &HashMap<String, String>) -> Result<Self> {
        let token = non_empty(values, TOKEN_KEY).ok_or(SyncError::MissingToken)?;
        Ok(Self::with_token(values, token))
    }

    /// Like [`Settings::from_map`], but a missing token becomes an empty string.
    /// Used when nothing will be published.
    pub fn from_map_without_token(values: &HashMap<String, String>) -> Self {
        let token = non_empty(values, TOKEN_KEY).unwrap_or_default();
        Self::with_token(values, token)
    }

    fn with_token(values: &HashMap<String, String>, token: String) -> Self {
        // Paths fall back only when unset; an empty VAULT_PATH means the working directory.
        let vault_path = values
            .get(VAULT_PATH_KEY)
            .map(PathBuf::from)
            .unwrap_or_else(default_vault_path);
        let review_file_path = values
            .get(REVIEW_FILE_PATH_KEY)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REVIEW_FILE_PATH));
        let api_base_url = non_empty(values, API_URL_KEY)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            token,
            gist_id: non_empty(values, GIST_ID_KEY),
            vault_path,
            review_file_path,
            api_base_url,
        }
    }

    /// Full path of the review file
    pub fn review_file(&self) -> PathBuf {
        self.vault_path.join(&self.review_file_path)
    }
}

fn non_empty(values: &HashMap<String, String>, key: &str) -> Option<String> {
    values.get(key).filter(|v| !v.is_empty()).cloned()
}

fn default_vault_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join("Obsidian")
        .join("MainVault")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_token_is_error() {
        let result = Settings::from_map(&map(&[(VAULT_PATH_KEY, "/vault")]));
        assert!(matches!(result, Err(SyncError::MissingToken)));
    }

    #[test]
    fn test_empty_token_is_error() {
        let result = Settings::from_map(&map(&[(TOKEN_KEY, "")]));
        assert!(matches!(result, Err(SyncError::MissingToken)));
    }

    #[test]
    fn test_defaults() -> Result<()> {
        let settings = Settings::from_map(&map(&[(TOKEN_KEY, "tok")]))?;
        assert_eq!(settings.token, "tok");
        assert_eq!(settings.gist_id, None);
        assert!(settings.vault_path.ends_with("Obsidian/MainVault"));
        assert_eq!(
            settings.review_file_path,
            PathBuf::from(DEFAULT_REVIEW_FILE_PATH)
        );
        assert_eq!(settings.api_base_url, DEFAULT_API_URL);
        Ok(())
    }

    #[test]
    fn test_empty_gist_id_is_none() -> Result<()> {
        let settings = Settings::from_map(&map(&[(TOKEN_KEY, "tok"), (GIST_ID_KEY, "")]))?;
        assert_eq!(settings.gist_id, None);
        Ok(())
    }

    #[test]
    fn test_review_file_joins_vault() -> Result<()> {
        let settings = Settings::from_map(&map(&[
            (TOKEN_KEY, "tok"),
            (VAULT_PATH_KEY, "/vault"),
            (REVIEW_FILE_PATH_KEY, "notes/review.md"),
        ]))?;
        assert_eq!(settings.review_file(), PathBuf::from("/vault/notes/review.md"));
        Ok(())
    }

    #[test]
    fn test_empty_vault_path_is_working_directory() -> Result<()> {
        let settings = Settings::from_map(&map(&[
            (TOKEN_KEY, "tok"),
            (VAULT_PATH_KEY, ""),
            (REVIEW_FILE_PATH_KEY, "notes/review.md"),
        ]))?;
        assert_eq!(settings.vault_path, PathBuf::new());
        assert_eq!(settings.review_file(), PathBuf::from("notes/review.md"));
        Ok(())
    }

    #[test]
    fn test_absolute_review_file_replaces_vault() -> Result<()> {
        let settings = Settings::from_map(&map(&[
            (TOKEN_KEY, "tok"),
            (VAULT_PATH_KEY, "/vault"),
            (REVIEW_FILE_PATH_KEY, "/elsewhere/review.md"),
        ]))?;
        assert_eq!(settings.review_file(), PathBuf::from("/elsewhere/review.md"));
        Ok(())
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() -> Result<()> {
        let settings = Settings::from_map(&map(&[
            (TOKEN_KEY, "tok"),
            (API_URL_KEY, "http://127.0.0.1:1234/"),
        ]))?;
        assert_eq!(settings.api_base_url, "http://127.0.0.1:1234");
        Ok(())
    }

    #[test]
    fn test_without_token_allows_missing_token() {
        let settings = Settings::from_map_without_token(&map(&[(GIST_ID_KEY, "abc")]));
        assert!(settings.token.is_empty());
        assert_eq!(settings.gist_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_resolve_missing_file_and_no_token() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let no_env: Vec<(String, String)> = Vec::new();
        let result = Settings::resolve(&dir.path().join(".env"), no_env);
        assert!(matches!(result, Err(SyncError::MissingToken)));
        Ok(())
    }

    #[test]
    fn test_resolve_env_overrides_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let env_path = dir.path().join(".env");
        std::fs::write(&env_path, "GITHUB_GIST_TOKEN=file\nREVIEW_GIST_ID=file-id\n")?;

        let settings = Settings::resolve(
            &env_path,
            vec![(TOKEN_KEY.to_string(), "env".to_string())],
        )?;

        assert_eq!(settings.token, "env");
        assert_eq!(settings.gist_id.as_deref(), Some("file-id"));
        Ok(())
    }
}
