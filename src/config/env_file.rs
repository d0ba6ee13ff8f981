//! `.env` loading and environment overlay.
//!
//! Pure functions for turning a `KEY=VALUE` settings file and the process
//! environment into one mapping. Environment variables always win.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SyncError};

/// Parse `.env` style content into a key/value map.
///
/// Blank lines, `#` comments and lines without `=` are skipped. The value is
/// split on the first `=` and surrounding double, then single, quotes are removed.
pub fn parse_env_content(content: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let value = value.trim().trim_matches('"').trim_matches('\'');
        values.insert(key.trim().to_string(), value.to_string());
    }

    values
}

/// Load a settings file. A missing file yields an empty map.
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        debug!("No settings file at {:?}, using environment only", path);
        return Ok(HashMap::new());
    }

    let content = std::fs::read_to_string(path).map_err(|source| SyncError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;
    let values = parse_env_content(&content);
    debug!("Loaded {} keys from {:?}", values.len(), path);
    Ok(values)
}

/// Overlay environment variables on top of file values.
pub fn overlay_env<I>(file_values: HashMap<String, String>, env: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut merged = file_values;
    merged.extend(env);
    merged
}

/// Load `env_file` and overlay `env` on top of it.
pub fn resolve_env<I>(env_file: &Path, env: I) -> Result<HashMap<String, String>>
where
    I: IntoIterator<Item = (String, String)>,
{
    Ok(overlay_env(load_env_file(env_file)?, env))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_simple_pairs() {
        let values = parse_env_content("GITHUB_GIST_TOKEN=abc\nREVIEW_GIST_ID=123\n");
        assert_eq!(values.get("GITHUB_GIST_TOKEN"), Some(&"abc".to_string()));
        assert_eq!(values.get("REVIEW_GIST_ID"), Some(&"123".to_string()));
    }

    #[test]
    fn test_parse_skips_comments_blanks_and_bare_words() {
        let values = parse_env_content("# comment\n\n   \nNOT_A_PAIR\n  # indented comment\nA=1\n");
        assert_eq!(values.len(), 1);
        assert_eq!(values.get("A"), Some(&"1".to_string()));
    }

    #[test]
    fn test_parse_strips_quotes_and_whitespace() {
        let values = parse_env_content(
            "  VAULT_PATH = \"/home/me/Vault\"  \nREVIEW_FILE_PATH='notes/review.md'\n",
        );
        assert_eq!(values.get("VAULT_PATH"), Some(&"/home/me/Vault".to_string()));
        assert_eq!(
            values.get("REVIEW_FILE_PATH"),
            Some(&"notes/review.md".to_string())
        );
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let values = parse_env_content("TOKEN=a=b=c\n");
        assert_eq!(values.get("TOKEN"), Some(&"a=b=c".to_string()));
    }

    #[test]
    fn test_parse_empty_value() {
        let values = parse_env_content("REVIEW_GIST_ID=\n");
        assert_eq!(values.get("REVIEW_GIST_ID"), Some(&String::new()));
    }

    #[test]
    fn test_load_missing_file_is_empty() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let values = load_env_file(&dir.path().join(".env"))?;
        assert!(values.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_existing_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "GITHUB_GIST_TOKEN=\"secret\"")?;
        let values = load_env_file(file.path())?;
        assert_eq!(values.get("GITHUB_GIST_TOKEN"), Some(&"secret".to_string()));
        Ok(())
    }

    #[test]
    fn test_environment_wins_over_file() {
        let file = parse_env_content("GITHUB_GIST_TOKEN=from_file\nVAULT_PATH=/file/vault\n");
        let env = vec![("GITHUB_GIST_TOKEN".to_string(), "from_env".to_string())];

        let merged = overlay_env(file, env);

        assert_eq!(
            merged.get("GITHUB_GIST_TOKEN"),
            Some(&"from_env".to_string())
        );
        assert_eq!(merged.get("VAULT_PATH"), Some(&"/file/vault".to_string()));
    }
}
