//! Review file parser

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use super::model::ReviewTask;
use crate::error::{Result, SyncError};

// Unchecked checklist item: - [ ] 復習① Linked Lists 📅 2025-06-01
static TASK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^- \[ \]\s*(?P<body>.+?)\s*📅\s*(?P<date>\d{4}-\d{2}-\d{2})\s*$")
        .expect("task pattern is valid")
});

// Repetition counter in front of the note name: 復習①, 復習2回目, ...
static REVIEW_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^復習\S*\s*").expect("prefix pattern is valid"));

/// Read the review file and return its tasks in file order.
pub fn parse_review_file(path: &Path) -> Result<Vec<ReviewTask>> {
    if !path.exists() {
        return Err(SyncError::ReviewFileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| SyncError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let tasks = parse_review_content(&content);
    debug!("Parsed {} review tasks from {:?}", tasks.len(), path);
    Ok(tasks)
}

/// Parse every matching line. Lines that don't match are skipped.
pub fn parse_review_content(content: &str) -> Vec<ReviewTask> {
    content.lines().filter_map(parse_line).collect()
}

/// Parse a single line into a task
pub fn parse_line(line: &str) -> Option<ReviewTask> {
    let caps = TASK_RE.captures(line)?;
    let body = caps["body"].trim();

    Some(ReviewTask {
        line: line.to_string(),
        note: extract_note(body),
        due_date: caps["date"].to_string(),
    })
}

/// Derive the note label from a task body by dropping the leading
/// `復習<counter>` token. Best-effort: any body without the prefix is kept
/// whole.
pub fn extract_note(body: &str) -> Option<String> {
    let note = REVIEW_PREFIX_RE.replace(body.trim(), "");
    if note.is_empty() {
        None
    } else {
        Some(note.into_owned())
    }
}
