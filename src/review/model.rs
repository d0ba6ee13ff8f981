//! Review task data model

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// A scheduled review extracted from one checklist line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewTask {
    /// Raw source line, untrimmed
    pub line: String,

    /// Human label derived from the task body
    pub note: Option<String>,

    /// Due date exactly as written (YYYY-MM-DD)
    pub due_date: String,
}

impl ReviewTask {
    /// Due date as a calendar date, if the written date is a real one
    pub fn due(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").ok()
    }
}

/// Generation metadata attached to every snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMeta {
    pub generated_at: DateTime<FixedOffset>,
    pub today: String,
    pub tomorrow: String,
}

/// The published payload. Tasks due on other dates are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSnapshot {
    pub today: Vec<ReviewTask>,
    pub tomorrow: Vec<ReviewTask>,
    pub meta: SnapshotMeta,
}

impl ReviewSnapshot {
    /// Pretty JSON with two-space indentation, non-ASCII kept as is
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}
