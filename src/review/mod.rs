//! Review task extraction
//!
//! - Parse unchecked `- [ ] ... 📅 YYYY-MM-DD` lines from the review file
//! - Classify them into today / tomorrow / others in UTC+9
//! - Build the snapshot that gets published

pub mod classify;
pub mod model;
pub mod parser;

pub use classify::{classify, Classification, Clock, FixedClock, ReferenceDates, SystemClock};
pub use model::{ReviewSnapshot, ReviewTask, SnapshotMeta};
pub use parser::{extract_note, parse_review_content, parse_review_file};
