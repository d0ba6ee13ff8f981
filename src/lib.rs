//! review-sync library - Publish scheduled review tasks from a notes vault to a GitHub Gist

pub mod cli;
pub mod config;
pub mod error;
pub mod gist;
pub mod review;
pub mod sync;

pub use error::{Result, SyncError};
