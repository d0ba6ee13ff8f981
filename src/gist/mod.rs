//! Gist publishing

pub mod client;

pub use client::{GistClient, GIST_DESCRIPTION, GIST_FILE_NAME};
