//! CLI command implementations

pub mod definition;
pub mod sync;

pub use definition::{Cli, Commands};
