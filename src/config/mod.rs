//! Settings resolution
//!
//! Merges a `.env` style settings file with the process environment and
//! builds the [`Settings`] value used by the rest of the sync run.

pub mod env_file;
pub mod settings;

pub use env_file::{load_env_file, overlay_env, parse_env_content, resolve_env};
pub use settings::Settings;
