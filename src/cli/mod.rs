//! CLI interface for sonority
//!
//! Provides command-line utilities for syllabifying words and text files.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands};
pub use paths::{config_dir, PersistentConfig};
