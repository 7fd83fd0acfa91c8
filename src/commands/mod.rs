//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `template-graph` command-line tool. Each subcommand is defined in its own
//! file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.

pub mod scan;
pub mod strategies;

use anyhow::Result;
use std::path::Path;

use template_graph::config::{self, Settings};
use template_graph::suggestions;

/// Load the settings file at `path`, with a helpful error when it is missing.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(suggestions::config_not_found(path));
    }

    config::from_file(path)
        .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", path.display(), e))
}
