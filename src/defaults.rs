//! Default values for template-graph configuration.
//!
//! This module provides centralized default values used across the library
//! and the commands, ensuring consistency and avoiding duplication.

/// Name of the settings file looked up in the current directory.
pub const DEFAULT_CONFIG_FILENAME: &str = ".template-graph.yaml";

/// Subdirectory of each application that holds its bundled templates.
pub const DEFAULT_APP_TEMPLATE_SUBDIR: &str = "templates";

/// Strategy tokens enabled when the settings file does not list any.
pub fn default_loader_tokens() -> Vec<&'static str> {
    vec!["filesystem", "app_directories"]
}

/// Serde default for `Settings::app_template_subdir`.
pub fn default_app_template_subdir() -> String {
    DEFAULT_APP_TEMPLATE_SUBDIR.to_string()
}
