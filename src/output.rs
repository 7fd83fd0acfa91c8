//! # Output Configuration
//!
//! Controls how associations are printed by the CLI, including colour
//! support based on terminal capabilities and user preferences.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use crate::patterns::DirectiveTag;
use crate::resolve::Target;
use crate::stream::TemplateAssociation;
use console::style;
use std::env;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Render one association as a single line of text.
///
/// `<source>:<line> <tag> -> <target> [<root>]`, with the tag, symbolic
/// targets and root coloured when the configuration allows it.
pub fn format_association(config: &OutputConfig, association: &TemplateAssociation) -> String {
    if !config.use_color {
        return association.to_string();
    }

    let tag = match association.tag_type {
        DirectiveTag::Extends => style(association.tag_type).cyan().force_styling(true),
        DirectiveTag::Include => style(association.tag_type).green().force_styling(true),
    };
    let target = match &association.target {
        Target::File(_) => style(association.target.to_string()).force_styling(true),
        Target::Variable(_) => style(association.target.to_string())
            .yellow()
            .force_styling(true),
    };

    format!(
        "{}:{} {} -> {} {}",
        association.source.display(),
        association.line_number,
        tag,
        target,
        style(format!("[{}]", association.path.display()))
            .dim()
            .force_styling(true)
    )
}
