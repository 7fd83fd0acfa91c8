//! # Settings Schema and Parsing
//!
//! This module defines the data structures that represent the
//! `.template-graph.yaml` settings file and the logic for parsing it.
//!
//! ## Key Components
//!
//! - **`Settings`**: The whole settings document. It names the enabled
//!   template-loading strategies and the directories each of them searches.
//!
//! - **`LoaderSpec`**: The strategy tokens. Loader lists may be nested to any
//!   depth (a caching loader wrapping other loaders, for instance), so each
//!   item is either a single token or a sequence of further items.
//!
//! ## Example
//!
//! ```yaml
//! loaders:
//!   - filesystem
//!   - - cached
//!     - - app_directories
//! dirs:
//!   - templates
//! apps:
//!   - blog
//!   - shop
//! ```
//!
//! Relative `dirs` and `apps` are resolved against the directory holding the
//! settings file when it is loaded with [`from_file`].

use crate::defaults::{default_app_template_subdir, default_loader_tokens};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A strategy token, or an arbitrarily nested sequence of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoaderSpec {
    /// A single strategy token such as `filesystem`.
    Token(String),
    /// A nested group of tokens.
    Nested(Vec<LoaderSpec>),
}

impl Default for LoaderSpec {
    fn default() -> Self {
        LoaderSpec::Nested(
            default_loader_tokens()
                .into_iter()
                .map(|token| LoaderSpec::Token(token.to_string()))
                .collect(),
        )
    }
}

/// Collect every token found at any depth of `spec` into a flat set.
///
/// Strings are leaves: they are never split into characters.
pub fn flatten(spec: &LoaderSpec) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    collect_tokens(spec, &mut tokens);
    tokens
}

fn collect_tokens(spec: &LoaderSpec, tokens: &mut BTreeSet<String>) {
    match spec {
        LoaderSpec::Token(token) => {
            tokens.insert(token.clone());
        }
        LoaderSpec::Nested(items) => {
            for item in items {
                collect_tokens(item, tokens);
            }
        }
    }
}

/// The parsed settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Enabled template-loading strategies.
    #[serde(default)]
    pub loaders: LoaderSpec,
    /// Template directories searched by the filesystem strategy, in order.
    #[serde(default)]
    pub dirs: Vec<PathBuf>,
    /// Application directories searched by the app-directories strategy.
    #[serde(default)]
    pub apps: Vec<PathBuf>,
    /// Subdirectory of each app that holds its templates.
    #[serde(default = "default_app_template_subdir")]
    pub app_template_subdir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            loaders: LoaderSpec::default(),
            dirs: Vec::new(),
            apps: Vec::new(),
            app_template_subdir: default_app_template_subdir(),
        }
    }
}

impl Settings {
    /// Resolve every relative directory against `base` and make it absolute.
    pub fn rebased(mut self, base: &Path) -> Result<Self> {
        self.dirs = absolutize_all(&self.dirs, base)?;
        self.apps = absolutize_all(&self.apps, base)?;
        Ok(self)
    }
}

fn absolutize_all(paths: &[PathBuf], base: &Path) -> Result<Vec<PathBuf>> {
    paths
        .iter()
        .map(|path| std::path::absolute(base.join(path)).map_err(Error::from))
        .collect()
}

/// Parse a settings document.
///
/// An empty document yields the default settings.
pub fn parse(yaml_content: &str) -> Result<Settings> {
    if yaml_content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(yaml_content).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some(
            "Expected the keys 'loaders', 'dirs', 'apps' and 'app_template_subdir'".to_string(),
        ),
    })
}

/// Load and parse a settings file, resolving its relative directories
/// against the directory that contains it.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let base = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    parse(&content)?.rebased(&base)
}
