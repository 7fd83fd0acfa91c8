//! # Search Strategies
//!
//! Turns the nested `loaders` setting into the ordered list of template
//! search strategies, each paired with the directories it searches. The
//! result is computed once when a [`crate::stream::Scanner`] is built and is
//! never mutated afterwards.
//!
//! Strategies are always emitted in the fixed order of
//! [`StrategyKind::ALL`], regardless of the order tokens appear in the
//! settings file. Tokens that name no known strategy are ignored.

use crate::config::{flatten, Settings};
use crate::suggestions::find_similar;
use log::debug;
use serde::Serialize;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A template-loading capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Looks templates up in the configured template directories.
    Filesystem,
    /// Looks templates up in the template subdirectory of each application.
    AppDirectories,
}

impl StrategyKind {
    /// Every strategy, in the order they are checked.
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Filesystem, StrategyKind::AppDirectories];

    /// Short name used in settings files and output.
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Filesystem => "filesystem",
            StrategyKind::AppDirectories => "app_directories",
        }
    }

    /// Settings tokens that enable this strategy.
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            StrategyKind::Filesystem => {
                &["filesystem", "django.template.loaders.filesystem.Loader"]
            }
            StrategyKind::AppDirectories => &[
                "app_directories",
                "django.template.loaders.app_directories.Loader",
            ],
        }
    }

    /// Look up the strategy enabled by `token`.
    pub fn from_token(token: &str) -> Option<StrategyKind> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tokens().iter().any(|t| *t == token))
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy together with the root directories it searches, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStrategy {
    pub kind: StrategyKind,
    pub dirs: Vec<PathBuf>,
}

impl SearchStrategy {
    /// Candidate paths for the template `name`, one per directory that can
    /// safely contain it.
    pub fn template_sources<'a>(&'a self, name: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        self.dirs.iter().filter_map(move |dir| safe_join(dir, name))
    }

    /// The first candidate for `name` that exists on disk.
    pub fn find_template(&self, name: &str) -> Option<PathBuf> {
        self.template_sources(name).find(|candidate| candidate.exists())
    }
}

/// Join `name` onto `base` and normalize the result, refusing it unless it
/// still lies within `base`. A name may step out of `base` with `..` as long
/// as it comes back in.
pub fn safe_join(base: &Path, name: &str) -> Option<PathBuf> {
    let base = normalize(base);
    let joined = normalize(&base.join(name));
    joined.starts_with(&base).then_some(joined)
}

/// Lexically resolve `.` and `..` components without touching the disk.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

/// Resolve the enabled strategies and their directories from `settings`.
pub fn resolve_strategies(settings: &Settings) -> Vec<SearchStrategy> {
    let tokens = flatten(&settings.loaders);

    let known: Vec<&str> = StrategyKind::ALL.iter().map(|kind| kind.name()).collect();
    for token in tokens.iter().filter(|t| StrategyKind::from_token(t).is_none()) {
        match find_similar(token, &known) {
            Some(similar) => debug!("ignoring loader '{token}' (did you mean '{similar}'?)"),
            None => debug!("ignoring loader '{token}'"),
        }
    }

    StrategyKind::ALL
        .into_iter()
        .filter(|kind| kind.tokens().iter().any(|t| tokens.contains(*t)))
        .map(|kind| SearchStrategy {
            kind,
            dirs: match kind {
                StrategyKind::Filesystem => settings.dirs.clone(),
                StrategyKind::AppDirectories => {
                    app_template_dirs(&settings.apps, &settings.app_template_subdir)
                }
            },
        })
        .collect()
}

/// Template directories of the applications that actually bundle templates.
fn app_template_dirs(apps: &[PathBuf], subdir: &str) -> Vec<PathBuf> {
    apps.iter()
        .map(|app| app.join(subdir))
        .filter(|dir| dir.is_dir())
        .collect()
}

/// Every root directory to scan: the directories of each strategy, in
/// strategy order.
pub fn scan_roots(strategies: &[SearchStrategy]) -> Vec<PathBuf> {
    strategies
        .iter()
        .flat_map(|strategy| strategy.dirs.iter().cloned())
        .collect()
}
