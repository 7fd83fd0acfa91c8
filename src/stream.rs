//! # Association Stream
//!
//! Composes the scanning stages into one lazy pipeline:
//!
//! 1.  **Walk**: enumerate every file under each scan root.
//! 2.  **Read**: read each file line by line, trimmed.
//! 3.  **Filter**: keep the lines that match a directive pattern.
//! 4.  **Resolve**: find the target of each matched line.
//!
//! Nothing is buffered between stages: at most one file is open at a time,
//! and a consumer may stop pulling at any point. Every call to
//! [`Scanner::associations`] starts over from the filesystem, so the stream
//! can be iterated any number of times.

use crate::config::Settings;
use crate::error::Result;
use crate::lines::read_lines;
use crate::patterns::{DirectiveTag, PatternSet};
use crate::resolve::{Target, TargetResolver};
use crate::strategy::{resolve_strategies, scan_roots, SearchStrategy};
use crate::walker::walk_files;
use log::info;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// One directive found in a template: `source` refers to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TemplateAssociation {
    /// File containing the directive.
    pub source: PathBuf,
    /// What the directive refers to.
    pub target: Target,
    /// Zero-based line index within `source`.
    pub line_number: usize,
    /// Which directive matched.
    pub tag_type: DirectiveTag,
    /// Scan root under which `source` was found.
    pub path: PathBuf,
}

impl fmt::Display for TemplateAssociation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} -> {} [{}]",
            self.source.display(),
            self.line_number,
            self.tag_type,
            self.target,
            self.path.display()
        )
    }
}

/// A line that matched a directive pattern, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedLine {
    pub source: PathBuf,
    pub line_number: usize,
    pub tag: DirectiveTag,
    pub line: String,
}

/// Lines under `root` that match one of `patterns`.
pub fn matched_lines<'a>(
    root: &Path,
    patterns: &'a PatternSet,
) -> impl Iterator<Item = MatchedLine> + 'a {
    walk_files(root).flat_map(move |source| {
        read_lines(source.clone())
            .enumerate()
            .filter_map(move |(line_number, line)| {
                let (tag, _) = patterns.filter_line(&line)?;
                Some(MatchedLine {
                    source: source.clone(),
                    line_number,
                    tag,
                    line,
                })
            })
    })
}

/// Associations for every resolvable directive under each of `roots`.
pub fn stream_template_assocs<'a>(
    roots: &'a [PathBuf],
    patterns: &'a PatternSet,
    resolver: &'a TargetResolver,
) -> impl Iterator<Item = TemplateAssociation> + 'a {
    roots.iter().flat_map(move |root| {
        matched_lines(root, patterns).filter_map(move |matched| {
            let target = resolver.resolve(&matched.line)?;
            Some(TemplateAssociation {
                source: matched.source,
                target,
                line_number: matched.line_number,
                tag_type: matched.tag,
                path: root.clone(),
            })
        })
    })
}

/// The immutable scanning configuration: search strategies, scan roots and
/// directive patterns. Build it once and share it by reference.
#[derive(Debug, Clone)]
pub struct Scanner {
    roots: Vec<PathBuf>,
    patterns: PatternSet,
    resolver: TargetResolver,
}

impl Scanner {
    /// Scan the directories of `strategies` with the built-in patterns.
    pub fn new(strategies: Vec<SearchStrategy>) -> Result<Self> {
        let roots = scan_roots(&strategies);
        Ok(Self {
            roots,
            patterns: PatternSet::new()?,
            resolver: TargetResolver::new(strategies)?,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let strategies = resolve_strategies(settings);
        for strategy in &strategies {
            info!(
                "strategy {} searches {} dir(s)",
                strategy.kind,
                strategy.dirs.len()
            );
        }
        Self::new(strategies)
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn strategies(&self) -> &[SearchStrategy] {
        self.resolver.strategies()
    }

    /// A fresh pass over the template tree.
    pub fn associations(&self) -> impl Iterator<Item = TemplateAssociation> + '_ {
        stream_template_assocs(&self.roots, &self.patterns, &self.resolver)
    }
}
