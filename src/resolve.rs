//! # Target Resolution
//!
//! Extracts the target of a directive line and resolves it.
//!
//! A quoted name (`{% extends "base.html" %}`) is a literal target: it is
//! looked up through every search strategy in order and resolves to the first
//! candidate file that exists. A literal that exists nowhere has no target.
//!
//! A bare name (`{% extends parent_template %}`) is a symbolic target whose
//! template is only known when the template is rendered. It is kept as a
//! placeholder and never looked up.

use crate::error::Result;
use crate::strategy::SearchStrategy;
use log::debug;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// Prefix that marks a symbolic target in textual output.
pub const VARIABLE_PREFIX: &str = "variable:";

const FILENAME_PATTERN: &str = r#"['"](?P<fname>[^'"]+)"#;
const VARIABLE_PATTERN: &str = r"\{%\s*\w+\s+(?P<vname>[^\s%]+)";

/// What a directive points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// An existing template file.
    File(PathBuf),
    /// A variable naming the template at render time.
    Variable(String),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::File(path) => write!(f, "{}", path.display()),
            Target::Variable(name) => write!(f, "{VARIABLE_PREFIX}{name}"),
        }
    }
}

impl Serialize for Target {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Resolves directive lines against the configured search strategies.
#[derive(Debug, Clone)]
pub struct TargetResolver {
    filename: Regex,
    variable: Regex,
    strategies: Vec<SearchStrategy>,
}

impl TargetResolver {
    pub fn new(strategies: Vec<SearchStrategy>) -> Result<Self> {
        Ok(Self {
            filename: Regex::new(FILENAME_PATTERN)?,
            variable: Regex::new(VARIABLE_PATTERN)?,
            strategies,
        })
    }

    pub fn strategies(&self) -> &[SearchStrategy] {
        &self.strategies
    }

    /// The first quoted name on the line.
    pub fn literal_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.filename
            .captures(line)?
            .name("fname")
            .map(|m| m.as_str())
    }

    /// The bare word following the first directive keyword on the line.
    pub fn variable_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.variable
            .captures(line)?
            .name("vname")
            .map(|m| m.as_str())
    }

    /// The first existing file any strategy produces for `name`.
    pub fn find_template(&self, name: &str) -> Option<PathBuf> {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.find_template(name))
    }

    /// Resolve the target of a directive line, if it has one.
    pub fn resolve(&self, line: &str) -> Option<Target> {
        match self.literal_name(line) {
            Some(name) => {
                let found = self.find_template(name);
                if found.is_none() {
                    debug!("no template found for '{name}'");
                }
                found.map(Target::File)
            }
            None => self
                .variable_name(line)
                .map(|name| Target::Variable(name.to_string())),
        }
    }
}
