//! # Directive Patterns
//!
//! The fixed, ordered set of directive patterns used to classify template
//! lines. A line is tested against each pattern in order and the first match
//! decides its tag. The built-in `include` and `extends` patterns never match
//! the same line, so the order only matters for custom sets.

use crate::error::Result;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// The directive a line was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveTag {
    /// `{% include "partial.html" %}`
    Include,
    /// `{% extends "base.html" %}`
    Extends,
}

impl DirectiveTag {
    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveTag::Include => "include",
            DirectiveTag::Extends => "extends",
        }
    }
}

impl fmt::Display for DirectiveTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const INCLUDE_PATTERN: &str = r"\{%\s*include .+%\}";
const EXTENDS_PATTERN: &str = r"\{%\s*extends .+%\}";

/// A tag and the rule recognizing its syntax.
#[derive(Debug, Clone)]
pub struct DirectivePattern {
    pub tag: DirectiveTag,
    pub regex: Regex,
}

/// Ordered tag -> pattern mapping.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<DirectivePattern>,
}

impl PatternSet {
    /// The built-in `include` and `extends` patterns.
    pub fn new() -> Result<Self> {
        Self::from_rules([
            (DirectiveTag::Include, INCLUDE_PATTERN),
            (DirectiveTag::Extends, EXTENDS_PATTERN),
        ])
    }

    /// Build a set from `(tag, regex)` pairs, kept in the given order.
    pub fn from_rules<'a>(rules: impl IntoIterator<Item = (DirectiveTag, &'a str)>) -> Result<Self> {
        let patterns = rules
            .into_iter()
            .map(|(tag, pattern)| Regex::new(pattern).map(|regex| DirectivePattern { tag, regex }))
            .collect::<std::result::Result<Vec<_>, regex::Error>>()?;
        Ok(Self { patterns })
    }

    /// Classify `line`, returning the first matching tag and the line itself.
    pub fn filter_line<'a>(&self, line: &'a str) -> Option<(DirectiveTag, &'a str)> {
        self.patterns
            .iter()
            .find(|pattern| pattern.regex.is_match(line))
            .map(|pattern| (pattern.tag, line))
    }
}
