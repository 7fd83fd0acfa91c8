//! # Template Graph Library
//!
//! This library scans a tree of text templates for `include` and `extends`
//! directives and streams the relationships it finds, one association per
//! directive. Consumers use the stream to build an inheritance/inclusion
//! graph of a template corpus. Templates are never rendered: the scan is a
//! static, line-based reading of their source.
//!
//! ## Quick Example
//!
//! ```
//! use template_graph::config;
//! use template_graph::stream::Scanner;
//!
//! let settings = config::parse("loaders: [filesystem]\ndirs: []\n").unwrap();
//! let scanner = Scanner::from_settings(&settings).unwrap();
//!
//! // No directories configured, so nothing to report
//! assert_eq!(scanner.associations().count(), 0);
//! ```
//!
//! ## Core Concepts
//!
//! - **Settings (`config`)**: The `.template-graph.yaml` document naming the
//!   enabled loading strategies and their directories.
//! - **Strategies (`strategy`)**: The flat, ordered list of search strategies
//!   resolved from the settings, and how each turns a template name into
//!   candidate paths.
//! - **Walking and reading (`walker`, `lines`)**: Lazy enumeration of files
//!   and of their trimmed lines, tolerant of unreadable files.
//! - **Patterns (`patterns`)**: The ordered directive patterns that classify
//!   lines.
//! - **Resolution (`resolve`)**: Turning a directive line into a resolved
//!   file or a symbolic placeholder.
//! - **Stream (`stream`)**: The composed, restartable pipeline and the
//!   [`stream::Scanner`] entry point.
//!
//! Scanning is best-effort: an unreadable file or an unresolvable reference
//! is skipped and never aborts the stream.

pub mod config;
pub mod defaults;
pub mod error;
pub mod lines;
pub mod output;
pub mod patterns;
pub mod resolve;
pub mod strategy;
pub mod stream;
pub mod suggestions;
pub mod walker;

#[cfg(test)]
mod config_proptest;
