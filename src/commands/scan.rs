//! # Scan Command Implementation
//!
//! This module implements the `scan` subcommand, which walks every configured
//! template directory and prints one line per include/extends association.
//!
//! ## Functionality
//!
//! - **Streaming**: Associations are printed as they are found
//! - **Formats**: Plain text, or JSON Lines for machine consumption
//! - **Filtering**: By directive tag and by a glob over the source path
//!   relative to its scan root
//! - **Counting**: Print only the number of associations
//!
//! This command is a read-only operation that does not modify any files.

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

use template_graph::defaults::DEFAULT_CONFIG_FILENAME;
use template_graph::output::{format_association, OutputConfig};
use template_graph::patterns::DirectiveTag;
use template_graph::stream::{Scanner, TemplateAssociation};
use template_graph::suggestions;

/// Scan the template directories and print every include/extends association
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Path to the .template-graph.yaml settings file.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_FILENAME,
        env = "TEMPLATE_GRAPH_CONFIG"
    )]
    pub config: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Only report directives of this kind.
    #[arg(short, long, value_enum)]
    pub tag: Option<TagFilter>,

    /// Only report sources matching this glob (e.g., "blog/*.html"), relative
    /// to their scan root.
    #[arg(short, long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Show only the total count of associations.
    #[arg(long)]
    pub count: bool,
}

/// Output formats for associations
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One human-readable line per association
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Directive kinds selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TagFilter {
    Include,
    Extends,
}

impl From<TagFilter> for DirectiveTag {
    fn from(filter: TagFilter) -> Self {
        match filter {
            TagFilter::Include => DirectiveTag::Include,
            TagFilter::Extends => DirectiveTag::Extends,
        }
    }
}

/// Execute the `scan` command.
pub fn execute(args: ScanArgs, output: &OutputConfig) -> Result<()> {
    let settings = super::load_settings(&args.config)?;
    let scanner = Scanner::from_settings(&settings)?;

    let pattern = args
        .pattern
        .as_deref()
        .map(|p| glob::Pattern::new(p).map_err(|e| suggestions::invalid_glob(p, &e)))
        .transpose()?;
    let filter = Filter {
        tag: args.tag.map(DirectiveTag::from),
        pattern,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.count {
        let count = scanner
            .associations()
            .filter(|a| filter.accepts(a))
            .count();
        writeln!(out, "{count}")?;
        return Ok(());
    }

    write_associations(&scanner, &filter, args.format, output, &mut out)
}

/// Which associations to report.
#[derive(Debug, Default)]
struct Filter {
    tag: Option<DirectiveTag>,
    pattern: Option<glob::Pattern>,
}

impl Filter {
    fn accepts(&self, association: &TemplateAssociation) -> bool {
        if self.tag.is_some_and(|tag| tag != association.tag_type) {
            return false;
        }

        match &self.pattern {
            Some(pattern) => {
                let relative = association
                    .source
                    .strip_prefix(&association.path)
                    .unwrap_or(association.source.as_path());
                pattern.matches_path(relative)
            }
            None => true,
        }
    }
}

/// Stream accepted associations to `out`.
fn write_associations<W: Write>(
    scanner: &Scanner,
    filter: &Filter,
    format: OutputFormat,
    output: &OutputConfig,
    out: &mut W,
) -> Result<()> {
    for association in scanner.associations().filter(|a| filter.accepts(a)) {
        match format {
            OutputFormat::Text => writeln!(out, "{}", format_association(output, &association))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&association)?)?,
        }
    }
    Ok(())
}
