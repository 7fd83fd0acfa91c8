//! # Strategies Command Implementation
//!
//! This module implements the `strategies` subcommand, which shows the search
//! strategies resolved from the settings file, in the order targets are
//! looked up, together with the directories each one searches. The same
//! directories, in the same order, are the roots scanned by `scan`.

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use template_graph::defaults::DEFAULT_CONFIG_FILENAME;
use template_graph::strategy::{resolve_strategies, SearchStrategy};

/// Show the resolved search strategies and their directories
#[derive(Args, Debug)]
pub struct StrategiesArgs {
    /// Path to the .template-graph.yaml settings file.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_FILENAME,
        env = "TEMPLATE_GRAPH_CONFIG"
    )]
    pub config: PathBuf,

    /// Print the strategies as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the `strategies` command.
pub fn execute(args: StrategiesArgs) -> Result<()> {
    let settings = super::load_settings(&args.config)?;
    let strategies = resolve_strategies(&settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&strategies)?)?;
    } else {
        write_strategies(&strategies, &mut out)?;
    }
    Ok(())
}

fn write_strategies<W: Write>(strategies: &[SearchStrategy], out: &mut W) -> io::Result<()> {
    if strategies.is_empty() {
        writeln!(out, "No search strategies enabled.")?;
        return Ok(());
    }

    for strategy in strategies {
        writeln!(out, "{}", strategy.kind)?;
        if strategy.dirs.is_empty() {
            writeln!(out, "  (no directories)")?;
        }
        for dir in &strategy.dirs {
            writeln!(out, "  {}", dir.display())?;
        }
    }
    Ok(())
}
