//! CLI argument structures

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Transpose delimited tables with a map/shuffle/reduce pipeline
#[derive(Parser)]
#[command(name = "csv-pivot")]
#[command(about = "csv-pivot - Turn the rows of a comma separated table into columns", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transpose a table read from a file or stdin
    Transpose {
        /// Input file (reads stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum)]
        format: Option<OutputFormat>,

        /// Pad every output line to the number of input rows
        #[arg(long)]
        pad: bool,

        /// Maximum number of concurrent map or reduce tasks
        #[arg(short = 'p', long, value_name = "N")]
        parallel: Option<usize>,

        /// Print mapper output and groups to stderr before the result
        #[arg(long)]
        show_intermediate: bool,

        /// Deliver groups and their members in a seeded random order
        #[arg(long, value_name = "SEED")]
        shuffle_seed: Option<u64>,

        /// Print a one-line summary to stderr when done
        #[arg(long)]
        summary: bool,
    },

    /// Walk through the built-in sample table stage by stage
    Demo {
        /// Format of the transposed table
        #[arg(short = 'f', long, value_enum, default_value = "csv")]
        format: OutputFormat,
    },
}
