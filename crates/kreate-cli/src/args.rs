//! Command-line argument definitions for the Kreate CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments describe the request, where the generated markup
//! goes, configuration file selection, and logging verbosity.

use clap::Parser;
use log::LevelFilter;

/// Command-line arguments for the Kreate element generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Shorthand selector such as `li#row.item`
    #[arg(help = "Shorthand selector (tag#id.class)")]
    pub shorthand: Option<String>,

    /// Number of elements to generate from the shorthand
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Output format for the shorthand (jquery, html, array)
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Path to a structured request file (TOML)
    #[arg(short, long, conflicts_with = "shorthand")]
    pub request: Option<String>,

    /// Path to the output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Reject malformed requests instead of normalizing them
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}
