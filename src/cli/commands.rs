//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pagination Link header tool
#[derive(Parser, Debug)]
#[command(name = "weblinks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Link config file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "header")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build pagination links for a base URL
    Build {
        /// Base URL of the paginated resource
        #[arg(short, long)]
        url: String,

        /// Current page (1-based)
        #[arg(short, long, default_value = "1")]
        page: u64,

        /// Items per page
        #[arg(short = 's', long, default_value = "10")]
        page_size: u64,

        /// Total item count (0 = one full page)
        #[arg(short, long, default_value = "0")]
        total: u64,

        /// Count a trailing partial page towards the last page
        #[arg(long)]
        ceil: bool,
    },

    /// Parse a Link header (reads stdin when omitted)
    Parse {
        /// Header text
        header: Option<String>,

        /// Reject unknown relation names
        #[arg(long)]
        strict: bool,
    },

    /// Render a JSON link set from stdin as a Link header
    Format,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Link header text
    Header,
    /// JSON object keyed by relation
    Json,
    /// Human-readable output
    Pretty,
}
