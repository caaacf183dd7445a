//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mixsight: link dataset columns to document themes, sentiment and keywords
#[derive(Parser)]
#[command(name = "mixsight")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a request file (dataset profile plus optional document profile)
    Analyze {
        /// Path to the analysis request (JSON)
        #[arg(value_name = "REQUEST")]
        file: PathBuf,

        /// Output path for the result (default: <request>.analysis.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Policy configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the result as JSON to stdout instead of writing a file
        #[arg(long)]
        json: bool,
    },

    /// Serve the analysis API over HTTP
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        /// Policy configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Policy configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
