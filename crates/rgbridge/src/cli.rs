//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rgbridge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Debug-level logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server on stdin/stdout
    Serve {
        #[command(flatten)]
        settings: Settings,
    },

    /// Check the engine and the effective configuration
    Doctor {
        #[command(flatten)]
        settings: Settings,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Settings shared by `serve` and `doctor`; flags override the config file
#[derive(Args, Debug, Clone, Default)]
pub struct Settings {
    /// Directory the tools may search (repeatable); unset means unrestricted
    #[arg(long = "allow-dir", value_name = "DIR")]
    pub allow_dirs: Vec<PathBuf>,

    /// Default character budget for tool results
    #[arg(long, value_name = "N")]
    pub max_result_chars: Option<usize>,

    /// Stdout byte ceiling per engine run
    #[arg(long, value_name = "N")]
    pub max_output_bytes: Option<usize>,

    /// ripgrep executable
    #[arg(long, env = "RGBRIDGE_RG_PATH", value_name = "PATH")]
    pub rg_path: Option<PathBuf>,

    /// Abort engine runs after this many seconds
    #[arg(long, value_name = "N")]
    pub timeout_secs: Option<u64>,

    /// TOML config file (defaults to ./rgbridge.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
