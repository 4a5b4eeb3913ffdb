//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Verify that a ReCom development environment is ready to use.
///
/// Checks the Python version, required libraries, the project directory
/// layout and git configuration, then prints a summary. Exits 0 when every
/// check passes and 1 otherwise.
#[derive(Debug, Parser)]
#[command(name = "recom-verify")]
#[command(author, version, long_about = None)]
#[command(about = "Verify that a ReCom development environment is ready to use")]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Path to config file (overrides default .recom/verify.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Python interpreter to inspect (overrides PATH search)
    #[arg(long, env = "RECOM_PYTHON")]
    pub python: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
