//! Command-line interface definitions for DupeSieve.
//!
//! This module defines all CLI arguments, subcommands, and options using the clap derive API.
//! The CLI follows standard conventions with global options (verbosity, color) and
//! subcommands for different operations.
//!
//! # Example
//!
//! ```bash
//! # Scan a directory and print duplicate groups
//! dupesieve scan ~/Downloads
//!
//! # Scan with JSON output for scripting
//! dupesieve scan ~/Downloads --output json
//!
//! # Check scan results against an expected-results fixture
//! dupesieve verify testdata/images --results testdata/_results
//!
//! # Byte-compare exactly two files
//! dupesieve compare a.bin b.bin
//!
//! # Verbose mode for debugging
//! dupesieve -v scan ~/Downloads
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Duplicate file grouper.
///
/// DupeSieve buckets files by a weak byte-sum fingerprint and confirms
/// duplicates by exact content comparison, so reported groups are always
/// byte-for-byte identical.
#[derive(Debug, Parser)]
#[command(name = "dupesieve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Emit errors as structured JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for DupeSieve.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a directory and report groups of byte-identical files
    Scan(ScanArgs),
    /// Scan a directory and check the groups against an expected-results fixture
    Verify(VerifyArgs),
    /// Compare exactly two files byte for byte
    Compare(CompareArgs),
}

/// Arguments for the scan subcommand.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directory path to scan for duplicates
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format (text for humans, json for scripting)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Follow symbolic links during scan
    ///
    /// Warning: May cause infinite loops if symlinks form cycles.
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Skip hidden files and directories (starting with .)
    #[arg(long)]
    pub skip_hidden: bool,

    /// Number of I/O threads for reading files
    ///
    /// Lower values reduce disk thrashing on HDDs.
    #[arg(long, value_name = "N")]
    pub io_threads: Option<usize>,

    /// Disable the progress display
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments for the verify subcommand.
#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Directory path whose duplicate groups should be checked
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Expected-results fixture file
    ///
    /// One line per expected group, paths relative to PATH and separated
    /// by colons.
    #[arg(long, value_name = "FILE")]
    pub results: PathBuf,

    /// Follow symbolic links during scan
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Skip hidden files and directories (starting with .)
    #[arg(long)]
    pub skip_hidden: bool,

    /// Number of I/O threads for reading files
    #[arg(long, value_name = "N")]
    pub io_threads: Option<usize>,

    /// Disable the progress display
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments for the compare subcommand.
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// First file to compare
    #[arg(value_name = "FILE1")]
    pub first: PathBuf,

    /// Second file to compare
    #[arg(value_name = "FILE2")]
    pub second: PathBuf,
}

/// Output format for scan results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
