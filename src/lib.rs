//! DupeSieve - Fingerprint-Based Duplicate File Grouper
//!
//! A cross-platform Rust CLI application for grouping duplicate files. Files
//! are bucketed by a coarse additive fingerprint (byte sum modulo 100) and
//! confirmed by exact byte-for-byte comparison, so every reported group holds
//! identical content. Includes a verification harness for expected-results
//! fixtures and a two-file compare utility.

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;
pub mod scanner;
pub mod verify;

use std::fs;
use std::io;
use std::sync::Arc;

use anyhow::Context;
use bytesize::ByteSize;
use yansi::Paint;

use crate::cli::{Cli, Commands, CompareArgs, OutputFormat, ScanArgs, VerifyArgs};
use crate::config::Config;
use crate::duplicates::{Grouper, GrouperConfig};
use crate::error::ExitCode;
use crate::output::{JsonOutput, TextOutput};
use crate::progress::Progress;
use crate::scanner::WalkerConfig;

/// Run the application with parsed CLI arguments.
///
/// Returns the exit code the process should terminate with. `Err` is
/// reserved for operational failures; domain outcomes (no duplicates
/// found, verification mismatch) map to dedicated exit codes.
///
/// # Errors
///
/// Returns an error if scanning, reading, or output writing fails.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    if cli.no_color {
        yansi::disable();
    }

    let config = Config::load();
    log::debug!("Loaded config: {:?}", config);

    let quiet = cli.quiet;
    match cli.command {
        Commands::Scan(args) => run_scan(args, quiet, &config),
        Commands::Verify(args) => run_verify(args, quiet, &config),
        Commands::Compare(args) => run_compare(&args),
    }
}

/// Scan a directory tree and report duplicate groups.
fn run_scan(args: ScanArgs, quiet: bool, config: &Config) -> anyhow::Result<ExitCode> {
    let output = args.output.unwrap_or(config.output);
    let grouper = build_grouper(
        args.io_threads,
        args.follow_symlinks,
        args.skip_hidden,
        args.no_progress,
        quiet,
        config,
    );

    let (groups, summary) = grouper.group_tree(&args.path)?;

    let exit_code = if groups.is_empty() {
        ExitCode::NoDuplicates
    } else {
        ExitCode::Success
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match output {
        OutputFormat::Text => {
            TextOutput::new(&groups, &summary).write_to(&mut handle)?;
        }
        OutputFormat::Json => {
            JsonOutput::new(&groups, &summary, exit_code).write_to(&mut handle, true)?;
        }
    }

    Ok(exit_code)
}

/// Scan a directory tree and check the groups against a fixture.
fn run_verify(args: VerifyArgs, quiet: bool, config: &Config) -> anyhow::Result<ExitCode> {
    let grouper = build_grouper(
        args.io_threads,
        args.follow_symlinks,
        args.skip_hidden,
        args.no_progress,
        quiet,
        config,
    );

    let (groups, _summary) = grouper.group_tree(&args.path)?;
    let outcome = verify::verify_groups(&groups, &args.path, &args.results)?;

    if outcome.matched {
        println!("{}", "OK".green().bold());
        Ok(ExitCode::Success)
    } else {
        println!("{}", "RESULTS DO NOT MATCH".red().bold());
        for (a, b) in &outcome.missing {
            println!("  {} {}:{}", "missing".red(), a, b);
        }
        for (a, b) in &outcome.unexpected {
            println!("  {} {}:{}", "unexpected".yellow(), a, b);
        }
        Ok(ExitCode::Mismatch)
    }
}

/// Byte-compare exactly two files.
fn run_compare(args: &CompareArgs) -> anyhow::Result<ExitCode> {
    let first = fs::read(&args.first)
        .with_context(|| format!("Cannot read {}", args.first.display()))?;
    let second = fs::read(&args.second)
        .with_context(|| format!("Cannot read {}", args.second.display()))?;

    if first == second {
        println!("{}", "Files are identical".green());
        Ok(ExitCode::Success)
    } else {
        if first.len() == second.len() {
            println!("{}", "Files differ".red());
        } else {
            println!(
                "{} ({} vs {})",
                "Files differ".red(),
                ByteSize::b(first.len() as u64),
                ByteSize::b(second.len() as u64)
            );
        }
        Ok(ExitCode::Mismatch)
    }
}

/// Assemble a grouper from CLI flags and stored configuration.
///
/// CLI flags take precedence over config file values, which take
/// precedence over built-in defaults.
fn build_grouper(
    io_threads: Option<usize>,
    follow_symlinks: bool,
    skip_hidden: bool,
    no_progress: bool,
    quiet: bool,
    config: &Config,
) -> Grouper {
    let walker_config = WalkerConfig::new(follow_symlinks, skip_hidden || config.skip_hidden);

    let mut grouper_config = GrouperConfig::default()
        .with_io_threads(io_threads.unwrap_or(config.io_threads))
        .with_walker_config(walker_config);

    if !no_progress {
        grouper_config = grouper_config.with_progress_callback(Arc::new(Progress::new(quiet)));
    }

    Grouper::new(grouper_config)
}
