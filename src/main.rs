//! DupeSieve binary entry point.
//!
//! All real work happens in `dupesieve::run_app`; this shim parses the
//! command line, maps the outcome to a process exit code, and prints
//! operational failures (as JSON when `--json-errors` is set).

use clap::Parser;
use dupesieve::cli::Cli;
use dupesieve::error::{ExitCode, StructuredError};

fn main() {
    let cli = Cli::parse();
    let json_errors = cli.json_errors;

    let code = match dupesieve::run_app(cli) {
        Ok(code) => code,
        Err(err) => {
            report_error(&err, json_errors);
            ExitCode::GeneralError
        }
    };

    std::process::exit(code.as_i32());
}

fn report_error(err: &anyhow::Error, json_errors: bool) {
    let code = ExitCode::GeneralError;

    if json_errors {
        let structured = StructuredError::new(err, code);
        if let Ok(json) = serde_json::to_string_pretty(&structured) {
            eprintln!("{json}");
            return;
        }
    }

    eprintln!("[{}] Error: {}", code.code_prefix(), err);
}
