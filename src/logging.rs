//! Logging setup for the CLI.
//!
//! All diagnostics go through the `log` facade with `env_logger` as the
//! backend. The effective level comes from `RUST_LOG` when that variable
//! is set; otherwise `-q` forces errors only, `-v` enables debug, `-vv`
//! enables trace, and the default is info.
//!
//! Debug builds prefix each line with a timestamp (and the module path at
//! `-v` and above); release builds print just the level and message.

use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;

/// Set up the global logger from CLI verbosity flags.
///
/// `RUST_LOG` always wins over the flags. Safe to call more than once;
/// after the first call the existing logger stays in place, which lets
/// tests drive [`crate::run_app`] repeatedly in one process.
pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();

    match env::var("RUST_LOG") {
        Ok(_) => {
            builder.parse_default_env();
        }
        Err(_) => {
            builder.filter_level(level_for(verbose, quiet));
        }
    }

    install_format(&mut builder, verbose);
    let _ = builder.try_init();

    log::debug!("Logging ready (max level {:?})", log::max_level());
}

fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

#[cfg(debug_assertions)]
fn install_format(builder: &mut Builder, verbose: u8) {
    let with_module = verbose >= 1;
    builder.format(move |buf, record| {
        let style = buf.default_level_style(record.level());
        write!(
            buf,
            "{} {style}{:<5}{style:#} ",
            buf.timestamp_seconds(),
            record.level()
        )?;
        if with_module {
            write!(buf, "[{}] ", record.module_path().unwrap_or("?"))?;
        }
        writeln!(buf, "{}", record.args())
    });
}

#[cfg(not(debug_assertions))]
fn install_format(builder: &mut Builder, _verbose: u8) {
    builder.format(|buf, record| {
        let style = buf.default_level_style(record.level());
        writeln!(
            buf,
            "{style}{:<5}{style:#} {}",
            record.level(),
            record.args()
        )
    });
}
