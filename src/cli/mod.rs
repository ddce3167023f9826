//! Command line interface for pack_ico.

mod args;
mod output;
mod pack;

pub use args::{Args, MIN_INPUTS, RuntimeConfig};
pub use output::OutputManager;
pub use pack::execute_pack;

use crate::error::Result;
use clap::error::ErrorKind;

/// Main CLI entry point
///
/// Argument errors are printed by clap and mapped to exit code 1; `--help`
/// and `--version` exit with 0.
pub fn run() -> Result<i32> {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return Ok(match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            });
        }
    };

    init_logging(args.verbose);

    let config = RuntimeConfig::from(&args);
    execute_pack(&args, &config)
}

/// Install the env_logger backend. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}
