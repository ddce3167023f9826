//! pack_ico - pack pre-rendered PNG images into a Windows .ico file.
//!
//! Exit status is 0 on success and 1 on any usage or fatal error.

use pack_ico::cli;
use pack_ico::cli::OutputManager;
use std::process;

fn main() {
    match cli::run() {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Never quiet for fatal errors
            let output = OutputManager::new(false, false);
            output.error(&format!("Fatal error: {e}"));

            for suggestion in e.recovery_suggestions() {
                output.hint(&suggestion);
            }

            process::exit(1);
        }
    }
}
