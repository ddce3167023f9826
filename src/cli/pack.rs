//! The pack command: read inputs, write the icon, report the result.

use crate::cli::{Args, RuntimeConfig};
use crate::error::{PackError, Result};
use crate::icon::IconPacker;

/// Execute the pack command for parsed arguments.
///
/// Returns the process exit code on success; fatal errors are returned to
/// the caller for reporting.
pub fn execute_pack(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    args.validate().map_err(PackError::Usage)?;

    let report = IconPacker::new(&args.output)
        .inputs(&args.inputs)
        .pack()?;

    let output = config.output();
    for entry in &report.entries {
        let _ = output.verbose(&format!(
            "{}x{}: {} bytes at offset {}",
            entry.size, entry.size, entry.data_size, entry.data_offset
        ));
    }
    let _ = output.success(&format!("Wrote {}", report.output.display()));

    Ok(0)
}
