//! Clean command.

use std::path::Path;

use console::style;

use crate::services::remove_outputs;

/// Remove previously generated output files.
pub fn cmd_clean(out_dir: &Path) -> anyhow::Result<()> {
    let (removed, missing) = remove_outputs(out_dir)?;

    for path in &removed {
        println!("  {} Removed {}", style("✓").green(), path.display());
    }
    for path in &missing {
        println!("  {} Not found {}", style("-").dim(), path.display());
    }

    Ok(())
}
