//! Check command.

use console::style;

use crate::pdf::required_tools;

/// Verify the required external tools are installed.
pub fn cmd_check() -> anyhow::Result<()> {
    let mut all_found = true;

    for tool in required_tools() {
        match which::which(tool) {
            Ok(path) => {
                println!("  {} {} ({})", style("✓").green(), tool, path.display());
            }
            Err(_) => {
                println!("  {} {} not found", style("✗").red(), tool);
                all_found = false;
            }
        }
    }

    if !all_found {
        println!(
            "{} Missing tools are part of poppler-utils; install it with your package manager",
            style("!").yellow()
        );
    }

    Ok(())
}
