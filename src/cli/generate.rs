//! Generate command.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use console::style;
use indicatif::ProgressBar;

use crate::config::Settings;
use crate::fetch::DirectoryClient;
use crate::pdf::PdfTextExtractor;
use crate::services::{parse_directory, write_outputs, OutputSelection};

/// Fetch the directory document, parse it, and write the selected
/// output files.
pub async fn cmd_generate(
    settings: &Settings,
    selection: OutputSelection,
    input: Option<&Path>,
    out_dir: &Path,
) -> anyhow::Result<()> {
    if !selection.any() {
        println!(
            "{} No output formats selected. Use --all or one of --users, --cisco, --fanvil, --other.",
            style("!").yellow()
        );
        return Ok(());
    }

    let extractor = PdfTextExtractor::new().with_password(&settings.pdf_password);

    let text = match input {
        Some(path) => {
            tracing::info!("reading local document {}", path.display());
            extractor
                .extract_text(path)
                .with_context(|| format!("failed to extract text from {}", path.display()))?
        }
        None => {
            let client = DirectoryClient::new(
                &settings.download_page,
                settings.request_timeout(),
                settings.user_agent.as_deref(),
            )?;

            let url = client.latest_pdf_url().await?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_message(format!("Downloading {}", url));
            spinner.enable_steady_tick(Duration::from_millis(100));
            let bytes = client.download(&url).await;
            spinner.finish_and_clear();
            let bytes = bytes?;

            let temp = tempfile::NamedTempFile::new()?;
            std::fs::write(temp.path(), &bytes)?;
            extractor
                .extract_text(temp.path())
                .context("failed to extract text from the downloaded document")?
        }
    };

    let directory = parse_directory(&text);

    if directory.is_empty() {
        println!(
            "{} No extensions found in the document; output files will only contain headers",
            style("!").yellow()
        );
    }

    let written = write_outputs(&directory, &selection, out_dir)
        .with_context(|| format!("failed to write output files to {}", out_dir.display()))?;

    println!(
        "  {} {} user extensions",
        style("✓").green(),
        directory.users.len()
    );
    println!(
        "  {} {} node extensions",
        style("✓").green(),
        directory.nodes.len()
    );
    println!(
        "  {} {} wide-area node extensions",
        style("✓").green(),
        directory.wide_nodes.len()
    );
    for path in &written {
        println!("  {} Wrote {}", style("✓").green(), path.display());
    }

    Ok(())
}
