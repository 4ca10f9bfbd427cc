//! CLI parser and dispatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::services::OutputSelection;

use super::{check, clean, generate};

#[derive(Parser)]
#[command(name = "hamdir")]
#[command(about = "HamVoIP extension directory tool")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the directory and generate the selected output files
    Generate {
        /// Generate the user extension CSV
        #[arg(short, long)]
        users: bool,
        /// Generate the Cisco IP-phone directory XML
        #[arg(short = 'C', long)]
        cisco: bool,
        /// Generate the Fanvil contact-import CSV
        #[arg(short, long)]
        fanvil: bool,
        /// Generate the node extension CSV
        #[arg(short, long)]
        other: bool,
        /// Generate every output format
        #[arg(short, long)]
        all: bool,
        /// Read a local PDF instead of downloading
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Directory to write output files to (default: from config)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Remove previously generated output files
    Clean {
        /// Directory the output files were written to (default: from config)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Check that the required external tools are installed
    Check,
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            users,
            cisco,
            fanvil,
            other,
            all,
            input,
            out_dir,
        } => {
            let selection = if all {
                OutputSelection::all()
            } else {
                OutputSelection {
                    users,
                    cisco,
                    fanvil,
                    other,
                }
            };
            let out_dir = out_dir.unwrap_or_else(|| settings.output_dir.clone());
            generate::cmd_generate(&settings, selection, input.as_deref(), &out_dir).await
        }
        Commands::Clean { out_dir } => {
            let out_dir = out_dir.unwrap_or_else(|| settings.output_dir.clone());
            clean::cmd_clean(&out_dir)
        }
        Commands::Check => check::cmd_check(),
    }
}
