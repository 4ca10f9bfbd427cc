//! hamdir - HamVoIP extension directory tool.
//!
//! Fetches the published HamVoIP extension directory PDF, extracts the
//! user and node extensions from it, and writes phone-directory files
//! for the supported phone platforms.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hamdir::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "hamdir=info"
    } else {
        "hamdir=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cli::run().await
}
