use clap::Parser;

use site_onboard::cli::Cli;
use site_onboard::messages;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; --verbose lifts the default to debug so every
    // wp-cli invocation gets echoed.
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    messages::verify_bundles()
        .map_err(|detail| anyhow::anyhow!("broken message bundle: {detail}"))?;

    site_onboard::run(cli).await?;
    Ok(())
}
