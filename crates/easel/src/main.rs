//! Easel CLI binary.
//!
//! - `easel run` generates an image and posts it, every 20 minutes or once
//! - `easel check` validates settings and secrets

use clap::Parser;
use easel::{ObservabilityConfig, init_observability};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, check, run_pipeline};

    // Secrets may live in .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    init_observability(
        ObservabilityConfig::default()
            .with_log_level(log_level)
            .with_json_logs(cli.json),
    )?;

    let result = match cli.command {
        Commands::Run {
            publisher,
            once,
            config,
            output_dir,
        } => run_pipeline(publisher, once, config.as_deref(), output_dir.as_deref()).await,
        Commands::Check { publisher, config } => check(publisher, config.as_deref()),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Easel failed");
        return Err(e.into());
    }
    Ok(())
}
