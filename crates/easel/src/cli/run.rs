//! Command handlers.

use easel::{
    BotServer, Channel, EaselConfig, EaselResult, RunMode, Secrets, build_runner,
};
use std::path::Path;
use tracing::{error, info};

/// Load settings and secrets, then run the pipeline.
///
/// In loop mode Ctrl-C during the pause between runs stops the loop. With
/// `once`, a failed run or an unsuccessful post is returned as an error so the
/// process exits nonzero.
pub async fn run_pipeline(
    channel: Channel,
    once: bool,
    config_path: Option<&Path>,
    output_dir: Option<&Path>,
) -> EaselResult<()> {
    let config = EaselConfig::load(config_path)?;
    let schedule = config.schedule()?;
    let secrets = Secrets::from_env(channel)?;
    let runner = build_runner(&config, &secrets, output_dir)?;

    let mode = if once { RunMode::Once } else { RunMode::Loop };
    let server = BotServer::new(runner, schedule);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Cannot listen for Ctrl-C; the loop will only stop when killed");
            std::future::pending::<()>().await;
        }
    };
    let summary = server.start(mode, shutdown).await?;

    info!(runs = summary.runs, published = summary.published, "Done");
    Ok(())
}

/// Validate settings and secrets without running anything.
pub fn check(channel: Channel, config_path: Option<&Path>) -> EaselResult<()> {
    let config = EaselConfig::load(config_path)?;
    let schedule = config.schedule()?;
    Secrets::from_env(channel)?;
    info!(
        %channel,
        interval_secs = schedule.interval.as_secs(),
        model = %config.text.model,
        output_dir = %config.output.dir.display(),
        naming = %config.naming_for(channel),
        "Configuration OK"
    );
    Ok(())
}
