//! Run modes and the sleep-and-repeat loop.

use crate::pipeline::PipelineRunner;
use easel_error::{EaselResult, SocialError, SocialErrorKind};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, instrument};

/// Default pause between loop runs.
pub const DEFAULT_RUN_INTERVAL: Duration = Duration::from_secs(20 * 60);

/// How many times the pipeline runs per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Run once and exit
    #[display("once")]
    Once,
    /// Run, sleep, repeat until shut down
    #[display("loop")]
    Loop,
}

/// Loop timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotSchedule {
    /// Pause after each run
    pub interval: Duration,
}

impl Default for BotSchedule {
    fn default() -> Self {
        Self {
            interval: DEFAULT_RUN_INTERVAL,
        }
    }
}

impl BotSchedule {
    /// Schedule with a pause of `minutes` between runs.
    pub fn from_minutes(minutes: u64) -> Self {
        Self {
            interval: Duration::from_secs(minutes * 60),
        }
    }
}

/// Drives a [`PipelineRunner`] in the configured mode.
pub struct BotServer {
    runner: PipelineRunner,
    schedule: BotSchedule,
}

/// How the bot server stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerSummary {
    /// Runs started
    pub runs: u64,
    /// Runs whose post went out
    pub published: u64,
}

impl BotServer {
    /// Create a server.
    pub fn new(runner: PipelineRunner, schedule: BotSchedule) -> Self {
        Self { runner, schedule }
    }

    /// The wrapped runner.
    pub fn runner(&self) -> &PipelineRunner {
        &self.runner
    }

    /// Run in `mode` until done or until `shutdown` resolves.
    ///
    /// In [`RunMode::Loop`] run failures are logged and the loop waits for the
    /// next interval. `shutdown` is only observed while sleeping, so an
    /// in-flight run always finishes.
    ///
    /// # Errors
    ///
    /// In [`RunMode::Once`], returns the run's error, or
    /// [`SocialErrorKind::PublishFailed`] when the post did not go out.
    #[instrument(skip(self, shutdown), fields(interval_secs = self.schedule.interval.as_secs()))]
    pub async fn start<S>(&self, mode: RunMode, shutdown: S) -> EaselResult<ServerSummary>
    where
        S: Future<Output = ()>,
    {
        info!(%mode, channel = self.runner.channel_name(), "Starting bot server");
        tokio::pin!(shutdown);

        let mut summary = ServerSummary {
            runs: 0,
            published: 0,
        };

        loop {
            summary.runs += 1;
            match self.run_and_check().await {
                Ok(()) => summary.published += 1,
                Err(e) if mode == RunMode::Once => return Err(e),
                Err(e) => error!(error = %e, run = summary.runs, "Run failed"),
            }

            if mode == RunMode::Once {
                break;
            }

            info!(
                delay_secs = self.schedule.interval.as_secs(),
                "Next run scheduled"
            );
            tokio::select! {
                _ = sleep(self.schedule.interval) => {}
                _ = &mut shutdown => {
                    info!("Shutdown requested, leaving run loop");
                    break;
                }
            }
        }

        info!(runs = summary.runs, published = summary.published, "Bot server stopped");
        Ok(summary)
    }

    /// One run, with an unsuccessful post counted as a failure.
    async fn run_and_check(&self) -> EaselResult<()> {
        let report = self.runner.run_once().await?;
        if report.publish().success {
            return Ok(());
        }
        Err(SocialError::new(SocialErrorKind::PublishFailed {
            channel: self.runner.channel_name().to_string(),
            reason: report
                .publish()
                .error
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        })
        .into())
    }
}
