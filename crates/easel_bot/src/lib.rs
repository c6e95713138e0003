//! Orchestration for Easel.
//!
//! - [`PipelineRunner`] composes the stages and aborts on the first failure
//! - [`BotServer`] runs it once, or repeatedly with a fixed pause

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod pipeline;
mod schedule;

pub use pipeline::{PipelineRunner, PipelineRunnerBuilder, PipelineStage, RunReport};
pub use schedule::{BotSchedule, BotServer, DEFAULT_RUN_INTERVAL, RunMode, ServerSummary};
