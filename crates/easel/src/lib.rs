//! Easel - a scheduled AI image pipeline.
//!
//! Each run asks a text model for a short image idea, expands it into a
//! prompt, renders it on a FLUX Gradio Space, saves the result as a JPEG, and
//! posts it with a caption to Telegram or through a site's web UI.
//!
//! # Architecture
//!
//! Easel is organized as a workspace with focused crates:
//!
//! - `easel_error` - Error types
//! - `easel_core` - Data types (concepts, prompts, captions, image references)
//! - `easel_interface` - Stage traits
//! - `easel_models` - OpenRouter text driver and Gradio image synthesizer
//! - `easel_storage` - Download/copy and JPEG transcoding
//! - `easel_social` - Telegram and web UI publishers
//! - `easel_bot` - Pipeline runner and run loop
//!
//! This crate (`easel`) re-exports everything for convenience and adds
//! configuration, logging setup, and the `easel` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod config;
mod observability;

pub use app::{build_publisher, build_runner};
pub use config::{
    Channel, ChannelSecrets, DEFAULT_CONFIG_FILE, EaselConfig, HF_TOKEN, HUGGINGFACE_FLUX_API,
    INSTAGRAM_PASSWORD, INSTAGRAM_USERNAME, ImageSettings, OPENROUTER_API_KEY, OutputSettings,
    ScheduleSettings, Secrets, TELEGRAM_BOT_TOKEN, TELEGRAM_CHAT_ID, TextSettings,
    WebDriverSettings,
};
pub use observability::{ObservabilityConfig, init_observability};

pub use easel_bot::*;
pub use easel_core::*;
pub use easel_error::*;
pub use easel_interface::*;
pub use easel_models::*;
pub use easel_social::*;
pub use easel_storage::{DEFAULT_DOWNLOAD_TIMEOUT, FileSystemMaterializer, transcode_to_jpeg};
