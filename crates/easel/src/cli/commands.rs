//! CLI command definitions.

use easel::Channel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Easel - generate an AI image from an AI idea and post it
#[derive(Parser, Debug)]
#[command(name = "easel")]
#[command(about = "Generate an AI image from an AI idea and post it", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the pipeline, once or on a loop
    Run {
        /// Where to post the image
        #[arg(long, value_enum, default_value_t = Channel::Telegram)]
        publisher: Channel,

        /// Run a single time and exit
        #[arg(long)]
        once: bool,

        /// Settings file (defaults to ./easel.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory for generated images
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Validate settings and secrets, then exit
    Check {
        /// Channel whose secrets to check
        #[arg(long, value_enum, default_value_t = Channel::Telegram)]
        publisher: Channel,

        /// Settings file (defaults to ./easel.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
