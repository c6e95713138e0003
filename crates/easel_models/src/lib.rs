//! Text and image model integrations for Easel.
//!
//! - [`OpenRouterDriver`] talks to an OpenAI-compatible chat endpoint and backs
//!   both [`ChatIdeaGenerator`] and [`ChatPromptExpander`].
//! - [`GradioClient`] runs jobs on a Hugging Face Space; [`FluxSynthesizer`]
//!   uses it to produce an [`easel_core::ImageReference`].
//!
//! # Example
//!
//! ```no_run
//! use easel_interface::{IdeaGenerator, PromptExpander};
//! use easel_models::{ChatIdeaGenerator, ChatPromptExpander, OpenRouterDriver};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = Arc::new(OpenRouterDriver::with_api_key(
//!     std::env::var("OPENROUTER_API_KEY")?,
//!     easel_models::DEFAULT_OPENROUTER_MODEL.to_string(),
//! )?);
//! let concept = ChatIdeaGenerator::new(Arc::clone(&driver)).generate().await?;
//! let prompt = ChatPromptExpander::new(driver).expand(&concept).await?;
//! println!("{prompt}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod flux;
mod gradio;
mod ideas;
mod openai_compat;
mod openrouter;

pub use flux::{FluxParameters, FluxParametersBuilder, FluxSynthesizer, MAX_SEED, classify_response};
pub use gradio::{
    DEFAULT_INFERENCE_TIMEOUT, GradioClient, InferenceBackend, parse_event_stream,
    resolve_space_url,
};
pub use ideas::{ChatIdeaGenerator, ChatPromptExpander, IDEA_INSTRUCTION, prompt_instruction};
pub use openai_compat::{DEFAULT_TEXT_TIMEOUT, OpenAICompatibleClient, extract_content};
pub use openrouter::{DEFAULT_OPENROUTER_MODEL, OPENROUTER_ENDPOINT, OpenRouterDriver};
