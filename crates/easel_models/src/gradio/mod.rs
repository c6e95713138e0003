//! Minimal Gradio REST client for Hugging Face Spaces.

mod client;
mod events;

pub use client::{DEFAULT_INFERENCE_TIMEOUT, GradioClient, InferenceBackend, resolve_space_url};
pub use events::parse_event_stream;
