//! Trait definitions for pipeline stages and their backends.

use async_trait::async_trait;
use easel_core::{
    Caption, ChatMessage, Concept, ImageReference, MaterializedImage, Prompt, PublishResult,
};
use easel_error::EaselResult;

/// Chat-completion backend shared by the idea and prompt stages.
#[async_trait]
pub trait ChatDriver: Send + Sync {
    /// Send messages and return the first choice's content, untrimmed.
    async fn complete(&self, messages: &[ChatMessage]) -> EaselResult<String>;

    /// Provider name (e.g., "openrouter").
    fn provider_name(&self) -> &'static str;

    /// Model identifier.
    fn model_name(&self) -> &str;
}

/// Produces a short image idea.
#[async_trait]
pub trait IdeaGenerator: Send + Sync {
    /// Ask the model for a concept. Empty output is an error.
    async fn generate(&self) -> EaselResult<Concept>;
}

/// Expands a concept into a detailed image prompt.
#[async_trait]
pub trait PromptExpander: Send + Sync {
    /// Ask the model for a prompt. Empty output is an error.
    async fn expand(&self, concept: &Concept) -> EaselResult<Prompt>;
}

/// Turns a prompt into a pointer to a generated image.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    /// Run inference and classify the response.
    async fn synthesize(&self, prompt: &Prompt) -> EaselResult<ImageReference>;
}

/// Brings a generated image onto local disk as a JPEG.
#[async_trait]
pub trait ImageMaterializer: Send + Sync {
    /// Fetch or copy `reference` to `destination_name` and transcode it.
    async fn materialize(
        &self,
        reference: &ImageReference,
        destination_name: &str,
    ) -> EaselResult<MaterializedImage>;
}

/// Delivers a finished image and caption to an external channel.
///
/// Publishing never returns `Err`; failures are folded into the
/// [`PublishResult`] so the caller always gets a terminal outcome.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish the image with its caption.
    async fn publish(&self, image: &MaterializedImage, caption: &Caption) -> PublishResult;

    /// Channel name for logging (e.g., "telegram").
    fn channel_name(&self) -> &'static str;
}
