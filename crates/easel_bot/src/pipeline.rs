//! One pass of the pipeline: idea, prompt, image, file, post.

use derive_getters::Getters;
use easel_core::{
    Caption, Concept, FileNaming, ImageReference, MaterializedImage, Prompt, PublishResult,
};
use easel_error::{ConfigError, EaselResult};
use easel_interface::{
    IdeaGenerator, ImageMaterializer, ImageSynthesizer, PromptExpander, Publisher,
};
use serde::Serialize;
use tracing::{debug, error, info, instrument};

/// Named pipeline stages, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum PipelineStage {
    /// Concept from the text model
    #[display("idea generation")]
    Idea,
    /// Concept expanded into a prompt
    #[display("prompt expansion")]
    Prompt,
    /// Image inference
    #[display("image synthesis")]
    Synthesis,
    /// Download or copy plus transcode
    #[display("image materialization")]
    Materialization,
}

/// What a completed run produced.
///
/// A run that reaches publishing always yields a report; whether the post
/// went out is in [`publish`](RunReport::publish).
#[derive(Debug, Clone, Getters, Serialize)]
pub struct RunReport {
    /// Generated idea
    concept: Concept,
    /// Expanded prompt
    prompt: Prompt,
    /// Where the synthesizer left the image
    reference: ImageReference,
    /// Local JPEG
    image: MaterializedImage,
    /// Caption that was posted
    caption: Caption,
    /// Publisher outcome
    publish: PublishResult,
}

/// Runs the five stages in order and stops at the first failure.
#[derive(derive_builder::Builder)]
#[builder(pattern = "owned", build_fn(private, name = "build_internal"))]
pub struct PipelineRunner {
    /// Idea stage
    ideas: Box<dyn IdeaGenerator>,
    /// Prompt stage
    prompts: Box<dyn PromptExpander>,
    /// Synthesis stage
    synthesizer: Box<dyn ImageSynthesizer>,
    /// Materialization stage
    materializer: Box<dyn ImageMaterializer>,
    /// Delivery channel
    publisher: Box<dyn Publisher>,
    /// File naming for the materialized image
    #[builder(default = "FileNaming::Timestamped")]
    naming: FileNaming,
}

impl PipelineRunnerBuilder {
    /// Build the runner.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a stage is missing.
    pub fn build(self) -> EaselResult<PipelineRunner> {
        self.build_internal()
            .map_err(|e| ConfigError::new(format!("Incomplete pipeline: {}", e)).into())
    }
}

impl PipelineRunner {
    /// Start assembling a runner.
    pub fn builder() -> PipelineRunnerBuilder {
        PipelineRunnerBuilder::default()
    }

    /// Channel the runner publishes to.
    pub fn channel_name(&self) -> &'static str {
        self.publisher.channel_name()
    }

    /// Run the pipeline once.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing stage; later stages are not invoked.
    /// A failed publish is not an error: it is reported in the [`RunReport`].
    #[instrument(skip(self), fields(channel = self.channel_name(), naming = %self.naming))]
    pub async fn run_once(&self) -> EaselResult<RunReport> {
        info!("Starting pipeline run");

        let concept = self
            .ideas
            .generate()
            .await
            .inspect_err(|e| abort(PipelineStage::Idea, e))?;
        debug!(concept = %concept, "Idea stage done");

        let prompt = self
            .prompts
            .expand(&concept)
            .await
            .inspect_err(|e| abort(PipelineStage::Prompt, e))?;
        debug!(words = prompt.word_count(), "Prompt stage done");

        let reference = self
            .synthesizer
            .synthesize(&prompt)
            .await
            .inspect_err(|e| abort(PipelineStage::Synthesis, e))?;
        info!(kind = reference.kind(), reference = %reference, "Image generated");

        let caption = Caption::from_prompt(&prompt);
        let file_name = self.naming.file_name(&caption);
        let image = self
            .materializer
            .materialize(&reference, &file_name)
            .await
            .inspect_err(|e| abort(PipelineStage::Materialization, e))?;
        info!(path = %image.path().display(), "Image saved");

        let publish = self.publisher.publish(&image, &caption).await;
        if publish.success {
            info!(channel = self.channel_name(), "Run complete");
        } else {
            error!(
                channel = self.channel_name(),
                error = publish.error.as_deref().unwrap_or("unknown"),
                "Publishing failed"
            );
        }

        Ok(RunReport {
            concept,
            prompt,
            reference,
            image,
            caption,
            publish,
        })
    }
}

fn abort(stage: PipelineStage, error: &easel_error::EaselError) {
    error!(%stage, error = %error, "Aborting due to failure in {}", stage);
}
