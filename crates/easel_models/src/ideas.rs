//! Idea and prompt stages backed by a chat model.

use async_trait::async_trait;
use easel_core::{ChatMessage, Concept, Prompt};
use easel_error::{EaselResult, ModelsError, ModelsErrorKind};
use easel_interface::{ChatDriver, IdeaGenerator, PromptExpander};
use std::sync::Arc;
use tracing::{info, instrument};

/// Instruction sent to obtain a concept.
pub const IDEA_INSTRUCTION: &str = "Give me a very short AI image idea in 5-10 words.";

/// Builds the instruction that expands `concept` into an image prompt.
///
/// # Examples
///
/// ```
/// use easel_core::Concept;
/// use easel_models::prompt_instruction;
///
/// assert_eq!(
///     prompt_instruction(&Concept::new("a fox in snow")),
///     "Create a short AI image prompt (under 50 words) for: a fox in snow"
/// );
/// ```
pub fn prompt_instruction(concept: &Concept) -> String {
    format!(
        "Create a short AI image prompt (under 50 words) for: {}",
        concept.text()
    )
}

/// Asks a chat model for one short image idea.
pub struct ChatIdeaGenerator<D: ChatDriver> {
    driver: Arc<D>,
}

impl<D: ChatDriver> ChatIdeaGenerator<D> {
    /// Creates a generator over a shared driver.
    pub fn new(driver: Arc<D>) -> Self {
        Self { driver }
    }
}

#[async_trait]
impl<D: ChatDriver> IdeaGenerator for ChatIdeaGenerator<D> {
    #[instrument(skip(self), fields(provider = self.driver.provider_name(), model = %self.driver.model_name()))]
    async fn generate(&self) -> EaselResult<Concept> {
        let text = self
            .driver
            .complete(&[ChatMessage::user(IDEA_INSTRUCTION)])
            .await?;
        let concept = Concept::new(text);
        if concept.text().is_empty() {
            return Err(ModelsError::new(ModelsErrorKind::EmptyContent(
                self.driver.provider_name().to_string(),
            ))
            .into());
        }
        info!(concept = %concept, "Generated idea");
        Ok(concept)
    }
}

/// Asks a chat model to expand a concept into a detailed prompt.
pub struct ChatPromptExpander<D: ChatDriver> {
    driver: Arc<D>,
}

impl<D: ChatDriver> ChatPromptExpander<D> {
    /// Creates an expander over a shared driver.
    pub fn new(driver: Arc<D>) -> Self {
        Self { driver }
    }
}

#[async_trait]
impl<D: ChatDriver> PromptExpander for ChatPromptExpander<D> {
    #[instrument(skip(self, concept), fields(provider = self.driver.provider_name(), model = %self.driver.model_name()))]
    async fn expand(&self, concept: &Concept) -> EaselResult<Prompt> {
        let text = self
            .driver
            .complete(&[ChatMessage::user(prompt_instruction(concept))])
            .await?;
        let prompt = Prompt::new(text);
        if prompt.text().is_empty() {
            return Err(ModelsError::new(ModelsErrorKind::EmptyContent(
                self.driver.provider_name().to_string(),
            ))
            .into());
        }
        info!(words = prompt.word_count(), prompt = %prompt, "Generated prompt");
        Ok(prompt)
    }
}
