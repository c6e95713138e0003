//! Text produced by the language model stages.

use serde::{Deserialize, Serialize};

/// Short seed idea for an image.
///
/// Produced by the idea generator and consumed once by the prompt expander.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", text)]
pub struct Concept {
    text: String,
}

impl Concept {
    /// Wraps model output, trimming surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use easel_core::Concept;
    ///
    /// let concept = Concept::new("  a fox in snow \n");
    /// assert_eq!(concept.text(), "a fox in snow");
    /// ```
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: text.as_ref().trim().to_string(),
        }
    }

    /// The idea text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Detailed instruction for the image model.
///
/// Reused as the body of the published caption.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", text)]
pub struct Prompt {
    text: String,
}

impl Prompt {
    /// Wraps model output, trimming surrounding whitespace.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: text.as_ref().trim().to_string(),
        }
    }

    /// The prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of whitespace-separated words.
    ///
    /// # Examples
    ///
    /// ```
    /// use easel_core::Prompt;
    ///
    /// assert_eq!(Prompt::new("a fox  in\nsnow").word_count(), 4);
    /// ```
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Text published next to the image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", text)]
pub struct Caption {
    text: String,
}

impl Caption {
    /// Builds the standard caption around a prompt.
    ///
    /// # Examples
    ///
    /// ```
    /// use easel_core::{Caption, Prompt};
    ///
    /// let caption = Caption::from_prompt(&Prompt::new("A red fox"));
    /// assert_eq!(caption.text(), "Generated by AI: A red fox #AIArt #AIGenerated");
    /// ```
    pub fn from_prompt(prompt: &Prompt) -> Self {
        Self {
            text: format!("Generated by AI: {} #AIArt #AIGenerated", prompt.text()),
        }
    }

    /// Wraps arbitrary caption text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The caption text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the caption cut to at most `max_chars` characters.
    pub fn truncated(&self, max_chars: usize) -> &str {
        match self.text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}
