//! Trait definitions for the Easel image pipeline.
//!
//! Each pipeline stage sits behind its own trait so the runner can be composed
//! from real network clients or from scripted test doubles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{
    ChatDriver, IdeaGenerator, ImageMaterializer, ImageSynthesizer, PromptExpander, Publisher,
};
