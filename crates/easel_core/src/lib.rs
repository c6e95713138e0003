//! Core data types for the Easel image pipeline.
//!
//! A run moves a [`Concept`] to a [`Prompt`], the prompt to an
//! [`ImageReference`], the reference to a [`MaterializedImage`], and finally to a
//! [`PublishResult`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod message;
mod naming;
mod publish;
mod role;
mod text;

pub use image::{ImageFormat, ImageReference, MaterializedImage};
pub use message::ChatMessage;
pub use naming::{DEFAULT_SANITIZED_LENGTH, FileNaming, sanitize_filename};
pub use publish::PublishResult;
pub use role::Role;
pub use text::{Caption, Concept, Prompt};
