//! Scripted pipeline stages.

#![allow(dead_code)]

pub mod http_stub;

use async_trait::async_trait;
use easel_core::{
    Caption, Concept, ImageReference, MaterializedImage, Prompt, PublishResult,
};
use easel_error::{EaselResult, ModelsError, ModelsErrorKind, ModelsResult};
use easel_interface::{
    IdeaGenerator, ImageMaterializer, ImageSynthesizer, PromptExpander, Publisher,
};
use easel_models::InferenceBackend;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Always returns the same concept, or fails when `None`.
pub struct FixedIdea(pub Option<&'static str>);

#[async_trait]
impl IdeaGenerator for FixedIdea {
    async fn generate(&self) -> EaselResult<Concept> {
        match self.0 {
            Some(text) => Ok(Concept::new(text)),
            None => Err(ModelsError::new(ModelsErrorKind::EmptyContent("mock".to_string())).into()),
        }
    }
}

/// Expands every concept into the same prompt.
pub struct FixedPrompt(pub &'static str);

#[async_trait]
impl PromptExpander for FixedPrompt {
    async fn expand(&self, _concept: &Concept) -> EaselResult<Prompt> {
        Ok(Prompt::new(self.0))
    }
}

/// Gradio backend that answers every job with the same payload.
pub struct CannedInference {
    pub payload: Value,
    pub calls: Arc<AtomicUsize>,
}

impl CannedInference {
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl InferenceBackend for CannedInference {
    async fn predict(&self, _api_name: &str, _data: Vec<Value>) -> ModelsResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.payload.clone())
    }
}

/// Synthesizer that must never be reached.
pub struct UnreachableSynthesizer;

#[async_trait]
impl ImageSynthesizer for UnreachableSynthesizer {
    async fn synthesize(&self, _prompt: &Prompt) -> EaselResult<ImageReference> {
        panic!("synthesizer invoked after an earlier stage failed")
    }
}

/// Counts calls before delegating to a real materializer.
pub struct CountingMaterializer<M> {
    inner: M,
    pub calls: Arc<AtomicUsize>,
}

impl<M> CountingMaterializer<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl<M: ImageMaterializer> ImageMaterializer for CountingMaterializer<M> {
    async fn materialize(
        &self,
        reference: &ImageReference,
        destination_name: &str,
    ) -> EaselResult<MaterializedImage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.materialize(reference, destination_name).await
    }
}

/// Publisher that records what it was handed.
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    pub fail_with: Option<&'static str>,
    pub posts: Arc<Mutex<Vec<(MaterializedImage, Caption)>>>,
}

impl RecordingPublisher {
    pub fn posted(&self) -> Vec<(MaterializedImage, Caption)> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, image: &MaterializedImage, caption: &Caption) -> PublishResult {
        self.posts
            .lock()
            .unwrap()
            .push((image.clone(), caption.clone()));
        match self.fail_with {
            Some(reason) => PublishResult::failed(reason),
            None => PublishResult::succeeded(),
        }
    }

    fn channel_name(&self) -> &'static str {
        "recording"
    }
}
