//! FLUX image synthesis over a Gradio Space.

use crate::gradio::InferenceBackend;
use async_trait::async_trait;
use derive_getters::Getters;
use easel_core::{ImageReference, Prompt};
use easel_error::{EaselResult, ModelsError, ModelsErrorKind, ModelsResult};
use easel_interface::ImageSynthesizer;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::Path;
use tracing::{error, info, instrument};

/// Largest seed the FLUX Spaces accept.
pub const MAX_SEED: u32 = i32::MAX as u32;

/// Fixed inference parameters for the `/infer` endpoint.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(default)]
#[serde(default)]
pub struct FluxParameters {
    /// Endpoint name on the Space
    api_name: String,
    /// Output width in pixels
    width: u32,
    /// Output height in pixels
    height: u32,
    /// Classifier-free guidance scale
    guidance_scale: f64,
    /// Denoising steps
    num_inference_steps: u32,
}

impl Default for FluxParameters {
    fn default() -> Self {
        Self {
            api_name: "/infer".to_string(),
            width: 1024,
            height: 1024,
            guidance_scale: 3.5,
            num_inference_steps: 28,
        }
    }
}

impl FluxParameters {
    /// Creates a builder starting from the defaults.
    pub fn builder() -> FluxParametersBuilder {
        FluxParametersBuilder::default()
    }

    /// Positional inputs for the endpoint.
    ///
    /// The Space ignores `seed` when `randomize_seed` is set, but a fresh seed is
    /// sent anyway so runs differ even against Spaces that honour it.
    pub fn inputs(&self, prompt: &Prompt, seed: u32) -> Vec<Value> {
        vec![
            json!(prompt.text()),
            json!(seed),
            json!(true),
            json!(self.width),
            json!(self.height),
            json!(self.guidance_scale),
            json!(self.num_inference_steps),
        ]
    }
}

/// Decides what kind of image reference a Space returned.
///
/// Accepted shapes:
/// - `[path, ...]` where `path` is a string naming an existing local file
/// - `[{"path": ..., "url": ...}, ...]`, preferring `path` when it exists locally,
///   else `url`
///
/// Anything else is [`ModelsErrorKind::UnexpectedFormat`].
///
/// # Examples
///
/// ```
/// use easel_core::ImageReference;
/// use easel_models::classify_response;
/// use serde_json::json;
///
/// let hosted = json!([{"url": "https://example.hf.space/file=out.webp"}, 12]);
/// assert_eq!(
///     classify_response(&hosted).unwrap(),
///     ImageReference::RemoteUrl("https://example.hf.space/file=out.webp".into())
/// );
///
/// assert!(classify_response(&json!({"status": "pending"})).is_err());
/// ```
pub fn classify_response(result: &Value) -> ModelsResult<ImageReference> {
    let first = result.as_array().and_then(|items| items.first());

    match first {
        Some(Value::String(path)) => {
            if Path::new(path).exists() {
                Ok(ImageReference::LocalPath(path.into()))
            } else {
                Err(ModelsError::new(ModelsErrorKind::MissingLocalFile(
                    path.clone(),
                )))
            }
        }
        Some(Value::Object(record)) => {
            let local = record
                .get("path")
                .and_then(Value::as_str)
                .filter(|path| Path::new(path).exists());
            if let Some(path) = local {
                return Ok(ImageReference::LocalPath(path.into()));
            }
            match record.get("url").and_then(Value::as_str) {
                Some(url) => Ok(ImageReference::RemoteUrl(url.to_string())),
                None => Err(unexpected(result)),
            }
        }
        _ => Err(unexpected(result)),
    }
}

fn unexpected(result: &Value) -> ModelsError {
    ModelsError::new(ModelsErrorKind::UnexpectedFormat(result.to_string()))
}

/// Image synthesizer backed by a FLUX Gradio Space.
pub struct FluxSynthesizer<B: InferenceBackend> {
    backend: B,
    parameters: FluxParameters,
}

impl<B: InferenceBackend> FluxSynthesizer<B> {
    /// Creates a synthesizer with the given parameters.
    pub fn new(backend: B, parameters: FluxParameters) -> Self {
        Self {
            backend,
            parameters,
        }
    }

    /// Inference parameters in use.
    pub fn parameters(&self) -> &FluxParameters {
        &self.parameters
    }
}

#[async_trait]
impl<B: InferenceBackend> ImageSynthesizer for FluxSynthesizer<B> {
    #[instrument(skip(self, prompt), fields(api_name = %self.parameters.api_name))]
    async fn synthesize(&self, prompt: &Prompt) -> EaselResult<ImageReference> {
        let seed = rand::thread_rng().gen_range(0..=MAX_SEED);
        let inputs = self.parameters.inputs(prompt, seed);

        let result = self
            .backend
            .predict(&self.parameters.api_name, inputs)
            .await
            .inspect_err(|e| error!(error = %e, "Image generation request failed"))?;

        let reference = classify_response(&result)
            .inspect_err(|e| error!(error = %e, "Unusable image generation response"))?;
        info!(kind = reference.kind(), reference = %reference, "Image generated");
        Ok(reference)
    }
}
