//! Wiring: concrete stages from settings and secrets.

use crate::config::{ChannelSecrets, EaselConfig, Secrets};
use easel_bot::PipelineRunner;
use easel_error::EaselResult;
use easel_interface::Publisher;
use easel_models::{
    ChatIdeaGenerator, ChatPromptExpander, FluxSynthesizer, GradioClient, OpenRouterDriver,
};
use easel_social::{TelegramPublisher, WebCredentials, WebDriverFactory, WebUiPublisher};
use easel_storage::FileSystemMaterializer;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

/// Build the publisher for the channel the secrets are for.
///
/// # Errors
///
/// Returns error if the Telegram client cannot be created.
pub fn build_publisher(config: &EaselConfig, secrets: &Secrets) -> EaselResult<Box<dyn Publisher>> {
    let publisher: Box<dyn Publisher> = match &secrets.channel {
        ChannelSecrets::Telegram { token, chat_id } => {
            Box::new(TelegramPublisher::new(token.clone(), chat_id)?)
        }
        ChannelSecrets::Web { username, password } => Box::new(WebUiPublisher::new(
            WebDriverFactory::new(config.webdriver.url.clone(), config.webdriver.headless),
            WebCredentials::new(username.clone(), password.clone()),
            config.web.clone(),
        )),
    };
    Ok(publisher)
}

/// Assemble the production pipeline.
///
/// `output_dir` overrides the directory from the settings file.
///
/// # Errors
///
/// Returns error if a client cannot be created or the output directory cannot be made.
#[instrument(skip_all, fields(channel = %secrets.channel.channel()))]
pub fn build_runner(
    config: &EaselConfig,
    secrets: &Secrets,
    output_dir: Option<&Path>,
) -> EaselResult<PipelineRunner> {
    let channel = secrets.channel.channel();

    let driver = Arc::new(OpenRouterDriver::with_timeout(
        secrets.openrouter_api_key.clone(),
        config.text.model.clone(),
        config.text.endpoint.clone(),
        config.text_timeout(),
    )?);

    let gradio = GradioClient::new(
        &secrets.flux_space,
        secrets.hf_token.clone(),
        config.inference_timeout(),
    )?;
    info!(space = gradio.base_url(), model = %config.text.model, "Clients ready");

    let output_dir = output_dir.unwrap_or(config.output.dir.as_path());
    let materializer = FileSystemMaterializer::with_timeout(output_dir, config.download_timeout())?;

    PipelineRunner::builder()
        .ideas(Box::new(ChatIdeaGenerator::new(Arc::clone(&driver))))
        .prompts(Box::new(ChatPromptExpander::new(driver)))
        .synthesizer(Box::new(FluxSynthesizer::new(
            gradio,
            config.image.parameters.clone(),
        )))
        .materializer(Box::new(materializer))
        .publisher(build_publisher(config, secrets)?)
        .naming(config.naming_for(channel))
        .build()
}
