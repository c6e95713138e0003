//! Settings file and secrets.
//!
//! Non-secret settings come from an optional TOML file; every field has a
//! default, so an empty or missing file yields a working configuration.
//! Secrets only ever come from the environment.

use easel_bot::BotSchedule;
use easel_core::FileNaming;
use easel_error::{ConfigError, EaselResult};
use easel_models::{DEFAULT_OPENROUTER_MODEL, FluxParameters, OPENROUTER_ENDPOINT};
use easel_social::WebUiSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "easel.toml";

/// Where finished images are posted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Telegram bot API
    #[display("telegram")]
    Telegram,
    /// Browser-driven web UI
    #[display("web")]
    Web,
}

impl Channel {
    /// File naming used when the settings file doesn't choose one.
    pub fn default_naming(self) -> FileNaming {
        match self {
            Self::Telegram => FileNaming::Timestamped,
            Self::Web => FileNaming::Random,
        }
    }
}

/// Text model settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    /// Model identifier
    pub model: String,
    /// Chat completions endpoint
    pub endpoint: String,
    /// Request timeout
    pub timeout_secs: u64,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_OPENROUTER_MODEL.to_string(),
            endpoint: OPENROUTER_ENDPOINT.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Image model settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    /// Inference job timeout
    pub timeout_secs: u64,
    /// Image download timeout
    pub download_timeout_secs: u64,
    /// Endpoint parameters
    pub parameters: FluxParameters,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 300,
            download_timeout_secs: 30,
            parameters: FluxParameters::default(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory receiving the JPEGs
    pub dir: PathBuf,
    /// Naming override; the channel picks when unset
    pub naming: Option<FileNaming>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            naming: None,
        }
    }
}

/// Run loop settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSettings {
    /// Pause between runs in loop mode
    pub interval_minutes: u64,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            interval_minutes: 20,
        }
    }
}

/// WebDriver connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebDriverSettings {
    /// WebDriver server URL
    pub url: String,
    /// Run the browser without a window
    pub headless: bool,
}

impl Default for WebDriverSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:9515".to_string(),
            headless: true,
        }
    }
}

/// Everything non-secret the binary needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EaselConfig {
    /// Text model
    pub text: TextSettings,
    /// Image model
    pub image: ImageSettings,
    /// Output
    pub output: OutputSettings,
    /// Run loop
    pub schedule: ScheduleSettings,
    /// WebDriver connection
    pub webdriver: WebDriverSettings,
    /// Web UI flow
    pub web: WebUiSettings,
}

impl EaselConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> EaselResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse {}: {}", path.display(), e)).into()
        })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid settings TOML.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load `explicit` if given, else `easel.toml` if present, else defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the chosen file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> EaselResult<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// File naming for `channel`.
    pub fn naming_for(&self, channel: Channel) -> FileNaming {
        self.output.naming.unwrap_or_else(|| channel.default_naming())
    }

    /// Loop schedule.
    ///
    /// # Errors
    ///
    /// Returns error if `interval_minutes` is zero.
    pub fn schedule(&self) -> EaselResult<BotSchedule> {
        if self.schedule.interval_minutes == 0 {
            return Err(ConfigError::new("schedule.interval_minutes must be at least 1").into());
        }
        Ok(BotSchedule::from_minutes(self.schedule.interval_minutes))
    }

    /// Text request timeout.
    pub fn text_timeout(&self) -> Duration {
        Duration::from_secs(self.text.timeout_secs)
    }

    /// Inference job timeout.
    pub fn inference_timeout(&self) -> Duration {
        Duration::from_secs(self.image.timeout_secs)
    }

    /// Image download timeout.
    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.image.download_timeout_secs)
    }
}

/// Text model API key.
pub const OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";
/// Gradio Space running the image model.
pub const HUGGINGFACE_FLUX_API: &str = "HUGGINGFACE_FLUX_API";
/// Optional Hugging Face token for private or rate-limited Spaces.
pub const HF_TOKEN: &str = "HF_TOKEN";
/// Telegram bot token.
pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
/// Telegram chat receiving the photos.
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
/// Web UI account name.
pub const INSTAGRAM_USERNAME: &str = "INSTAGRAM_USERNAME";
/// Web UI account password.
pub const INSTAGRAM_PASSWORD: &str = "INSTAGRAM_PASSWORD";

/// Credentials for the chosen channel.
#[derive(Clone)]
pub enum ChannelSecrets {
    /// Telegram bot
    Telegram {
        /// Bot token
        token: String,
        /// Target chat
        chat_id: String,
    },
    /// Web UI account
    Web {
        /// Account name
        username: String,
        /// Account password
        password: String,
    },
}

impl ChannelSecrets {
    /// Channel these credentials are for.
    pub fn channel(&self) -> Channel {
        match self {
            Self::Telegram { .. } => Channel::Telegram,
            Self::Web { .. } => Channel::Web,
        }
    }
}

/// Secrets read from the environment.
#[derive(Clone)]
pub struct Secrets {
    /// Text model key
    pub openrouter_api_key: String,
    /// Image Space identifier or URL
    pub flux_space: String,
    /// Optional Hugging Face token
    pub hf_token: Option<String>,
    /// Channel credentials
    pub channel: ChannelSecrets,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("flux_space", &self.flux_space)
            .field("hf_token", &self.hf_token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl Secrets {
    /// Names required for `channel`.
    pub fn required(channel: Channel) -> Vec<&'static str> {
        let mut names = vec![OPENROUTER_API_KEY, HUGGINGFACE_FLUX_API];
        match channel {
            Channel::Telegram => names.extend([TELEGRAM_BOT_TOKEN, TELEGRAM_CHAT_ID]),
            Channel::Web => names.extend([INSTAGRAM_USERNAME, INSTAGRAM_PASSWORD]),
        }
        names
    }

    /// Read secrets from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming every missing variable.
    pub fn from_env(channel: Channel) -> EaselResult<Self> {
        Self::from_lookup(channel, |name| std::env::var(name).ok())
    }

    /// Read secrets through `lookup`. Empty values count as missing.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming every missing variable.
    pub fn from_lookup<L>(channel: Channel, lookup: L) -> EaselResult<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let missing: Vec<&str> = Self::required(channel)
            .into_iter()
            .filter(|name| get(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::new(format!(
                "Missing environment variables: {}",
                missing.join(", ")
            ))
            .into());
        }

        let value = |name: &str| get(name).unwrap_or_default();
        let channel = match channel {
            Channel::Telegram => ChannelSecrets::Telegram {
                token: value(TELEGRAM_BOT_TOKEN),
                chat_id: value(TELEGRAM_CHAT_ID),
            },
            Channel::Web => ChannelSecrets::Web {
                username: value(INSTAGRAM_USERNAME),
                password: value(INSTAGRAM_PASSWORD),
            },
        };

        Ok(Self {
            openrouter_api_key: value(OPENROUTER_API_KEY),
            flux_space: value(HUGGINGFACE_FLUX_API),
            hf_token: get(HF_TOKEN),
            channel,
        })
    }
}
