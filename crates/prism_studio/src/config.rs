//! Studio settings.

use crate::SamplingConfig;
use crate::orchestrator::DEFAULT_AUDIO_CHAR_LIMIT;
use derive_getters::Getters;
use prism_core::{LanguageCode, TextModel};
use prism_error::{ConfigError, PrismResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "prism.toml";

/// Prefix for environment overrides, e.g. `PRISM_DEFAULT_LANGUAGE=fr`.
pub const ENV_PREFIX: &str = "PRISM";

/// Settings for a [`Studio`](crate::Studio) session.
///
/// Layered from built-in defaults, an optional TOML file and `PRISM_*`
/// environment variables, later layers winning. The API key is not part of
/// the settings and is never read from or written to a file.
///
/// # Examples
///
/// ```
/// use prism_studio::StudioConfig;
///
/// let config = StudioConfig::default();
/// assert_eq!(config.multimodal_limit(), Some(500));
/// assert_eq!(config.audio_tab_limit(), None);
/// assert_eq!(config.request_timeout().as_secs(), 60);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct StudioConfig {
    /// Text model when none is chosen
    default_model: TextModel,
    /// Speech language when none is chosen
    default_language: LanguageCode,
    /// Speech input limit on the multi-modal path, 0 for unlimited
    multimodal_audio_char_limit: usize,
    /// Speech input limit on the audio tab
    audio_tab_char_limit: Option<usize>,
    /// Where downloads are written
    output_dir: PathBuf,
    /// Override for the Gemini endpoint
    gemini_base_url: Option<String>,
    /// Override for the speech endpoint
    tts_base_url: Option<String>,
    /// Per-request timeout in seconds
    request_timeout_secs: u64,
    /// Upper bound on generated tokens
    max_output_tokens: u32,
    /// Sampling temperature
    temperature: f32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            default_model: TextModel::default(),
            default_language: LanguageCode::default(),
            multimodal_audio_char_limit: DEFAULT_AUDIO_CHAR_LIMIT,
            audio_tab_char_limit: None,
            output_dir: default_output_dir(),
            gemini_base_url: None,
            tts_base_url: None,
            request_timeout_secs: 60,
            max_output_tokens: 500,
            temperature: 0.7,
        }
    }
}

fn default_output_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

impl StudioConfig {
    /// Load settings.
    ///
    /// With `path`, that file must exist. Without it, `prism.toml` in the
    /// working directory is used if present.
    ///
    /// # Errors
    ///
    /// A configuration error when a file cannot be read or a value has the
    /// wrong type.
    #[tracing::instrument]
    pub fn load(path: Option<&Path>) -> PrismResult<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?;

        let loaded: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?;
        tracing::debug!(?loaded, "Configuration loaded");
        Ok(loaded)
    }

    /// Set the download directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Limit for the multi-modal path; `None` when disabled with 0.
    pub fn multimodal_limit(&self) -> Option<usize> {
        Some(self.multimodal_audio_char_limit).filter(|limit| *limit > 0)
    }

    /// Limit for the audio tab; `None` when unset or 0.
    pub fn audio_tab_limit(&self) -> Option<usize> {
        self.audio_tab_char_limit.filter(|limit| *limit > 0)
    }

    /// Request timeout as a duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Sampling settings, clamped into range.
    pub fn sampling(&self) -> SamplingConfig {
        SamplingConfig::new(self.max_output_tokens, self.temperature)
    }
}
