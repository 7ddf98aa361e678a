//! Text artifact generation.

use derive_getters::Getters;
use prism_core::{CompletionRequest, TextModel};
use prism_error::PrismResult;
use prism_interface::TextBackend;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Sampling settings forwarded with every text request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct SamplingConfig {
    /// Upper bound on generated tokens (100 to 2000)
    max_output_tokens: u32,
    /// Sampling temperature (0.0 to 1.0)
    temperature: f32,
}

impl SamplingConfig {
    /// Settings clamped into their allowed ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_studio::SamplingConfig;
    ///
    /// let sampling = SamplingConfig::new(5000, -1.0);
    /// assert_eq!(*sampling.max_output_tokens(), 2000);
    /// assert_eq!(*sampling.temperature(), 0.0);
    /// ```
    pub fn new(max_output_tokens: u32, temperature: f32) -> Self {
        let temperature = if temperature.is_nan() {
            Self::default().temperature
        } else {
            temperature.clamp(0.0, 1.0)
        };
        Self {
            max_output_tokens: max_output_tokens.clamp(100, 2000),
            temperature,
        }
    }

    /// Re-apply the range limits, e.g. after deserializing.
    pub fn clamped(self) -> Self {
        Self::new(self.max_output_tokens, self.temperature)
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 500,
            temperature: 0.7,
        }
    }
}

/// Produces text artifacts from a prompt.
#[derive(Debug, Clone)]
pub struct TextArtifactGenerator<T> {
    backend: T,
    sampling: SamplingConfig,
}

impl<T: TextBackend> TextArtifactGenerator<T> {
    /// Generator with default sampling.
    pub fn new(backend: T) -> Self {
        Self::with_sampling(backend, SamplingConfig::default())
    }

    /// Generator with explicit sampling.
    pub fn with_sampling(backend: T, sampling: SamplingConfig) -> Self {
        Self {
            backend,
            sampling: sampling.clamped(),
        }
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &T {
        &self.backend
    }

    /// Sampling settings in use.
    pub fn sampling(&self) -> SamplingConfig {
        self.sampling
    }

    /// Generate text for `prompt` with `model`.
    ///
    /// # Errors
    ///
    /// Whatever the backend reports; no retry is attempted.
    pub async fn generate(&self, prompt: &str, model: TextModel) -> PrismResult<String> {
        self.generate_with_sampling(prompt, model, self.sampling).await
    }

    /// Generate text with sampling settings for this call only.
    ///
    /// # Errors
    ///
    /// Whatever the backend reports; no retry is attempted.
    #[instrument(
        skip(self, prompt, sampling),
        fields(
            provider = self.backend.provider_name(),
            model = %model,
            max_output_tokens = sampling.max_output_tokens,
            temperature = sampling.temperature
        )
    )]
    pub async fn generate_with_sampling(
        &self,
        prompt: &str,
        model: TextModel,
        sampling: SamplingConfig,
    ) -> PrismResult<String> {
        let sampling = sampling.clamped();
        let request = CompletionRequest::with_sampling(
            prompt,
            model,
            sampling.max_output_tokens,
            sampling.temperature,
        );

        match self.backend.complete(&request).await {
            Ok(text) => {
                debug!(text_chars = text.chars().count(), "Text generated");
                Ok(text)
            }
            Err(e) => {
                warn!(error = %e, "Text generation failed");
                Err(e)
            }
        }
    }
}
