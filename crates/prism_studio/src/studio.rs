//! Interactive session: one operation per tab, plus the last-result slot.

use crate::generators::{AudioArtifactGenerator, ImagePromptArtifactGenerator, TextArtifactGenerator};
use crate::{
    MultiModalOrchestrator, PromptComposer, SamplingConfig, StudioConfig, truncate_chars,
};
use derive_getters::Getters;
use prism_core::{
    ApiKey, ArtStyle, ArtifactKind, ArtifactPayload, ArtifactResult, GenerationRequest,
    LanguageCode, QualityLevel, ResultBundle, TextModel,
};
use prism_error::{EmptyInputError, PrismResult};
use prism_interface::{SpeechBackend, TextBackend};
use prism_models::{GeminiClient, GoogleTtsClient, HttpOptions};
use tracing::{info, instrument, warn};

/// Result of the audio tab.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct AudioTabOutcome {
    /// Rewritten text, when enhancement was requested and succeeded
    enhanced_text: Option<String>,
    /// The text actually sent to the speech backend
    spoken_text: String,
    /// The audio artifact
    audio: ArtifactResult,
}

/// A user session over one text backend and one speech backend.
///
/// Every tab operation rejects blank input before any backend is called,
/// and records its output as the most recent result. Backend failures are
/// returned as failed [`ArtifactResult`]s, not as errors.
#[derive(Debug)]
pub struct Studio<T, S> {
    orchestrator: MultiModalOrchestrator<T, S>,
    default_model: TextModel,
    default_language: LanguageCode,
    audio_tab_char_limit: Option<usize>,
    last_result: Option<ResultBundle>,
}

impl Studio<GeminiClient, GoogleTtsClient> {
    /// Session backed by Gemini and Google Translate speech.
    ///
    /// # Errors
    ///
    /// A configuration error when `api_key` is absent or blank; no client is
    /// built and nothing is sent in that case.
    #[instrument(skip(config, api_key))]
    pub fn connect(config: &StudioConfig, api_key: Option<String>) -> PrismResult<Self> {
        let api_key = ApiKey::from_option(api_key)?;
        let timeout = config.request_timeout();

        let gemini_url = config
            .gemini_base_url()
            .clone()
            .unwrap_or_else(|| GeminiClient::DEFAULT_BASE_URL.to_string());
        let text = GeminiClient::with_options(api_key, HttpOptions::new(gemini_url, timeout))?;

        let tts_url = config
            .tts_base_url()
            .clone()
            .unwrap_or_else(|| GoogleTtsClient::DEFAULT_BASE_URL.to_string());
        let speech = GoogleTtsClient::with_options(HttpOptions::new(tts_url, timeout))?;

        info!("Studio connected");
        Ok(Self::new(text, speech, config))
    }
}

impl<T, S> Studio<T, S>
where
    T: TextBackend,
    S: SpeechBackend,
{
    /// Session over arbitrary backends.
    pub fn new(text: T, speech: S, config: &StudioConfig) -> Self {
        let orchestrator = MultiModalOrchestrator::new(
            TextArtifactGenerator::with_sampling(text, config.sampling()),
            AudioArtifactGenerator::new(speech),
        )
        .with_audio_char_limit(config.multimodal_limit());

        Self {
            orchestrator,
            default_model: *config.default_model(),
            default_language: *config.default_language(),
            audio_tab_char_limit: config.audio_tab_limit(),
            last_result: None,
        }
    }

    /// Model used when a tab does not pick one.
    pub fn default_model(&self) -> TextModel {
        self.default_model
    }

    /// Language used when a tab does not pick one.
    pub fn default_language(&self) -> LanguageCode {
        self.default_language
    }

    /// The orchestrator behind the multi-modal tab.
    pub fn orchestrator(&self) -> &MultiModalOrchestrator<T, S> {
        &self.orchestrator
    }

    /// Output of the most recent operation, kept for re-display.
    pub fn last_result(&self) -> Option<&ResultBundle> {
        self.last_result.as_ref()
    }

    /// Text tab, with the session's sampling settings.
    ///
    /// # Errors
    ///
    /// Empty input for a blank prompt.
    pub async fn generate_text(
        &mut self,
        prompt: &str,
        model: TextModel,
    ) -> PrismResult<ArtifactResult> {
        let sampling = self.orchestrator.text_generator().sampling();
        self.generate_text_with_sampling(prompt, model, sampling)
            .await
    }

    /// Text tab, with sampling settings for this submission only.
    ///
    /// Out-of-range settings are clamped.
    ///
    /// # Errors
    ///
    /// Empty input for a blank prompt.
    #[instrument(skip(self, prompt, sampling), fields(model = %model))]
    pub async fn generate_text_with_sampling(
        &mut self,
        prompt: &str,
        model: TextModel,
        sampling: SamplingConfig,
    ) -> PrismResult<ArtifactResult> {
        require_input(prompt, "a text prompt")?;

        let result = match self
            .orchestrator
            .text_generator()
            .generate_with_sampling(prompt, model, sampling)
            .await
        {
            Ok(text) => ArtifactResult::succeeded(ArtifactPayload::Text(text)),
            Err(e) => ArtifactResult::failed(ArtifactKind::Text, e.user_message()),
        };
        self.remember(std::iter::once(result.clone()));
        Ok(result)
    }

    /// Image prompt tab. Style and quality are folded into the idea first.
    ///
    /// # Errors
    ///
    /// Empty input for a blank idea. Backend failures fall back to a
    /// template and still succeed.
    #[instrument(skip(self, idea), fields(style = %style, quality = %quality))]
    pub async fn generate_image_prompt(
        &mut self,
        idea: &str,
        style: ArtStyle,
        quality: QualityLevel,
    ) -> PrismResult<ArtifactResult> {
        require_input(idea, "an image idea")?;

        let mut modifiers = vec![style.modifier()];
        modifiers.extend(quality.modifiers().iter().map(|m| m.to_string()));
        let composed = PromptComposer::compose(idea, &modifiers);

        let prompt = ImagePromptArtifactGenerator::new(self.orchestrator.text_generator())
            .with_model(self.default_model)
            .generate(&composed)
            .await;
        let result = ArtifactResult::succeeded(ArtifactPayload::ImagePrompt(prompt));
        self.remember(std::iter::once(result.clone()));
        Ok(result)
    }

    /// Audio tab, optionally rewriting the text for speech first.
    ///
    /// # Errors
    ///
    /// Empty input for blank text.
    #[instrument(skip(self, text), fields(language = %language))]
    pub async fn generate_audio(
        &mut self,
        text: &str,
        language: LanguageCode,
        enhance: bool,
    ) -> PrismResult<AudioTabOutcome> {
        require_input(text, "text to convert")?;

        let enhanced_text = if enhance {
            self.enhance_for_speech(text).await
        } else {
            None
        };
        let source = enhanced_text.as_deref().unwrap_or(text);
        let spoken_text = truncate_chars(source, self.audio_tab_char_limit).to_string();

        let audio = match self
            .orchestrator
            .audio_generator()
            .generate(&spoken_text, language)
            .await
        {
            Ok(bytes) => ArtifactResult::succeeded(ArtifactPayload::Audio(bytes)),
            Err(e) => ArtifactResult::failed(ArtifactKind::Audio, e.user_message()),
        };

        self.remember(std::iter::once(audio.clone()));
        Ok(AudioTabOutcome {
            enhanced_text,
            spoken_text,
            audio,
        })
    }

    /// Multi-modal tab.
    ///
    /// # Errors
    ///
    /// Empty input for a blank prompt; nothing is generated in that case.
    #[instrument(skip(self, request))]
    pub async fn generate_all(&mut self, request: &GenerationRequest) -> PrismResult<ResultBundle> {
        require_input(request.raw_prompt(), "a multi-modal prompt")?;

        let bundle = self.orchestrator.run(request).await;
        self.last_result = Some(bundle.clone());
        Ok(bundle)
    }

    async fn enhance_for_speech(&self, text: &str) -> Option<String> {
        let request = PromptComposer::compose_enhancement_request(text);
        match self
            .orchestrator
            .text_generator()
            .generate(&request, self.default_model)
            .await
        {
            Ok(enhanced) if !enhanced.trim().is_empty() => Some(enhanced),
            Ok(_) => {
                warn!("Enhancement returned blank text, using original");
                None
            }
            Err(e) => {
                warn!(error = %e, "Enhancement failed, using original text");
                None
            }
        }
    }

    fn remember(&mut self, results: impl IntoIterator<Item = ArtifactResult>) {
        let mut bundle = ResultBundle::new();
        for result in results {
            bundle.insert(result);
        }
        self.last_result = Some(bundle);
    }
}

#[track_caller]
fn require_input(value: &str, field: &str) -> PrismResult<()> {
    if value.trim().is_empty() {
        warn!(field, "Blank input rejected");
        return Err(EmptyInputError::new(field).into());
    }
    Ok(())
}
