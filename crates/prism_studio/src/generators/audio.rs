//! Audio artifact generation.

use prism_core::LanguageCode;
use prism_error::{PrismResult, SpeechError, SpeechErrorKind};
use prism_interface::SpeechBackend;
use tracing::{debug, instrument, warn};

/// Produces MP3 audio from text.
///
/// Unlike image prompts there is no substitute for audio, so failures are
/// returned to the caller.
#[derive(Debug, Clone)]
pub struct AudioArtifactGenerator<S> {
    backend: S,
}

impl<S: SpeechBackend> AudioArtifactGenerator<S> {
    /// Wrap a speech backend.
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Synthesize `text` in `language` at normal speed.
    ///
    /// # Errors
    ///
    /// `EmptyText` for blank text (the backend is not called), otherwise
    /// whatever the backend reports.
    #[instrument(
        skip(self, text),
        fields(provider = self.backend.provider_name(), language = %language, text_chars = text.chars().count())
    )]
    pub async fn generate(&self, text: &str, language: LanguageCode) -> PrismResult<Vec<u8>> {
        if text.trim().is_empty() {
            warn!("Refusing to synthesize blank text");
            return Err(SpeechError::new(SpeechErrorKind::EmptyText).into());
        }

        match self.backend.synthesize(text, language).await {
            Ok(audio) => {
                debug!(bytes = audio.len(), "Audio generated");
                Ok(audio)
            }
            Err(e) => {
                warn!(error = %e, "Audio generation failed");
                Err(e)
            }
        }
    }
}
