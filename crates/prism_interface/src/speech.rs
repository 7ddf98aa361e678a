//! Speech synthesis backend trait.

use async_trait::async_trait;
use prism_core::LanguageCode;
use prism_error::PrismResult;

/// A hosted service that turns text into MP3 audio at normal speed.
#[async_trait]
pub trait SpeechBackend: Send + Sync {
    /// Synthesize `text` in `language`.
    ///
    /// # Errors
    ///
    /// Empty text, an unavailable service, or a response without audio.
    async fn synthesize(&self, text: &str, language: LanguageCode) -> PrismResult<Vec<u8>>;

    /// Provider name for logs.
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl<S: SpeechBackend + ?Sized> SpeechBackend for std::sync::Arc<S> {
    async fn synthesize(&self, text: &str, language: LanguageCode) -> PrismResult<Vec<u8>> {
        (**self).synthesize(text, language).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}
