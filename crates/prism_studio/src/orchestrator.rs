//! Multi-modal fan-out.

use crate::PromptComposer;
use crate::generators::{AudioArtifactGenerator, ImagePromptArtifactGenerator, TextArtifactGenerator};
use prism_core::{ArtifactKind, ArtifactPayload, ArtifactResult, GenerationRequest, ResultBundle};
use prism_interface::{SpeechBackend, TextBackend};
use tracing::{info, instrument};

/// Character limit applied to speech input on the multi-modal path.
pub const DEFAULT_AUDIO_CHAR_LIMIT: usize = 500;

/// The first `limit` characters of `text`, or all of it when `limit` is `None`.
///
/// Counts Unicode scalar values, never bytes, so the cut is always on a
/// character boundary.
///
/// # Examples
///
/// ```
/// use prism_studio::truncate_chars;
///
/// assert_eq!(truncate_chars("héllo wörld", Some(4)), "héll");
/// assert_eq!(truncate_chars("short", Some(500)), "short");
/// assert_eq!(truncate_chars("unbounded", None), "unbounded");
/// ```
pub fn truncate_chars(text: &str, limit: Option<usize>) -> &str {
    match limit.and_then(|limit| text.char_indices().nth(limit)) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

/// Turns one request into up to three artifacts.
///
/// Steps run in order Text, ImagePrompt, Audio. Each step fails on its own:
/// a failed step is recorded in the bundle and the next step still runs.
/// Audio reads the Text outcome to choose its input, which is the only
/// dependency between steps.
///
/// The request's model applies to the Text step only. The image prompt is
/// always expanded with the default model.
#[derive(Debug, Clone)]
pub struct MultiModalOrchestrator<T, S> {
    text: TextArtifactGenerator<T>,
    audio: AudioArtifactGenerator<S>,
    audio_char_limit: Option<usize>,
}

impl<T, S> MultiModalOrchestrator<T, S>
where
    T: TextBackend,
    S: SpeechBackend,
{
    /// Orchestrator with the default 500 character audio limit.
    pub fn new(text: TextArtifactGenerator<T>, audio: AudioArtifactGenerator<S>) -> Self {
        Self {
            text,
            audio,
            audio_char_limit: Some(DEFAULT_AUDIO_CHAR_LIMIT),
        }
    }

    /// Override the audio input limit; `None` passes the text through whole.
    pub fn with_audio_char_limit(mut self, limit: Option<usize>) -> Self {
        self.audio_char_limit = limit;
        self
    }

    /// The text generator.
    pub fn text_generator(&self) -> &TextArtifactGenerator<T> {
        &self.text
    }

    /// The audio generator.
    pub fn audio_generator(&self) -> &AudioArtifactGenerator<S> {
        &self.audio
    }

    /// Audio input limit in effect.
    pub fn audio_char_limit(&self) -> Option<usize> {
        self.audio_char_limit
    }

    /// Run every requested step and collect the outcomes.
    ///
    /// Never fails; failures are carried by the individual results.
    #[instrument(
        skip(self, request),
        fields(kinds = ?request.enabled_kinds(), model = %request.model(), language = %request.language())
    )]
    pub async fn run(&self, request: &GenerationRequest) -> ResultBundle {
        let mut bundle = ResultBundle::new();

        let text_outcome = if request.wants(ArtifactKind::Text) {
            let outcome = self
                .text
                .generate(request.raw_prompt(), *request.model())
                .await;
            bundle.insert(match &outcome {
                Ok(text) => ArtifactResult::succeeded(ArtifactPayload::Text(text.clone())),
                Err(e) => ArtifactResult::failed(ArtifactKind::Text, e.user_message()),
            });
            Some(outcome)
        } else {
            None
        };

        if request.wants(ArtifactKind::ImagePrompt) {
            let idea = PromptComposer::compose(request.raw_prompt(), request.style_modifiers());
            let prompt = ImagePromptArtifactGenerator::new(&self.text)
                .generate(&idea)
                .await;
            bundle.insert(ArtifactResult::succeeded(ArtifactPayload::ImagePrompt(
                prompt,
            )));
        }

        if request.wants(ArtifactKind::Audio) {
            let source = match &text_outcome {
                Some(Ok(text)) => text.as_str(),
                _ => request.raw_prompt().as_str(),
            };
            let speech_input = truncate_chars(source, self.audio_char_limit);
            bundle.insert(
                match self.audio.generate(speech_input, *request.language()).await {
                    Ok(audio) => ArtifactResult::succeeded(ArtifactPayload::Audio(audio)),
                    Err(e) => ArtifactResult::failed(ArtifactKind::Audio, e.user_message()),
                },
            );
        }

        info!(
            attempted = bundle.len(),
            failed = bundle.failures().count(),
            "Multi-modal generation finished"
        );
        bundle
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "日本語のテキスト";
        assert_eq!(truncate_chars(text, Some(3)), "日本語");
        assert_eq!(truncate_chars(text, Some(0)), "");
        assert_eq!(truncate_chars(text, Some(8)), text);
    }

    #[test]
    fn test_truncate_exact_boundary() {
        let text = "a".repeat(500);
        assert_eq!(truncate_chars(&text, Some(500)).len(), 500);
        let longer = "b".repeat(501);
        assert_eq!(truncate_chars(&longer, Some(500)), "b".repeat(500));
    }
}
