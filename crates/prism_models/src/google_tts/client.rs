//! Google Translate speech backend.

use super::chunker::{MAX_CHUNK_CHARS, split_for_speech};
use super::rpc::{TTS_RPC_ID, extract_audio, package_rpc};
use crate::HttpOptions;
use async_trait::async_trait;
use prism_core::LanguageCode;
use prism_error::{PrismResult, SpeechError, SpeechErrorKind};
use prism_interface::SpeechBackend;
use std::time::Duration;
use tracing::{debug, error, instrument};

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0 Safari/537.36";

/// Language tag the endpoint expects for a supported language.
///
/// # Examples
///
/// ```
/// use prism_core::LanguageCode;
/// use prism_models::wire_language;
///
/// assert_eq!(wire_language(LanguageCode::Zh), "zh-CN");
/// assert_eq!(wire_language(LanguageCode::De), "de");
/// ```
pub fn wire_language(language: LanguageCode) -> &'static str {
    match language {
        LanguageCode::Zh => "zh-CN",
        other => other.code(),
    }
}

/// Speech client for the translate `batchexecute` endpoint.
///
/// Long text is split into pieces of at most [`MAX_CHUNK_CHARS`]
/// characters; the MP3 streams for each piece are concatenated.
#[derive(Debug, Clone)]
pub struct GoogleTtsClient {
    client: reqwest::Client,
    options: HttpOptions,
}

impl GoogleTtsClient {
    /// Production endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://translate.google.com";

    /// Creates a client against the production endpoint with a 60 second timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> PrismResult<Self> {
        Self::with_options(HttpOptions::new(
            Self::DEFAULT_BASE_URL,
            Duration::from_secs(60),
        ))
    }

    /// Creates a client with explicit connection options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    #[instrument(fields(base_url = %options.base_url()))]
    pub fn with_options(options: HttpOptions) -> PrismResult<Self> {
        let client = options.build_client()?;
        debug!("Created speech client");
        Ok(Self { client, options })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/_/TranslateWebserverUi/data/batchexecute",
            self.options.base_url()
        )
    }

    #[instrument(skip(self, piece), fields(piece_chars = piece.chars().count()))]
    async fn synthesize_piece(&self, piece: &str, lang: &str) -> PrismResult<Vec<u8>> {
        let rpc = package_rpc(piece, lang);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("rpcids", TTS_RPC_ID)])
            .header("Referer", format!("{}/", self.options.base_url()))
            .header("User-Agent", USER_AGENT)
            .form(&[("f.req", rpc.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Speech request failed");
                SpeechError::new(SpeechErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, "Speech API error");
            return Err(SpeechError::new(SpeechErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| SpeechError::new(SpeechErrorKind::Request(e.to_string())))?;

        let audio = extract_audio(&body).map_err(SpeechError::new)?;
        debug!(bytes = audio.len(), "Received audio piece");
        Ok(audio)
    }
}

#[async_trait]
impl SpeechBackend for GoogleTtsClient {
    #[instrument(skip(self, text), fields(language = %language, text_chars = text.chars().count()))]
    async fn synthesize(&self, text: &str, language: LanguageCode) -> PrismResult<Vec<u8>> {
        let pieces = split_for_speech(text, MAX_CHUNK_CHARS);
        if pieces.is_empty() {
            return Err(SpeechError::new(SpeechErrorKind::EmptyText).into());
        }

        let lang = wire_language(language);
        debug!(pieces = pieces.len(), lang, "Synthesizing speech");

        let mut audio = Vec::new();
        for piece in &pieces {
            audio.extend(self.synthesize_piece(piece, lang).await?);
        }

        debug!(bytes = audio.len(), "Speech synthesized");
        Ok(audio)
    }

    fn provider_name(&self) -> &'static str {
        "google-translate-tts"
    }
}
