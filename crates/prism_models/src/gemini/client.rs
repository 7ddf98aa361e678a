//! Gemini text backend.

use super::dto::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse, extract_text};
use crate::HttpOptions;
use async_trait::async_trait;
use prism_core::{ApiKey, CompletionRequest, TextModel};
use prism_error::{GeminiError, GeminiErrorKind, PrismResult};
use prism_interface::TextBackend;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Client for the Gemini `generateContent` endpoint.
///
/// The API key travels in the `x-goog-api-key` header and never appears in
/// URLs or logs.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: ApiKey,
    options: HttpOptions,
}

impl GeminiClient {
    /// Production endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    /// Creates a client against the production endpoint with a 60 second timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: ApiKey) -> PrismResult<Self> {
        Self::with_options(
            api_key,
            HttpOptions::new(Self::DEFAULT_BASE_URL, Duration::from_secs(60)),
        )
    }

    /// Creates a client with explicit connection options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    #[instrument(skip(api_key), fields(base_url = %options.base_url()))]
    pub fn with_options(api_key: ApiKey, options: HttpOptions) -> PrismResult<Self> {
        let client = options.build_client().map_err(|e| {
            GeminiError::new(GeminiErrorKind::ClientCreation(e.user_message()))
        })?;

        debug!("Created Gemini client");

        Ok(Self {
            client,
            api_key,
            options,
        })
    }

    fn endpoint(&self, model: TextModel) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.options.base_url(),
            model.id()
        )
    }
}

#[async_trait]
impl TextBackend for GeminiClient {
    #[instrument(
        skip(self, request),
        fields(model = %request.model(), prompt_chars = request.prompt().chars().count())
    )]
    async fn complete(&self, request: &CompletionRequest) -> PrismResult<String> {
        let body = GenerateContentRequest::from(request);

        let response = self
            .client
            .post(self.endpoint(*request.model()))
            .header("x-goog-api-key", self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Gemini request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&error_text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(error_text);
            error!(status = %status, error = %message, "Gemini API error");

            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            GeminiError::new(GeminiErrorKind::ResponseParsing(e.to_string()))
        })?;

        let text = extract_text(&parsed).map_err(GeminiError::new)?;
        debug!(
            candidates = parsed.candidates.len(),
            text_chars = text.chars().count(),
            "Received Gemini response"
        );
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
