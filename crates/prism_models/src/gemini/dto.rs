//! Data transfer objects for the Gemini REST API.

use derive_builder::Builder;
use derive_getters::Getters;
use prism_core::CompletionRequest;
use prism_error::GeminiErrorKind;
use serde::{Deserialize, Serialize};

/// One text part of a content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Text of the part; non-text parts deserialize with `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A content block: a role and its parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Parts in order
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-part user message.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

/// Sampling settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Upper bound on generated tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Body of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GenerateContentRequest {
    /// Conversation contents
    contents: Vec<Content>,
    /// Sampling settings
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Creates a new builder for GenerateContentRequest.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

impl From<&CompletionRequest> for GenerateContentRequest {
    fn from(req: &CompletionRequest) -> Self {
        let generation_config =
            if req.max_output_tokens().is_some() || req.temperature().is_some() {
                Some(GenerationConfig {
                    max_output_tokens: *req.max_output_tokens(),
                    temperature: *req.temperature(),
                })
            } else {
                None
            };

        Self {
            contents: vec![Content::user_text(req.prompt().clone())],
            generation_config,
        }
    }
}

/// One response candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Feedback about the prompt itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Set when the prompt was blocked
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Response of a `generateContent` call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates, best first
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Prompt feedback
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}

/// Concatenate the text parts of the first candidate.
///
/// # Errors
///
/// `EmptyResponse` when there are no candidates or the candidate carries no
/// text, naming the block or finish reason when one is given.
pub fn extract_text(response: &GenerateContentResponse) -> Result<String, GeminiErrorKind> {
    let Some(candidate) = response.candidates.first() else {
        let reason = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
            .map(|r| format!("prompt blocked ({})", r))
            .unwrap_or_else(|| "no candidates".to_string());
        return Err(GeminiErrorKind::EmptyResponse(reason));
    };

    let text: String = candidate
        .content
        .iter()
        .flat_map(|c| c.parts.iter())
        .filter_map(|p| p.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        let reason = candidate
            .finish_reason
            .clone()
            .map(|r| format!("finish reason {}", r))
            .unwrap_or_else(|| "empty candidate".to_string());
        return Err(GeminiErrorKind::EmptyResponse(reason));
    }

    Ok(text)
}
