//! Request types.

use crate::{ArtifactKind, LanguageCode, TextModel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One multi-modal submission.
///
/// Fields are private; a request is immutable once built.
///
/// # Examples
///
/// ```
/// use prism_core::{ArtifactKind, GenerationRequest, LanguageCode, TextModel};
///
/// let request = GenerationRequest::builder()
///     .raw_prompt("A story about a robot")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.enabled_kinds(), &ArtifactKind::all());
/// assert_eq!(*request.model(), TextModel::Gemini15Flash);
/// assert_eq!(*request.language(), LanguageCode::En);
/// assert!(request.style_modifiers().is_empty());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// The user's prompt, as typed
    raw_prompt: String,
    /// Which artifacts to produce
    #[builder(default = "ArtifactKind::all()")]
    enabled_kinds: BTreeSet<ArtifactKind>,
    /// Text model for every text-backend call made on behalf of this request
    #[builder(default)]
    model: TextModel,
    /// Speech language
    #[builder(default)]
    language: LanguageCode,
    /// Extra modifiers folded into the image idea
    #[builder(default)]
    style_modifiers: Vec<String>,
}

impl GenerationRequest {
    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Creates a request with default model, language and no modifiers.
    pub fn new(
        raw_prompt: impl Into<String>,
        enabled_kinds: impl IntoIterator<Item = ArtifactKind>,
    ) -> Self {
        Self {
            raw_prompt: raw_prompt.into(),
            enabled_kinds: enabled_kinds.into_iter().collect(),
            model: TextModel::default(),
            language: LanguageCode::default(),
            style_modifiers: Vec::new(),
        }
    }

    /// Whether the given kind was requested.
    pub fn wants(&self, kind: ArtifactKind) -> bool {
        self.enabled_kinds.contains(&kind)
    }
}

/// A single call to the text backend.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Prompt text
    prompt: String,
    /// Model to generate with
    #[builder(default)]
    model: TextModel,
    /// Upper bound on generated tokens
    #[builder(default)]
    max_output_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
}

impl CompletionRequest {
    /// Returns a builder for constructing a CompletionRequest.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }

    /// Prompt and model with backend-default sampling.
    pub fn new(prompt: impl Into<String>, model: TextModel) -> Self {
        Self {
            prompt: prompt.into(),
            model,
            max_output_tokens: None,
            temperature: None,
        }
    }

    /// Prompt and model with explicit sampling settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_core::{CompletionRequest, TextModel};
    ///
    /// let request = CompletionRequest::with_sampling("Hi", TextModel::Gemini15Pro, 800, 0.2);
    /// assert_eq!(*request.max_output_tokens(), Some(800));
    /// assert_eq!(*request.temperature(), Some(0.2));
    /// ```
    pub fn with_sampling(
        prompt: impl Into<String>,
        model: TextModel,
        max_output_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            model,
            max_output_tokens: Some(max_output_tokens),
            temperature: Some(temperature),
        }
    }
}
