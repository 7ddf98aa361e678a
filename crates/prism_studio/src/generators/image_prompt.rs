//! Image prompt artifact generation.

use super::TextArtifactGenerator;
use crate::PromptComposer;
use prism_core::TextModel;
use prism_interface::TextBackend;
use tracing::{debug, instrument, warn};

/// Expands an idea into a prompt for an external image generator.
///
/// Borrows a [`TextArtifactGenerator`]; when the text backend fails, the
/// deterministic [`PromptComposer::fallback_image_prompt`] is returned
/// instead, so this never fails.
#[derive(Debug)]
pub struct ImagePromptArtifactGenerator<'a, T> {
    text: &'a TextArtifactGenerator<T>,
    model: TextModel,
}

impl<'a, T: TextBackend> ImagePromptArtifactGenerator<'a, T> {
    /// Generator using the default text model.
    pub fn new(text: &'a TextArtifactGenerator<T>) -> Self {
        Self {
            text,
            model: TextModel::default(),
        }
    }

    /// Use `model` for the enhancement call.
    pub fn with_model(mut self, model: TextModel) -> Self {
        self.model = model;
        self
    }

    /// Enhanced prompt for `user_idea`, or the fallback template.
    #[instrument(skip(self, user_idea), fields(model = %self.model))]
    pub async fn generate(&self, user_idea: &str) -> String {
        let request = PromptComposer::compose_image_prompt_request(user_idea);

        match self.text.generate(&request, self.model).await {
            Ok(enhanced) if !enhanced.trim().is_empty() => {
                debug!("Image prompt enhanced");
                enhanced
            }
            Ok(_) => {
                warn!("Enhancement returned blank text, using fallback template");
                PromptComposer::fallback_image_prompt(user_idea)
            }
            Err(e) => {
                warn!(error = %e, "Enhancement failed, using fallback template");
                PromptComposer::fallback_image_prompt(user_idea)
            }
        }
    }
}
