//! Single-purpose artifact generators.
//!
//! Each generator wraps one backend call. Text and audio return a
//! [`PrismResult`](prism_error::PrismResult) the caller must handle; the
//! image-prompt generator is total and falls back to a template.

mod audio;
mod image_prompt;
mod text;

pub use audio::AudioArtifactGenerator;
pub use image_prompt::ImagePromptArtifactGenerator;
pub use text::{SamplingConfig, TextArtifactGenerator};
