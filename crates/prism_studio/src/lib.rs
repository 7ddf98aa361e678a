//! Prompt composition and multi-artifact orchestration.
//!
//! [`MultiModalOrchestrator`] turns one [`GenerationRequest`] into a
//! [`ResultBundle`] of up to three artifacts, tolerating failures per
//! artifact. [`Studio`] wraps it in a session with one operation per tab.
//!
//! # Example
//!
//! ```no_run
//! use prism_core::{ArtifactKind, GenerationRequest};
//! use prism_studio::{Studio, StudioConfig};
//!
//! # async fn example() -> prism_error::PrismResult<()> {
//! let config = StudioConfig::load(None)?;
//! let mut studio = Studio::connect(&config, std::env::var("GEMINI_API_KEY").ok())?;
//!
//! let request = GenerationRequest::new(
//!     "A story about a robot",
//!     [ArtifactKind::Text, ArtifactKind::Audio],
//! );
//! let bundle = studio.generate_all(&request).await?;
//! for result in bundle.iter() {
//!     println!("{}: {}", result.kind(), result.is_success());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`GenerationRequest`]: prism_core::GenerationRequest
//! [`ResultBundle`]: prism_core::ResultBundle

#![warn(missing_docs)]

mod composer;
mod config;
mod export;
mod generators;
mod links;
mod orchestrator;
mod studio;

pub use composer::PromptComposer;
pub use config::{DEFAULT_CONFIG_FILE, ENV_PREFIX, StudioConfig};
pub use export::ArtifactExporter;
pub use generators::{
    AudioArtifactGenerator, ImagePromptArtifactGenerator, SamplingConfig, TextArtifactGenerator,
};
pub use links::{GeneratorTier, IMAGE_GENERATORS, ImageGeneratorLink, image_generators};
pub use orchestrator::{DEFAULT_AUDIO_CHAR_LIMIT, MultiModalOrchestrator, truncate_chars};
pub use studio::{AudioTabOutcome, Studio};
