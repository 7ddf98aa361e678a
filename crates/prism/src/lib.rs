//! Prism: one prompt, several artifacts.
//!
//! Facade over the workspace crates plus the command-line front end. A
//! prompt is sent to a Gemini text model, expanded into a prompt for an
//! external image generator, and spoken through Google Translate's speech
//! endpoint. Each artifact succeeds or fails on its own.
//!
//! # Crates
//!
//! - [`prism_error`]: location-tracked errors
//! - [`prism_core`]: requests, results and downloads
//! - [`prism_interface`]: backend traits
//! - [`prism_models`]: Gemini and speech clients
//! - [`prism_studio`]: composition, generators and orchestration

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;

pub use prism_core::{
    ApiKey, ArtStyle, ArtifactDownload, ArtifactKind, ArtifactPayload, ArtifactResult,
    CompletionRequest, GenerationRequest, GenerationRequestBuilder, LanguageCode, LogFormat,
    QualityLevel, ResultBundle, TextModel, export_file_name, init_tracing,
};
pub use prism_error::{PrismError, PrismErrorKind, PrismResult};
pub use prism_interface::{SpeechBackend, TextBackend};
pub use prism_models::{GeminiClient, GoogleTtsClient, HttpOptions};
pub use prism_studio::{
    ArtifactExporter, AudioArtifactGenerator, AudioTabOutcome, ImagePromptArtifactGenerator,
    MultiModalOrchestrator, PromptComposer, SamplingConfig, Studio, StudioConfig,
    TextArtifactGenerator,
};
