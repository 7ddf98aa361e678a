//! Core data types for the Prism multimodal generation studio.
//!
//! This crate provides the request, result and download types shared by the
//! backends, the orchestration layer and the command-line front end.

mod artifact;
mod bundle;
mod credential;
mod download;
mod kind;
mod language;
mod model;
pub mod observability;
mod request;
mod style;

pub use artifact::{ArtifactPayload, ArtifactResult};
pub use bundle::ResultBundle;
pub use credential::ApiKey;
pub use download::{ArtifactDownload, EXPORT_TIMESTAMP_FORMAT, export_file_name};
pub use kind::ArtifactKind;
pub use language::LanguageCode;
pub use model::TextModel;
pub use observability::{LogFormat, init_tracing};
pub use request::{
    CompletionRequest, CompletionRequestBuilder, GenerationRequest, GenerationRequestBuilder,
};
pub use style::{ArtStyle, QualityLevel};
