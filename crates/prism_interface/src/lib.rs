//! Backend traits for the Prism multimodal generation studio.
//!
//! The orchestration layer only talks to these traits. Concrete network
//! clients live in `prism_models`; tests supply in-memory doubles.

mod speech;
mod text;

pub use speech::SpeechBackend;
pub use text::TextBackend;
