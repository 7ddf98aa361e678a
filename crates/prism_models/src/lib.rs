//! Text and speech backend clients for Prism.
//!
//! - [`GeminiClient`] calls the Gemini `generateContent` REST endpoint.
//! - [`GoogleTtsClient`] calls the Google Translate speech endpoint and
//!   returns MP3 audio.
//!
//! Both implement the traits from `prism_interface` and make a single
//! attempt per call.

mod gemini;
mod google_tts;
mod options;

pub use gemini::{
    Content, GeminiClient, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part, extract_text,
};
pub use google_tts::{
    GoogleTtsClient, MAX_CHUNK_CHARS, TTS_RPC_ID, extract_audio, package_rpc, split_for_speech,
    wire_language,
};
pub use options::HttpOptions;
