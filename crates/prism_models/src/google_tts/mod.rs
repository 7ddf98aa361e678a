//! Google Translate text-to-speech client.

mod chunker;
mod client;
mod rpc;

pub use chunker::{MAX_CHUNK_CHARS, split_for_speech};
pub use client::{GoogleTtsClient, wire_language};
pub use rpc::{TTS_RPC_ID, extract_audio, package_rpc};
