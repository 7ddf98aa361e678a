//! Gemini `generateContent` REST client.

mod client;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    extract_text,
};
