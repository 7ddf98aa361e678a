//! In-memory backends shared by the studio tests.

#![allow(dead_code)]

use async_trait::async_trait;
use prism_core::{CompletionRequest, LanguageCode};
use prism_error::{GeminiError, GeminiErrorKind, PrismResult, SpeechError, SpeechErrorKind};
use prism_interface::{SpeechBackend, TextBackend};
use std::sync::{Arc, Mutex};

/// Bytes returned by the succeeding speech mock.
pub const FAKE_MP3: &[u8] = &[0x49, 0x44, 0x33, 0x04, 0x00];

/// Text backend that replies with a fixed string or always fails.
#[derive(Debug, Clone, Default)]
pub struct MockText {
    reply: Option<String>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockText {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.prompt().clone()).collect()
    }
}

#[async_trait]
impl TextBackend for MockText {
    async fn complete(&self, request: &CompletionRequest) -> PrismResult<String> {
        self.calls.lock().expect("calls lock").push(request.clone());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: 503,
                message: "model overloaded".to_string(),
            })
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-text"
    }
}

/// Speech backend that returns [`FAKE_MP3`] or always fails.
#[derive(Debug, Clone)]
pub struct MockSpeech {
    succeed: bool,
    calls: Arc<Mutex<Vec<(String, LanguageCode)>>>,
}

impl MockSpeech {
    pub fn succeeding() -> Self {
        Self {
            succeed: true,
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            succeed: false,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<(String, LanguageCode)> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn spoken(&self) -> Vec<String> {
        self.calls().into_iter().map(|(text, _)| text).collect()
    }
}

#[async_trait]
impl SpeechBackend for MockSpeech {
    async fn synthesize(&self, text: &str, language: LanguageCode) -> PrismResult<Vec<u8>> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((text.to_string(), language));
        if self.succeed {
            Ok(FAKE_MP3.to_vec())
        } else {
            Err(SpeechError::new(SpeechErrorKind::Request("service unavailable".to_string())).into())
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-speech"
    }
}
