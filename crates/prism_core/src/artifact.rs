//! Generated artifacts and per-artifact outcomes.

use crate::ArtifactKind;

/// The content of a successfully generated artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactPayload {
    /// Generated prose
    Text(String),
    /// Enhanced image-generator prompt
    ImagePrompt(String),
    /// Encoded MP3 audio
    Audio(Vec<u8>),
}

impl ArtifactPayload {
    /// The kind this payload belongs to.
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::Text(_) => ArtifactKind::Text,
            Self::ImagePrompt(_) => ArtifactKind::ImagePrompt,
            Self::Audio(_) => ArtifactKind::Audio,
        }
    }

    /// Text content, for the two textual kinds.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::ImagePrompt(s) => Some(s),
            Self::Audio(_) => None,
        }
    }

    /// Raw bytes as they would be written to a download.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(s) | Self::ImagePrompt(s) => s.as_bytes(),
            Self::Audio(data) => data,
        }
    }
}

/// Outcome of one attempted artifact.
///
/// A failed artifact keeps its kind and a human-readable message so the
/// display layer can render a warning in the artifact's place.
///
/// # Examples
///
/// ```
/// use prism_core::{ArtifactKind, ArtifactPayload, ArtifactResult};
///
/// let ok = ArtifactResult::succeeded(ArtifactPayload::Text("Once upon a time...".into()));
/// assert!(ok.is_success());
/// assert_eq!(ok.text(), Some("Once upon a time..."));
///
/// let failed = ArtifactResult::failed(ArtifactKind::Audio, "speech backend unavailable");
/// assert!(!failed.is_success());
/// assert_eq!(failed.error(), Some("speech backend unavailable"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactResult {
    kind: ArtifactKind,
    outcome: Result<ArtifactPayload, String>,
}

impl ArtifactResult {
    /// A successful artifact.
    pub fn succeeded(payload: ArtifactPayload) -> Self {
        Self {
            kind: payload.kind(),
            outcome: Ok(payload),
        }
    }

    /// An attempted artifact that failed.
    pub fn failed(kind: ArtifactKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            outcome: Err(message.into()),
        }
    }

    /// The artifact kind.
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Whether generation succeeded.
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The payload, if generation succeeded.
    pub fn payload(&self) -> Option<&ArtifactPayload> {
        self.outcome.as_ref().ok()
    }

    /// The failure message, if generation failed.
    pub fn error(&self) -> Option<&str> {
        self.outcome.as_ref().err().map(String::as_str)
    }

    /// Text content of a successful textual artifact.
    pub fn text(&self) -> Option<&str> {
        self.payload().and_then(ArtifactPayload::as_text)
    }

    /// Audio bytes of a successful audio artifact.
    pub fn audio(&self) -> Option<&[u8]> {
        match self.payload() {
            Some(ArtifactPayload::Audio(data)) => Some(data),
            _ => None,
        }
    }

    /// Borrow the outcome.
    pub fn outcome(&self) -> Result<&ArtifactPayload, &str> {
        self.outcome.as_ref().map_err(String::as_str)
    }
}
