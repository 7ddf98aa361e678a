//! Error types for the Prism multimodal generation studio.
//!
//! Every error records the source location where it was created. The
//! crate-level [`PrismError`] wraps a boxed [`PrismErrorKind`] so results stay
//! small on the happy path.
//!
//! The user-facing taxonomy has three categories:
//!
//! - configuration problems ([`PrismError::is_configuration`]),
//! - unavailable backends ([`PrismError::is_backend`]),
//! - blank user input ([`PrismError::is_empty_input`]).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod export;
mod gemini;
mod http;
mod input;
mod speech;

pub use config::ConfigError;
pub use export::ExportError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;
pub use input::EmptyInputError;
pub use speech::{SpeechError, SpeechErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum PrismErrorKind {
    /// HTTP error
    Http(HttpError),
    /// Configuration error
    Config(ConfigError),
    /// Blank user input
    EmptyInput(EmptyInputError),
    /// Gemini text backend error
    Gemini(GeminiError),
    /// Speech synthesis error
    Speech(SpeechError),
    /// Artifact export error
    Export(ExportError),
}

/// Prism error with kind discrimination.
#[derive(Debug, derive_more::Display)]
#[display("Prism Error: {}", _0)]
pub struct PrismError(Box<PrismErrorKind>);

impl PrismError {
    /// Create a new error from a kind.
    pub fn new(kind: PrismErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PrismErrorKind {
        &self.0
    }

    /// Missing or invalid credential, or unusable settings.
    pub fn is_configuration(&self) -> bool {
        match self.kind() {
            PrismErrorKind::Config(_) => true,
            PrismErrorKind::Gemini(e) => e.kind.is_auth_failure(),
            _ => false,
        }
    }

    /// The user submitted a blank prompt.
    pub fn is_empty_input(&self) -> bool {
        matches!(self.kind(), PrismErrorKind::EmptyInput(_))
    }

    /// A network service failed or could not be reached.
    pub fn is_backend(&self) -> bool {
        match self.kind() {
            PrismErrorKind::Gemini(e) => !e.kind.is_auth_failure(),
            PrismErrorKind::Http(_) | PrismErrorKind::Speech(_) => true,
            _ => false,
        }
    }

    /// Message suitable for an inline warning, without source location.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_error::{PrismError, SpeechError, SpeechErrorKind};
    ///
    /// let err = PrismError::from(SpeechError::new(SpeechErrorKind::EmptyText));
    /// assert_eq!(err.user_message(), "Text to synthesize is empty");
    /// ```
    pub fn user_message(&self) -> String {
        match self.kind() {
            PrismErrorKind::Http(e) => e.message.clone(),
            PrismErrorKind::Config(e) => e.message.clone(),
            PrismErrorKind::EmptyInput(e) => format!("Please enter {}.", e.field),
            PrismErrorKind::Gemini(e) => e.kind.to_string(),
            PrismErrorKind::Speech(e) => e.kind.to_string(),
            PrismErrorKind::Export(e) => e.message.clone(),
        }
    }
}

impl std::error::Error for PrismError {}

// Generic From implementation for any type that converts to PrismErrorKind
impl<T> From<T> for PrismError
where
    T: Into<PrismErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Prism operations.
pub type PrismResult<T> = std::result::Result<T, PrismError>;
