//! Speech synthesis error types.

/// Speech-backend error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SpeechErrorKind {
    /// Nothing to synthesize
    #[display("Text to synthesize is empty")]
    EmptyText,
    /// Language code outside the supported set
    #[display("Unsupported language code: {_0}")]
    UnsupportedLanguage(String),
    /// Request could not be sent or the connection dropped
    #[display("Speech request failed: {_0}")]
    Request(String),
    /// HTTP error with status code and message
    #[display("HTTP {status_code} error: {message}")]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response carried no audio stream
    #[display("No audio stream in response: {_0}")]
    MissingAudio(String),
    /// Audio payload was not valid base64
    #[display("Base64 decode error: {_0}")]
    Base64Decode(String),
}

/// Speech synthesis error with source location tracking.
///
/// # Examples
///
/// ```
/// use prism_error::{SpeechError, SpeechErrorKind};
///
/// let err = SpeechError::new(SpeechErrorKind::UnsupportedLanguage("xx".to_string()));
/// assert!(format!("{}", err).contains("xx"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Speech Error: {} at line {} in {}", kind, line, file)]
pub struct SpeechError {
    /// The kind of error that occurred
    pub kind: SpeechErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SpeechError {
    /// Create a new SpeechError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SpeechErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
