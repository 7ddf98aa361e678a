//! Gemini text backend error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
    /// Failed to build the underlying HTTP client
    ClientCreation(String),
    /// Request could not be sent or the connection dropped
    ApiRequest(String),
    /// HTTP error with status code and message
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body was not the expected JSON shape
    ResponseParsing(String),
    /// Response carried no text (no candidates, or a blocked prompt)
    EmptyResponse(String),
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create Gemini client: {}", msg)
            }
            GeminiErrorKind::ApiRequest(msg) => write!(f, "Gemini API request failed: {}", msg),
            GeminiErrorKind::HttpError {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            GeminiErrorKind::ResponseParsing(msg) => {
                write!(f, "Failed to parse Gemini response: {}", msg)
            }
            GeminiErrorKind::EmptyResponse(reason) => {
                write!(f, "Gemini returned no text: {}", reason)
            }
        }
    }
}

impl GeminiErrorKind {
    /// Whether the failure means the key itself was rejected.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            GeminiErrorKind::HttpError {
                status_code,
                message,
            } => {
                matches!(*status_code, 401 | 403)
                    || (*status_code == 400 && message.contains("API key not valid"))
            }
            _ => false,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use prism_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::EmptyResponse("blocked: SAFETY".to_string()));
/// assert!(format!("{}", err).contains("no text"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
