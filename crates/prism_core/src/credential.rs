//! API credential handling.

use prism_error::{ConfigError, PrismResult};

/// A user-supplied API key.
///
/// The value never appears in `Debug` output, so it is safe to hold in
/// instrumented structs.
///
/// # Examples
///
/// ```
/// use prism_core::ApiKey;
///
/// let key = ApiKey::new("  secret-value ").unwrap();
/// assert_eq!(key.expose(), "secret-value");
/// assert!(!format!("{:?}", key).contains("secret"));
/// assert!(ApiKey::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, rejecting blank input.
    #[track_caller]
    pub fn new(raw: impl Into<String>) -> PrismResult<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::new("Gemini API key is not configured").into());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wrap an optional key, as read from a flag or environment variable.
    #[track_caller]
    pub fn from_option(raw: Option<String>) -> PrismResult<Self> {
        match raw {
            Some(raw) => Self::new(raw),
            None => Err(ConfigError::new("Gemini API key is not configured").into()),
        }
    }

    /// The raw key, for the request header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey(<redacted>)")
    }
}
