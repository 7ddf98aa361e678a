//! Empty input error type.

/// A user submitted a blank prompt.
///
/// `field` names the form input that was blank so the caller can point the
/// warning at it.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Empty Input: please enter {} at line {} in {}", field, line, file)]
pub struct EmptyInputError {
    /// Human-readable name of the blank field
    pub field: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl EmptyInputError {
    /// Create a new EmptyInputError for the named field.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_error::EmptyInputError;
    ///
    /// let err = EmptyInputError::new("a text prompt");
    /// assert!(format!("{}", err).contains("please enter a text prompt"));
    /// ```
    #[track_caller]
    pub fn new(field: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            field: field.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
