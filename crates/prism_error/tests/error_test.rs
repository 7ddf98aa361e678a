//! Tests for error classification and messages.

use prism_error::{
    ConfigError, EmptyInputError, GeminiError, GeminiErrorKind, HttpError, PrismError,
    PrismErrorKind, SpeechError, SpeechErrorKind,
};

#[test]
fn test_config_error_is_configuration() {
    let err = PrismError::from(ConfigError::new("Gemini API key is not configured"));
    assert!(err.is_configuration());
    assert!(!err.is_backend());
    assert!(!err.is_empty_input());
    assert_eq!(err.user_message(), "Gemini API key is not configured");
}

#[test]
fn test_rejected_key_counts_as_configuration() {
    let err = PrismError::from(GeminiError::new(GeminiErrorKind::HttpError {
        status_code: 403,
        message: "API key not valid".to_string(),
    }));
    assert!(err.is_configuration());
    assert!(!err.is_backend());
}

#[test]
fn test_server_failure_is_backend() {
    let err = PrismError::from(GeminiError::new(GeminiErrorKind::HttpError {
        status_code: 503,
        message: "overloaded".to_string(),
    }));
    assert!(err.is_backend());
    assert_eq!(err.user_message(), "HTTP 503 error: overloaded");

    let err = PrismError::from(SpeechError::new(SpeechErrorKind::Request(
        "connection reset".to_string(),
    )));
    assert!(err.is_backend());

    let err = PrismError::from(HttpError::new("connection refused"));
    assert!(err.is_backend());
}

#[test]
fn test_empty_input_message() {
    let err = PrismError::from(EmptyInputError::new("a multi-modal prompt"));
    assert!(err.is_empty_input());
    assert_eq!(err.user_message(), "Please enter a multi-modal prompt.");
}

#[test]
fn test_display_carries_location() {
    let err = PrismError::from(ConfigError::new("boom"));
    let rendered = err.to_string();
    assert!(rendered.starts_with("Prism Error: Configuration Error: boom at line"));
    assert!(rendered.contains("error_test.rs"));
    assert!(matches!(err.kind(), PrismErrorKind::Config(_)));
}

#[test]
fn test_rejected_key_on_bad_request() {
    let err = PrismError::from(GeminiError::new(GeminiErrorKind::HttpError {
        status_code: 400,
        message: "API key not valid. Please pass a valid API key.".to_string(),
    }));
    assert!(err.is_configuration());

    let err = PrismError::from(GeminiError::new(GeminiErrorKind::EmptyResponse(
        "blocked: SAFETY".to_string(),
    )));
    assert!(err.is_backend());
    assert!(!err.is_configuration());
}
