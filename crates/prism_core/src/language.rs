//! Supported speech languages.

use prism_error::{PrismResult, SpeechError, SpeechErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// ISO 639-1 codes accepted by the speech backend.
///
/// # Examples
///
/// ```
/// use prism_core::LanguageCode;
/// use std::str::FromStr;
///
/// assert_eq!(LanguageCode::from_str("ja").unwrap(), LanguageCode::Ja);
/// assert!(LanguageCode::from_str("xx").is_err());
/// assert_eq!(LanguageCode::default().code(), "en");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Ru,
    Ja,
    Ko,
    Zh,
}

impl LanguageCode {
    /// Parse a user-supplied code, case-insensitively.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` for codes outside the supported set.
    #[track_caller]
    pub fn parse(code: &str) -> PrismResult<Self> {
        let normalized = code.trim().to_ascii_lowercase();
        Self::from_str(&normalized).map_err(|_| {
            SpeechError::new(SpeechErrorKind::UnsupportedLanguage(code.to_string())).into()
        })
    }

    /// Two-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
            Self::Pt => "pt",
            Self::Ru => "ru",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Zh => "zh",
        }
    }

    /// English name of the language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
            Self::It => "Italian",
            Self::Pt => "Portuguese",
            Self::Ru => "Russian",
            Self::Ja => "Japanese",
            Self::Ko => "Korean",
            Self::Zh => "Chinese",
        }
    }
}
