//! Text model allow-list.

use serde::{Deserialize, Serialize};

/// Gemini models the text backend may be asked to use.
///
/// # Examples
///
/// ```
/// use prism_core::TextModel;
/// use std::str::FromStr;
///
/// let model = TextModel::from_str("gemini-1.5-pro").unwrap();
/// assert_eq!(model, TextModel::Gemini15Pro);
/// assert_eq!(TextModel::default().id(), "gemini-1.5-flash");
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
pub enum TextModel {
    /// Fast tier
    #[default]
    #[serde(rename = "gemini-1.5-flash")]
    #[strum(serialize = "gemini-1.5-flash")]
    Gemini15Flash,
    /// Pro tier
    #[serde(rename = "gemini-1.5-pro")]
    #[strum(serialize = "gemini-1.5-pro")]
    Gemini15Pro,
    /// Legacy tier
    #[serde(rename = "gemini-1.0-pro")]
    #[strum(serialize = "gemini-1.0-pro")]
    Gemini10Pro,
}

impl TextModel {
    /// Model identifier sent to the backend.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Gemini15Flash => "gemini-1.5-flash",
            Self::Gemini15Pro => "gemini-1.5-pro",
            Self::Gemini10Pro => "gemini-1.0-pro",
        }
    }

    /// Tier name shown in listings.
    pub fn tier(&self) -> &'static str {
        match self {
            Self::Gemini15Flash => "fast",
            Self::Gemini15Pro => "pro",
            Self::Gemini10Pro => "legacy",
        }
    }
}
