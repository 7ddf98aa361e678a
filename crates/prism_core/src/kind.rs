//! Artifact kinds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One kind of generated output.
///
/// The declaration order is the generation order, so ordered collections of
/// kinds iterate Text, then ImagePrompt, then Audio.
///
/// # Examples
///
/// ```
/// use prism_core::ArtifactKind;
///
/// assert!(ArtifactKind::Text < ArtifactKind::ImagePrompt);
/// assert_eq!(ArtifactKind::ImagePrompt.slug(), "image_prompt");
/// assert_eq!(ArtifactKind::Audio.mime_type(), "audio/mpeg");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ArtifactKind {
    /// Generated prose
    Text,
    /// Enhanced prompt for an external image generator
    ImagePrompt,
    /// Synthesized speech
    Audio,
}

impl ArtifactKind {
    /// Every kind, in generation order.
    pub fn all() -> BTreeSet<ArtifactKind> {
        [Self::Text, Self::ImagePrompt, Self::Audio].into_iter().collect()
    }

    /// Stem used in exported file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::ImagePrompt => "image_prompt",
            Self::Audio => "audio",
        }
    }

    /// File extension for downloads of this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text | Self::ImagePrompt => "txt",
            Self::Audio => "mp3",
        }
    }

    /// MIME type for downloads of this kind.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Text | Self::ImagePrompt => "text/plain",
            Self::Audio => "audio/mpeg",
        }
    }

    /// Heading shown above the artifact.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Generated Text",
            Self::ImagePrompt => "Generated Image Prompt",
            Self::Audio => "Generated Audio",
        }
    }
}
