//! Image prompt style options.

use serde::{Deserialize, Serialize};

/// Art style folded into an image idea before enhancement.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ArtStyle {
    #[default]
    Photorealistic,
    DigitalArt,
    OilPainting,
    Watercolor,
    AnimeManga,
    Sketch,
    #[serde(rename = "3d-render")]
    #[strum(serialize = "3d-render")]
    Render3d,
    Abstract,
    Vintage,
    Minimalist,
}

impl ArtStyle {
    /// Label as shown in the style picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Photorealistic => "Photorealistic",
            Self::DigitalArt => "Digital Art",
            Self::OilPainting => "Oil Painting",
            Self::Watercolor => "Watercolor",
            Self::AnimeManga => "Anime/Manga",
            Self::Sketch => "Sketch",
            Self::Render3d => "3D Render",
            Self::Abstract => "Abstract",
            Self::Vintage => "Vintage",
            Self::Minimalist => "Minimalist",
        }
    }

    /// Modifier appended to the idea, e.g. `"oil painting style"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_core::ArtStyle;
    ///
    /// assert_eq!(ArtStyle::AnimeManga.modifier(), "anime/manga style");
    /// ```
    pub fn modifier(&self) -> String {
        format!("{} style", self.label().to_lowercase())
    }
}

/// Quality level folded into an image idea before enhancement.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum QualityLevel {
    #[default]
    Standard,
    High,
    UltraHigh,
    Professional,
}

impl QualityLevel {
    /// Label as shown in the quality picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::High => "High Quality",
            Self::UltraHigh => "Ultra High Quality",
            Self::Professional => "Professional",
        }
    }

    /// Quality modifiers, in the order they are appended.
    pub fn modifiers(&self) -> &'static [&'static str] {
        match self {
            Self::Standard => &[],
            Self::High => &["high resolution", "detailed"],
            Self::UltraHigh => &["8K resolution", "ultra detailed", "masterpiece"],
            Self::Professional => &[
                "professional photography",
                "studio lighting",
                "award winning",
            ],
        }
    }
}
