//! Downloadable renderings of artifacts.

use crate::{ArtifactKind, ArtifactPayload, ArtifactResult};
use chrono::{DateTime, Utc};

/// Timestamp layout used in exported file names.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File name for an artifact produced at `at`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use prism_core::{ArtifactKind, export_file_name};
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
/// assert_eq!(export_file_name(ArtifactKind::Audio, at), "audio_20240309_070501.mp3");
/// ```
pub fn export_file_name(kind: ArtifactKind, at: DateTime<Utc>) -> String {
    format!(
        "{}_{}.{}",
        kind.slug(),
        at.format(EXPORT_TIMESTAMP_FORMAT),
        kind.extension()
    )
}

/// An artifact ready to be offered as a file.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ArtifactDownload {
    /// Suggested file name
    file_name: String,
    /// MIME type
    #[getter(skip)]
    mime_type: &'static str,
    /// File contents
    data: Vec<u8>,
}

impl ArtifactDownload {
    /// Download for a payload produced at `at`.
    pub fn from_payload(payload: &ArtifactPayload, at: DateTime<Utc>) -> Self {
        let kind = payload.kind();
        Self {
            file_name: export_file_name(kind, at),
            mime_type: kind.mime_type(),
            data: payload.as_bytes().to_vec(),
        }
    }

    /// Download for a result, or `None` if it failed.
    pub fn from_result(result: &ArtifactResult, at: DateTime<Utc>) -> Option<Self> {
        result.payload().map(|p| Self::from_payload(p, at))
    }

    /// MIME type
    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }
}
