//! Writing downloads to disk.

use chrono::{DateTime, Utc};
use prism_core::{ArtifactDownload, ArtifactKind, ResultBundle};
use prism_error::{ExportError, PrismResult};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Suffixes tried before giving up on a taken file name.
const MAX_NAME_ATTEMPTS: u32 = 99;

/// `name` for the first attempt, then `stem_1.ext`, `stem_2.ext` and so on.
fn numbered_file_name(name: &str, attempt: u32) -> String {
    if attempt == 0 {
        return name.to_string();
    }
    match name.rsplit_once('.') {
        Some((stem, ext)) => format!("{}_{}.{}", stem, attempt, ext),
        None => format!("{}_{}", name, attempt),
    }
}

/// Saves artifact downloads into a directory.
///
/// Each file is staged in a temporary file next to its destination and
/// renamed into place once fully written. Existing files are never
/// replaced; a taken name gets a numeric suffix. If anything fails first, the
/// temporary file is removed when it drops, so no partial download is left
/// behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactExporter;

impl ArtifactExporter {
    /// Write one download into `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// An export error when the directory or file cannot be written.
    #[instrument(skip(download), fields(file_name = %download.file_name(), bytes = download.data().len()))]
    pub fn export(download: &ArtifactDownload, dir: &Path) -> PrismResult<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|e| {
            ExportError::new(format!("Cannot create {}: {}", dir.display(), e))
        })?;

        let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
            ExportError::new(format!("Cannot stage file in {}: {}", dir.display(), e))
        })?;
        staged
            .write_all(download.data())
            .and_then(|_| staged.flush())
            .map_err(|e| ExportError::new(format!("Cannot write {}: {}", download.file_name(), e)))?;

        let mut attempt = 0;
        loop {
            let target = dir.join(numbered_file_name(download.file_name(), attempt));
            match staged.persist_noclobber(&target) {
                Ok(_) => {
                    debug!(path = %target.display(), "Artifact exported");
                    return Ok(target);
                }
                Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists
                    && attempt < MAX_NAME_ATTEMPTS =>
                {
                    debug!(path = %target.display(), "File name taken");
                    staged = e.file;
                    attempt += 1;
                }
                Err(e) => {
                    return Err(ExportError::new(format!(
                        "Cannot save {}: {}",
                        target.display(),
                        e.error
                    ))
                    .into());
                }
            }
        }
    }

    /// Write every successful artifact of `bundle`, in bundle order.
    ///
    /// Failed artifacts are skipped. A write failure for one artifact is
    /// reported in its slot and does not stop the others.
    pub fn export_bundle(
        bundle: &ResultBundle,
        dir: &Path,
        at: DateTime<Utc>,
    ) -> Vec<(ArtifactKind, PrismResult<PathBuf>)> {
        bundle
            .iter()
            .filter_map(|result| ArtifactDownload::from_result(result, at).map(|d| (result.kind(), d)))
            .map(|(kind, download)| {
                let written = Self::export(&download, dir);
                if let Err(e) = &written {
                    warn!(%kind, error = %e, "Export failed");
                }
                (kind, written)
            })
            .collect()
    }
}
