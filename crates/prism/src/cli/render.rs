//! Terminal rendering of generation results.

use prism_core::{ArtifactKind, ArtifactPayload, ArtifactResult, ResultBundle};
use prism_studio::AudioTabOutcome;
use std::io::{self, Write};

/// Write one artifact section: a heading, then the content or a warning.
pub fn render_result(out: &mut impl Write, result: &ArtifactResult) -> io::Result<()> {
    writeln!(out, "== {} ==", result.kind().label())?;
    match result.outcome() {
        Ok(ArtifactPayload::Text(text)) | Ok(ArtifactPayload::ImagePrompt(text)) => {
            writeln!(out, "{}", text)?;
        }
        Ok(ArtifactPayload::Audio(bytes)) => {
            writeln!(out, "[audio: {} bytes, {}]", bytes.len(), ArtifactKind::Audio.mime_type())?;
        }
        Err(message) => {
            writeln!(out, "warning: generation failed: {}", message)?;
        }
    }
    writeln!(out)
}

/// Write every attempted artifact in generation order.
///
/// A failed artifact renders a warning in its own section; the others are
/// still shown.
pub fn render_bundle(out: &mut impl Write, bundle: &ResultBundle) -> io::Result<()> {
    if bundle.is_empty() {
        return writeln!(out, "No artifacts were requested.");
    }
    for result in bundle.iter() {
        render_result(out, result)?;
    }
    let failed = bundle.failures().count();
    if failed > 0 {
        writeln!(out, "{} of {} artifacts failed.", failed, bundle.len())?;
    }
    Ok(())
}

/// Write the audio tab result, including the enhanced text when present.
pub fn render_audio_outcome(out: &mut impl Write, outcome: &AudioTabOutcome) -> io::Result<()> {
    if let Some(enhanced) = outcome.enhanced_text() {
        writeln!(out, "== Enhanced Text ==")?;
        writeln!(out, "{}", enhanced)?;
        writeln!(out)?;
    }
    render_result(out, outcome.audio())
}
