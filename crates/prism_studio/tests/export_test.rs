//! Tests for writing downloads to disk.

use chrono::{TimeZone, Utc};
use prism_core::{ArtifactDownload, ArtifactKind, ArtifactPayload, ArtifactResult, ResultBundle};
use prism_studio::ArtifactExporter;

#[test]
fn test_export_writes_named_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let at = Utc
        .with_ymd_and_hms(2024, 5, 6, 7, 8, 9)
        .single()
        .expect("valid instant");
    let download =
        ArtifactDownload::from_payload(&ArtifactPayload::Text("hello".to_string()), at);

    let path = ArtifactExporter::export(&download, dir.path()).expect("exported");

    assert_eq!(path, dir.path().join("text_20240506_070809.txt"));
    assert_eq!(std::fs::read(&path).expect("readable"), b"hello");
    // Only the final file remains; the staging file was renamed into place.
    assert_eq!(std::fs::read_dir(dir.path()).expect("listable").count(), 1);
}

#[test]
fn test_export_creates_missing_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let nested = dir.path().join("downloads").join("prism");
    let download = ArtifactDownload::from_payload(
        &ArtifactPayload::Audio(vec![1, 2, 3]),
        Utc::now(),
    );

    let path = ArtifactExporter::export(&download, &nested).expect("exported");

    assert!(path.starts_with(&nested));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("mp3"));
}

#[test]
fn test_export_bundle_skips_failures() {
    let dir = tempfile::tempdir().expect("temp dir");
    let at = Utc
        .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .expect("valid instant");

    let mut bundle = ResultBundle::new();
    bundle.insert(ArtifactResult::failed(ArtifactKind::Text, "quota"));
    bundle.insert(ArtifactResult::succeeded(ArtifactPayload::ImagePrompt(
        "a prompt".to_string(),
    )));
    bundle.insert(ArtifactResult::succeeded(ArtifactPayload::Audio(vec![0xFF])));

    let written = ArtifactExporter::export_bundle(&bundle, dir.path(), at);

    let kinds: Vec<_> = written.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, vec![ArtifactKind::ImagePrompt, ArtifactKind::Audio]);
    assert!(written.iter().all(|(_, result)| result.is_ok()));
    assert!(dir.path().join("image_prompt_20250101_000000.txt").exists());
    assert!(dir.path().join("audio_20250101_000000.mp3").exists());
}

#[test]
fn test_export_into_file_path_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").expect("write blocker");
    let download =
        ArtifactDownload::from_payload(&ArtifactPayload::Text("hi".to_string()), Utc::now());

    let err = ArtifactExporter::export(&download, &blocker).expect_err("cannot export");
    assert!(err.user_message().starts_with("Cannot create"));
}

#[test]
fn test_export_same_name_keeps_both_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let at = Utc
        .with_ymd_and_hms(2024, 5, 6, 7, 8, 9)
        .single()
        .expect("valid instant");
    let first = ArtifactDownload::from_payload(&ArtifactPayload::Text("first".to_string()), at);
    let second = ArtifactDownload::from_payload(&ArtifactPayload::Text("second".to_string()), at);

    let first_path = ArtifactExporter::export(&first, dir.path()).expect("first exported");
    let second_path = ArtifactExporter::export(&second, dir.path()).expect("second exported");

    assert_eq!(first_path, dir.path().join("text_20240506_070809.txt"));
    assert_eq!(second_path, dir.path().join("text_20240506_070809_1.txt"));
    assert_eq!(std::fs::read(&first_path).expect("readable"), b"first");
    assert_eq!(std::fs::read(&second_path).expect("readable"), b"second");
    assert_eq!(std::fs::read_dir(dir.path()).expect("listable").count(), 2);
}
