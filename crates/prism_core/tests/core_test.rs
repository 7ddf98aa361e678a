//! Tests for the core data model.

use chrono::{TimeZone, Utc};
use prism_core::{
    ArtStyle, ArtifactDownload, ArtifactKind, ArtifactPayload, ArtifactResult, GenerationRequest,
    LanguageCode, QualityLevel, ResultBundle, TextModel, export_file_name,
};
use std::collections::BTreeSet;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn test_bundle_iterates_in_generation_order() {
    let mut bundle = ResultBundle::new();
    bundle.insert(ArtifactResult::failed(ArtifactKind::Audio, "no speech"));
    bundle.insert(ArtifactResult::succeeded(ArtifactPayload::Text(
        "hello".to_string(),
    )));
    bundle.insert(ArtifactResult::succeeded(ArtifactPayload::ImagePrompt(
        "a robot".to_string(),
    )));

    let kinds: Vec<_> = bundle.kinds().collect();
    assert_eq!(
        kinds,
        vec![
            ArtifactKind::Text,
            ArtifactKind::ImagePrompt,
            ArtifactKind::Audio
        ]
    );
    assert_eq!(bundle.len(), 3);
    assert!(bundle.has_successes());
    assert!(!bundle.is_complete_success());
    assert_eq!(bundle.failures().count(), 1);
}

#[test]
fn test_empty_bundle() {
    let bundle = ResultBundle::new();
    assert!(bundle.is_empty());
    assert!(!bundle.has_successes());
    assert!(bundle.is_complete_success());
    assert!(bundle.get(ArtifactKind::Text).is_none());
}

#[test]
fn test_failed_result_keeps_kind() {
    let result = ArtifactResult::failed(ArtifactKind::Text, "quota exceeded");
    assert_eq!(result.kind(), ArtifactKind::Text);
    assert!(result.payload().is_none());
    assert!(result.text().is_none());
    assert_eq!(result.outcome(), Err("quota exceeded"));
}

#[test]
fn test_export_file_name_pattern() {
    let at = Utc
        .with_ymd_and_hms(2025, 12, 31, 23, 59, 58)
        .single()
        .expect("valid instant");

    assert_eq!(
        export_file_name(ArtifactKind::Text, at),
        "text_20251231_235958.txt"
    );
    assert_eq!(
        export_file_name(ArtifactKind::ImagePrompt, at),
        "image_prompt_20251231_235958.txt"
    );
    assert_eq!(
        export_file_name(ArtifactKind::Audio, at),
        "audio_20251231_235958.mp3"
    );
}

#[test]
fn test_download_from_results() {
    let at = Utc
        .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
        .single()
        .expect("valid instant");

    let audio = ArtifactResult::succeeded(ArtifactPayload::Audio(vec![0xFF, 0xFB, 0x90]));
    let download = ArtifactDownload::from_result(&audio, at).expect("audio download");
    assert_eq!(download.file_name(), "audio_20240102_030405.mp3");
    assert_eq!(download.mime_type(), "audio/mpeg");
    assert_eq!(download.data(), &vec![0xFF, 0xFB, 0x90]);

    let text = ArtifactResult::succeeded(ArtifactPayload::Text("hi".to_string()));
    let download = ArtifactDownload::from_result(&text, at).expect("text download");
    assert_eq!(download.mime_type(), "text/plain");
    assert_eq!(download.data(), &b"hi".to_vec());

    let failed = ArtifactResult::failed(ArtifactKind::Text, "boom");
    assert!(ArtifactDownload::from_result(&failed, at).is_none());
}

#[test]
fn test_request_builder_overrides() {
    let request = GenerationRequest::builder()
        .raw_prompt("A lighthouse")
        .enabled_kinds(
            [ArtifactKind::Text, ArtifactKind::Audio]
                .into_iter()
                .collect::<BTreeSet<_>>(),
        )
        .model(TextModel::Gemini15Pro)
        .language(LanguageCode::Fr)
        .style_modifiers(vec!["watercolor style".to_string()])
        .build()
        .expect("request builds");

    assert!(request.wants(ArtifactKind::Text));
    assert!(!request.wants(ArtifactKind::ImagePrompt));
    assert_eq!(request.model().id(), "gemini-1.5-pro");
    assert_eq!(request.language().code(), "fr");
    assert_eq!(request.style_modifiers(), &vec!["watercolor style".to_string()]);
}

#[test]
fn test_model_allow_list() {
    let ids: Vec<_> = TextModel::iter().map(|m| m.id()).collect();
    assert_eq!(ids, vec!["gemini-1.5-flash", "gemini-1.5-pro", "gemini-1.0-pro"]);
    assert!(TextModel::from_str("gpt-4").is_err());
    for model in TextModel::iter() {
        assert_eq!(model.to_string(), model.id());
    }
}

#[test]
fn test_supported_languages() {
    let codes: Vec<_> = LanguageCode::iter().map(|l| l.code()).collect();
    assert_eq!(
        codes,
        vec!["en", "es", "fr", "de", "it", "pt", "ru", "ja", "ko", "zh"]
    );
    assert_eq!(LanguageCode::Zh.display_name(), "Chinese");
}

#[test]
fn test_style_and_quality_modifiers() {
    assert_eq!(ArtStyle::Render3d.modifier(), "3d render style");
    assert_eq!(ArtStyle::from_str("oil-painting").ok(), Some(ArtStyle::OilPainting));
    assert!(QualityLevel::Standard.modifiers().is_empty());
    assert_eq!(
        QualityLevel::UltraHigh.modifiers(),
        &["8K resolution", "ultra detailed", "masterpiece"]
    );
}

#[test]
fn test_language_serde_roundtrip_uses_codes() {
    let json = serde_json::to_string(&LanguageCode::Pt).expect("serialize");
    assert_eq!(json, "\"pt\"");
    let model: TextModel = serde_json::from_str("\"gemini-1.0-pro\"").expect("deserialize");
    assert_eq!(model, TextModel::Gemini10Pro);
}
