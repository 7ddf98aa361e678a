//! Tests for argument parsing and result rendering.

use clap::Parser;
use prism::cli::{Cli, Commands, render_bundle, render_result};
use prism_core::{
    ArtStyle, ArtifactKind, ArtifactPayload, ArtifactResult, LanguageCode, LogFormat,
    QualityLevel, ResultBundle, TextModel,
};

#[test]
fn test_parse_multi_with_kinds_and_options() {
    let cli = Cli::try_parse_from([
        "prism",
        "--api-key",
        "k",
        "multi",
        "A story about a robot",
        "--kinds",
        "text,audio",
        "--model",
        "gemini-1.5-pro",
        "--language",
        "FR",
        "--modifier",
        "watercolor style",
        "--no-save",
    ])
    .expect("arguments parse");

    assert_eq!(cli.api_key.as_deref(), Some("k"));
    assert!(cli.no_save);
    match cli.command {
        Commands::Multi {
            prompt,
            kinds,
            model,
            language,
            modifiers,
        } => {
            assert_eq!(prompt, "A story about a robot");
            assert_eq!(kinds, vec![ArtifactKind::Text, ArtifactKind::Audio]);
            assert_eq!(model, Some(TextModel::Gemini15Pro));
            assert_eq!(language, Some(LanguageCode::Fr));
            assert_eq!(modifiers, vec!["watercolor style".to_string()]);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_image_prompt_defaults() {
    let cli = Cli::try_parse_from(["prism", "image-prompt", "a lighthouse"]).expect("parses");

    assert_eq!(cli.log_format, LogFormat::Pretty);
    match cli.command {
        Commands::ImagePrompt {
            idea,
            style,
            quality,
        } => {
            assert_eq!(idea, "a lighthouse");
            assert_eq!(style, ArtStyle::Photorealistic);
            assert_eq!(quality, QualityLevel::Standard);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_rejects_unknown_model_and_language() {
    assert!(Cli::try_parse_from(["prism", "text", "hi", "--model", "gpt-4"]).is_err());
    assert!(Cli::try_parse_from(["prism", "audio", "hi", "--language", "xx"]).is_err());
}

#[test]
fn test_parse_style_and_log_format() {
    let cli = Cli::try_parse_from([
        "prism",
        "--log-format",
        "json",
        "image-prompt",
        "a robot",
        "--style",
        "3d-render",
        "--quality",
        "ultra-high",
    ])
    .expect("parses");

    assert_eq!(cli.log_format, LogFormat::Json);
    assert!(matches!(
        cli.command,
        Commands::ImagePrompt {
            style: ArtStyle::Render3d,
            quality: QualityLevel::UltraHigh,
            ..
        }
    ));
}

#[test]
fn test_render_failure_is_inline_warning() {
    let mut bundle = ResultBundle::new();
    bundle.insert(ArtifactResult::failed(
        ArtifactKind::Text,
        "HTTP 503 error: overloaded",
    ));
    bundle.insert(ArtifactResult::succeeded(ArtifactPayload::ImagePrompt(
        "a detailed robot".to_string(),
    )));
    bundle.insert(ArtifactResult::succeeded(ArtifactPayload::Audio(vec![0; 16])));

    let mut out = Vec::new();
    render_bundle(&mut out, &bundle).expect("rendered");
    let rendered = String::from_utf8(out).expect("utf8");

    let text_at = rendered.find("== Generated Text ==").expect("text section");
    let image_at = rendered
        .find("== Generated Image Prompt ==")
        .expect("image section");
    let audio_at = rendered.find("== Generated Audio ==").expect("audio section");
    assert!(text_at < image_at && image_at < audio_at);
    assert!(rendered.contains("warning: generation failed: HTTP 503 error: overloaded"));
    assert!(rendered.contains("a detailed robot"));
    assert!(rendered.contains("[audio: 16 bytes, audio/mpeg]"));
    assert!(rendered.contains("1 of 3 artifacts failed."));
}

#[test]
fn test_render_single_text() {
    let mut out = Vec::new();
    render_result(
        &mut out,
        &ArtifactResult::succeeded(ArtifactPayload::Text("Once upon a time...".to_string())),
    )
    .expect("rendered");

    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "== Generated Text ==\nOnce upon a time...\n\n"
    );
}

#[test]
fn test_render_empty_bundle() {
    let mut out = Vec::new();
    render_bundle(&mut out, &ResultBundle::new()).expect("rendered");
    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "No artifacts were requested.\n"
    );
}

#[test]
fn test_parse_text_sampling_flags() {
    let cli = Cli::try_parse_from([
        "prism",
        "text",
        "Write a poem",
        "--max-tokens",
        "1200",
        "--temperature",
        "0.4",
    ])
    .expect("parses");

    match cli.command {
        Commands::Text {
            max_tokens,
            temperature,
            model,
            ..
        } => {
            assert_eq!(max_tokens, Some(1200));
            assert_eq!(temperature, Some(0.4));
            assert_eq!(model, None);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}
