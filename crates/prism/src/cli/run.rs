//! Command dispatch.

use super::render::{render_audio_outcome, render_bundle, render_result};
use super::{Cli, Commands};
use chrono::Utc;
use prism_core::{
    ArtifactKind, ArtifactResult, GenerationRequest, LanguageCode, ResultBundle, TextModel,
};
use prism_error::{ConfigError, PrismResult};
use prism_models::{GeminiClient, GoogleTtsClient};
use prism_studio::{
    ArtifactExporter, AudioTabOutcome, GeneratorTier, SamplingConfig, Studio, StudioConfig,
    image_generators,
};
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::process::ExitCode;
use strum::IntoEnumIterator;
use tracing::{info, instrument};

const API_KEY_GUIDANCE: &str = "\
Set the GEMINI_API_KEY environment variable (or pass --api-key).
Get a free key at https://aistudio.google.com/app/apikey";

/// Output of one generating subcommand.
enum Generated {
    Single(ArtifactResult),
    Audio(AudioTabOutcome),
    Bundle(ResultBundle),
}

/// Run a parsed command line.
///
/// Returns the process exit code. Blank input and a missing API key are
/// reported to the user and produce a failure code without an error.
///
/// # Errors
///
/// Unreadable settings or a failure writing to the terminal.
#[instrument(skip_all)]
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut stdout = io::stdout();

    if list(&cli.command, &mut stdout)? {
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = StudioConfig::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.output_dir {
        config = config.with_output_dir(dir);
    }

    let mut studio = match Studio::connect(&config, cli.api_key.clone()) {
        Ok(studio) => studio,
        Err(e) if e.is_configuration() => {
            eprintln!("{}", e.user_message());
            eprintln!("{}", API_KEY_GUIDANCE);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    let generated = match generate(&mut studio, &config, cli.command).await {
        Ok(generated) => generated,
        Err(e) if e.is_empty_input() => {
            eprintln!("warning: {}", e.user_message());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    match &generated {
        Generated::Single(result) => {
            render_result(&mut stdout, result)?;
            if result.kind() == ArtifactKind::ImagePrompt {
                writeln!(
                    stdout,
                    "Paste this prompt into an image generator (see `prism generators`)."
                )?;
            }
        }
        Generated::Audio(outcome) => render_audio_outcome(&mut stdout, outcome)?,
        Generated::Bundle(bundle) => render_bundle(&mut stdout, bundle)?,
    }

    let bundle = studio.last_result().cloned().unwrap_or_default();
    if !cli.no_save {
        save(&bundle, &config, &mut stdout)?;
    }

    Ok(if bundle.has_successes() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Handle the listing subcommands; false for anything else.
fn list(command: &Commands, out: &mut impl Write) -> io::Result<bool> {
    match command {
        Commands::Models => {
            for model in TextModel::iter() {
                writeln!(out, "{:<18} {}", model.id(), model.tier())?;
            }
        }
        Commands::Languages => {
            for language in LanguageCode::iter() {
                writeln!(out, "{}  {}", language.code(), language.display_name())?;
            }
        }
        Commands::Generators => {
            for tier in [GeneratorTier::Free, GeneratorTier::Premium] {
                writeln!(out, "{}:", tier)?;
                for generator in image_generators(tier) {
                    writeln!(out, "  {:<18} {}", generator.name, generator.url)?;
                }
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}

async fn generate(
    studio: &mut Studio<GeminiClient, GoogleTtsClient>,
    config: &StudioConfig,
    command: Commands,
) -> PrismResult<Generated> {
    let generated = match command {
        Commands::Text {
            prompt,
            model,
            max_tokens,
            temperature,
        } => {
            let model = model.unwrap_or(*config.default_model());
            let sampling = text_sampling(config, max_tokens, temperature);
            Generated::Single(
                studio
                    .generate_text_with_sampling(&prompt, model, sampling)
                    .await?,
            )
        }
        Commands::ImagePrompt {
            idea,
            style,
            quality,
        } => Generated::Single(studio.generate_image_prompt(&idea, style, quality).await?),
        Commands::Audio {
            text,
            language,
            enhance,
        } => {
            let language = language.unwrap_or(*config.default_language());
            Generated::Audio(studio.generate_audio(&text, language, enhance).await?)
        }
        Commands::Multi {
            prompt,
            kinds,
            model,
            language,
            modifiers,
        } => {
            let enabled_kinds: BTreeSet<ArtifactKind> = if kinds.is_empty() {
                ArtifactKind::all()
            } else {
                kinds.into_iter().collect()
            };
            let request = GenerationRequest::builder()
                .raw_prompt(prompt)
                .enabled_kinds(enabled_kinds)
                .model(model.unwrap_or(*config.default_model()))
                .language(language.unwrap_or(*config.default_language()))
                .style_modifiers(modifiers)
                .build()
                .map_err(|e| ConfigError::new(e.to_string()))?;
            Generated::Bundle(studio.generate_all(&request).await?)
        }
        Commands::Models | Commands::Languages | Commands::Generators => {
            Generated::Bundle(ResultBundle::new())
        }
    };
    Ok(generated)
}

/// Settings sampling with any command-line overrides, clamped into range.
fn text_sampling(
    config: &StudioConfig,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
) -> SamplingConfig {
    let defaults = config.sampling();
    SamplingConfig::new(
        max_tokens.unwrap_or(*defaults.max_output_tokens()),
        temperature.unwrap_or(*defaults.temperature()),
    )
}

fn save(bundle: &ResultBundle, config: &StudioConfig, out: &mut impl Write) -> io::Result<()> {
    for (kind, written) in ArtifactExporter::export_bundle(bundle, config.output_dir(), Utc::now())
    {
        match written {
            Ok(path) => {
                info!(%kind, path = %path.display(), "Saved artifact");
                writeln!(out, "Saved {}: {}", kind.label(), path.display())?;
            }
            Err(e) => writeln!(
                out,
                "warning: could not save {}: {}",
                kind.label(),
                e.user_message()
            )?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::text_sampling;
    use prism_studio::StudioConfig;

    #[test]
    fn test_text_sampling_overrides_are_clamped() {
        let config = StudioConfig::default();

        let sampling = text_sampling(&config, Some(50), Some(1.5));
        assert_eq!(*sampling.max_output_tokens(), 100);
        assert_eq!(*sampling.temperature(), 1.0);

        let sampling = text_sampling(&config, None, Some(0.2));
        assert_eq!(*sampling.max_output_tokens(), 500);
        assert_eq!(*sampling.temperature(), 0.2);
    }
}
