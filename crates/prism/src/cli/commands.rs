//! CLI command definitions.

use clap::{Parser, Subcommand};
use prism_core::{ArtStyle, ArtifactKind, LanguageCode, LogFormat, QualityLevel, TextModel};
use std::path::PathBuf;

/// Prism: turn one prompt into text, an image prompt and speech.
#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "Generate text, image prompts and speech from one prompt")]
#[command(version)]
pub struct Cli {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Settings file (default: ./prism.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for saved artifacts
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Print results without saving files
    #[arg(long, global = true)]
    pub no_save: bool,

    /// Log output format
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate text from a prompt
    Text {
        /// What to write about
        prompt: String,

        /// Gemini model (default from settings)
        #[arg(short, long)]
        model: Option<TextModel>,

        /// Maximum tokens to generate, 100 to 2000 (default from settings)
        #[arg(long, value_name = "N")]
        max_tokens: Option<u32>,

        /// Sampling temperature, 0.0 to 1.0 (default from settings)
        #[arg(long)]
        temperature: Option<f32>,
    },

    /// Expand an idea into a prompt for an image generator
    ImagePrompt {
        /// The image idea
        idea: String,

        /// Art style
        #[arg(short, long, default_value = "photorealistic")]
        style: ArtStyle,

        /// Quality level
        #[arg(short, long, default_value = "standard")]
        quality: QualityLevel,
    },

    /// Convert text to speech
    Audio {
        /// Text to speak
        text: String,

        /// Two-letter language code (default from settings)
        #[arg(short, long, value_parser = parse_language)]
        language: Option<LanguageCode>,

        /// Rewrite the text for natural speech first
        #[arg(short, long)]
        enhance: bool,
    },

    /// Generate several artifacts from one prompt
    Multi {
        /// The prompt
        prompt: String,

        /// Artifacts to produce, comma separated (default: all)
        #[arg(short, long, value_delimiter = ',')]
        kinds: Vec<ArtifactKind>,

        /// Gemini model (default from settings)
        #[arg(short, long)]
        model: Option<TextModel>,

        /// Speech language (default from settings)
        #[arg(short, long, value_parser = parse_language)]
        language: Option<LanguageCode>,

        /// Extra modifier for the image prompt, repeatable
        #[arg(long = "modifier")]
        modifiers: Vec<String>,
    },

    /// List supported text models
    Models,

    /// List supported speech languages
    Languages,

    /// List recommended image generators
    Generators,
}

fn parse_language(raw: &str) -> Result<LanguageCode, String> {
    LanguageCode::parse(raw).map_err(|e| e.user_message())
}
