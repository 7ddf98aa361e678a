//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the prism binary.

mod commands;
mod render;
mod run;

pub use commands::{Cli, Commands};
pub use render::{render_audio_outcome, render_bundle, render_result};
pub use run::run;
