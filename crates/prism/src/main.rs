//! Prism command-line entry point.

use clap::Parser;
use prism::cli::{Cli, run};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // .env must be loaded before clap reads GEMINI_API_KEY
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = prism_core::init_tracing(cli.log_format, "info") {
        eprintln!("{}", e.user_message());
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = ?e, "Command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
