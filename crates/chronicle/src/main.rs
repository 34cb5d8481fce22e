//! Chronicle CLI binary.
//!
//! This binary provides command-line access to Chronicle's functionality:
//! - Compose a journal from a JSON file of dated content items
//! - Caption an image with the vision model

use chronicle::{Cli, Commands, run_compose, run_describe};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before anything reads GEMINI_API_KEY
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Compose { items, model } => {
            run_compose(&items, model).await?;
        }

        Commands::Describe { url } => {
            run_describe(&url).await?;
        }
    }

    Ok(())
}
