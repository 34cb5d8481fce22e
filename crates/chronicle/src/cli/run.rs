//! Command handlers for the chronicle binary.

use chronicle_composer::{ChronicleConfig, JournalComposer};
use chronicle_core::DatedItem;
use chronicle_error::{ChronicleResult, JsonError};
use chronicle_interface::VisionDriver;
use chronicle_models::GeminiClient;
use std::path::Path;

/// Compose a journal from a JSON item file and print it to stdout.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed, the
/// configuration is invalid, or the composition fails.
pub async fn run_compose(items_path: &Path, model: Option<String>) -> ChronicleResult<()> {
    let config = ChronicleConfig::load()?;

    let raw = std::fs::read_to_string(items_path)
        .map_err(|e| JsonError::new(format!("failed to read {}: {}", items_path.display(), e)))?;
    let items: Vec<DatedItem> = serde_json::from_str(&raw)
        .map_err(|e| JsonError::new(format!("failed to parse items: {}", e)))?;

    let client = GeminiClient::from_env()?;
    let composer = JournalComposer::new(client)
        .with_style(config.style)
        .with_sampling(config.generation.sampling())
        .with_model(model.unwrap_or(config.generation.model));

    let composition = composer.compose(&items).await?;
    println!("{}", composition.body());
    Ok(())
}

/// Caption a single image and print the description to stdout.
///
/// # Errors
///
/// Returns an error when the client cannot be built or the vision call
/// fails.
pub async fn run_describe(url: &str) -> ChronicleResult<()> {
    let client = GeminiClient::from_env()?;
    let caption = client.describe(url).await?;
    println!("{}", caption);
    Ok(())
}
