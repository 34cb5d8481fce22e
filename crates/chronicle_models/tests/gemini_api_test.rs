//! Tests that exercise the real Gemini API.
//!
//! Gated behind the `api` feature so routine test runs stay offline:
//! `cargo test -p chronicle_models --features api`. Requires
//! GEMINI_API_KEY in the environment or a .env file.

#![cfg(feature = "api")]

use chronicle_core::GenerateRequest;
use chronicle_interface::NarrativeDriver;
use chronicle_models::GeminiClient;

#[tokio::test]
async fn generate_returns_nonempty_text() {
    dotenvy::dotenv().ok();
    let client = GeminiClient::from_env().expect("GEMINI_API_KEY must be set");

    let request = GenerateRequest::builder()
        .prompt("Reply with exactly one short sentence about the sea.")
        .build()
        .unwrap();

    let response = client.generate(&request).await.expect("generation failed");
    assert!(!response.text().trim().is_empty());
}
