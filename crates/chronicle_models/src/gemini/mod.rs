//! Google Gemini REST API integration.

mod client;
mod dto;

pub use client::GeminiClient;

/// Result alias for Gemini-specific operations.
pub(crate) type GeminiResult<T> = std::result::Result<T, chronicle_error::GeminiError>;
