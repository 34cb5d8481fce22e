//! Request and response types for narrative generation.

use serde::{Deserialize, Serialize};

/// Sampling parameters for a generation call.
///
/// Defaults match the journal-generation settings of the production
/// service: mildly creative sampling with a nucleus cutoff.
///
/// # Examples
///
/// ```
/// use chronicle_core::GenerationConfig;
///
/// let config = GenerationConfig::default().with_temperature(0.7);
/// assert_eq!(*config.temperature(), 0.7);
/// assert_eq!(*config.top_k(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationConfig {
    /// Sampling temperature (0.0 to 1.0)
    temperature: f32,
    /// Nucleus sampling cutoff
    top_p: f32,
    /// Top-k sampling cutoff
    top_k: u32,
    /// Maximum number of tokens to generate
    max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.5,
            top_p: 0.95,
            top_k: 50,
            max_tokens: 1024,
        }
    }
}

impl GenerationConfig {
    /// Builder method to set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Builder method to set the nucleus sampling cutoff.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    /// Builder method to set the top-k cutoff.
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    /// Builder method to set the maximum output length.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// A single narrative generation request: one rendered prompt plus
/// sampling configuration.
///
/// # Examples
///
/// ```
/// use chronicle_core::GenerateRequest;
///
/// let request = GenerateRequest::builder()
///     .prompt("Rewrite these notes as a journal.")
///     .build()
///     .unwrap();
/// assert!(request.model().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The fully rendered prompt text
    prompt: String,
    /// Model identifier override; the driver default is used when `None`
    #[builder(default)]
    model: Option<String>,
    /// Sampling parameters
    #[builder(default)]
    config: GenerationConfig,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The response from a narrative generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// The generated text, as returned by the model
    text: String,
}

impl GenerateResponse {
    /// Create a response from generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Consume the response, yielding the generated text.
    pub fn into_text(self) -> String {
        self.text
    }
}
