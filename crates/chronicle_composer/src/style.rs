//! Composition style and generation configuration.
//!
//! The instruction block rendered into every prompt is configuration, not
//! code: persona, formatting rules, and structural constraints load from
//! `chronicle.toml` with bundled defaults and optional user overrides.

use chronicle_error::{ChronicleError, ChronicleResult, ConfigError};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The fixed instruction block baked into every composition prompt.
///
/// # Example
///
/// ```
/// use chronicle_composer::StyleConfig;
///
/// let style = StyleConfig::default();
/// assert_eq!(style.max_paragraphs, 3);
/// assert_eq!(style.fallback_title, "Untitled Entry");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StyleConfig {
    /// Narrative voice, written in the first person
    #[serde(default = "default_persona")]
    pub persona: String,

    /// Upper bound on paragraphs in the generated journal
    #[serde(default = "default_max_paragraphs")]
    pub max_paragraphs: u32,

    /// Minimum length of the generated journal in words
    #[serde(default = "default_min_words")]
    pub min_words: u32,

    /// Whether the model is asked to open with a title heading
    #[serde(default = "default_require_title")]
    pub require_title: bool,

    /// Title used when the generated text carries no heading
    #[serde(default = "default_fallback_title")]
    pub fallback_title: String,
}

fn default_persona() -> String {
    "I'm an avid journal keeper who loves turning my days into stories.".to_string()
}

fn default_max_paragraphs() -> u32 {
    3
}

fn default_min_words() -> u32 {
    100
}

fn default_require_title() -> bool {
    true
}

fn default_fallback_title() -> String {
    "Untitled Entry".to_string()
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            persona: default_persona(),
            max_paragraphs: default_max_paragraphs(),
            min_words: default_min_words(),
            require_title: default_require_title(),
            fallback_title: default_fallback_title(),
        }
    }
}

/// Generation settings: default model plus sampling parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationSettings {
    /// Default model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling cutoff
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Top-k sampling cutoff
    #[serde(default = "default_top_k")]
    pub top_k: u32,

    /// Maximum number of tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_model() -> String {
    "gemini-2.0-flash-lite".to_string()
}

fn default_temperature() -> f32 {
    0.5
}

fn default_top_p() -> f32 {
    0.95
}

fn default_top_k() -> u32 {
    50
}

fn default_max_tokens() -> u32 {
    1024
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl GenerationSettings {
    /// Convert these settings into the request-level sampling config.
    pub fn sampling(&self) -> chronicle_core::GenerationConfig {
        chronicle_core::GenerationConfig::default()
            .with_temperature(self.temperature)
            .with_top_p(self.top_p)
            .with_top_k(self.top_k)
            .with_max_tokens(self.max_tokens)
    }
}

/// Top-level Chronicle configuration.
///
/// Loads from TOML with a precedence system: bundled defaults, then
/// `~/.config/chronicle/chronicle.toml`, then `./chronicle.toml`. User
/// files are optional and silently skipped when absent.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ChronicleConfig {
    /// Prompt instruction block
    #[serde(default)]
    pub style: StyleConfig,

    /// Model and sampling defaults
    #[serde(default)]
    pub generation: GenerationSettings,
}

impl ChronicleConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ChronicleResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ChronicleError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ChronicleError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source fails to read or the merged
    /// configuration fails to deserialize.
    #[instrument]
    pub fn load() -> ChronicleResult<Self> {
        debug!("Loading configuration: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../chronicle.toml");

        let mut builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/chronicle/chronicle.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::from(std::path::Path::new("chronicle.toml")).required(false));

        builder
            .build()
            .map_err(|e| {
                ChronicleError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ChronicleError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
