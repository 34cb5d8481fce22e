//! Top-level error wrapper types.

use crate::{ComposerError, ConfigError, GeminiError, JsonError, StoreError};

/// This is the foundation error enum. Each Chronicle crate contributes
/// a variant for its own error family.
///
/// # Examples
///
/// ```
/// use chronicle_error::{ChronicleError, ConfigError};
///
/// let config_err = ConfigError::new("bad style section");
/// let err: ChronicleError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ChronicleErrorKind {
    /// Journal composition error
    #[from(ComposerError)]
    Composer(ComposerError),
    /// Gemini API error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Record store error
    #[from(StoreError)]
    Store(StoreError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Chronicle error with kind discrimination.
///
/// # Examples
///
/// ```
/// use chronicle_error::{ChronicleResult, ComposerError, ComposerErrorKind};
///
/// fn might_fail() -> ChronicleResult<()> {
///     Err(ComposerError::new(ComposerErrorKind::EmptyItems))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Chronicle Error: {}", _0)]
pub struct ChronicleError(Box<ChronicleErrorKind>);

impl ChronicleError {
    /// Create a new error from a kind.
    pub fn new(kind: ChronicleErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ChronicleErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ChronicleErrorKind
impl<T> From<T> for ChronicleError
where
    T: Into<ChronicleErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Chronicle operations.
///
/// # Examples
///
/// ```
/// use chronicle_error::{ChronicleResult, ConfigError};
///
/// fn load() -> ChronicleResult<String> {
///     Err(ConfigError::new("chronicle.toml not found"))?
/// }
/// ```
pub type ChronicleResult<T> = std::result::Result<T, ChronicleError>;
