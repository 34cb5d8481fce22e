//! Gemini client error types.

/// Specific error conditions for Gemini API calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// GEMINI_API_KEY is not set in the environment
    #[display("GEMINI_API_KEY not set in environment")]
    MissingApiKey,
    /// The request could not be sent
    #[display("Gemini API request failed: {}", _0)]
    Request(String),
    /// The API returned a non-success HTTP status
    #[display("Gemini API returned status {}: {}", status, message)]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body or error description
        message: String,
    },
    /// The response body could not be parsed
    #[display("Failed to parse Gemini response: {}", _0)]
    ResponseParse(String),
    /// The model produced no candidates or empty text
    #[display("Gemini response contained no usable text")]
    EmptyResponse,
    /// The image bytes could not be fetched for captioning
    #[display("Failed to fetch image for captioning: {}", _0)]
    ImageFetch(String),
}

/// Error type for Gemini API operations.
///
/// # Examples
///
/// ```
/// use chronicle_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The specific error condition
    pub kind: GeminiErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
