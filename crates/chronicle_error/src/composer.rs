//! Composer error types.

/// Specific error conditions for journal composition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ComposerErrorKind {
    /// The composition request contained no items
    #[display("Cannot compose a journal from an empty item set")]
    EmptyItems,
    /// The narrative generation call failed or returned nothing usable
    #[display("Narrative generation failed: {}", _0)]
    GenerationFailed(String),
}

/// Error type for composition operations.
///
/// # Examples
///
/// ```
/// use chronicle_error::{ComposerError, ComposerErrorKind};
///
/// let err = ComposerError::new(ComposerErrorKind::EmptyItems);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Composer Error: {} at line {} in {}", kind, line, file)]
pub struct ComposerError {
    /// The specific error condition
    pub kind: ComposerErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ComposerError {
    /// Create a new ComposerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ComposerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
