//! Record store error types.

use uuid::Uuid;

/// Specific error conditions for record store operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StoreErrorKind {
    /// No record of the given kind exists under the given id
    #[display("{} {} not found", entity, id)]
    NotFound {
        /// Entity kind, e.g. "user" or "photo"
        entity: &'static str,
        /// Identifier that failed to resolve
        id: Uuid,
    },
    /// A user with this email is already registered
    #[display("Email already registered: {}", _0)]
    DuplicateEmail(String),
    /// A device with this api key is already registered
    #[display("Device api key already registered")]
    DuplicateApiKey,
    /// A referenced parent record does not exist
    #[display("Referenced {} {} does not exist", entity, id)]
    ForeignKey {
        /// Entity kind of the missing parent
        entity: &'static str,
        /// Identifier of the missing parent
        id: Uuid,
    },
}

/// Error type for record store operations.
///
/// # Examples
///
/// ```
/// use chronicle_error::{StoreError, StoreErrorKind};
/// use uuid::Uuid;
///
/// let err = StoreError::new(StoreErrorKind::NotFound {
///     entity: "journal",
///     id: Uuid::nil(),
/// });
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The specific error condition
    pub kind: StoreErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoreError {
    /// Create a new StoreError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Convenience constructor for the common not-found case.
    #[track_caller]
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::new(StoreErrorKind::NotFound { entity, id })
    }
}
