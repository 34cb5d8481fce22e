//! The composition result type.

use serde::{Deserialize, Serialize};

/// The result of composing a journal: a title and a markdown body.
///
/// Constructed once per composition call and handed to the caller; the
/// composer never mutates it afterwards. The title is always derived from
/// the body by the extraction rule, never supplied independently, and is
/// never empty.
///
/// # Examples
///
/// ```
/// use chronicle_core::Composition;
///
/// let composition = Composition::new("A Day by the Sea", "# A Day by the Sea\nWe walked...");
/// assert_eq!(composition.title(), "A Day by the Sea");
/// assert!(composition.body().starts_with("# "));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Composition {
    /// Journal title, extracted from the generated body
    title: String,
    /// Full markdown body, including the heading line
    body: String,
}

impl Composition {
    /// Create a new composition result.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}
