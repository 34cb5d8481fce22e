//! Trait definitions for the Chronicle journaling library.
//!
//! This crate defines the seams between the journal composer and the
//! external services it collaborates with: a narrative model for prose
//! generation and a vision model for image captioning. Implementations
//! live in `chronicle_models`; tests substitute mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{NarrativeDriver, VisionDriver};
