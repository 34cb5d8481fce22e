//! Journal composition pipeline for Chronicle.
//!
//! This crate turns a set of timestamped, heterogeneous content items
//! (photo captions and text entries) into one coherent narrative artifact.
//! The [`JournalComposer`] orders items chronologically, renders a single
//! generation prompt from a fixed instruction block plus the item listing,
//! invokes an injected [`chronicle_interface::NarrativeDriver`], and
//! extracts a title and markdown body from the generated text.
//!
//! The composer is stateless and performs no persistence: each call is a
//! pure transformation plus one external call. Captioning photos happens
//! upstream: image items arrive with their captions already attached,
//! enforced at the type level by [`chronicle_core::CaptionedPhoto`].
//!
//! # Example
//!
//! ```rust,ignore
//! use chronicle_composer::JournalComposer;
//! use chronicle_core::DatedItem;
//! use chronicle_models::GeminiClient;
//!
//! # async fn example(items: Vec<DatedItem>) -> Result<(), Box<dyn std::error::Error>> {
//! let composer = JournalComposer::new(GeminiClient::from_env()?);
//! let composition = composer.compose(&items).await?;
//! println!("{}\n\n{}", composition.title(), composition.body());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod composer;
mod extraction;
mod prompt;
mod style;

pub use composer::JournalComposer;
pub use extraction::extract_title_and_body;
pub use style::{ChronicleConfig, GenerationSettings, StyleConfig};
