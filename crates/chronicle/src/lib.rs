//! Chronicle - AI-composed personal journaling backend.
//!
//! Chronicle turns a user's photos and notes into narrative journals.
//! Devices upload photos and text entries; an enrichment step captions
//! photo content with a vision model; the journal composer orders the
//! dated items, renders one generation prompt, and extracts a titled
//! markdown journal from the model output.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use chronicle::{GeminiClient, InMemoryStore, JournalComposer, JournalService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::from_env()?;
//!     let service = JournalService::new(
//!         InMemoryStore::new(),
//!         client.clone(),
//!         JournalComposer::new(client),
//!     );
//!     // register users and devices, upload content, then:
//!     // service.compose_journal(user_id, &selection).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Chronicle is organized as a workspace with focused crates:
//!
//! - `chronicle_core` - Core data types (DatedItem, Composition, etc.)
//! - `chronicle_interface` - NarrativeDriver and VisionDriver traits
//! - `chronicle_error` - Error types
//! - `chronicle_store` - Domain records and the record-store abstraction
//! - `chronicle_models` - Model provider implementations (Gemini)
//! - `chronicle_composer` - The journal composition pipeline
//!
//! This crate (`chronicle`) re-exports everything for convenience and adds
//! the caller-side orchestration: [`JournalService`] owns the
//! caption-before-compose precondition and persistence of results.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod cli;
mod service;

pub use auth::{hash_password, verify_password};
pub use cli::{Cli, Commands, run_compose, run_describe};
pub use service::{JournalSelection, JournalService};

// Re-export the workspace crates for convenience.
pub use chronicle_composer::{ChronicleConfig, GenerationSettings, JournalComposer, StyleConfig};
pub use chronicle_core::{
    CaptionedPhoto, Composition, DatedItem, GenerateRequest, GenerateResponse, GenerationConfig,
    ItemKind,
};
pub use chronicle_error::{
    ChronicleError, ChronicleErrorKind, ChronicleResult, ComposerError, ComposerErrorKind,
    ConfigError, GeminiError, GeminiErrorKind, JsonError, StoreError, StoreErrorKind,
};
pub use chronicle_interface::{NarrativeDriver, VisionDriver};
pub use chronicle_models::GeminiClient;
pub use chronicle_store::{
    ActivityCount, Device, DevicePatch, DeviceStore, Entry, EntryPatch, EntryStore, InMemoryStore,
    Journal, JournalFilter, JournalPatch, JournalStore, NewDevice, NewEntry, NewJournal, NewPhoto,
    NewUser, Photo, PhotoFilter, PhotoPatch, PhotoStore, RecordStore, SortField, SortOrder, User,
    UserPatch, UserStore,
};
