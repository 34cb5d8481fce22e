//! Core data types for the Chronicle journaling library.
//!
//! This crate provides the foundation data types shared across the Chronicle
//! workspace: the dated content items fed to the journal composer, the
//! composition result, and the generation request/response pair exchanged
//! with narrative model drivers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod composition;
mod item;
mod request;

pub use composition::Composition;
pub use item::{CaptionedPhoto, DatedItem, ItemKind};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerationConfig,
};
