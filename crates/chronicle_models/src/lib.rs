//! Model provider integrations for Chronicle.
//!
//! This crate implements the driver traits from `chronicle_interface`
//! against real model services. The bundled provider is Google Gemini via
//! its REST `generateContent` API: one client serves both narrative
//! generation (text in, text out) and photo enrichment (image in, caption
//! out), since Gemini models are multimodal.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::GeminiClient;
