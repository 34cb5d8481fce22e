//! Trait definitions for external model services.

use async_trait::async_trait;
use chronicle_core::{GenerateRequest, GenerateResponse};
use chronicle_error::ChronicleResult;

/// A narrative generation backend.
///
/// This is the composer's only external collaborator: one prompt in, one
/// block of generated text out. The call is a single synchronous unit of
/// work with no partial results; implementations may block for several
/// seconds. The composer performs no retry; retrying is the caller's
/// policy.
#[async_trait]
pub trait NarrativeDriver: Send + Sync {
    /// Generate narrative text for the given request.
    async fn generate(&self, req: &GenerateRequest) -> ChronicleResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when the request does not name one.
    fn model_name(&self) -> &str;
}

/// An image description backend.
///
/// Used by the caller-side enrichment step, never by the composer itself:
/// every photo must be captioned before composition begins.
#[async_trait]
pub trait VisionDriver: Send + Sync {
    /// Produce a textual description of the image at the given URL.
    async fn describe(&self, image_url: &str) -> ChronicleResult<String>;
}
