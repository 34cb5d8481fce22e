//! The journal composer.

use crate::{StyleConfig, extract_title_and_body, prompt::render_prompt};
use chronicle_core::{Composition, DatedItem, GenerateRequest, GenerationConfig};
use chronicle_error::{ChronicleResult, ComposerError, ComposerErrorKind};
use chronicle_interface::NarrativeDriver;

/// Composes a set of dated content items into one narrative journal.
///
/// Each `compose` invocation is independent and stateless: the composer
/// holds no shared mutable state, so concurrent compositions need no
/// coordination. The only blocking point is the single generation call,
/// which is treated as one synchronous unit of work with no retry and no
/// partial results. Callers wanting retry apply their own policy around
/// the whole call.
pub struct JournalComposer<D: NarrativeDriver> {
    driver: D,
    style: StyleConfig,
    sampling: GenerationConfig,
    model: Option<String>,
}

impl<D: NarrativeDriver> JournalComposer<D> {
    /// Create a composer with default style and sampling configuration.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            style: StyleConfig::default(),
            sampling: GenerationConfig::default(),
            model: None,
        }
    }

    /// Builder method to set the prompt instruction block.
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Builder method to set the sampling configuration.
    pub fn with_sampling(mut self, sampling: GenerationConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Builder method to override the driver's default model.
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Compose the given items into a titled markdown journal.
    ///
    /// Items are sorted by timestamp ascending before prompt rendering;
    /// the sort is stable, so ties keep their submission order. The
    /// generated text is split into title and body, dropping any stray
    /// preamble before the first markdown heading and falling back to the
    /// configured placeholder title when no heading exists.
    ///
    /// # Errors
    ///
    /// - [`ComposerErrorKind::EmptyItems`] when `items` is empty; no
    ///   external call is made.
    /// - [`ComposerErrorKind::GenerationFailed`] when the driver errors or
    ///   returns empty text. The failure is terminal for this invocation;
    ///   retrying is the caller's policy.
    #[tracing::instrument(skip(self, items), fields(item_count = items.len(), provider = self.driver.provider_name()))]
    pub async fn compose(&self, items: &[DatedItem]) -> ChronicleResult<Composition> {
        if items.is_empty() {
            return Err(ComposerError::new(ComposerErrorKind::EmptyItems).into());
        }

        let mut ordered: Vec<&DatedItem> = items.iter().collect();
        ordered.sort_by_key(|item| *item.timestamp());

        let prompt = render_prompt(&self.style, &ordered);
        let request = GenerateRequest::builder()
            .prompt(prompt)
            .model(self.model.clone())
            .config(self.sampling.clone())
            .build()
            .map_err(|e| {
                ComposerError::new(ComposerErrorKind::GenerationFailed(format!(
                    "failed to build generation request: {}",
                    e
                )))
            })?;

        let response = self.driver.generate(&request).await.map_err(|e| {
            ComposerError::new(ComposerErrorKind::GenerationFailed(e.to_string()))
        })?;

        let text = response.into_text();
        if text.trim().is_empty() {
            return Err(ComposerError::new(ComposerErrorKind::GenerationFailed(
                "model returned empty text".to_string(),
            ))
            .into());
        }

        let (title, mut body) = extract_title_and_body(&text, &self.style.fallback_title);

        // the body must reference every supplied image; re-attach any the
        // model dropped
        for item in &ordered {
            if let Some(url) = item.source_url() {
                let reference = format!("![]({})", url);
                if !body.contains(&reference) {
                    body.push_str("\n\n");
                    body.push_str(&reference);
                }
            }
        }

        tracing::debug!(title = %title, body_len = body.len(), "composition complete");
        Ok(Composition::new(title, body))
    }
}
