//! Composition pipeline tests against a scripted narrative driver.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use chronicle_composer::JournalComposer;
use chronicle_core::{CaptionedPhoto, DatedItem, GenerateRequest, GenerateResponse};
use chronicle_error::{ChronicleErrorKind, ChronicleResult, GeminiError, GeminiErrorKind};
use chronicle_interface::NarrativeDriver;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return an API error
    Error,
}

/// Mock narrative driver that records the prompts it receives.
struct MockDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl MockDriver {
    fn new_success(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Success(text.into()),
            call_count: Arc::new(Mutex::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    fn new_error() -> Self {
        Self {
            behavior: MockBehavior::Error,
            call_count: Arc::new(Mutex::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    fn prompt_recorder(&self) -> Arc<Mutex<Option<String>>> {
        Arc::clone(&self.last_prompt)
    }
}

#[async_trait]
impl NarrativeDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> ChronicleResult<GenerateResponse> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_prompt.lock().unwrap() = Some(req.prompt().clone());
        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse::new(text.clone())),
            MockBehavior::Error => {
                Err(GeminiError::new(GeminiErrorKind::EmptyResponse).into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

fn image_item(day: u32, hour: u32, caption: &str, url: &str) -> DatedItem {
    let when = Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap();
    DatedItem::image(CaptionedPhoto::new(Uuid::new_v4(), url, caption, when).unwrap())
}

fn text_item(day: u32, hour: u32, content: &str) -> DatedItem {
    let when = Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap();
    DatedItem::text(when, content)
}

#[tokio::test]
async fn compose_returns_title_and_body() {
    let driver = MockDriver::new_success("# Harbor Morning\nWe watched the boats come in.");
    let composer = JournalComposer::new(driver);

    let items = vec![text_item(1, 9, "Watched the boats")];
    let composition = composer.compose(&items).await.unwrap();

    assert_eq!(composition.title(), "Harbor Morning");
    assert!(!composition.body().is_empty());
}

#[tokio::test]
async fn prompt_orders_items_chronologically() {
    let driver = MockDriver::new_success("# Day\nbody");
    let recorder = driver.prompt_recorder();
    let composer = JournalComposer::new(driver);

    // deliberately submitted newest-first
    let items = vec![
        text_item(2, 20, "evening walk"),
        image_item(2, 8, "sunrise over the bay", "https://static.example.com/sunrise.jpg"),
        text_item(2, 13, "lunch at the market"),
    ];
    composer.compose(&items).await.unwrap();

    let prompt = recorder.lock().unwrap().clone().unwrap();
    let sunrise = prompt.find("sunrise over the bay").unwrap();
    let lunch = prompt.find("lunch at the market").unwrap();
    let evening = prompt.find("evening walk").unwrap();
    assert!(sunrise < lunch);
    assert!(lunch < evening);
}

#[tokio::test]
async fn prompt_embeds_image_urls() {
    let driver = MockDriver::new_success("# Day\nbody with ![](https://static.example.com/sunrise.jpg)");
    let recorder = driver.prompt_recorder();
    let composer = JournalComposer::new(driver);

    let url = "https://static.example.com/sunrise.jpg";
    let items = vec![image_item(3, 7, "sunrise", url)];
    composer.compose(&items).await.unwrap();

    let prompt = recorder.lock().unwrap().clone().unwrap();
    assert!(prompt.contains(url));
    assert!(prompt.contains("![](url)"));
}

#[tokio::test]
async fn dropped_image_references_are_reattached() {
    // the model "forgot" the image reference entirely
    let driver = MockDriver::new_success("# Day\nA lovely day out.");
    let composer = JournalComposer::new(driver);

    let url = "https://static.example.com/kite.jpg";
    let items = vec![image_item(3, 9, "a kite", url)];
    let composition = composer.compose(&items).await.unwrap();

    assert!(composition.body().contains(&format!("![]({})", url)));
}

#[tokio::test]
async fn preamble_before_heading_is_dropped() {
    let driver = MockDriver::new_success("intro junk\n# My Title\nBody text");
    let composer = JournalComposer::new(driver);

    let items = vec![text_item(4, 10, "note")];
    let composition = composer.compose(&items).await.unwrap();

    assert_eq!(composition.title(), "My Title");
    assert_eq!(composition.body(), "# My Title\nBody text");
}

#[tokio::test]
async fn missing_heading_falls_back_to_placeholder() {
    let raw = "A plain journal with no heading anywhere.";
    let driver = MockDriver::new_success(raw);
    let composer = JournalComposer::new(driver);

    let items = vec![text_item(5, 10, "note")];
    let composition = composer.compose(&items).await.unwrap();

    assert_eq!(composition.title(), "Untitled Entry");
    assert_eq!(composition.body(), raw);
}

#[tokio::test]
async fn empty_input_is_rejected_without_calling_the_driver() {
    let driver = MockDriver::new_success("# unused\nbody");
    let count = Arc::clone(&driver.call_count);
    let composer = JournalComposer::new(driver);

    let err = composer.compose(&[]).await.unwrap_err();
    assert!(matches!(err.kind(), ChronicleErrorKind::Composer(_)));
    assert!(err.to_string().contains("empty item set"));
    assert_eq!(*count.lock().unwrap(), 0);
}

#[tokio::test]
async fn driver_failure_surfaces_as_generation_failed() {
    let driver = MockDriver::new_error();
    let composer = JournalComposer::new(driver);

    let items = vec![text_item(6, 10, "note")];
    let err = composer.compose(&items).await.unwrap_err();
    assert!(err.to_string().contains("Narrative generation failed"));
}

#[tokio::test]
async fn empty_model_output_surfaces_as_generation_failed() {
    let driver = MockDriver::new_success("   \n  ");
    let composer = JournalComposer::new(driver);

    let items = vec![text_item(7, 10, "note")];
    let err = composer.compose(&items).await.unwrap_err();
    assert!(err.to_string().contains("empty text"));
}

#[tokio::test]
async fn timestamp_ties_keep_submission_order() {
    let driver = MockDriver::new_success("# Day\nbody");
    let recorder = driver.prompt_recorder();
    let composer = JournalComposer::new(driver);

    let items = vec![
        text_item(8, 9, "first submitted"),
        text_item(8, 9, "second submitted"),
    ];
    composer.compose(&items).await.unwrap();

    let prompt = recorder.lock().unwrap().clone().unwrap();
    let first = prompt.find("first submitted").unwrap();
    let second = prompt.find("second submitted").unwrap();
    assert!(first < second);
}
