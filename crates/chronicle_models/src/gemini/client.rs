//! Gemini client implementing the narrative and vision drivers.

use super::GeminiResult;
use super::dto::{
    GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse,
};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chronicle_core::{GenerateRequest, GenerateResponse};
use chronicle_error::{ChronicleResult, GeminiError, GeminiErrorKind};
use chronicle_interface::{NarrativeDriver, VisionDriver};
use reqwest::Client;
use std::env;
use std::time::Duration;
use tracing::{debug, instrument};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";
const DESCRIBE_PROMPT: &str = "Please describe what you see in this image.";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the Gemini `generateContent` REST API.
///
/// One client serves both drivers: text-only requests for narrative
/// generation, and inline-image requests for photo captioning. Requests
/// carry a transport-level timeout; there is no retry here, callers
/// decide whether a failed call is worth repeating.
///
/// # Example
///
/// ```no_run
/// use chronicle_models::GeminiClient;
/// use chronicle_interface::VisionDriver;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::from_env()?;
/// let caption = client.describe("https://static.example.com/a.jpg").await?;
/// println!("{}", caption);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model_name: String,
}

impl GeminiClient {
    /// Create a client reading the API key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not set or the HTTP client cannot
    /// be initialized.
    #[instrument(name = "gemini_client_from_env")]
    pub fn from_env() -> ChronicleResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Self::with_api_key(api_key, DEFAULT_MODEL).map_err(Into::into)
    }

    /// Create a client with an explicit API key and default model.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_api_key(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> GeminiResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::Request(e.to_string())))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            model_name: model.into(),
        })
    }

    /// Builder method to point the client at a different endpoint, e.g. a
    /// local stub server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// POST a request body to `{base}/{model}:generateContent`.
    async fn post(&self, model: &str, body: &GeminiRequest) -> GeminiResult<GeminiResponse> {
        let url = format!("{}/{}:generateContent", self.base_url, model);
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Request(e.to_string())))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::Http { status, message }));
        }

        response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseParse(e.to_string())))
    }

    /// Fetch image bytes and note their MIME type.
    async fn fetch_image(&self, image_url: &str) -> GeminiResult<(String, Vec<u8>)> {
        let response = self
            .client
            .get(image_url)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ImageFetch(e.to_string())))?;

        if !response.status().is_success() {
            return Err(GeminiError::new(GeminiErrorKind::ImageFetch(format!(
                "{} returned status {}",
                image_url,
                response.status()
            ))));
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
            .unwrap_or_else(|| "image/jpeg".to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ImageFetch(e.to_string())))?;

        Ok((mime, bytes.to_vec()))
    }

    fn sampling(req: &GenerateRequest) -> GeminiGenerationConfig {
        let config = req.config();
        GeminiGenerationConfig {
            temperature: Some(*config.temperature()),
            top_p: Some(*config.top_p()),
            top_k: Some(*config.top_k()),
            max_output_tokens: Some(*config.max_tokens()),
        }
    }
}

#[async_trait]
impl NarrativeDriver for GeminiClient {
    #[instrument(skip(self, req), fields(default_model = %self.model_name))]
    async fn generate(&self, req: &GenerateRequest) -> ChronicleResult<GenerateResponse> {
        let model = req.model().as_deref().unwrap_or(&self.model_name);
        let body = GeminiRequest {
            contents: vec![GeminiContent::user(vec![GeminiPart::text(
                req.prompt().clone(),
            )])],
            generation_config: Some(Self::sampling(req)),
        };

        let response = self.post(model, &body).await?;
        let text = response
            .first_text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))?;
        Ok(GenerateResponse::new(text))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[async_trait]
impl VisionDriver for GeminiClient {
    #[instrument(skip(self))]
    async fn describe(&self, image_url: &str) -> ChronicleResult<String> {
        let (mime, bytes) = self.fetch_image(image_url).await?;
        debug!(mime = %mime, size = bytes.len(), "Fetched image for captioning");

        let body = GeminiRequest {
            contents: vec![GeminiContent::user(vec![
                GeminiPart::inline(mime, BASE64.encode(&bytes)),
                GeminiPart::text(DESCRIBE_PROMPT),
            ])],
            generation_config: None,
        };

        let response = self.post(&self.model_name, &body).await?;
        response
            .first_text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse).into())
    }
}
