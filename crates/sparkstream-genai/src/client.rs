//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! One call, one request: no retry, no cache, and no timeout unless the
//! caller configures one. Provider-side failures are surfaced as typed
//! [`GenaiError`]s; [`crate::GenAi`] is what turns them into empty results.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use sparkstream_core::AppConfig;

use crate::error::GenaiError;
use crate::prompt::Prompt;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

pub use sparkstream_core::{
    DEFAULT_GEMINI_BASE_URL as DEFAULT_BASE_URL, DEFAULT_GEMINI_MODEL as DEFAULT_MODEL,
};

/// Sends a prompt to a generative model and returns its raw reply text.
pub trait ModelInvoker: Send + Sync {
    fn invoke(&self, prompt: &Prompt) -> impl Future<Output = Result<String, GenaiError>> + Send;
}

/// Client for the Gemini REST API.
///
/// Use [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`]
/// to point at a mock server in tests. A client built without an API key is
/// valid; every call on it fails with [`GenaiError::MissingApiKey`] without
/// touching the network.
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    endpoint: Url,
}

impl GeminiClient {
    /// Creates a client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`GenaiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: Option<&str>,
        model: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, GenaiError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GenaiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GenaiError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: Option<&str>,
        model: &str,
        timeout_secs: Option<u64>,
        base_url: &str,
    ) -> Result<Self, GenaiError> {
        let mut builder = Client::builder().user_agent("sparkstream/0.1 (creator-studio)");
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        // Exactly one trailing slash so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(&format!("v1beta/models/{model}:generateContent")))
            .map_err(|e| GenaiError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(ToOwned::to_owned),
            model: model.to_owned(),
            endpoint,
        })
    }

    /// Builds a client from process configuration.
    ///
    /// # Errors
    ///
    /// Same as [`GeminiClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, GenaiError> {
        Self::with_base_url(
            config.gemini_api_key.as_deref(),
            &config.gemini_model,
            config.genai_timeout_secs,
            &config.gemini_base_url,
        )
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one `generateContent` request and returns the reply text.
    ///
    /// # Errors
    ///
    /// - [`GenaiError::MissingApiKey`] if no key is configured.
    /// - [`GenaiError::Unauthorized`] on 401/403, or a 400 reporting an
    ///   invalid key.
    /// - [`GenaiError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`GenaiError::Http`] on network failure.
    /// - [`GenaiError::Deserialize`] if the envelope is not valid JSON.
    async fn generate_content(&self, prompt: &Prompt) -> Result<String, GenaiError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GenaiError::MissingApiKey);
        };

        let body = GenerateContentRequest::json(&prompt.instruction, &prompt.schema);
        tracing::debug!(model = %self.model, "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, text));
        }

        let raw = response.text().await?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(|e| GenaiError::Deserialize {
                context: format!("generateContent({})", self.model),
                source: e,
            })?;

        if let Some(block_reason) = parsed.block_reason() {
            tracing::warn!(block_reason, "Gemini blocked the prompt");
        }
        tracing::debug!(
            finish_reason = parsed.finish_reason().unwrap_or("none"),
            "generateContent response received"
        );

        Ok(parsed.text())
    }

    fn status_error(status: StatusCode, body: String) -> GenaiError {
        let invalid_key = status == StatusCode::BAD_REQUEST && body.contains("API_KEY_INVALID");
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN || invalid_key {
            GenaiError::Unauthorized {
                status: status.as_u16(),
                message: body,
            }
        } else {
            GenaiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            }
        }
    }
}

impl ModelInvoker for GeminiClient {
    fn invoke(&self, prompt: &Prompt) -> impl Future<Output = Result<String, GenaiError>> + Send {
        self.generate_content(prompt)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
