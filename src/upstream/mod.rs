//! # Upstream Forwarders
//!
//! One stateless client for the three OpenAI endpoints the pipeline proxies:
//! audio transcription (multipart), chat completions (translation and
//! enhancement share the wire format) and speech synthesis. Each call checks
//! the credential before any I/O, forwards the payload, and maps a non-success
//! upstream response into [`AppError::Upstream`] carrying the upstream status
//! and raw body text.

pub mod chat;
pub mod speech;
pub mod transcription;

pub use speech::Voice;

use crate::config::OpenAiConfig;
use crate::error::{AppError, AppResult};
use std::time::Duration;

/// Shared client for all upstream OpenAI calls.
///
/// Cloning is cheap: the inner `reqwest::Client` is an `Arc` around a
/// connection pool. `base_url` is configurable so tests can point the client
/// at a local mock server.
#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    pub(crate) chat_model: String,
    pub(crate) transcription_model: String,
    pub(crate) transcription_language: String,
    pub(crate) tts_model: String,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build upstream HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            chat_model: config.chat_model.clone(),
            transcription_model: config.transcription_model.clone(),
            transcription_language: config.transcription_language.clone(),
            tts_model: config.tts_model.clone(),
        }
    }

    /// Fails fast when no credential is configured. Called by every forwarder
    /// before constructing a request, so an unconfigured server never emits
    /// upstream traffic.
    pub(crate) fn bearer(&self) -> AppResult<&str> {
        let key = self.api_key.trim();
        if key.is_empty() {
            return Err(AppError::Config("OpenAI API key not configured".to_string()));
        }
        Ok(key)
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Converts a non-success upstream response into the pass-through error
    /// shape, consuming the response body as the diagnostic text.
    pub(crate) async fn upstream_error(
        response: reqwest::Response,
        label: &'static str,
    ) -> AppError {
        let status = response.status().as_u16();
        let details = response.text().await.unwrap_or_default();
        AppError::Upstream {
            status,
            label,
            details,
        }
    }
}
