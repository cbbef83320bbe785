//! Chat-completion forwarding used by both the translation and enhancement
//! stages. The two stages differ only in their system instruction, so they
//! share one request builder.

use super::OpenAiClient;
use crate::error::{AppError, AppResult};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl OpenAiClient {
    /// Sends a two-turn conversation (fixed system instruction plus the
    /// caller's text verbatim) and returns the first choice's content with
    /// surrounding whitespace trimmed.
    pub async fn chat_completion(&self, system: &str, user: &str) -> AppResult<String> {
        let key = self.bearer()?;

        let body = json!({
            "model": self.chat_model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ]
        });

        let response = self
            .client
            .post(self.endpoint("chat/completions"))
            .bearer_auth(key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::upstream_error(response, "OpenAI API error").await;
            error!("Chat completion request failed: {}", err);
            return Err(err);
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let choice = completion.choices.into_iter().next().ok_or_else(|| {
            AppError::Internal("Chat completion response contained no choices".to_string())
        })?;

        Ok(choice.message.content.trim().to_string())
    }
}
