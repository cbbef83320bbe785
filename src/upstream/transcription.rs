//! Speech-to-text forwarding to `POST /audio/transcriptions`.

use super::OpenAiClient;
use crate::error::{AppError, AppResult};
use serde::Deserialize;
use tracing::{debug, error};

/// Response body of the transcription endpoint; only the transcript is used.
#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl OpenAiClient {
    /// Forwards an uploaded audio file as a multipart request and returns the
    /// transcript text. The declared filename and MIME type are preserved so
    /// the upstream can detect the container format; the language hint is
    /// fixed by configuration.
    pub async fn transcribe(
        &self,
        audio: Vec<u8>,
        filename: String,
        content_type: &str,
    ) -> AppResult<String> {
        let key = self.bearer()?;

        let file_part = reqwest::multipart::Part::bytes(audio)
            .file_name(filename)
            .mime_str(content_type)
            .map_err(|e| AppError::BadRequest(format!("Invalid MIME type: {}", e)))?;

        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", self.transcription_model.clone())
            .text("language", self.transcription_language.clone());

        debug!(model = %self.transcription_model, "Forwarding audio for transcription");

        let response = self
            .client
            .post(self.endpoint("audio/transcriptions"))
            .bearer_auth(key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::upstream_error(response, "OpenAI API error").await;
            error!("Transcription request failed: {}", err);
            return Err(err);
        }

        let body: TranscriptionResponse = response.json().await?;
        Ok(body.text)
    }
}
