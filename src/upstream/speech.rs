//! Text-to-speech forwarding to `POST /audio/speech`.

use super::OpenAiClient;
use crate::error::AppResult;
use serde_json::json;
use std::str::FromStr;
use tracing::error;

/// The two synthetic voices the front end offers. Wire values are the
/// lowercase variant names; each maps to a fixed OpenAI voice identifier.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Voice {
    Orus,
    Kore,
}

impl Voice {
    /// Upstream voice identifier sent in the synthesis request.
    pub fn upstream_id(self) -> &'static str {
        match self {
            Voice::Orus => "alloy",
            Voice::Kore => "nova",
        }
    }
}

impl FromStr for Voice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orus" => Ok(Voice::Orus),
            "kore" => Ok(Voice::Kore),
            _ => Err(()),
        }
    }
}

impl OpenAiClient {
    /// Synthesizes speech for `text` and returns the raw MP3 bytes. Encoding,
    /// pitch and speaking rate are fixed; only the voice varies.
    pub async fn synthesize(&self, text: &str, voice: Voice) -> AppResult<Vec<u8>> {
        let key = self.bearer()?;

        let body = json!({
            "model": self.tts_model,
            "input": text,
            "voice": voice.upstream_id(),
            "response_format": "mp3",
            "speed": 1.0
        });

        let response = self
            .client
            .post(self.endpoint("audio/speech"))
            .bearer_auth(key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::upstream_error(response, "TTS API error").await;
            error!("Speech synthesis request failed: {}", err);
            return Err(err);
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
