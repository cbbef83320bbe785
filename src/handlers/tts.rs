//! # Speech Synthesis
//!
//! `POST /tts` validates the text and the two-voice selection, forwards to the
//! synthesis endpoint and streams the MP3 bytes straight back to the browser
//! as a downloadable attachment. Generated audio is never persisted
//! server-side.

use crate::error::AppError;
use crate::state::AppState;
use crate::upstream::Voice;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    pub voice: String,
}

/// Synthesize speech for the final script.
///
/// ## Endpoint: `POST /tts`
///
/// ## Request:
/// ```json
/// { "text": "Hello everyone", "voice": "orus" }
/// ```
///
/// ## Response:
/// `200 OK` with `Content-Type: audio/mpeg` and a `Content-Disposition`
/// attachment named `tts-<epoch-millis>.mp3`.
pub async fn tts(
    state: web::Data<AppState>,
    body: web::Json<TtsRequest>,
) -> Result<HttpResponse, AppError> {
    if body.text.trim().is_empty() {
        return Err(AppError::BadRequest("No text provided for TTS".to_string()));
    }

    let voice: Voice = body
        .voice
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid voice selection".to_string()))?;

    let audio = state.openai().synthesize(&body.text, voice).await?;

    let filename = format!("tts-{}.mp3", chrono::Utc::now().timestamp_millis());

    Ok(HttpResponse::Ok()
        .content_type("audio/mpeg")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(audio))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tts_request_parsing() {
        let request: TtsRequest =
            serde_json::from_str(r#"{"text": "Hi", "voice": "orus"}"#).unwrap();
        assert_eq!(request.text, "Hi");
        assert_eq!(request.voice, "orus");
    }
}
