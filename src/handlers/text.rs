//! # Translation and Enhancement
//!
//! `POST /translate` and `POST /enhance` share one request shape and one
//! upstream wire format; only the system instruction and the response field
//! name differ. The server never chains the stages; the browser sequences
//! them and may let the user edit the text in between.

use crate::error::AppError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

const TRANSLATE_INSTRUCTION: &str = "You are a Korean to English translator. \
Translate the given Korean text to English accurately while maintaining the \
original meaning and nuance. Only respond with the translation, no additional text.";

const ENHANCE_INSTRUCTION: &str = "You are a YouTube script editor. Enhance the \
given English text to be more engaging and natural for YouTube. Use natural, \
daily-use English. Avoid academic terms. Be motivational when possible. Do not \
use emojis. Only respond with the enhanced text, no additional commentary.";

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// Translate Korean text to English.
///
/// ## Endpoint: `POST /translate`
///
/// ## Request:
/// ```json
/// { "text": "안녕하세요" }
/// ```
///
/// ## Response:
/// ```json
/// { "translation": "Hello." }
/// ```
pub async fn translate(
    state: web::Data<AppState>,
    body: web::Json<TextRequest>,
) -> Result<HttpResponse, AppError> {
    let text = require_text(&body.text, "No text provided for translation")?;

    let translation = state
        .openai()
        .chat_completion(TRANSLATE_INSTRUCTION, text)
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "translation": translation })))
}

/// Rewrite English text as natural YouTube narration.
///
/// ## Endpoint: `POST /enhance`
///
/// ## Response:
/// ```json
/// { "enhanced": "rewritten script text" }
/// ```
pub async fn enhance(
    state: web::Data<AppState>,
    body: web::Json<TextRequest>,
) -> Result<HttpResponse, AppError> {
    let text = require_text(&body.text, "No text provided for enhancement")?;

    let enhanced = state
        .openai()
        .chat_completion(ENHANCE_INSTRUCTION, text)
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "enhanced": enhanced })))
}

/// Whitespace-only input is treated the same as missing input: rejected
/// before any upstream call.
fn require_text<'a>(text: &'a str, message: &str) -> Result<&'a str, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::BadRequest(message.to_string()));
    }
    Ok(text)
}
