//! # Upload Intake + Transcription
//!
//! `POST /convert` accepts a single audio file as multipart form data, buffers
//! it in memory while enforcing the size ceiling, and forwards it to the
//! transcription endpoint. Nothing touches disk, so no artifact can outlive
//! the request.

use crate::error::AppError;
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::stream::StreamExt;
use serde_json::json;
use tracing::info;

/// MIME types the intake accepts, matching what the recorder front end emits.
const ALLOWED_TYPES: &[&str] = &[
    "audio/mpeg",
    "audio/mp4",
    "audio/wav",
    "audio/webm",
    "audio/m4a",
];

/// One client-submitted audio file, held only for the duration of the request.
struct UploadedAudio {
    data: Vec<u8>,
    filename: String,
    content_type: String,
}

/// Transcribe an uploaded audio file.
///
/// ## Endpoint: `POST /convert`
///
/// ## Request:
/// Multipart form data with a single audio file field named `file`,
/// at most 25 MiB.
///
/// ## Response:
/// ```json
/// { "text": "transcribed Korean text" }
/// ```
pub async fn convert(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    // Reject before consuming the body; an unconfigured server should not
    // buffer a 25 MiB upload it can never forward.
    if !state.config().has_api_key() {
        return Err(AppError::Config("OpenAI API key not configured".to_string()));
    }

    let max_bytes = state.config().upload.max_bytes;
    let mut upload: Option<UploadedAudio> = None;

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::BadRequest(format!("Multipart error: {}", e)))?;

        let field_name = field
            .content_disposition()
            .and_then(|d| d.get_name())
            .map(|s| s.to_string());

        if field_name.as_deref() != Some("file") {
            // Drain unrelated form fields so the stream can advance.
            while let Some(chunk) = field.next().await {
                chunk.map_err(|e| AppError::BadRequest(format!("Multipart error: {}", e)))?;
            }
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|d| d.get_filename())
            .unwrap_or("audio")
            .to_string();
        let content_type = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        if !ALLOWED_TYPES.contains(&content_type.as_str()) {
            return Err(AppError::BadRequest(
                "Invalid file type. Only audio files are allowed.".to_string(),
            ));
        }

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| AppError::BadRequest(format!("Chunk error: {}", e)))?;
            // Checked while streaming so an oversize body is dropped without
            // buffering the whole thing, let alone reaching the upstream.
            if data.len() + chunk.len() > max_bytes {
                return Err(AppError::FileTooLarge(format!(
                    "Maximum file size is {}MB",
                    max_bytes / (1024 * 1024)
                )));
            }
            data.extend_from_slice(&chunk);
        }

        upload = Some(UploadedAudio {
            data,
            filename,
            content_type,
        });
    }

    let upload = upload.ok_or_else(|| AppError::BadRequest("No audio file provided".to_string()))?;

    info!(
        filename = %upload.filename,
        content_type = %upload.content_type,
        size = upload.data.len(),
        "Processing uploaded audio file"
    );

    let text = state
        .openai()
        .transcribe(upload.data, upload.filename, &upload.content_type)
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "text": text })))
}
