//! # voice-pipeline-backend
//!
//! HTTP backend for a four-stage audio-to-narration pipeline:
//! upload → transcribe (`/convert`) → translate (`/translate`) →
//! enhance (`/enhance`) → synthesize (`/tts`). Each stage is an independent,
//! stateless proxy call to an OpenAI endpoint; the browser client sequences
//! the stages and displays intermediate text between them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod state;
pub mod upstream;

use actix_cors::Cors;
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use error::AppError;

/// Registers the full route table plus the JSON 404 fallback. Shared between
/// the binary and the integration tests so both exercise the same surface.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/health", web::get().to(health::health_check))
    .route("/convert", web::post().to(handlers::convert))
    .route("/translate", web::post().to(handlers::translate))
    .route("/enhance", web::post().to(handlers::enhance))
    .route("/tts", web::post().to(handlers::tts))
    .default_service(web::route().to(fallback));
}

/// Permissive cross-origin policy for the browser front end. Preflight
/// `OPTIONS` requests are answered here before any handler runs.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(actix_web::http::header::CONTENT_TYPE)
        .max_age(3600)
}

/// Any `OPTIONS` request is answered 200 with an empty body, whatever the
/// path; preflights with CORS request headers are already short-circuited by
/// the `Cors` middleware before reaching here. Everything else is a 404.
async fn fallback(req: HttpRequest) -> Result<HttpResponse, AppError> {
    if req.method() == Method::OPTIONS {
        return Ok(HttpResponse::Ok().finish());
    }
    Err(AppError::NotFound(req.path().to_string()))
}
