//! # Error Handling
//!
//! Every failure a handler can produce is an [`AppError`] variant, mapped once
//! into the uniform JSON body `{"error": <short label>, "details": <cause>}`
//! that the browser front end expects. Upstream failures keep the upstream's
//! HTTP status and raw body text so they stay diagnosable from the client side.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// A required credential is missing. Detected before any upstream I/O.
    Config(String),

    /// Client sent invalid or missing input (400).
    BadRequest(String),

    /// Uploaded file exceeds the configured size limit. Kept distinct from
    /// [`AppError::BadRequest`] so the client can show a specific message.
    FileTooLarge(String),

    /// An upstream service answered with a non-success status; `status` and
    /// `details` are passed through from the upstream response.
    Upstream {
        status: u16,
        label: &'static str,
        details: String,
    },

    /// Route does not exist (404).
    NotFound(String),

    /// Anything else (500).
    Internal(String),
}

impl AppError {
    /// Short machine-stable label placed in the `error` field.
    fn label(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Server configuration error",
            AppError::BadRequest(_) => "Bad request",
            AppError::FileTooLarge(_) => "File too large",
            AppError::Upstream { label, .. } => label,
            AppError::NotFound(_) => "Not found",
            AppError::Internal(_) => "Server error",
        }
    }

    fn details(&self) -> &str {
        match self {
            AppError::Config(msg)
            | AppError::BadRequest(msg)
            | AppError::FileTooLarge(msg)
            | AppError::NotFound(msg)
            | AppError::Internal(msg) => msg,
            AppError::Upstream { details, .. } => details,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.details())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) | AppError::FileTooLarge(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.label(),
            "details": self.details(),
        }))
    }
}

/// Network-level failures talking to an upstream (connect error, timeout)
/// surface as a 500 with the transport error text as details.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream {
            status: 500,
            label: "OpenAI API error",
            details: err.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
