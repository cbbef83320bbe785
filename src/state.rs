//! # Application State
//!
//! Shared state handed to every request handler. It is deliberately immutable:
//! the configuration is loaded and validated once at startup, and the single
//! [`OpenAiClient`] owns the pooled HTTP client used for all upstream calls.
//! Nothing here is written after construction, so requests can run with any
//! degree of parallelism without coordination.

use crate::config::AppConfig;
use crate::upstream::OpenAiClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    openai: OpenAiClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let openai = OpenAiClient::new(&config.openai);
        Self {
            config: Arc::new(config),
            openai,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn openai(&self) -> &OpenAiClient {
        &self.openai
    }
}
