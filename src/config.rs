//! # Configuration Management
//!
//! Loads application configuration from layered sources, highest priority last:
//! built-in defaults, an optional `config.toml`, then environment variables with
//! the `APP_` prefix (e.g. `APP_SERVER_PORT=8080`). The deployment-platform
//! variables `HOST`, `PORT` and `OPENAI_API_KEY` are honored as special cases.
//!
//! The loaded configuration is validated once at startup and never mutated
//! afterwards; handlers receive it through [`crate::state::AppState`].

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub openai: OpenAiConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Settings for the three upstream OpenAI endpoints.
///
/// An empty `api_key` means "unconfigured": the server still starts (the
/// front end relies on `/health` to report this), but every proxied route
/// rejects with a configuration error before any upstream I/O.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub transcription_model: String,
    /// ISO 639-1 hint passed to the transcription endpoint. The pipeline is
    /// fixed to Korean source audio.
    pub transcription_language: String,
    pub tts_model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Upper bound on an uploaded audio file, in bytes.
    pub max_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            openai: OpenAiConfig {
                api_key: String::new(),
                base_url: "https://api.openai.com/v1".to_string(),
                chat_model: "gpt-3.5-turbo".to_string(),
                transcription_model: "whisper-1".to_string(),
                transcription_language: "ko".to_string(),
                tts_model: "tts-1".to_string(),
                timeout_secs: 60,
            },
            upload: UploadConfig {
                max_bytes: 25 * 1024 * 1024, // 25 MiB
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, `config.toml` and the environment.
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("_"));

        // Deployment platforms commonly inject these without the APP_ prefix.
        if let Ok(host) = env::var("HOST") {
            settings = settings.set_override("server.host", host)?;
        }

        if let Ok(port) = env::var("PORT") {
            settings = settings.set_override("server.port", port)?;
        }

        if let Ok(key) = env::var("OPENAI_API_KEY") {
            settings = settings.set_override("openai.api_key", key)?;
        }

        let config = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Reject configurations that cannot possibly serve requests.
    ///
    /// A missing API key is deliberately not a validation failure; it is
    /// surfaced at request time and through `/health` instead.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        if self.openai.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("OpenAI base URL cannot be empty"));
        }

        if self.openai.chat_model.trim().is_empty()
            || self.openai.transcription_model.trim().is_empty()
            || self.openai.tts_model.trim().is_empty()
        {
            return Err(anyhow::anyhow!("OpenAI model names cannot be empty"));
        }

        if self.openai.timeout_secs == 0 {
            return Err(anyhow::anyhow!("Upstream timeout must be greater than 0"));
        }

        if self.upload.max_bytes == 0 {
            return Err(anyhow::anyhow!("Upload size limit must be greater than 0"));
        }

        Ok(())
    }

    /// True once a non-blank upstream credential is configured.
    pub fn has_api_key(&self) -> bool {
        !self.openai.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.openai.base_url, "https://api.openai.com/v1");
        assert_eq!(config.openai.transcription_language, "ko");
        assert_eq!(config.upload.max_bytes, 25 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_key_is_not_a_validation_error() {
        let config = AppConfig::default();
        assert!(!config.has_api_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.openai.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.upload.max_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_api_key_counts_as_unconfigured() {
        let mut config = AppConfig::default();
        config.openai.api_key = "   ".to_string();
        assert!(!config.has_api_key());

        config.openai.api_key = "sk-test".to_string();
        assert!(config.has_api_key());
    }
}
