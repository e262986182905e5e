pub mod ideas_client;
pub mod image_client;
pub mod wire;

use crate::{
    config::{GeminiConfig, DEFAULT_API_BASE},
    error::{GeminiError, Result},
    models::ModelInfo,
};
use std::time::Duration;

pub use ideas_client::IdeasClient;
pub use image_client::ImageClient;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Clone)]
pub struct GeminiClient {
    image_client: ImageClient,
    ideas_client: IdeasClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| {
                GeminiError::Config(
                    "API key is missing. Set GEMINI_API_KEY or configure one explicitly."
                        .to_string(),
                )
            })?;

        let api_base = config
            .api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GeminiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            image_client: ImageClient::new(http.clone(), api_base.clone(), api_key.clone(), &config),
            ideas_client: IdeasClient::new(http, api_base, api_key, &config),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn ideas(&self) -> &IdeasClient {
        &self.ideas_client
    }

    /// Full model catalogue across both sub-clients.
    pub fn supported_models() -> Vec<ModelInfo> {
        let mut models = ImageClient::supported_models();
        models.extend(IdeasClient::supported_models());
        models
    }
}

/// Maps a non-success API response onto a `GeminiError`, pulling the
/// human-readable message out of the standard `{"error": {...}}` body.
pub(crate) async fn api_error(response: reqwest::Response) -> GeminiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        401 | 403 => GeminiError::Auth(message),
        429 => GeminiError::RateLimited(message),
        _ => GeminiError::Api { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_requires_api_key() {
        // Shield against ambient credentials leaking into the test
        let config = GeminiConfig::new().with_api_base("http://localhost:9");
        let had_env = std::env::var("GEMINI_API_KEY").is_ok();
        if had_env {
            return;
        }

        match GeminiClient::new(config) {
            Err(GeminiError::Config(msg)) => assert!(msg.contains("API key is missing")),
            other => panic!("expected config error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_client_with_explicit_key() {
        let config = GeminiConfig::new().with_api_key("test-key");
        assert!(GeminiClient::new(config).is_ok());
    }

    #[test]
    fn test_supported_models_catalogue() {
        let models = GeminiClient::supported_models();
        assert!(models.iter().any(|m| m.id == "imagen-4.0-generate-001"));
        assert!(models.iter().any(|m| m.id == "gemini-2.5-flash-image"));
        assert!(models.iter().any(|m| m.id == "gemini-2.5-flash"));
    }
}
