use std::env;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";
pub const DEFAULT_EDIT_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_IDEAS_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub image_model: Option<String>,
    pub edit_model: Option<String>,
    pub ideas_model: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            api_base: None,
            image_model: None,
            edit_model: None,
            ideas_model: None,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").ok();
        let api_base = env::var("GEMINI_API_BASE").ok();
        let image_model = env::var("RIMAGINE_IMAGE_MODEL").ok();
        let edit_model = env::var("RIMAGINE_EDIT_MODEL").ok();
        let ideas_model = env::var("RIMAGINE_IDEAS_MODEL").ok();

        GeminiConfig {
            api_key,
            api_base,
            image_model,
            edit_model,
            ideas_model,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_image_model(mut self, model_id: impl Into<String>) -> Self {
        self.image_model = Some(model_id.into());
        self
    }

    pub fn with_edit_model(mut self, model_id: impl Into<String>) -> Self {
        self.edit_model = Some(model_id.into());
        self
    }

    pub fn with_ideas_model(mut self, model_id: impl Into<String>) -> Self {
        self.ideas_model = Some(model_id.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub gemini: Option<GeminiConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: None,
            port: None,
            gemini: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let host = env::var("RIMAGINE_HOST").ok();
        let port = env::var("RIMAGINE_PORT")
            .ok()
            .and_then(|port| port.parse().ok());

        Config {
            host,
            port,
            gemini: Some(GeminiConfig::from_env()),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_gemini(mut self, config: GeminiConfig) -> Self {
        self.gemini = Some(config);
        self
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (
            self.host.clone().unwrap_or_else(|| "127.0.0.1".to_string()),
            self.port.unwrap_or(8080),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_config_builders() {
        let config = GeminiConfig::new()
            .with_api_key("test-key")
            .with_image_model("imagen-4.0-generate-001");

        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(
            config.image_model.as_deref(),
            Some("imagen-4.0-generate-001")
        );
        assert!(config.api_base.is_none());
    }

    #[test]
    fn test_default_bind_addr() {
        let config = Config::new();
        assert_eq!(config.bind_addr(), ("127.0.0.1".to_string(), 8080));

        let config = Config::new().with_host("0.0.0.0").with_port(3000);
        assert_eq!(config.bind_addr(), ("0.0.0.0".to_string(), 3000));
    }
}
