use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited by the Gemini API: {0}")]
    RateLimited(String),

    #[error("Content blocked: {0}")]
    ContentBlocked(String),

    #[error("Response error: {0}")]
    Response(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl GeminiError {
    /// HTTP status the web layer should answer with for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            GeminiError::Config(_) => 500,
            GeminiError::Auth(_) => 502,
            GeminiError::Request(_) => 400,
            GeminiError::Api { .. } => 502,
            GeminiError::RateLimited(_) => 429,
            GeminiError::ContentBlocked(_) => 422,
            GeminiError::Response(_) => 502,
            GeminiError::Serialization(_) => 500,
            GeminiError::Network(_) => 502,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeminiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeminiError::Api {
            status: 404,
            message: "model not found".to_string(),
        };
        assert_eq!(err.to_string(), "Gemini API error (404): model not found");

        let err = GeminiError::Config("API key is missing".to_string());
        assert_eq!(err.to_string(), "Configuration error: API key is missing");
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(GeminiError::Request("empty prompt".into()).http_status(), 400);
        assert_eq!(GeminiError::RateLimited("quota".into()).http_status(), 429);
        assert_eq!(GeminiError::ContentBlocked("safety".into()).http_status(), 422);
        assert_eq!(
            GeminiError::Api {
                status: 500,
                message: "boom".into()
            }
            .http_status(),
            502
        );
    }
}
