use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{GeminiError, Result};

/// Aspect ratios accepted by the Imagen generate call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "3:4")]
    StandardPortrait,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
            Self::Standard => "4:3",
            Self::StandardPortrait => "3:4",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub aspect_ratio: Option<AspectRatio>,
    pub model_id: Option<String>,
    pub num_images: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageEditRequest {
    pub prompt: String,
    pub image: ImagePayload,
    pub model_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImageGenerationResponse {
    pub image_data: String, // Base64 encoded
    pub mime_type: String,
    pub model: String,
}

/// Raw image bytes plus their MIME type, convertible to and from the
/// `data:` URLs the UI displays.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagePayload {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl ImagePayload {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Parses a `data:{mime};base64,{payload}` URL back into bytes.
    pub fn from_data_url(data_url: &str) -> Result<Self> {
        let rest = data_url
            .strip_prefix("data:")
            .ok_or_else(|| GeminiError::Request("Invalid data URL".to_string()))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| GeminiError::Request("Invalid data URL".to_string()))?;

        let mime_type = header
            .strip_suffix(";base64")
            .filter(|mime| !mime.is_empty())
            .ok_or_else(|| GeminiError::Request("Invalid data URL".to_string()))?;

        let data = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| GeminiError::Request(format!("Invalid data URL payload: {}", e)))?;

        Ok(Self::new(data, mime_type))
    }

    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }
}

/// A generated or edited image as kept in the session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResult {
    pub id: String,
    pub data_url: String,
    pub prompt: String,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
}

impl ImageResult {
    pub fn new(prompt: impl Into<String>, response: &ImageGenerationResponse) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            data_url: format!(
                "data:{};base64,{}",
                response.mime_type, response.image_data
            ),
            prompt: prompt.into(),
            mime_type: response.mime_type.clone(),
            created_at: Utc::now(),
        }
    }
}

/// Imagen `:predict` response body.
#[derive(Serialize, Deserialize)]
pub struct ImagenResponse {
    #[serde(default)]
    pub predictions: Vec<ImagenPrediction>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagenPrediction {
    pub bytes_base64_encoded: String,
    #[serde(default)]
    pub mime_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_serde() {
        let ratio: AspectRatio = serde_json::from_str("\"16:9\"").unwrap();
        assert_eq!(ratio, AspectRatio::Landscape);
        assert_eq!(serde_json::to_string(&ratio).unwrap(), "\"16:9\"");
        assert_eq!(AspectRatio::default().as_str(), "1:1");
    }

    #[test]
    fn test_data_url_round_trip() {
        let payload = ImagePayload::new(vec![0xFF, 0xD8, 0xFF, 0xE0], "image/jpeg");
        let url = payload.to_data_url();
        assert!(url.starts_with("data:image/jpeg;base64,"));

        let parsed = ImagePayload::from_data_url(&url).unwrap();
        assert_eq!(parsed.mime_type, "image/jpeg");
        assert_eq!(parsed.data, vec![0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[test]
    fn test_malformed_data_urls_are_request_errors() {
        for bad in [
            "image/png;base64,AAAA",
            "data:image/png,AAAA",
            "data:;base64,AAAA",
            "data:image/png;base64",
            "data:image/png;base64,not-base64!!!",
        ] {
            match ImagePayload::from_data_url(bad) {
                Err(GeminiError::Request(_)) => {}
                other => panic!("expected request error for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_image_result_from_response() {
        let response = ImageGenerationResponse {
            image_data: "aGVsbG8=".to_string(),
            mime_type: "image/jpeg".to_string(),
            model: "imagen-4.0-generate-001".to_string(),
        };
        let result = ImageResult::new("a red fox", &response);

        assert_eq!(result.prompt, "a red fox");
        assert_eq!(result.mime_type, "image/jpeg");
        assert_eq!(result.data_url, "data:image/jpeg;base64,aGVsbG8=");
        assert!(!result.id.is_empty());
    }

    #[test]
    fn test_imagen_response_deserialization() {
        let json = r#"{
            "predictions": [
                {"bytesBase64Encoded": "aGVsbG8=", "mimeType": "image/jpeg"}
            ]
        }"#;
        let response: ImagenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.predictions.len(), 1);
        assert_eq!(response.predictions[0].bytes_base64_encoded, "aGVsbG8=");
        assert_eq!(
            response.predictions[0].mime_type.as_deref(),
            Some("image/jpeg")
        );
    }
}
