use crate::{
    config::{GeminiConfig, DEFAULT_EDIT_MODEL, DEFAULT_IMAGE_MODEL},
    error::{GeminiError, Result},
    gemini::wire::{
        Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData,
        Part,
    },
    models::{
        ImageEditRequest, ImageGenerationRequest, ImageGenerationResponse, ImagenResponse,
        ModelCategory, ModelInfo,
    },
};
use serde_json::json;

#[derive(Clone)]
pub struct ImageClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    image_model: String,
    edit_model: String,
}

impl ImageClient {
    pub fn new(
        http: reqwest::Client,
        api_base: String,
        api_key: String,
        config: &GeminiConfig,
    ) -> Self {
        Self {
            http,
            api_base,
            api_key,
            image_model: config
                .image_model
                .clone()
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            edit_model: config
                .edit_model
                .clone()
                .unwrap_or_else(|| DEFAULT_EDIT_MODEL.to_string()),
        }
    }

    /// Generates an image from a text prompt via the Imagen `:predict` call.
    pub async fn generate(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse> {
        if request.prompt.trim().is_empty() {
            return Err(GeminiError::Request("Prompt must not be empty".to_string()));
        }

        let model_id = request.model_id.as_deref().unwrap_or(&self.image_model);
        let aspect_ratio = request.aspect_ratio.unwrap_or_default();

        let payload = json!({
            "instances": [
                { "prompt": request.prompt }
            ],
            "parameters": {
                "sampleCount": request.num_images.unwrap_or(1),
                "aspectRatio": aspect_ratio.as_str(),
                "outputMimeType": "image/jpeg"
            }
        });

        log::info!(
            "Generating image with model: {} (aspect ratio {})",
            model_id,
            aspect_ratio
        );

        let url = format!("{}/v1beta/models/{}:predict", self.api_base, model_id);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(super::api_error(response).await);
        }

        let imagen: ImagenResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Response(e.to_string()))?;

        let prediction = imagen
            .predictions
            .into_iter()
            .next()
            .ok_or_else(|| GeminiError::Response("No images were generated".to_string()))?;

        Ok(ImageGenerationResponse {
            image_data: prediction.bytes_base64_encoded,
            mime_type: prediction
                .mime_type
                .unwrap_or_else(|| "image/jpeg".to_string()),
            model: model_id.to_string(),
        })
    }

    /// Edits a previously produced image guided by a follow-up prompt.
    ///
    /// The input image is sent as an inline-data part ahead of the prompt
    /// text; the first inline-data part of the first candidate is the result.
    pub async fn edit(&self, request: ImageEditRequest) -> Result<ImageGenerationResponse> {
        if request.prompt.trim().is_empty() {
            return Err(GeminiError::Request("Prompt must not be empty".to_string()));
        }

        let model_id = request.model_id.as_deref().unwrap_or(&self.edit_model);

        let payload = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: request.image.mime_type.clone(),
                            data: request.image.to_base64(),
                        },
                    },
                    Part::Text {
                        text: request.prompt.clone(),
                    },
                ],
            }],
            tools: None,
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
            }),
        };

        log::info!("Editing image with model: {}", model_id);

        let url = format!("{}/v1beta/models/{}:generateContent", self.api_base, model_id);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(super::api_error(response).await);
        }

        let content: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Response(e.to_string()))?;

        if let Some(message) = content.blocked_message() {
            return Err(GeminiError::ContentBlocked(message));
        }

        let candidate = content
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GeminiError::Response("No edited image was returned".to_string()))?;

        if let Some(reason) = candidate.safety_blocked() {
            return Err(GeminiError::ContentBlocked(format!(
                "Edit blocked by safety filter: {}",
                reason
            )));
        }

        let inline = candidate
            .inline_data()
            .ok_or_else(|| GeminiError::Response("No edited image was returned".to_string()))?;

        Ok(ImageGenerationResponse {
            image_data: inline.data.clone(),
            mime_type: inline.mime_type.clone(),
            model: model_id.to_string(),
        })
    }

    pub fn supported_models() -> Vec<ModelInfo> {
        vec![
            ModelInfo {
                id: "imagen-4.0-generate-001".to_string(),
                name: "Imagen 4".to_string(),
                provider: "Google".to_string(),
                category: ModelCategory::Image,
                description: "Text-to-image generation".to_string(),
            },
            ModelInfo {
                id: "gemini-2.5-flash-image".to_string(),
                name: "Gemini 2.5 Flash Image".to_string(),
                provider: "Google".to_string(),
                category: ModelCategory::Edit,
                description: "Prompt-guided image editing".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AspectRatio, ImagePayload};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ImageClient {
        let config = GeminiConfig::new();
        ImageClient::new(
            reqwest::Client::new(),
            server.uri(),
            "test-key".to_string(),
            &config,
        )
    }

    #[tokio::test]
    async fn test_generate_returns_first_prediction() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/imagen-4.0-generate-001:predict"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "instances": [{ "prompt": "a red fox" }],
                "parameters": { "sampleCount": 1, "aspectRatio": "16:9" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "predictions": [
                    { "bytesBase64Encoded": "aGVsbG8=", "mimeType": "image/jpeg" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .generate(ImageGenerationRequest {
                prompt: "a red fox".to_string(),
                aspect_ratio: Some(AspectRatio::Landscape),
                model_id: None,
                num_images: None,
            })
            .await
            .unwrap();

        assert_eq!(response.image_data, "aGVsbG8=");
        assert_eq!(response.mime_type, "image/jpeg");
        assert_eq!(response.model, "imagen-4.0-generate-001");
    }

    #[tokio::test]
    async fn test_generate_empty_predictions_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/imagen-4.0-generate-001:predict"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "predictions": [] })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(ImageGenerationRequest {
                prompt: "a red fox".to_string(),
                aspect_ratio: None,
                model_id: None,
                num_images: None,
            })
            .await
            .unwrap_err();

        match err {
            GeminiError::Response(msg) => assert_eq!(msg, "No images were generated"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_prompt_without_calling_api() {
        let server = MockServer::start().await;

        let err = client_for(&server)
            .generate(ImageGenerationRequest {
                prompt: "   ".to_string(),
                aspect_ratio: None,
                model_id: None,
                num_images: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, GeminiError::Request(_)));
    }

    #[tokio::test]
    async fn test_generate_maps_rate_limit() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/imagen-4.0-generate-001:predict"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": { "code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED" }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(ImageGenerationRequest {
                prompt: "a red fox".to_string(),
                aspect_ratio: None,
                model_id: None,
                num_images: None,
            })
            .await
            .unwrap_err();

        match err {
            GeminiError::RateLimited(msg) => assert_eq!(msg, "Quota exceeded"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_edit_returns_inline_data() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash-image:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": { "responseModalities": ["IMAGE"] }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "parts": [
                            { "text": "Here you go" },
                            { "inlineData": { "mimeType": "image/png", "data": "QUJD" } }
                        ]
                    },
                    "finishReason": "STOP"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .edit(ImageEditRequest {
                prompt: "make it blue".to_string(),
                image: ImagePayload::new(vec![1, 2, 3], "image/jpeg"),
                model_id: None,
            })
            .await
            .unwrap();

        assert_eq!(response.image_data, "QUJD");
        assert_eq!(response.mime_type, "image/png");
        assert_eq!(response.model, "gemini-2.5-flash-image");
    }

    #[tokio::test]
    async fn test_edit_without_image_part_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash-image:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "sorry, text only" }] }
                }]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .edit(ImageEditRequest {
                prompt: "make it blue".to_string(),
                image: ImagePayload::new(vec![1, 2, 3], "image/jpeg"),
                model_id: None,
            })
            .await
            .unwrap_err();

        match err {
            GeminiError::Response(msg) => assert_eq!(msg, "No edited image was returned"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_edit_safety_block_surfaces_as_content_blocked() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash-image:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "finishReason": "IMAGE_SAFETY" }]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .edit(ImageEditRequest {
                prompt: "make it blue".to_string(),
                image: ImagePayload::new(vec![1, 2, 3], "image/jpeg"),
                model_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, GeminiError::ContentBlocked(_)));
    }
}
