use crate::{
    config::{GeminiConfig, DEFAULT_IDEAS_MODEL},
    error::{GeminiError, Result},
    gemini::wire::{Content, GenerateContentRequest, GenerateContentResponse, Part, Tool},
    models::{GroundingSource, ModelCategory, ModelInfo, PromptIdeas, PromptIdeasRequest},
};

#[derive(Clone)]
pub struct IdeasClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    ideas_model: String,
}

impl IdeasClient {
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
            ideas_model: config
                .ideas_model
                .clone()
                .unwrap_or_else(|| DEFAULT_IDEAS_MODEL.to_string()),
        }
    }

    /// Asks the model for a single detailed image prompt on the given topic,
    /// grounded with Google Search results.
    pub async fn suggest(&self, request: PromptIdeasRequest) -> Result<PromptIdeas> {
        if request.topic.trim().is_empty() {
            return Err(GeminiError::Request("Topic must not be empty".to_string()));
        }

        let model_id = request.model_id.as_deref().unwrap_or(&self.ideas_model);

        let full_prompt = format!(
            "Generate a single, highly detailed and creative image generation prompt \
             based on the topic: \"{}\". The prompt should be descriptive and \
             imaginative, suitable for an AI image generator.",
            request.topic
        );

        let payload = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: full_prompt }],
            }],
            tools: Some(vec![Tool::google_search()]),
            generation_config: None,
        };

        log::info!("Requesting prompt ideas with model: {}", model_id);

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
            .ok_or_else(|| GeminiError::Response("No suggestion was returned".to_string()))?;

        if let Some(reason) = candidate.safety_blocked() {
            return Err(GeminiError::ContentBlocked(format!(
                "Suggestion blocked by safety filter: {}",
                reason
            )));
        }

        let suggestion = candidate.text();

        let sources = candidate
            .grounding_metadata
            .as_ref()
            .and_then(|metadata| metadata.grounding_chunks.as_ref())
            .map(|chunks| {
                chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .map(|web| GroundingSource {
                        uri: web.uri.clone().unwrap_or_default(),
                        title: web.title.clone().unwrap_or_default(),
                    })
                    .filter(|source| !source.uri.is_empty() && !source.title.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(PromptIdeas {
            suggestion,
            sources,
        })
    }

    pub fn supported_models() -> Vec<ModelInfo> {
        vec![ModelInfo {
            id: "gemini-2.5-flash".to_string(),
            name: "Gemini 2.5 Flash".to_string(),
            provider: "Google".to_string(),
            category: ModelCategory::Text,
            description: "Search-grounded prompt inspiration".to_string(),
        }]
    }
}
