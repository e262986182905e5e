use serde::{Deserialize, Serialize};

use crate::models::{AspectRatio, ImageResult, ModelInfo, PromptIdeas};
use crate::session::Mode;

/// Generate request body
#[derive(Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
    pub aspect_ratio: Option<AspectRatio>,
    pub model_id: Option<String>,
}

/// Edit request body; `source` is the data URL of a previous result
#[derive(Deserialize)]
pub struct EditImageRequest {
    pub prompt: String,
    pub source: String,
    pub model_id: Option<String>,
}

/// Prompt ideas request body
#[derive(Deserialize)]
pub struct IdeasRequest {
    pub topic: String,
}

/// Mode switch request
#[derive(Deserialize)]
pub struct ModeRequest {
    pub mode: Mode,
    pub source: Option<String>,
}

/// Successful image response
#[derive(Serialize)]
pub struct ImageResponse {
    pub success: bool,
    pub image: ImageResult,
}

/// Prompt ideas response
#[derive(Serialize)]
pub struct IdeasResponse {
    pub success: bool,
    pub ideas: PromptIdeas,
}

/// Session snapshot response
#[derive(Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub mode: Mode,
    pub current: Option<ImageResult>,
    pub images: Vec<ImageResult>,
}

/// Model catalogue response
#[derive(Serialize)]
pub struct ModelsResponse {
    pub success: bool,
    pub models: Vec<ModelInfo>,
}

/// Status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub api_key_configured: bool,
}

/// Generic response
#[derive(Serialize)]
pub struct GenericResponse {
    pub success: bool,
    pub message: String,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
