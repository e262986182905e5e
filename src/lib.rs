pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod session;
pub mod web;

pub use config::{Config, GeminiConfig};
pub use error::{GeminiError, Result};
pub use gemini::{GeminiClient, IdeasClient, ImageClient};
pub use models::{
    AspectRatio, GroundingSource, ImageEditRequest, ImageGenerationRequest,
    ImageGenerationResponse, ImagePayload, ImageResult, ModelCategory, ModelInfo, PromptIdeas,
    PromptIdeasRequest,
};
pub use session::{Mode, StudioSession};
