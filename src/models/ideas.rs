use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PromptIdeasRequest {
    pub topic: String,
    pub model_id: Option<String>,
}

/// A single inspirational-search response. Replaced wholesale on each
/// new request; nothing is retained between calls.
#[derive(Debug, Clone, Serialize)]
pub struct PromptIdeas {
    pub suggestion: String,
    pub sources: Vec<GroundingSource>,
}

/// A web source the suggestion was grounded on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub uri: String,
    pub title: String,
}
