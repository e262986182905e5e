use rimagine::{GeminiClient, GeminiConfig, ImageGenerationRequest, PromptIdeasRequest};
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    rimagine::logger::init_with_config(
        rimagine::logger::LoggerConfig::development()
            .with_level(rimagine::logger::LogLevel::Debug),
    )?;

    log::info!("🔄 Creating Gemini client...");
    let client = GeminiClient::new(GeminiConfig::from_env())?;

    log::info!("📚 Available models:");
    for model in GeminiClient::supported_models() {
        log::info!("  {} - {} ({})", model.id, model.name, model.provider);
    }

    // Ask for an inspirational prompt first
    log::info!("💭 Requesting prompt ideas...");
    let ideas = client
        .ideas()
        .suggest(PromptIdeasRequest {
            topic: "bioluminescent deep sea creatures".to_string(),
            model_id: None,
        })
        .await?;

    log::info!("✨ Suggestion: {}", ideas.suggestion);
    for source in &ideas.sources {
        log::info!("  📎 {} ({})", source.title, source.uri);
    }

    // Then generate an image from it
    log::info!("🎨 Generating image...");
    let response = client
        .image()
        .generate(ImageGenerationRequest {
            prompt: ideas.suggestion,
            aspect_ratio: None,
            model_id: None,
            num_images: Some(1),
        })
        .await?;

    log::info!("✅ Image generated with model {}", response.model);

    use base64::Engine;
    let bytes = base64::engine::general_purpose::STANDARD.decode(&response.image_data)?;
    let filename = format!("generated_{}.jpg", chrono::Utc::now().timestamp());
    fs::write(&filename, bytes)?;
    log::info!("💾 Image saved to: {}", filename);

    Ok(())
}
