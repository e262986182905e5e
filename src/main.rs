use rimagine::{Config, GeminiClient};
use std::env;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    rimagine::logger::init_with_config(
        rimagine::logger::LoggerConfig::development()
            .with_level(rimagine::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking Gemini environment...");

    // Check the key without printing the actual value for security
    match env::var("GEMINI_API_KEY") {
        Ok(api_key) => {
            log::info!("✅ Gemini API key found in environment");
            log::debug!(
                "API key starts with: {}...",
                &api_key[..4.min(api_key.len())]
            );
        }
        Err(_) => {
            log::warn!("⚠️  No GEMINI_API_KEY in environment variables");
            log::error!("❌ Image generation will fail until a key is configured");
        }
    }

    let config = Config::from_env();
    let gemini_config = config.gemini.clone().unwrap_or_default();

    log::info!("🔄 Creating Gemini client...");
    let client = match GeminiClient::new(gemini_config) {
        Ok(client) => {
            log::info!("✅ Gemini client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize Gemini client: {}", e);
            return Err(e.into());
        }
    };

    log::info!("📚 Available models:");
    for model in GeminiClient::supported_models() {
        log::info!("  {} - {} ({})", model.id, model.name, model.provider);
    }

    let (host, port) = config.bind_addr();
    rimagine::logger::log_startup_info("Rimagine", env!("CARGO_PKG_VERSION"), &host, port);
    rimagine::logger::log_config_info(&config);

    rimagine::web::server::start_web_server(config, client).await?;

    Ok(())
}
