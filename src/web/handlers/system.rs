use actix_web::{web, HttpResponse, Responder};

use crate::gemini::GeminiClient;
use crate::web::models::{ModelsResponse, StatusResponse};
use crate::web::server::AppState;

/// Get the service status
pub async fn get_status(data: web::Data<AppState>) -> impl Responder {
    let api_key_configured = std::env::var("GEMINI_API_KEY").is_ok();

    let response = StatusResponse {
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: data.started_at.elapsed().as_secs(),
        api_key_configured,
    };

    HttpResponse::Ok().json(response)
}

/// Get the supported model catalogue
pub async fn get_models() -> impl Responder {
    HttpResponse::Ok().json(ModelsResponse {
        success: true,
        models: GeminiClient::supported_models(),
    })
}
