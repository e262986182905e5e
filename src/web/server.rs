use actix_files as fs;
use actix_web::{middleware, web, App, HttpServer};
use log::info;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::gemini::GeminiClient;
use crate::session::StudioSession;
use crate::web::handlers;

// Data URLs for large images can run well past the 2 MB actix default
const JSON_PAYLOAD_LIMIT: usize = 20 * 1024 * 1024;

/// Start the web server hosting the studio UI and its JSON API
pub async fn start_web_server(config: Config, client: GeminiClient) -> std::io::Result<()> {
    let (host, port) = config.bind_addr();
    info!("Starting web server on http://{}:{}", host, port);

    // Create shared application state
    let app_state = web::Data::new(AppState {
        client,
        session: RwLock::new(StudioSession::new()),
        started_at: Instant::now(),
    });

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .app_data(web::JsonConfig::default().limit(JSON_PAYLOAD_LIMIT))
            // Static files
            .service(fs::Files::new("/static", "./src/web/static"))
            // API routes
            .service(
                web::scope("/api")
                    // System APIs
                    .route("/status", web::get().to(handlers::system::get_status))
                    .route("/models", web::get().to(handlers::system::get_models))
                    // Image APIs
                    .route("/images/generate", web::post().to(handlers::images::generate))
                    .route("/images/edit", web::post().to(handlers::images::edit))
                    // Prompt ideas API
                    .route("/ideas", web::post().to(handlers::ideas::suggest))
                    // Session APIs
                    .route("/history", web::get().to(handlers::session::get_history))
                    .route("/history", web::delete().to(handlers::session::clear_history))
                    .route("/session/mode", web::post().to(handlers::session::set_mode)),
            )
            // Page routes
            .route("/", web::get().to(handlers::pages::index))
            // Default route for 404
            .default_service(web::get().to(handlers::pages::not_found))
    })
    .bind((host, port))?
    .run()
    .await
}

/// Shared application state for web handlers
pub struct AppState {
    pub client: GeminiClient,
    pub session: RwLock<StudioSession>,
    pub started_at: Instant,
}
