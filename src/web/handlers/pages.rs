use actix_web::{HttpResponse, Responder};
use handlebars::Handlebars;
use log::error;
use once_cell::sync::Lazy;
use serde_json::json;

use crate::models::AspectRatio;

/// Shared handlebars instance
static HBS: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut hbs = Handlebars::new();
    if let Err(e) = hbs.register_templates_directory(".hbs", "./src/web/templates") {
        error!("Error registering Handlebars templates: {}", e);
    }
    hbs
});

/// Serve the studio page
pub async fn index() -> impl Responder {
    let aspect_ratios: Vec<&str> = [
        AspectRatio::Square,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
        AspectRatio::Standard,
        AspectRatio::StandardPortrait,
    ]
    .iter()
    .map(|ratio| ratio.as_str())
    .collect();

    let context = json!({
        "title": "Rimagine",
        "version": env!("CARGO_PKG_VERSION"),
        "aspect_ratios": aspect_ratios,
    });

    match HBS.render("index", &context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(e) => {
            error!("Template rendering error: {}", e);
            HttpResponse::InternalServerError().body(format!("Template error: {}", e))
        }
    }
}

/// Serve the 404 page
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound()
        .content_type("text/html")
        .body("<html><body><h1>404</h1><p>Page not found. <a href=\"/\">Back to the studio</a></p></body></html>")
}
