use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::error::GeminiError;
use crate::session::Mode;
use crate::web::handlers::error_response;
use crate::web::models::{GenericResponse, ModeRequest, SessionResponse};
use crate::web::server::AppState;

/// Current session snapshot: mode, current image and newest-first history
pub async fn get_history(data: web::Data<AppState>) -> impl Responder {
    let session = data.session.read().await;

    HttpResponse::Ok().json(SessionResponse {
        success: true,
        mode: session.mode(),
        current: session.current().cloned(),
        images: session.history().to_vec(),
    })
}

/// Switch between generate and edit mode
pub async fn set_mode(
    data: web::Data<AppState>,
    body: web::Json<ModeRequest>,
) -> impl Responder {
    let mut session = data.session.write().await;

    match body.mode {
        Mode::Edit => {
            let source = match body.source.clone() {
                Some(source) => source,
                None => {
                    let e = GeminiError::Request(
                        "No image selected for editing".to_string(),
                    );
                    error!("Rejected mode switch: {}", e);
                    return error_response(&e);
                }
            };
            session.begin_edit(source);
        }
        Mode::Generate => session.cancel_edit(),
    }

    HttpResponse::Ok().json(GenericResponse {
        success: true,
        message: format!("Mode set to {:?}", session.mode()),
    })
}

/// Discard the session history and current image
pub async fn clear_history(data: web::Data<AppState>) -> impl Responder {
    let mut session = data.session.write().await;
    session.clear();

    HttpResponse::Ok().json(GenericResponse {
        success: true,
        message: "Session cleared".to_string(),
    })
}
