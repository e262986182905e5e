pub mod ideas;
pub mod images;
pub mod pages;
pub mod session;
pub mod system;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use crate::error::GeminiError;
use crate::web::models::ErrorResponse;

/// Maps a client error onto an HTTP response carrying the error string
/// the UI displays.
pub fn error_response(err: &GeminiError) -> HttpResponse {
    let status = StatusCode::from_u16(err.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    HttpResponse::build(status).json(ErrorResponse {
        success: false,
        error: err.to_string(),
    })
}
