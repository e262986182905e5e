use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::models::PromptIdeasRequest;
use crate::web::handlers::error_response;
use crate::web::models::{IdeasRequest, IdeasResponse};
use crate::web::server::AppState;

/// Request an inspirational prompt suggestion for a topic
pub async fn suggest(
    data: web::Data<AppState>,
    body: web::Json<IdeasRequest>,
) -> impl Responder {
    let request = PromptIdeasRequest {
        topic: body.topic.clone(),
        model_id: None,
    };

    match data.client.ideas().suggest(request).await {
        Ok(ideas) => HttpResponse::Ok().json(IdeasResponse {
            success: true,
            ideas,
        }),
        Err(e) => {
            error!("Prompt ideas request failed: {}", e);
            error_response(&e)
        }
    }
}
