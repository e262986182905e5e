use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::logger;
use crate::models::{ImageEditRequest, ImageGenerationRequest, ImagePayload, ImageResult};
use crate::web::handlers::error_response;
use crate::web::models::{EditImageRequest, GenerateImageRequest, ImageResponse};
use crate::web::server::AppState;

/// Generate an image from a text prompt
pub async fn generate(
    data: web::Data<AppState>,
    body: web::Json<GenerateImageRequest>,
) -> impl Responder {
    let _timer = logger::timer("image generation");

    let request = ImageGenerationRequest {
        prompt: body.prompt.clone(),
        aspect_ratio: body.aspect_ratio,
        model_id: body.model_id.clone(),
        num_images: Some(1),
    };

    match data.client.image().generate(request).await {
        Ok(response) => {
            let result = ImageResult::new(body.prompt.clone(), &response);

            let mut session = data.session.write().await;
            session.record(result.clone());

            HttpResponse::Ok().json(ImageResponse {
                success: true,
                image: result,
            })
        }
        Err(e) => {
            error!("Image generation failed: {}", e);
            error_response(&e)
        }
    }
}

/// Edit a previous result guided by a follow-up prompt
pub async fn edit(
    data: web::Data<AppState>,
    body: web::Json<EditImageRequest>,
) -> impl Responder {
    let payload = match ImagePayload::from_data_url(&body.source) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Rejected edit source: {}", e);
            return error_response(&e);
        }
    };

    let _timer = logger::timer("image edit");

    let request = ImageEditRequest {
        prompt: body.prompt.clone(),
        image: payload,
        model_id: body.model_id.clone(),
    };

    match data.client.image().edit(request).await {
        Ok(response) => {
            let result = ImageResult::new(format!("Edit: \"{}\"", body.prompt), &response);

            let mut session = data.session.write().await;
            session.record_edited(result.clone());

            HttpResponse::Ok().json(ImageResponse {
                success: true,
                image: result,
            })
        }
        Err(e) => {
            error!("Image edit failed: {}", e);
            error_response(&e)
        }
    }
}
