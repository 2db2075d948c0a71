use actix_web::{get, post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, identity::CurrentUser};

#[get("/api/recommendations")]
pub async fn list_recommendations(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let recommendations = state.recommendation_service.list(user.id()).await?;
    Ok(HttpResponse::Ok().json(recommendations))
}

#[post("/api/recommendations/generate")]
pub async fn generate_recommendations(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let recommendations = state.recommendation_service.generate(user.id()).await?;
    Ok(HttpResponse::Ok().json(recommendations))
}
