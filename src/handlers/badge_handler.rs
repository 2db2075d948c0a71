use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, identity::CurrentUser,
    models::dto::response::tier_table,
};

#[get("/api/badges")]
pub async fn list_badges(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let badges = state.badge_service.list_badges(user.id()).await?;
    Ok(HttpResponse::Ok().json(badges))
}

/// The shared tier configuration, so clients render the same milestones the
/// evaluator awards against.
#[get("/api/badges/tiers")]
pub async fn badge_tiers() -> HttpResponse {
    HttpResponse::Ok().json(tier_table())
}
