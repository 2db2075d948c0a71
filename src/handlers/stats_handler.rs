use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, identity::CurrentUser};

#[get("/api/user/stats")]
pub async fn get_user_stats(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let stats = state.stats_service.get_stats(user.id()).await?;
    Ok(HttpResponse::Ok().json(stats))
}
