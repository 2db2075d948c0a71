use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    identity::CurrentUser,
    models::dto::response::{SuccessResponse, UnreadCountResponse},
};

#[get("/api/notifications")]
pub async fn list_notifications(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let notifications = state.notification_service.list(user.id()).await?;
    Ok(HttpResponse::Ok().json(notifications))
}

#[get("/api/notifications/unread-count")]
pub async fn unread_count(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let count = state.notification_service.unread_count(user.id()).await?;
    Ok(HttpResponse::Ok().json(UnreadCountResponse { count }))
}

#[post("/api/notifications/{id}/read")]
pub async fn mark_read(
    state: web::Data<AppState>,
    _user: CurrentUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.notification_service.mark_read(&id).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[post("/api/notifications/read-all")]
pub async fn mark_all_read(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    state.notification_service.mark_all_read(user.id()).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}
