use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    identity::CurrentUser,
    models::dto::request::{CreateBookClubRequest, PostMessageRequest, SetCurrentBookRequest},
    models::dto::response::SuccessResponse,
};

#[get("/api/book-clubs")]
pub async fn list_book_clubs(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let clubs = state.book_club_service.list_for_user(user.id()).await?;
    Ok(HttpResponse::Ok().json(clubs))
}

#[post("/api/book-clubs")]
pub async fn create_book_club(
    state: web::Data<AppState>,
    user: CurrentUser,
    request: web::Json<CreateBookClubRequest>,
) -> Result<HttpResponse, AppError> {
    let club = state
        .book_club_service
        .create(user.id(), request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(club))
}

#[post("/api/book-clubs/join/{code}")]
pub async fn join_book_club(
    state: web::Data<AppState>,
    user: CurrentUser,
    code: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let club = state.book_club_service.join(user.id(), &code).await?;
    Ok(HttpResponse::Ok().json(club))
}

#[get("/api/book-clubs/{id}")]
pub async fn get_book_club(
    state: web::Data<AppState>,
    user: CurrentUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let detail = state.book_club_service.get_detail(&id, user.id()).await?;
    Ok(HttpResponse::Ok().json(detail))
}

#[post("/api/book-clubs/{id}/leave")]
pub async fn leave_book_club(
    state: web::Data<AppState>,
    user: CurrentUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.book_club_service.leave(&id, user.id()).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[post("/api/book-clubs/{id}/current-book")]
pub async fn set_current_book(
    state: web::Data<AppState>,
    _user: CurrentUser,
    id: web::Path<String>,
    request: web::Json<SetCurrentBookRequest>,
) -> Result<HttpResponse, AppError> {
    let club = state
        .book_club_service
        .set_current_book(&id, request.into_inner().book_id)
        .await?;
    Ok(HttpResponse::Ok().json(club))
}

#[get("/api/book-clubs/{id}/members")]
pub async fn list_members(
    state: web::Data<AppState>,
    _user: CurrentUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let members = state.book_club_service.members(&id).await?;
    Ok(HttpResponse::Ok().json(members))
}

#[get("/api/book-clubs/{id}/messages")]
pub async fn list_messages(
    state: web::Data<AppState>,
    user: CurrentUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let messages = state.book_club_service.messages(&id, user.id()).await?;
    Ok(HttpResponse::Ok().json(messages))
}

#[post("/api/book-clubs/{id}/messages")]
pub async fn post_message(
    state: web::Data<AppState>,
    user: CurrentUser,
    id: web::Path<String>,
    request: web::Json<PostMessageRequest>,
) -> Result<HttpResponse, AppError> {
    let message = state
        .book_club_service
        .post_message(&id, user.id(), request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(message))
}
