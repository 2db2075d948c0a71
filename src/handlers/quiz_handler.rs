use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    identity::CurrentUser,
    models::dto::request::{GenerateQuizRequest, SubmitQuizRequest},
};

#[post("/api/books/{id}/quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    _user: CurrentUser,
    id: web::Path<String>,
    request: Option<web::Json<GenerateQuizRequest>>,
) -> Result<HttpResponse, AppError> {
    let difficulty = request.map(|r| r.into_inner().difficulty).unwrap_or_default();
    let quiz = state.quiz_service.generate_for_book(&id, difficulty).await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[get("/api/books/{id}/quiz")]
pub async fn latest_quiz_for_book(
    state: web::Data<AppState>,
    _user: CurrentUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.latest_for_book(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[get("/api/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    _user: CurrentUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/api/quizzes/{id}/submit")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    user: CurrentUser,
    id: web::Path<String>,
    request: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .submit_quiz(user.id(), &id, request.into_inner().answers)
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[get("/api/stats/quizzes")]
pub async fn quiz_stats(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let stats = state.quiz_service.quiz_stats(user.id()).await?;
    Ok(HttpResponse::Ok().json(stats))
}
