use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    identity::CurrentUser,
    models::dto::request::{
        CoverQuery, CreateBookRequest, GenerateSummaryRequest, SearchQuery, UpdateBookRequest,
    },
    models::dto::response::SummaryResponse,
};

#[get("/api/books")]
pub async fn list_books(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let books = state.book_service.list_books(user.id()).await?;
    Ok(HttpResponse::Ok().json(books))
}

#[get("/api/books/search")]
pub async fn search_books(
    state: web::Data<AppState>,
    user: CurrentUser,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let books = state.book_service.search_books(user.id(), &query.q).await?;
    Ok(HttpResponse::Ok().json(books))
}

#[get("/api/books/covers")]
pub async fn search_covers(
    state: web::Data<AppState>,
    _user: CurrentUser,
    query: web::Query<CoverQuery>,
) -> Result<HttpResponse, AppError> {
    let covers = state
        .covers
        .search_covers(&query.title, query.author.as_deref().unwrap_or(""))
        .await?;
    Ok(HttpResponse::Ok().json(covers))
}

#[post("/api/books")]
pub async fn create_book(
    state: web::Data<AppState>,
    user: CurrentUser,
    request: web::Json<CreateBookRequest>,
) -> Result<HttpResponse, AppError> {
    let book = state
        .book_service
        .create_book(user.id(), request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(book))
}

#[get("/api/books/{id}")]
pub async fn get_book(
    state: web::Data<AppState>,
    _user: CurrentUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let book = state.book_service.get_book(&id).await?;
    Ok(HttpResponse::Ok().json(book))
}

#[patch("/api/books/{id}")]
pub async fn update_book(
    state: web::Data<AppState>,
    user: CurrentUser,
    id: web::Path<String>,
    request: web::Json<UpdateBookRequest>,
) -> Result<HttpResponse, AppError> {
    let book = state
        .book_service
        .update_book(user.id(), &id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(book))
}

#[delete("/api/books/{id}")]
pub async fn delete_book(
    state: web::Data<AppState>,
    _user: CurrentUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.book_service.delete_book(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[derive(serde::Deserialize)]
pub struct ExternalSearchQuery {
    q: Option<String>,
}

#[get("/api/external-books/search")]
pub async fn external_books_search(
    state: web::Data<AppState>,
    _user: CurrentUser,
    query: web::Query<ExternalSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let q = query.q.as_deref().unwrap_or("").trim().to_string();
    if q.len() < 2 {
        return Ok(HttpResponse::Ok().json(Vec::<serde_json::Value>::new()));
    }

    let books = state.covers.search_books(&q).await?;
    Ok(HttpResponse::Ok().json(books))
}

#[post("/api/books/{id}/summary")]
pub async fn generate_summary(
    state: web::Data<AppState>,
    _user: CurrentUser,
    id: web::Path<String>,
    request: Option<web::Json<GenerateSummaryRequest>>,
) -> Result<HttpResponse, AppError> {
    let length = request.map(|r| r.into_inner().length).unwrap_or_default();
    let summary = state.book_service.generate_summary(&id, length).await?;
    Ok(HttpResponse::Ok().json(SummaryResponse { summary }))
}
