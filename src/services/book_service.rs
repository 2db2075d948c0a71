use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Book, BookStatus, StatField},
    models::dto::request::{CreateBookRequest, SummaryLength, UpdateBookRequest},
    repositories::BookRepository,
    services::{
        ai::AiClient, badge_service::BadgeService, covers::CoverSource,
        stats_service::StatsService,
    },
};

/// Seeded into an empty shelf on first activity.
const STARTER_BOOKS: [(&str, &str); 2] = [
    ("Cosmos", "Carl Sagan"),
    ("Moby Dick", "Herman Melville"),
];

pub struct BookService {
    repository: Arc<dyn BookRepository>,
    covers: Arc<dyn CoverSource>,
    ai: Arc<dyn AiClient>,
    stats: Arc<StatsService>,
    badges: Arc<BadgeService>,
}

impl BookService {
    pub fn new(
        repository: Arc<dyn BookRepository>,
        covers: Arc<dyn CoverSource>,
        ai: Arc<dyn AiClient>,
        stats: Arc<StatsService>,
        badges: Arc<BadgeService>,
    ) -> Self {
        Self {
            repository,
            covers,
            ai,
            stats,
            badges,
        }
    }

    pub async fn list_books(&self, user_id: &str) -> AppResult<Vec<Book>> {
        self.repository.find_by_user(user_id).await
    }

    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id '{}' not found", id)))
    }

    pub async fn search_books(&self, user_id: &str, query: &str) -> AppResult<Vec<Book>> {
        self.repository.search(user_id, query).await
    }

    pub async fn create_book(&self, user_id: &str, request: CreateBookRequest) -> AppResult<Book> {
        request.validate()?;

        let mut book = request.into_book(user_id);
        if book.cover_url.is_none() {
            book.cover_url = self.covers.first_cover(&book.title, &book.author).await;
        }

        let created = self.repository.create(book).await?;

        // Gamification never fails the primary write.
        if let Err(err) = self.record_addition(user_id).await {
            log::warn!("badge evaluation failed after book add for {}: {}", user_id, err);
        }

        Ok(created)
    }

    pub async fn update_book(
        &self,
        user_id: &str,
        id: &str,
        request: UpdateBookRequest,
    ) -> AppResult<Book> {
        request.validate()?;

        let mut book = self.get_book(id).await?;
        let was_not_read = book.status != BookStatus::Read;

        request.apply(&mut book);
        let updated = self.repository.update(book).await?;

        // Only an actual transition into "read" counts toward the stat.
        if was_not_read && updated.status == BookStatus::Read {
            if let Err(err) = self.record_read(user_id).await {
                log::warn!(
                    "badge evaluation failed after read transition for {}: {}",
                    user_id,
                    err
                );
            }
        }

        Ok(updated)
    }

    pub async fn delete_book(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await
    }

    pub async fn generate_summary(&self, id: &str, length: SummaryLength) -> AppResult<String> {
        let mut book = self.get_book(id).await?;

        let summary = self
            .ai
            .generate_summary(&book.title, &book.author, length)
            .await?;

        book.ai_summary = Some(summary.clone());
        self.repository.update(book).await?;

        Ok(summary)
    }

    /// First activity for a user stocks the shelf with two starter books.
    /// No badge pass here; the next qualifying action picks the stats up.
    pub async fn seed_starter_library(&self, user_id: &str) -> AppResult<()> {
        if self.repository.count_for_user(user_id).await? > 0 {
            return Ok(());
        }

        for (title, author) in STARTER_BOOKS {
            let mut book = Book::new(user_id, title, author, BookStatus::WantToRead);
            book.cover_url = self.covers.first_cover(title, author).await;
            self.repository.create(book).await?;
            self.stats
                .increment_stat(user_id, StatField::BooksAdded)
                .await?;
        }

        Ok(())
    }

    async fn record_addition(&self, user_id: &str) -> AppResult<()> {
        self.stats
            .increment_stat(user_id, StatField::BooksAdded)
            .await?;
        self.badges.check_and_award_badges(user_id).await?;
        Ok(())
    }

    async fn record_read(&self, user_id: &str) -> AppResult<()> {
        self.stats
            .increment_stat(user_id, StatField::BooksRead)
            .await?;
        self.badges.check_and_award_badges(user_id).await?;
        Ok(())
    }
}
