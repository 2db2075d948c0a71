use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::{BookStatus, Recommendation},
    repositories::{BookRepository, RecommendationRepository},
    services::ai::AiClient,
};

/// How much reading history the recommender sees.
const HISTORY_SAMPLE: usize = 5;

pub struct RecommendationService {
    repository: Arc<dyn RecommendationRepository>,
    books: Arc<dyn BookRepository>,
    ai: Arc<dyn AiClient>,
}

impl RecommendationService {
    pub fn new(
        repository: Arc<dyn RecommendationRepository>,
        books: Arc<dyn BookRepository>,
        ai: Arc<dyn AiClient>,
    ) -> Self {
        Self {
            repository,
            books,
            ai,
        }
    }

    pub async fn list(&self, user_id: &str) -> AppResult<Vec<Recommendation>> {
        self.repository.list_for_user(user_id).await
    }

    /// Replaces the user's recommendation set based on recent finished
    /// books. No reading history means nothing to recommend from, so the
    /// set is left untouched.
    pub async fn generate(&self, user_id: &str) -> AppResult<Vec<Recommendation>> {
        let books = self.books.find_by_user(user_id).await?;
        let read_books: Vec<(String, String)> = books
            .into_iter()
            .filter(|book| book.status == BookStatus::Read)
            .take(HISTORY_SAMPLE)
            .map(|book| (book.title, book.author))
            .collect();

        if read_books.is_empty() {
            return Ok(vec![]);
        }

        let generated = self.ai.recommend_books(&read_books).await?;

        self.repository.delete_all_for_user(user_id).await?;

        let mut created = Vec::with_capacity(generated.len());
        for recommendation in generated {
            created.push(
                self.repository
                    .create(Recommendation::new(
                        user_id,
                        &recommendation.book_title,
                        &recommendation.book_author,
                        &recommendation.reason,
                    ))
                    .await?,
            );
        }

        Ok(created)
    }
}
