use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson},
    options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument},
    Collection,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Quiz, QuizAnswer},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    /// Most recently generated quiz for a book, if any.
    async fn latest_for_book(&self, book_id: &str) -> AppResult<Option<Quiz>>;
    async fn find_by_books(&self, book_ids: &[String]) -> AppResult<Vec<Quiz>>;
    /// Writes the grading outcome onto the quiz row.
    async fn record_score(
        &self,
        id: &str,
        score: i32,
        answers: &[QuizAnswer],
    ) -> AppResult<Quiz>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
        Self { collection }
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn latest_for_book(&self, book_id: &str) -> AppResult<Option<Quiz>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .limit(Some(1))
            .build();

        let mut cursor = self
            .collection
            .find(doc! { "book_id": book_id })
            .with_options(find_options)
            .await?;

        Ok(cursor.try_next().await?)
    }

    async fn find_by_books(&self, book_ids: &[String]) -> AppResult<Vec<Quiz>> {
        if book_ids.is_empty() {
            return Ok(vec![]);
        }

        let find_options = FindOptions::builder().sort(doc! { "created_at": -1 }).build();

        let cursor = self
            .collection
            .find(doc! { "book_id": { "$in": book_ids } })
            .with_options(find_options)
            .await?;
        let quizzes: Vec<Quiz> = cursor.try_collect().await?;

        Ok(quizzes)
    }

    async fn record_score(
        &self,
        id: &str,
        score: i32,
        answers: &[QuizAnswer],
    ) -> AppResult<Quiz> {
        let update = doc! {
            "$set": {
                "score": score,
                "user_answers": to_bson(answers)?,
            },
        };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let quiz = self
            .collection
            .find_one_and_update(doc! { "id": id }, update)
            .with_options(options)
            .await?;

        quiz.ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }
}
