use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Collection};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Book,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Book>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>>;
    async fn create(&self, book: Book) -> AppResult<Book>;
    async fn update(&self, book: Book) -> AppResult<Book>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn search(&self, user_id: &str, query: &str) -> AppResult<Vec<Book>>;
    async fn count_for_user(&self, user_id: &str) -> AppResult<u64>;
}

pub struct MongoBookRepository {
    collection: Collection<Book>,
}

impl MongoBookRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("books");
        Self { collection }
    }

    fn newest_first() -> FindOptions {
        FindOptions::builder().sort(doc! { "created_at": -1 }).build()
    }
}

#[async_trait]
impl BookRepository for MongoBookRepository {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Book>> {
        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .with_options(Self::newest_first())
            .await?;
        let books: Vec<Book> = cursor.try_collect().await?;

        Ok(books)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        let book = self.collection.find_one(doc! { "id": id }).await?;
        Ok(book)
    }

    async fn create(&self, book: Book) -> AppResult<Book> {
        self.collection.insert_one(&book).await?;
        Ok(book)
    }

    async fn update(&self, book: Book) -> AppResult<Book> {
        let result = self
            .collection
            .replace_one(doc! { "id": &book.id }, &book)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Book with id '{}' not found",
                book.id
            )));
        }

        Ok(book)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Book with id '{}' not found", id)));
        }

        Ok(())
    }

    async fn search(&self, user_id: &str, query: &str) -> AppResult<Vec<Book>> {
        let filter = doc! {
            "user_id": user_id,
            "$or": [
                { "title": { "$regex": query, "$options": "i" } },
                { "author": { "$regex": query, "$options": "i" } },
            ],
        };

        let cursor = self
            .collection
            .find(filter)
            .with_options(Self::newest_first())
            .await?;
        let books: Vec<Book> = cursor.try_collect().await?;

        Ok(books)
    }

    async fn count_for_user(&self, user_id: &str) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! { "user_id": user_id })
            .await?;
        Ok(count)
    }
}
