use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use mongodb::{
    bson::{doc, Bson},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{StatField, UserStats},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStatsRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<UserStats>>;
    /// Materializes the zero row if the user has none yet.
    async fn find_or_create(&self, user_id: &str) -> AppResult<UserStats>;
    /// Store-level atomic increment; creates the row with the field at 1 when
    /// it does not exist yet. Never read-modify-write in application memory.
    async fn increment(&self, user_id: &str, field: StatField) -> AppResult<UserStats>;
    /// Persists the outcome of a streak transition. Last writer wins.
    async fn apply_streak(
        &self,
        user_id: &str,
        daily_streak: i32,
        longest_streak: i32,
        active_on: NaiveDate,
    ) -> AppResult<UserStats>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoUserStatsRepository {
    collection: Collection<UserStats>,
}

impl MongoUserStatsRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("user_stats");
        Self { collection }
    }

    fn upsert_options() -> FindOneAndUpdateOptions {
        FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build()
    }

    fn zero_row_doc(user_id: &str) -> mongodb::bson::Document {
        let mut document = doc! {
            "user_id": user_id,
            "daily_streak": 0,
            "longest_streak": 0,
            "last_active_date": Bson::Null,
            "created_at": Utc::now().to_rfc3339(),
        };
        for field in StatField::ALL {
            document.insert(field.column(), 0);
        }
        document
    }
}

#[async_trait]
impl UserStatsRepository for MongoUserStatsRepository {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<UserStats>> {
        let stats = self.collection.find_one(doc! { "user_id": user_id }).await?;
        Ok(stats)
    }

    async fn find_or_create(&self, user_id: &str) -> AppResult<UserStats> {
        let update = doc! { "$setOnInsert": Self::zero_row_doc(user_id) };

        let stats = self
            .collection
            .find_one_and_update(doc! { "user_id": user_id }, update)
            .with_options(Self::upsert_options())
            .await?;

        stats.ok_or_else(|| {
            AppError::InternalError(format!("upsert returned no stats row for user '{}'", user_id))
        })
    }

    async fn increment(&self, user_id: &str, field: StatField) -> AppResult<UserStats> {
        // $setOnInsert must not mention the incremented field; $inc creates it
        // at 1 on a fresh row.
        let mut set_on_insert = Self::zero_row_doc(user_id);
        set_on_insert.remove(field.column());

        let mut inc = mongodb::bson::Document::new();
        inc.insert(field.column(), 1);

        let update = doc! {
            "$inc": inc,
            "$setOnInsert": set_on_insert,
        };

        let stats = self
            .collection
            .find_one_and_update(doc! { "user_id": user_id }, update)
            .with_options(Self::upsert_options())
            .await?;

        stats.ok_or_else(|| {
            AppError::InternalError(format!("upsert returned no stats row for user '{}'", user_id))
        })
    }

    async fn apply_streak(
        &self,
        user_id: &str,
        daily_streak: i32,
        longest_streak: i32,
        active_on: NaiveDate,
    ) -> AppResult<UserStats> {
        let mut set_on_insert = Self::zero_row_doc(user_id);
        for key in ["daily_streak", "longest_streak", "last_active_date"] {
            set_on_insert.remove(key);
        }

        let update = doc! {
            "$set": {
                "daily_streak": daily_streak,
                "longest_streak": longest_streak,
                "last_active_date": active_on.to_string(),
            },
            "$setOnInsert": set_on_insert,
        };

        let stats = self
            .collection
            .find_one_and_update(doc! { "user_id": user_id }, update)
            .with_options(Self::upsert_options())
            .await?;

        stats.ok_or_else(|| {
            AppError::InternalError(format!("upsert returned no stats row for user '{}'", user_id))
        })
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder()
            .unique(true)
            .name("user_id_unique".to_string())
            .build();
        let model = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("created unique index on user_stats.user_id");

        Ok(())
    }
}
