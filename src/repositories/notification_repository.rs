use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Notification};

/// Write interface consumed by the badge evaluator, plus the feed read
/// surface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, notification: Notification) -> AppResult<Notification>;
    async fn list_for_user(&self, user_id: &str, limit: i64) -> AppResult<Vec<Notification>>;
    async fn unread_count(&self, user_id: &str) -> AppResult<u64>;
    async fn mark_read(&self, id: &str) -> AppResult<()>;
    async fn mark_all_read(&self, user_id: &str) -> AppResult<()>;
}

pub struct MongoNotificationRepository {
    collection: Collection<Notification>,
}

impl MongoNotificationRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("notifications");
        Self { collection }
    }
}

#[async_trait]
impl NotificationRepository for MongoNotificationRepository {
    async fn create(&self, notification: Notification) -> AppResult<Notification> {
        self.collection.insert_one(&notification).await?;
        Ok(notification)
    }

    async fn list_for_user(&self, user_id: &str, limit: i64) -> AppResult<Vec<Notification>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .limit(Some(limit))
            .build();

        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .with_options(find_options)
            .await?;
        let notifications: Vec<Notification> = cursor.try_collect().await?;

        Ok(notifications)
    }

    async fn unread_count(&self, user_id: &str) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! { "user_id": user_id, "is_read": false })
            .await?;
        Ok(count)
    }

    async fn mark_read(&self, id: &str) -> AppResult<()> {
        self.collection
            .update_one(doc! { "id": id }, doc! { "$set": { "is_read": true } })
            .await?;
        Ok(())
    }

    async fn mark_all_read(&self, user_id: &str) -> AppResult<()> {
        self.collection
            .update_many(
                doc! { "user_id": user_id },
                doc! { "$set": { "is_read": true } },
            )
            .await?;
        Ok(())
    }
}
