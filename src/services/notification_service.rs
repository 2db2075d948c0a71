use std::sync::Arc;

use crate::{errors::AppResult, models::domain::Notification, repositories::NotificationRepository};

const DEFAULT_FEED_LIMIT: i64 = 50;

pub struct NotificationService {
    repository: Arc<dyn NotificationRepository>,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn NotificationRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, user_id: &str) -> AppResult<Vec<Notification>> {
        self.repository.list_for_user(user_id, DEFAULT_FEED_LIMIT).await
    }

    pub async fn unread_count(&self, user_id: &str) -> AppResult<u64> {
        self.repository.unread_count(user_id).await
    }

    /// Marking an unknown id is a no-op, matching the feed's fire-and-forget
    /// read receipts.
    pub async fn mark_read(&self, id: &str) -> AppResult<()> {
        self.repository.mark_read(id).await
    }

    pub async fn mark_all_read(&self, user_id: &str) -> AppResult<()> {
        self.repository.mark_all_read(user_id).await
    }
}
