use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{is_duplicate_key, AppResult},
    models::domain::{Badge, BadgeKind, BadgeTier},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BadgeRepository: Send + Sync {
    /// Inserts the badge unless the (user, type, tier) slot is already taken.
    /// Returns false when another write got there first; the unique index is
    /// the guard of record, not the `has_badge` pre-check.
    async fn insert_if_absent(&self, badge: Badge) -> AppResult<bool>;
    async fn has_badge(&self, user_id: &str, kind: BadgeKind, tier: BadgeTier) -> AppResult<bool>;
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Badge>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoBadgeRepository {
    collection: Collection<Badge>,
}

impl MongoBadgeRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("badges");
        Self { collection }
    }
}

#[async_trait]
impl BadgeRepository for MongoBadgeRepository {
    async fn insert_if_absent(&self, badge: Badge) -> AppResult<bool> {
        match self.collection.insert_one(&badge).await {
            Ok(_) => Ok(true),
            Err(err) if is_duplicate_key(&err) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    async fn has_badge(&self, user_id: &str, kind: BadgeKind, tier: BadgeTier) -> AppResult<bool> {
        let existing = self
            .collection
            .find_one(doc! {
                "user_id": user_id,
                "type": kind.as_str(),
                "tier": tier.as_str(),
            })
            .await?;
        Ok(existing.is_some())
    }

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Badge>> {
        let find_options = FindOptions::builder().sort(doc! { "earned_at": -1 }).build();

        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .with_options(find_options)
            .await?;
        let badges: Vec<Badge> = cursor.try_collect().await?;

        Ok(badges)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder()
            .unique(true)
            .name("user_type_tier_unique".to_string())
            .build();
        let model = IndexModel::builder()
            .keys(doc! { "user_id": 1, "type": 1, "tier": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("created unique index on badges (user_id, type, tier)");

        Ok(())
    }
}
