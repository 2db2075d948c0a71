use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Recommendation};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Recommendation>>;
    async fn create(&self, recommendation: Recommendation) -> AppResult<Recommendation>;
    /// Clears the user's set before a regeneration replaces it.
    async fn delete_all_for_user(&self, user_id: &str) -> AppResult<()>;
}

pub struct MongoRecommendationRepository {
    collection: Collection<Recommendation>,
}

impl MongoRecommendationRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("recommendations");
        Self { collection }
    }
}

#[async_trait]
impl RecommendationRepository for MongoRecommendationRepository {
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Recommendation>> {
        let find_options = FindOptions::builder().sort(doc! { "created_at": -1 }).build();

        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .with_options(find_options)
            .await?;
        let recommendations: Vec<Recommendation> = cursor.try_collect().await?;

        Ok(recommendations)
    }

    async fn create(&self, recommendation: Recommendation) -> AppResult<Recommendation> {
        self.collection.insert_one(&recommendation).await?;
        Ok(recommendation)
    }

    async fn delete_all_for_user(&self, user_id: &str) -> AppResult<()> {
        self.collection
            .delete_many(doc! { "user_id": user_id })
            .await?;
        Ok(())
    }
}
