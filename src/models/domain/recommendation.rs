use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Recommendation {
    pub id: String,
    pub user_id: String,
    pub book_title: String,
    pub book_author: String,
    pub reason: String,
    pub is_ignored: bool,
    pub created_at: DateTime<Utc>,
}

impl Recommendation {
    pub fn new(user_id: &str, book_title: &str, book_author: &str, reason: &str) -> Self {
        Recommendation {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            book_title: book_title.to_string(),
            book_author: book_author.to_string(),
            reason: reason.to_string(),
            is_ignored: false,
            created_at: Utc::now(),
        }
    }
}
