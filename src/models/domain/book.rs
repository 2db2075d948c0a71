use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    Read,
    Reading,
    #[default]
    WantToRead,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Book {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_books_id: Option<String>,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    pub status: BookStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_read: Option<DateTime<Utc>>,
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Book {
    pub fn new(user_id: &str, title: &str, author: &str, status: BookStatus) -> Self {
        Book {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            google_books_id: None,
            title: title.to_string(),
            author: author.to_string(),
            cover_url: None,
            status,
            ai_summary: None,
            user_notes: None,
            rating: None,
            date_read: None,
            is_favorite: false,
            genre: None,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_defaults() {
        let book = Book::new("user-1", "Cosmos", "Carl Sagan", BookStatus::WantToRead);

        assert_eq!(book.status, BookStatus::WantToRead);
        assert!(!book.is_favorite);
        assert!(book.cover_url.is_none());
        assert!(book.created_at.is_some());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&BookStatus::WantToRead).unwrap();
        assert_eq!(json, "\"want_to_read\"");

        let parsed: BookStatus = serde_json::from_str("\"read\"").unwrap();
        assert_eq!(parsed, BookStatus::Read);
    }
}
