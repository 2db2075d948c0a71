use serde::Deserialize;
use validator::Validate;

use chrono::{DateTime, Utc};

use crate::models::domain::book::BookStatus;
use crate::models::domain::quiz::{QuizAnswer, QuizDifficulty};
use crate::models::domain::Book;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, max = 300))]
    pub title: String,

    #[validate(length(min = 1, max = 200))]
    pub author: String,

    #[validate(url)]
    pub cover_url: Option<String>,

    pub google_books_id: Option<String>,

    #[serde(default)]
    pub status: BookStatus,

    pub genre: Option<String>,

    pub user_notes: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,

    #[serde(default)]
    pub is_favorite: bool,
}

impl CreateBookRequest {
    pub fn into_book(self, user_id: &str) -> Book {
        let mut book = Book::new(user_id, &self.title, &self.author, self.status);
        book.cover_url = self.cover_url;
        book.google_books_id = self.google_books_id;
        book.genre = self.genre;
        book.user_notes = self.user_notes;
        book.rating = self.rating;
        book.is_favorite = self.is_favorite;
        book
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBookRequest {
    #[validate(length(min = 1, max = 300))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub author: Option<String>,

    #[validate(url)]
    pub cover_url: Option<String>,

    pub google_books_id: Option<String>,

    pub status: Option<BookStatus>,

    pub genre: Option<String>,

    pub user_notes: Option<String>,

    pub ai_summary: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,

    pub date_read: Option<DateTime<Utc>>,

    pub is_favorite: Option<bool>,
}

impl UpdateBookRequest {
    /// Fields left unset keep their stored values.
    pub fn apply(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(cover_url) = self.cover_url {
            book.cover_url = Some(cover_url);
        }
        if let Some(google_books_id) = self.google_books_id {
            book.google_books_id = Some(google_books_id);
        }
        if let Some(status) = self.status {
            book.status = status;
        }
        if let Some(genre) = self.genre {
            book.genre = Some(genre);
        }
        if let Some(user_notes) = self.user_notes {
            book.user_notes = Some(user_notes);
        }
        if let Some(ai_summary) = self.ai_summary {
            book.ai_summary = Some(ai_summary);
        }
        if let Some(rating) = self.rating {
            book.rating = Some(rating);
        }
        if let Some(date_read) = self.date_read {
            book.date_read = Some(date_read);
        }
        if let Some(is_favorite) = self.is_favorite {
            book.is_favorite = is_favorite;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateQuizRequest {
    #[serde(default)]
    pub difficulty: QuizDifficulty,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitQuizRequest {
    pub answers: Vec<QuizAnswer>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Detailed,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateSummaryRequest {
    #[serde(default)]
    pub length: SummaryLength,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookClubRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetCurrentBookRequest {
    pub book_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostMessageRequest {
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoverQuery {
    pub title: String,
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_create_book_request() {
        let request = CreateBookRequest {
            title: "Cosmos".to_string(),
            author: "Carl Sagan".to_string(),
            cover_url: None,
            google_books_id: None,
            status: BookStatus::WantToRead,
            genre: None,
            user_notes: None,
            rating: None,
            is_favorite: false,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rating_out_of_range() {
        let request = CreateBookRequest {
            title: "Cosmos".to_string(),
            author: "Carl Sagan".to_string(),
            cover_url: None,
            google_books_id: None,
            status: BookStatus::Read,
            genre: None,
            user_notes: None,
            rating: Some(9),
            is_favorite: false,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_title_rejected() {
        let request = CreateBookRequest {
            title: "".to_string(),
            author: "Carl Sagan".to_string(),
            cover_url: None,
            google_books_id: None,
            status: BookStatus::WantToRead,
            genre: None,
            user_notes: None,
            rating: None,
            is_favorite: false,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn update_applies_only_set_fields() {
        let mut book = Book::new("user-1", "Cosmos", "Carl Sagan", BookStatus::WantToRead);
        let update = UpdateBookRequest {
            status: Some(BookStatus::Read),
            rating: Some(5),
            ..UpdateBookRequest::default()
        };

        update.apply(&mut book);

        assert_eq!(book.status, BookStatus::Read);
        assert_eq!(book.rating, Some(5));
        assert_eq!(book.title, "Cosmos");
        assert_eq!(book.author, "Carl Sagan");
    }

    #[test]
    fn generate_quiz_request_defaults_to_medium() {
        let request: GenerateQuizRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.difficulty, QuizDifficulty::Medium);
    }

    #[test]
    fn submit_request_accepts_mixed_answer_shapes() {
        let request: SubmitQuizRequest =
            serde_json::from_str(r#"{"answers": [0, [1, 3], 2]}"#).unwrap();

        assert_eq!(request.answers.len(), 3);
        assert_eq!(request.answers[1], QuizAnswer::Multiple(vec![1, 3]));
    }
}
