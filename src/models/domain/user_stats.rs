use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::badge::BadgeKind;

/// Per-user gamification counters. One row per user, created lazily on the
/// first qualifying action and never deleted. `longest_streak` is always at
/// least `daily_streak`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UserStats {
    pub user_id: String,
    pub daily_streak: i32,
    pub longest_streak: i32,
    pub last_active_date: Option<NaiveDate>,
    pub total_quizzes_completed: i32,
    pub total_books_added: i32,
    pub total_books_read: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserStats {
    pub fn zero(user_id: &str) -> Self {
        UserStats {
            user_id: user_id.to_string(),
            daily_streak: 0,
            longest_streak: 0,
            last_active_date: None,
            total_quizzes_completed: 0,
            total_books_added: 0,
            total_books_read: 0,
            created_at: Some(Utc::now()),
        }
    }

    /// Current value for a badge track.
    pub fn value_for(&self, kind: BadgeKind) -> i32 {
        match kind {
            BadgeKind::Quizzes => self.total_quizzes_completed,
            BadgeKind::BooksAdded => self.total_books_added,
            BadgeKind::BooksRead => self.total_books_read,
            BadgeKind::DailyStreak => self.daily_streak,
        }
    }
}

/// Counters that can be bumped through the atomic increment path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatField {
    QuizzesCompleted,
    BooksAdded,
    BooksRead,
}

impl StatField {
    pub const ALL: [StatField; 3] = [
        StatField::QuizzesCompleted,
        StatField::BooksAdded,
        StatField::BooksRead,
    ];

    pub fn column(self) -> &'static str {
        match self {
            StatField::QuizzesCompleted => "total_quizzes_completed",
            StatField::BooksAdded => "total_books_added",
            StatField::BooksRead => "total_books_read",
        }
    }
}
