pub mod badge;
pub mod book;
pub mod book_club;
pub mod notification;
pub mod quiz;
pub mod recommendation;
pub mod user_stats;

pub use badge::{Badge, BadgeKind, BadgeTier};
pub use book::{Book, BookStatus};
pub use book_club::{BookClub, BookClubMember, BookClubMessage};
pub use notification::{Notification, NotificationKind};
pub use quiz::{QuestionType, Quiz, QuizAnswer, QuizDifficulty, QuizQuestion};
pub use recommendation::Recommendation;
pub use user_stats::{StatField, UserStats};
