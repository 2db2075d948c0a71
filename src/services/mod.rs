pub mod ai;
pub mod badge_service;
pub mod book_club_service;
pub mod book_service;
pub mod covers;
pub mod notification_service;
pub mod quiz_grading;
pub mod quiz_service;
pub mod recommendation_service;
pub mod stats_service;

pub use ai::{AiClient, OpenAiClient};
pub use badge_service::BadgeService;
pub use book_club_service::BookClubService;
pub use book_service::BookService;
pub use covers::{CoverSource, OpenLibraryCovers};
pub use notification_service::NotificationService;
pub use quiz_service::QuizService;
pub use recommendation_service::RecommendationService;
pub use stats_service::StatsService;
