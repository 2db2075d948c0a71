pub mod badge_repository;
pub mod book_club_repository;
pub mod book_repository;
pub mod notification_repository;
pub mod quiz_repository;
pub mod recommendation_repository;
pub mod user_stats_repository;

pub use badge_repository::{BadgeRepository, MongoBadgeRepository};
pub use book_club_repository::{BookClubRepository, MongoBookClubRepository};
pub use book_repository::{BookRepository, MongoBookRepository};
pub use notification_repository::{MongoNotificationRepository, NotificationRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use recommendation_repository::{MongoRecommendationRepository, RecommendationRepository};
pub use user_stats_repository::{MongoUserStatsRepository, UserStatsRepository};
