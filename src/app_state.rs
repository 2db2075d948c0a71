use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        BadgeRepository, BookClubRepository, MongoBadgeRepository, MongoBookClubRepository,
        MongoBookRepository, MongoNotificationRepository, MongoQuizRepository,
        MongoRecommendationRepository, MongoUserStatsRepository, UserStatsRepository,
    },
    services::{
        covers::CoverSource, BadgeService, BookClubService, BookService, NotificationService,
        OpenAiClient, OpenLibraryCovers, QuizService, RecommendationService, StatsService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService>,
    pub quiz_service: Arc<QuizService>,
    pub stats_service: Arc<StatsService>,
    pub badge_service: Arc<BadgeService>,
    pub notification_service: Arc<NotificationService>,
    pub recommendation_service: Arc<RecommendationService>,
    pub book_club_service: Arc<BookClubService>,
    pub covers: Arc<dyn CoverSource>,
    pub config: Arc<Config>,
    pub db: Database,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let stats_repository = Arc::new(MongoUserStatsRepository::new(&db));
        stats_repository.ensure_indexes().await?;
        let badge_repository = Arc::new(MongoBadgeRepository::new(&db));
        badge_repository.ensure_indexes().await?;
        let notification_repository = Arc::new(MongoNotificationRepository::new(&db));
        let book_repository = Arc::new(MongoBookRepository::new(&db));
        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        let recommendation_repository = Arc::new(MongoRecommendationRepository::new(&db));
        let book_club_repository = Arc::new(MongoBookClubRepository::new(&db));
        book_club_repository.ensure_indexes().await?;

        let ai = Arc::new(OpenAiClient::new(&config));
        let covers: Arc<dyn CoverSource> = Arc::new(OpenLibraryCovers::new(&config));

        let stats_service = Arc::new(StatsService::new(stats_repository.clone()));
        let badge_service = Arc::new(BadgeService::new(
            stats_repository,
            badge_repository,
            notification_repository.clone(),
        ));
        let book_service = Arc::new(BookService::new(
            book_repository.clone(),
            covers.clone(),
            ai.clone(),
            stats_service.clone(),
            badge_service.clone(),
        ));
        let quiz_service = Arc::new(QuizService::new(
            quiz_repository,
            book_repository.clone(),
            ai.clone(),
            stats_service.clone(),
            badge_service.clone(),
        ));
        let notification_service = Arc::new(NotificationService::new(notification_repository));
        let recommendation_service = Arc::new(RecommendationService::new(
            recommendation_repository,
            book_repository,
            ai,
        ));
        let book_club_service = Arc::new(BookClubService::new(book_club_repository));

        Ok(Self {
            book_service,
            quiz_service,
            stats_service,
            badge_service,
            notification_service,
            recommendation_service,
            book_club_service,
            covers,
            config: Arc::new(config),
            db,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
