use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::{
    errors::AppResult,
    models::domain::{StatField, UserStats},
    repositories::UserStatsRepository,
};

pub struct StatsService {
    repository: Arc<dyn UserStatsRepository>,
}

impl StatsService {
    pub fn new(repository: Arc<dyn UserStatsRepository>) -> Self {
        Self { repository }
    }

    /// Read surface for `/api/user/stats`; missing rows materialize as the
    /// zero state rather than erroring.
    pub async fn get_stats(&self, user_id: &str) -> AppResult<UserStats> {
        self.repository.find_or_create(user_id).await
    }

    pub async fn find_stats(&self, user_id: &str) -> AppResult<Option<UserStats>> {
        self.repository.find_by_user(user_id).await
    }

    pub async fn increment_stat(&self, user_id: &str, field: StatField) -> AppResult<UserStats> {
        self.repository.increment(user_id, field).await
    }

    /// Advances the daily streak for today in server-local time. Invoked
    /// once per identified request; repeat calls on the same calendar day
    /// leave the streak value unchanged.
    pub async fn update_streak(&self, user_id: &str) -> AppResult<UserStats> {
        self.update_streak_on(user_id, Local::now().date_naive()).await
    }

    /// Clock-injected variant of [`update_streak`](Self::update_streak).
    pub async fn update_streak_on(&self, user_id: &str, today: NaiveDate) -> AppResult<UserStats> {
        let stats = self.repository.find_by_user(user_id).await?;

        let (last_active, current_streak, longest) = match &stats {
            Some(stats) => (stats.last_active_date, stats.daily_streak, stats.longest_streak),
            None => (None, 0, 0),
        };

        let daily_streak = advance_streak(last_active, current_streak, today);
        let longest_streak = longest.max(daily_streak);

        self.repository
            .apply_streak(user_id, daily_streak, longest_streak, today)
            .await
    }
}

/// Streak transition, date-only: an active day directly before `today`
/// extends the streak, a repeat call today keeps it, any gap restarts at 1.
pub fn advance_streak(last_active: Option<NaiveDate>, current_streak: i32, today: NaiveDate) -> i32 {
    let yesterday = today.pred_opt().unwrap_or(today);

    match last_active {
        Some(date) if date == yesterday => current_streak + 1,
        Some(date) if date == today => current_streak,
        _ => 1,
    }
}
