use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::{
        badge::TIER_ORDER, Badge, BadgeKind, BadgeTier, Notification, NotificationKind,
    },
    repositories::{BadgeRepository, NotificationRepository, UserStatsRepository},
};

pub struct BadgeService {
    stats: Arc<dyn UserStatsRepository>,
    badges: Arc<dyn BadgeRepository>,
    notifications: Arc<dyn NotificationRepository>,
}

impl BadgeService {
    pub fn new(
        stats: Arc<dyn UserStatsRepository>,
        badges: Arc<dyn BadgeRepository>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            stats,
            badges,
            notifications,
        }
    }

    /// Re-checks every tier of every track against the user's current stats
    /// and awards whatever is newly crossed, one notification per badge.
    ///
    /// Tiers are cumulative: a stat that jumped past several thresholds in
    /// one action earns all of them in this single pass. Re-running with
    /// unchanged stats awards nothing. A lost insert race counts as already
    /// awarded and evaluation moves on.
    pub async fn check_and_award_badges(&self, user_id: &str) -> AppResult<Vec<Badge>> {
        let Some(stats) = self.stats.find_by_user(user_id).await? else {
            return Ok(vec![]);
        };

        let mut awarded = Vec::new();

        for tier in TIER_ORDER {
            for kind in BadgeKind::ALL {
                let threshold = kind.threshold_for(tier);
                if stats.value_for(kind) < threshold {
                    continue;
                }

                // Fast path; the unique index is the real guard.
                if self.badges.has_badge(user_id, kind, tier).await? {
                    continue;
                }

                let badge = Badge::new(user_id, kind, tier);
                if self.badges.insert_if_absent(badge.clone()).await? {
                    let (notification_kind, title, message) =
                        achievement_notification(kind, tier, threshold);
                    self.notifications
                        .create(Notification::new(user_id, notification_kind, title, &message))
                        .await?;
                    awarded.push(badge);
                }
            }
        }

        Ok(awarded)
    }

    pub async fn list_badges(&self, user_id: &str) -> AppResult<Vec<Badge>> {
        self.badges.list_for_user(user_id).await
    }

    pub async fn has_badge(
        &self,
        user_id: &str,
        kind: BadgeKind,
        tier: BadgeTier,
    ) -> AppResult<bool> {
        self.badges.has_badge(user_id, kind, tier).await
    }
}

/// Notification kind, title, and message for a freshly earned badge.
fn achievement_notification(
    kind: BadgeKind,
    tier: BadgeTier,
    threshold: i32,
) -> (NotificationKind, &'static str, String) {
    match kind {
        BadgeKind::Quizzes => (
            NotificationKind::BadgeEarned,
            "New Badge Earned!",
            format!(
                "You earned the {} Quiz Master badge for completing {} quizzes!",
                tier.as_str(),
                threshold
            ),
        ),
        BadgeKind::BooksAdded => (
            NotificationKind::BadgeEarned,
            "New Badge Earned!",
            format!(
                "You earned the {} Collector badge for adding {} books!",
                tier.as_str(),
                threshold
            ),
        ),
        BadgeKind::BooksRead => (
            NotificationKind::BadgeEarned,
            "New Badge Earned!",
            format!(
                "You earned the {} Bookworm badge for reading {} books!",
                tier.as_str(),
                threshold
            ),
        ),
        BadgeKind::DailyStreak => (
            NotificationKind::StreakMilestone,
            "Streak Milestone!",
            format!(
                "You earned the {} Dedicated Reader badge for a {} day streak!",
                tier.as_str(),
                threshold
            ),
        ),
    }
}
