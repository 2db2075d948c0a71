use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    SuggestedReading,
    RefresherQuiz,
    NewAuthorBook,
    BadgeEarned,
    StreakMilestone,
    BookClubActivity,
}

/// Feed entry. The gamification engine emits `badge_earned` and
/// `streak_milestone`; the remaining kinds belong to other producers.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(user_id: &str, kind: NotificationKind, title: &str, message: &str) -> Self {
        Notification {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            kind,
            title: title.to_string(),
            message: message.to_string(),
            is_read: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notifications_start_unread() {
        let notification = Notification::new(
            "user-1",
            NotificationKind::BadgeEarned,
            "New Badge Earned!",
            "You earned the bronze Collector badge for adding 1 books!",
        );

        assert!(!notification.is_read);
        assert_eq!(notification.kind, NotificationKind::BadgeEarned);
    }

    #[test]
    fn kind_serializes_under_type_key() {
        let notification = Notification::new(
            "user-1",
            NotificationKind::StreakMilestone,
            "Streak Milestone!",
            "You earned the bronze Dedicated Reader badge for a 3 day streak!",
        );

        let value = serde_json::to_value(&notification).unwrap();
        assert_eq!(value["type"], "streak_milestone");
        assert_eq!(value["is_read"], false);
    }
}
