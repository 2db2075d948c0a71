use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Achievement tracks. Each kind progresses through the five tiers
/// independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    Quizzes,
    BooksAdded,
    BooksRead,
    DailyStreak,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

/// Ascending award order. The evaluator walks this so a large stat jump
/// earns every tier it crossed in one pass.
pub const TIER_ORDER: [BadgeTier; 5] = [
    BadgeTier::Bronze,
    BadgeTier::Silver,
    BadgeTier::Gold,
    BadgeTier::Platinum,
    BadgeTier::Diamond,
];

impl BadgeKind {
    pub const ALL: [BadgeKind; 4] = [
        BadgeKind::Quizzes,
        BadgeKind::BooksAdded,
        BadgeKind::BooksRead,
        BadgeKind::DailyStreak,
    ];

    /// The single source of truth for milestone thresholds, indexed in
    /// [`TIER_ORDER`]. Consumed by the evaluator and exposed over
    /// `/api/badges/tiers` so display layers never carry their own copy.
    pub fn thresholds(self) -> [i32; 5] {
        match self {
            BadgeKind::Quizzes | BadgeKind::BooksAdded | BadgeKind::BooksRead => [1, 5, 10, 20, 50],
            BadgeKind::DailyStreak => [3, 7, 14, 30, 100],
        }
    }

    pub fn threshold_for(self, tier: BadgeTier) -> i32 {
        self.thresholds()[tier.index()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BadgeKind::Quizzes => "quizzes",
            BadgeKind::BooksAdded => "books_added",
            BadgeKind::BooksRead => "books_read",
            BadgeKind::DailyStreak => "daily_streak",
        }
    }
}

impl BadgeTier {
    pub fn index(self) -> usize {
        match self {
            BadgeTier::Bronze => 0,
            BadgeTier::Silver => 1,
            BadgeTier::Gold => 2,
            BadgeTier::Platinum => 3,
            BadgeTier::Diamond => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BadgeTier::Bronze => "bronze",
            BadgeTier::Silver => "silver",
            BadgeTier::Gold => "gold",
            BadgeTier::Platinum => "platinum",
            BadgeTier::Diamond => "diamond",
        }
    }
}

/// Earned achievement. Immutable once written; uniqueness over
/// (user_id, type, tier) is enforced by the store index.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Badge {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: BadgeKind,
    pub tier: BadgeTier,
    pub milestone: i32,
    pub earned_at: DateTime<Utc>,
}

impl Badge {
    pub fn new(user_id: &str, kind: BadgeKind, tier: BadgeTier) -> Self {
        Badge {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            kind,
            tier,
            milestone: kind.threshold_for(tier),
            earned_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strictly_ascending_per_kind() {
        for kind in BadgeKind::ALL {
            let thresholds = kind.thresholds();
            for pair in thresholds.windows(2) {
                assert!(pair[0] < pair[1], "{:?} thresholds not ascending", kind);
            }
        }
    }

    #[test]
    fn threshold_for_matches_tier_order() {
        assert_eq!(BadgeKind::Quizzes.threshold_for(BadgeTier::Bronze), 1);
        assert_eq!(BadgeKind::BooksAdded.threshold_for(BadgeTier::Gold), 10);
        assert_eq!(BadgeKind::DailyStreak.threshold_for(BadgeTier::Bronze), 3);
        assert_eq!(BadgeKind::DailyStreak.threshold_for(BadgeTier::Diamond), 100);
    }

    #[test]
    fn badge_kind_serializes_snake_case() {
        let json = serde_json::to_string(&BadgeKind::BooksAdded).unwrap();
        assert_eq!(json, "\"books_added\"");

        let parsed: BadgeKind = serde_json::from_str("\"daily_streak\"").unwrap();
        assert_eq!(parsed, BadgeKind::DailyStreak);
    }

    #[test]
    fn badge_serializes_kind_under_type_key() {
        let badge = Badge::new("user-1", BadgeKind::Quizzes, BadgeTier::Silver);
        let value = serde_json::to_value(&badge).unwrap();

        assert_eq!(value["type"], "quizzes");
        assert_eq!(value["tier"], "silver");
        assert_eq!(value["milestone"], 5);
    }

    #[test]
    fn new_badge_records_the_tier_milestone() {
        let badge = Badge::new("user-1", BadgeKind::DailyStreak, BadgeTier::Gold);
        assert_eq!(badge.milestone, 14);
        assert_eq!(badge.user_id, "user-1");
    }
}
