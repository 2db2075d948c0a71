use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::badge::{BadgeKind, BadgeTier, TIER_ORDER};
use crate::models::domain::quiz::QuizDifficulty;
use crate::models::domain::{BookClub, BookClubMember, BookClubMessage};

/// One row of the quiz history feed, joined with the book it covers.
#[derive(Debug, Clone, Serialize)]
pub struct QuizHistoryEntry {
    pub id: String,
    pub book_title: String,
    pub difficulty: QuizDifficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DifficultyBreakdown {
    pub beginner: i64,
    pub easy: i64,
    pub medium: i64,
    pub hard: i64,
    pub expert: i64,
}

impl DifficultyBreakdown {
    pub fn record(&mut self, difficulty: QuizDifficulty) {
        match difficulty {
            QuizDifficulty::Beginner => self.beginner += 1,
            QuizDifficulty::Easy => self.easy += 1,
            QuizDifficulty::Medium => self.medium += 1,
            QuizDifficulty::Hard => self.hard += 1,
            QuizDifficulty::Expert => self.expert += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizAggregates {
    pub total: i64,
    /// Mean of the per-quiz percentage scores, rounded to the nearest point.
    pub average_score: i32,
    pub difficulty_breakdown: DifficultyBreakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizStatsResponse {
    pub history: Vec<QuizHistoryEntry>,
    pub stats: QuizAggregates,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierThreshold {
    pub tier: BadgeTier,
    pub threshold: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierTableEntry {
    #[serde(rename = "type")]
    pub kind: BadgeKind,
    pub tiers: Vec<TierThreshold>,
}

/// The shared tier configuration, shaped for display layers.
pub fn tier_table() -> Vec<TierTableEntry> {
    BadgeKind::ALL
        .into_iter()
        .map(|kind| TierTableEntry {
            kind,
            tiers: TIER_ORDER
                .into_iter()
                .map(|tier| TierThreshold {
                    tier,
                    threshold: kind.threshold_for(tier),
                })
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct UnreadCountResponse {
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        SuccessResponse { success: true }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Cover candidate from the external catalog seam.
#[derive(Debug, Clone, Serialize)]
pub struct CoverCandidate {
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Search hit from the external catalog seam.
#[derive(Debug, Clone, Serialize)]
pub struct ExternalBook {
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookClubDetail {
    pub club: BookClub,
    pub members: Vec<BookClubMember>,
    pub messages: Vec<BookClubMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_table_covers_every_kind_and_tier() {
        let table = tier_table();

        assert_eq!(table.len(), 4);
        for entry in &table {
            assert_eq!(entry.tiers.len(), 5);
            for pair in entry.tiers.windows(2) {
                assert!(pair[0].threshold < pair[1].threshold);
            }
        }
    }

    #[test]
    fn tier_table_serializes_kind_under_type_key() {
        let table = tier_table();
        let value = serde_json::to_value(&table).unwrap();

        assert_eq!(value[0]["type"], "quizzes");
        assert_eq!(value[0]["tiers"][0]["tier"], "bronze");
        assert_eq!(value[0]["tiers"][0]["threshold"], 1);
        assert_eq!(value[3]["type"], "daily_streak");
        assert_eq!(value[3]["tiers"][4]["threshold"], 100);
    }

    #[test]
    fn difficulty_breakdown_counts_each_bucket() {
        let mut breakdown = DifficultyBreakdown::default();
        breakdown.record(QuizDifficulty::Medium);
        breakdown.record(QuizDifficulty::Medium);
        breakdown.record(QuizDifficulty::Hard);

        assert_eq!(breakdown.medium, 2);
        assert_eq!(breakdown.hard, 1);
        assert_eq!(breakdown.easy, 0);
    }
}
