use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BookClub {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub owner_id: String,
    pub invite_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_book_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BookClub {
    pub fn new(name: &str, description: Option<String>, owner_id: &str) -> Self {
        BookClub {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description,
            owner_id: owner_id.to_string(),
            invite_code: generate_invite_code(),
            current_book_id: None,
            created_at: Utc::now(),
        }
    }
}

/// Short shareable code, unique via the store index.
fn generate_invite_code() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BookClubMember {
    pub id: String,
    pub club_id: String,
    pub user_id: String,
    pub joined_at: DateTime<Utc>,
}

impl BookClubMember {
    pub fn new(club_id: &str, user_id: &str) -> Self {
        BookClubMember {
            id: Uuid::new_v4().to_string(),
            club_id: club_id.to_string(),
            user_id: user_id.to_string(),
            joined_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BookClubMessage {
    pub id: String,
    pub club_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl BookClubMessage {
    pub fn new(club_id: &str, user_id: &str, content: &str) -> Self {
        BookClubMessage {
            id: Uuid::new_v4().to_string(),
            club_id: club_id.to_string(),
            user_id: user_id.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invite_codes_are_short_and_uppercase() {
        let club = BookClub::new("Sci-fi Circle", None, "user-1");

        assert_eq!(club.invite_code.len(), 8);
        assert_eq!(club.invite_code, club.invite_code.to_uppercase());
    }

    #[test]
    fn new_club_has_no_current_book() {
        let club = BookClub::new("History Buffs", Some("Slow readers welcome".into()), "user-1");

        assert!(club.current_book_id.is_none());
        assert_eq!(club.owner_id, "user-1");
    }
}
