use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{BookClub, BookClubMember, BookClubMessage},
};

/// Clubs plus their membership and message feeds. One aggregate, three
/// collections underneath.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookClubRepository: Send + Sync {
    async fn create_club(&self, club: BookClub) -> AppResult<BookClub>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<BookClub>>;
    async fn find_by_invite_code(&self, code: &str) -> AppResult<Option<BookClub>>;
    async fn find_owned_by(&self, user_id: &str) -> AppResult<Vec<BookClub>>;
    async fn find_joined_by(&self, user_id: &str) -> AppResult<Vec<BookClub>>;
    async fn update_club(&self, club: BookClub) -> AppResult<BookClub>;

    async fn add_member(&self, member: BookClubMember) -> AppResult<BookClubMember>;
    async fn remove_member(&self, club_id: &str, user_id: &str) -> AppResult<()>;
    async fn is_member(&self, club_id: &str, user_id: &str) -> AppResult<bool>;
    async fn list_members(&self, club_id: &str) -> AppResult<Vec<BookClubMember>>;

    async fn list_messages(&self, club_id: &str, limit: i64) -> AppResult<Vec<BookClubMessage>>;
    async fn create_message(&self, message: BookClubMessage) -> AppResult<BookClubMessage>;

    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoBookClubRepository {
    clubs: Collection<BookClub>,
    members: Collection<BookClubMember>,
    messages: Collection<BookClubMessage>,
}

impl MongoBookClubRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            clubs: db.get_collection("book_clubs"),
            members: db.get_collection("book_club_members"),
            messages: db.get_collection("book_club_messages"),
        }
    }
}

#[async_trait]
impl BookClubRepository for MongoBookClubRepository {
    async fn create_club(&self, club: BookClub) -> AppResult<BookClub> {
        self.clubs.insert_one(&club).await?;
        Ok(club)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<BookClub>> {
        let club = self.clubs.find_one(doc! { "id": id }).await?;
        Ok(club)
    }

    async fn find_by_invite_code(&self, code: &str) -> AppResult<Option<BookClub>> {
        let club = self.clubs.find_one(doc! { "invite_code": code }).await?;
        Ok(club)
    }

    async fn find_owned_by(&self, user_id: &str) -> AppResult<Vec<BookClub>> {
        let cursor = self.clubs.find(doc! { "owner_id": user_id }).await?;
        let clubs: Vec<BookClub> = cursor.try_collect().await?;
        Ok(clubs)
    }

    async fn find_joined_by(&self, user_id: &str) -> AppResult<Vec<BookClub>> {
        let memberships = self
            .members
            .find(doc! { "user_id": user_id })
            .await?
            .try_collect::<Vec<BookClubMember>>()
            .await?;

        let club_ids: Vec<String> = memberships.into_iter().map(|m| m.club_id).collect();
        if club_ids.is_empty() {
            return Ok(vec![]);
        }

        let cursor = self.clubs.find(doc! { "id": { "$in": club_ids } }).await?;
        let clubs: Vec<BookClub> = cursor.try_collect().await?;
        Ok(clubs)
    }

    async fn update_club(&self, club: BookClub) -> AppResult<BookClub> {
        let result = self
            .clubs
            .replace_one(doc! { "id": &club.id }, &club)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Book club with id '{}' not found",
                club.id
            )));
        }

        Ok(club)
    }

    async fn add_member(&self, member: BookClubMember) -> AppResult<BookClubMember> {
        self.members.insert_one(&member).await?;
        Ok(member)
    }

    async fn remove_member(&self, club_id: &str, user_id: &str) -> AppResult<()> {
        self.members
            .delete_one(doc! { "club_id": club_id, "user_id": user_id })
            .await?;
        Ok(())
    }

    async fn is_member(&self, club_id: &str, user_id: &str) -> AppResult<bool> {
        let member = self
            .members
            .find_one(doc! { "club_id": club_id, "user_id": user_id })
            .await?;
        Ok(member.is_some())
    }

    async fn list_members(&self, club_id: &str) -> AppResult<Vec<BookClubMember>> {
        let cursor = self.members.find(doc! { "club_id": club_id }).await?;
        let members: Vec<BookClubMember> = cursor.try_collect().await?;
        Ok(members)
    }

    async fn list_messages(&self, club_id: &str, limit: i64) -> AppResult<Vec<BookClubMessage>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .limit(Some(limit))
            .build();

        let cursor = self
            .messages
            .find(doc! { "club_id": club_id })
            .with_options(find_options)
            .await?;
        let messages: Vec<BookClubMessage> = cursor.try_collect().await?;
        Ok(messages)
    }

    async fn create_message(&self, message: BookClubMessage) -> AppResult<BookClubMessage> {
        self.messages.insert_one(&message).await?;
        Ok(message)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder()
            .unique(true)
            .name("invite_code_unique".to_string())
            .build();
        let model = IndexModel::builder()
            .keys(doc! { "invite_code": 1 })
            .options(options)
            .build();

        self.clubs.create_index(model).await?;
        log::info!("created unique index on book_clubs.invite_code");

        Ok(())
    }
}
