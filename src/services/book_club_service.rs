use std::collections::HashMap;
use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{BookClub, BookClubMember, BookClubMessage},
    models::dto::request::{CreateBookClubRequest, PostMessageRequest},
    models::dto::response::BookClubDetail,
    repositories::BookClubRepository,
};

const MESSAGE_FEED_LIMIT: i64 = 100;

pub struct BookClubService {
    repository: Arc<dyn BookClubRepository>,
}

impl BookClubService {
    pub fn new(repository: Arc<dyn BookClubRepository>) -> Self {
        Self { repository }
    }

    /// Clubs the user owns or has joined, deduplicated.
    pub async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<BookClub>> {
        let owned = self.repository.find_owned_by(user_id).await?;
        let joined = self.repository.find_joined_by(user_id).await?;

        let mut by_id: HashMap<String, BookClub> = HashMap::new();
        for club in owned.into_iter().chain(joined) {
            by_id.insert(club.id.clone(), club);
        }

        let mut clubs: Vec<BookClub> = by_id.into_values().collect();
        clubs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(clubs)
    }

    pub async fn create(
        &self,
        user_id: &str,
        request: CreateBookClubRequest,
    ) -> AppResult<BookClub> {
        request.validate()?;

        let club = self
            .repository
            .create_club(BookClub::new(&request.name, request.description, user_id))
            .await?;

        // The owner reads their own club like any other member.
        self.repository
            .add_member(BookClubMember::new(&club.id, user_id))
            .await?;

        Ok(club)
    }

    pub async fn join(&self, user_id: &str, invite_code: &str) -> AppResult<BookClub> {
        let club = self
            .repository
            .find_by_invite_code(invite_code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No book club for invite code '{}'", invite_code))
            })?;

        if club.owner_id == user_id || self.repository.is_member(&club.id, user_id).await? {
            return Err(AppError::AlreadyExists(format!(
                "Already a member of book club '{}'",
                club.name
            )));
        }

        self.repository
            .add_member(BookClubMember::new(&club.id, user_id))
            .await?;

        Ok(club)
    }

    pub async fn get_detail(&self, club_id: &str, user_id: &str) -> AppResult<BookClubDetail> {
        let club = self.get_club(club_id).await?;
        self.require_member(&club, user_id).await?;

        let members = self.repository.list_members(club_id).await?;
        let messages = self
            .repository
            .list_messages(club_id, MESSAGE_FEED_LIMIT)
            .await?;

        Ok(BookClubDetail {
            club,
            members,
            messages,
        })
    }

    pub async fn leave(&self, club_id: &str, user_id: &str) -> AppResult<()> {
        self.repository.remove_member(club_id, user_id).await
    }

    pub async fn set_current_book(
        &self,
        club_id: &str,
        book_id: Option<String>,
    ) -> AppResult<BookClub> {
        let mut club = self.get_club(club_id).await?;
        club.current_book_id = book_id;
        self.repository.update_club(club).await
    }

    pub async fn members(&self, club_id: &str) -> AppResult<Vec<BookClubMember>> {
        self.get_club(club_id).await?;
        self.repository.list_members(club_id).await
    }

    pub async fn messages(&self, club_id: &str, user_id: &str) -> AppResult<Vec<BookClubMessage>> {
        let club = self.get_club(club_id).await?;
        self.require_member(&club, user_id).await?;
        self.repository.list_messages(club_id, MESSAGE_FEED_LIMIT).await
    }

    pub async fn post_message(
        &self,
        club_id: &str,
        user_id: &str,
        request: PostMessageRequest,
    ) -> AppResult<BookClubMessage> {
        request.validate()?;

        let club = self.get_club(club_id).await?;
        self.require_member(&club, user_id).await?;

        self.repository
            .create_message(BookClubMessage::new(club_id, user_id, &request.content))
            .await
    }

    async fn get_club(&self, club_id: &str) -> AppResult<BookClub> {
        self.repository
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book club with id '{}' not found", club_id)))
    }

    async fn require_member(&self, club: &BookClub, user_id: &str) -> AppResult<()> {
        if club.owner_id == user_id || self.repository.is_member(&club.id, user_id).await? {
            return Ok(());
        }
        Err(AppError::Forbidden(format!(
            "Not a member of book club '{}'",
            club.name
        )))
    }
}
