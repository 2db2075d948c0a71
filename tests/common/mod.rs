#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use readstack_server::{
    errors::{AppError, AppResult},
    models::domain::{
        Badge, BadgeKind, BadgeTier, Book, BookClub, BookClubMember, BookClubMessage,
        Notification, Quiz, QuizAnswer, StatField, UserStats,
    },
    repositories::{
        BadgeRepository, BookClubRepository, BookRepository, NotificationRepository,
        QuizRepository, UserStatsRepository,
    },
};

fn bump(stats: &mut UserStats, field: StatField) {
    match field {
        StatField::QuizzesCompleted => stats.total_quizzes_completed += 1,
        StatField::BooksAdded => stats.total_books_added += 1,
        StatField::BooksRead => stats.total_books_read += 1,
    }
}

pub struct InMemoryUserStatsRepository {
    rows: Arc<RwLock<HashMap<String, UserStats>>>,
}

impl InMemoryUserStatsRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserStatsRepository for InMemoryUserStatsRepository {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<UserStats>> {
        let rows = self.rows.read().await;
        Ok(rows.get(user_id).cloned())
    }

    async fn find_or_create(&self, user_id: &str) -> AppResult<UserStats> {
        let mut rows = self.rows.write().await;
        let stats = rows
            .entry(user_id.to_string())
            .or_insert_with(|| UserStats::zero(user_id));
        Ok(stats.clone())
    }

    async fn increment(&self, user_id: &str, field: StatField) -> AppResult<UserStats> {
        let mut rows = self.rows.write().await;
        let stats = rows
            .entry(user_id.to_string())
            .or_insert_with(|| UserStats::zero(user_id));
        bump(stats, field);
        Ok(stats.clone())
    }

    async fn apply_streak(
        &self,
        user_id: &str,
        daily_streak: i32,
        longest_streak: i32,
        active_on: NaiveDate,
    ) -> AppResult<UserStats> {
        let mut rows = self.rows.write().await;
        let stats = rows
            .entry(user_id.to_string())
            .or_insert_with(|| UserStats::zero(user_id));
        stats.daily_streak = daily_streak;
        stats.longest_streak = longest_streak;
        stats.last_active_date = Some(active_on);
        Ok(stats.clone())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct InMemoryBadgeRepository {
    badges: Arc<RwLock<Vec<Badge>>>,
}

impl InMemoryBadgeRepository {
    pub fn new() -> Self {
        Self {
            badges: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl BadgeRepository for InMemoryBadgeRepository {
    async fn insert_if_absent(&self, badge: Badge) -> AppResult<bool> {
        let mut badges = self.badges.write().await;
        let taken = badges
            .iter()
            .any(|b| b.user_id == badge.user_id && b.kind == badge.kind && b.tier == badge.tier);
        if taken {
            return Ok(false);
        }
        badges.push(badge);
        Ok(true)
    }

    async fn has_badge(&self, user_id: &str, kind: BadgeKind, tier: BadgeTier) -> AppResult<bool> {
        let badges = self.badges.read().await;
        Ok(badges
            .iter()
            .any(|b| b.user_id == user_id && b.kind == kind && b.tier == tier))
    }

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Badge>> {
        let badges = self.badges.read().await;
        let mut items: Vec<Badge> = badges
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.earned_at.cmp(&a.earned_at));
        Ok(items)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct InMemoryNotificationRepository {
    rows: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn create(&self, notification: Notification) -> AppResult<Notification> {
        let mut rows = self.rows.write().await;
        rows.push(notification.clone());
        Ok(notification)
    }

    async fn list_for_user(&self, user_id: &str, limit: i64) -> AppResult<Vec<Notification>> {
        let rows = self.rows.read().await;
        let mut items: Vec<Notification> = rows
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items.truncate(limit.max(0) as usize);
        Ok(items)
    }

    async fn unread_count(&self, user_id: &str) -> AppResult<u64> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .count() as u64)
    }

    async fn mark_read(&self, id: &str) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        if let Some(notification) = rows.iter_mut().find(|n| n.id == id) {
            notification.is_read = true;
        }
        Ok(())
    }

    async fn mark_all_read(&self, user_id: &str) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        for notification in rows.iter_mut().filter(|n| n.user_id == user_id) {
            notification.is_read = true;
        }
        Ok(())
    }
}

pub struct InMemoryBookRepository {
    books: Arc<RwLock<HashMap<String, Book>>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Book>> {
        let books = self.books.read().await;
        let mut items: Vec<Book> = books
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.get(id).cloned())
    }

    async fn create(&self, book: Book) -> AppResult<Book> {
        let mut books = self.books.write().await;
        if books.contains_key(&book.id) {
            return Err(AppError::AlreadyExists(format!(
                "Book with id '{}' already exists",
                book.id
            )));
        }
        books.insert(book.id.clone(), book.clone());
        Ok(book)
    }

    async fn update(&self, book: Book) -> AppResult<Book> {
        let mut books = self.books.write().await;
        if !books.contains_key(&book.id) {
            return Err(AppError::NotFound(format!(
                "Book with id '{}' not found",
                book.id
            )));
        }
        books.insert(book.id.clone(), book.clone());
        Ok(book)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut books = self.books.write().await;
        if books.remove(id).is_none() {
            return Err(AppError::NotFound(format!("Book with id '{}' not found", id)));
        }
        Ok(())
    }

    async fn search(&self, user_id: &str, query: &str) -> AppResult<Vec<Book>> {
        let needle = query.to_lowercase();
        let books = self.books.read().await;
        let mut items: Vec<Book> = books
            .values()
            .filter(|b| {
                b.user_id == user_id
                    && (b.title.to_lowercase().contains(&needle)
                        || b.author.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn count_for_user(&self, user_id: &str) -> AppResult<u64> {
        let books = self.books.read().await;
        Ok(books.values().filter(|b| b.user_id == user_id).count() as u64)
    }
}

pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<String, Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.contains_key(&quiz.id) {
            return Err(AppError::AlreadyExists(format!(
                "Quiz with id '{}' already exists",
                quiz.id
            )));
        }
        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }

    async fn latest_for_book(&self, book_id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<&Quiz> = quizzes
            .values()
            .filter(|q| q.book_id == book_id)
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items.first().map(|q| (*q).clone()))
    }

    async fn find_by_books(&self, book_ids: &[String]) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<Quiz> = quizzes
            .values()
            .filter(|q| book_ids.contains(&q.book_id))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn record_score(
        &self,
        id: &str,
        score: i32,
        answers: &[QuizAnswer],
    ) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        let quiz = quizzes
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;
        quiz.score = Some(score);
        quiz.user_answers = Some(answers.to_vec());
        Ok(quiz.clone())
    }
}

pub struct InMemoryBookClubRepository {
    clubs: Arc<RwLock<HashMap<String, BookClub>>>,
    members: Arc<RwLock<Vec<BookClubMember>>>,
    messages: Arc<RwLock<Vec<BookClubMessage>>>,
}

impl InMemoryBookClubRepository {
    pub fn new() -> Self {
        Self {
            clubs: Arc::new(RwLock::new(HashMap::new())),
            members: Arc::new(RwLock::new(Vec::new())),
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl BookClubRepository for InMemoryBookClubRepository {
    async fn create_club(&self, club: BookClub) -> AppResult<BookClub> {
        let mut clubs = self.clubs.write().await;
        let code_taken = clubs.values().any(|c| c.invite_code == club.invite_code);
        if code_taken {
            return Err(AppError::AlreadyExists(format!(
                "Invite code '{}' already exists",
                club.invite_code
            )));
        }
        clubs.insert(club.id.clone(), club.clone());
        Ok(club)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<BookClub>> {
        let clubs = self.clubs.read().await;
        Ok(clubs.get(id).cloned())
    }

    async fn find_by_invite_code(&self, code: &str) -> AppResult<Option<BookClub>> {
        let clubs = self.clubs.read().await;
        Ok(clubs.values().find(|c| c.invite_code == code).cloned())
    }

    async fn find_owned_by(&self, user_id: &str) -> AppResult<Vec<BookClub>> {
        let clubs = self.clubs.read().await;
        Ok(clubs
            .values()
            .filter(|c| c.owner_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_joined_by(&self, user_id: &str) -> AppResult<Vec<BookClub>> {
        let members = self.members.read().await;
        let club_ids: Vec<&str> = members
            .iter()
            .filter(|m| m.user_id == user_id)
            .map(|m| m.club_id.as_str())
            .collect();

        let clubs = self.clubs.read().await;
        Ok(clubs
            .values()
            .filter(|c| club_ids.contains(&c.id.as_str()))
            .cloned()
            .collect())
    }

    async fn update_club(&self, club: BookClub) -> AppResult<BookClub> {
        let mut clubs = self.clubs.write().await;
        if !clubs.contains_key(&club.id) {
            return Err(AppError::NotFound(format!(
                "Book club with id '{}' not found",
                club.id
            )));
        }
        clubs.insert(club.id.clone(), club.clone());
        Ok(club)
    }

    async fn add_member(&self, member: BookClubMember) -> AppResult<BookClubMember> {
        let mut members = self.members.write().await;
        members.push(member.clone());
        Ok(member)
    }

    async fn remove_member(&self, club_id: &str, user_id: &str) -> AppResult<()> {
        let mut members = self.members.write().await;
        members.retain(|m| !(m.club_id == club_id && m.user_id == user_id));
        Ok(())
    }

    async fn is_member(&self, club_id: &str, user_id: &str) -> AppResult<bool> {
        let members = self.members.read().await;
        Ok(members
            .iter()
            .any(|m| m.club_id == club_id && m.user_id == user_id))
    }

    async fn list_members(&self, club_id: &str) -> AppResult<Vec<BookClubMember>> {
        let members = self.members.read().await;
        Ok(members
            .iter()
            .filter(|m| m.club_id == club_id)
            .cloned()
            .collect())
    }

    async fn list_messages(&self, club_id: &str, limit: i64) -> AppResult<Vec<BookClubMessage>> {
        let messages = self.messages.read().await;
        let mut items: Vec<BookClubMessage> = messages
            .iter()
            .filter(|m| m.club_id == club_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items.truncate(limit.max(0) as usize);
        Ok(items)
    }

    async fn create_message(&self, message: BookClubMessage) -> AppResult<BookClubMessage> {
        let mut messages = self.messages.write().await;
        messages.push(message.clone());
        Ok(message)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}
