use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Quiz, QuizAnswer, QuizDifficulty, StatField},
    models::dto::response::{
        DifficultyBreakdown, QuizAggregates, QuizHistoryEntry, QuizStatsResponse,
    },
    repositories::{BookRepository, QuizRepository},
    services::{
        ai::AiClient, badge_service::BadgeService, quiz_grading, stats_service::StatsService,
    },
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    books: Arc<dyn BookRepository>,
    ai: Arc<dyn AiClient>,
    stats: Arc<StatsService>,
    badges: Arc<BadgeService>,
}

impl QuizService {
    pub fn new(
        repository: Arc<dyn QuizRepository>,
        books: Arc<dyn BookRepository>,
        ai: Arc<dyn AiClient>,
        stats: Arc<StatsService>,
        badges: Arc<BadgeService>,
    ) -> Self {
        Self {
            repository,
            books,
            ai,
            stats,
            badges,
        }
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    pub async fn latest_for_book(&self, book_id: &str) -> AppResult<Quiz> {
        self.repository
            .latest_for_book(book_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No quiz found for book '{}'", book_id))
            })
    }

    /// Generates a fresh ungraded quiz for a book through the AI seam.
    pub async fn generate_for_book(
        &self,
        book_id: &str,
        difficulty: QuizDifficulty,
    ) -> AppResult<Quiz> {
        let book = self
            .books
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id '{}' not found", book_id)))?;

        let questions = self
            .ai
            .generate_quiz(&book.title, &book.author, difficulty)
            .await?;

        self.repository
            .create(Quiz::new(book_id, difficulty, questions))
            .await
    }

    /// Grades a submission and finalizes the quiz. A quiz grades exactly
    /// once; submitting again is a conflict rather than a silent overwrite
    /// that would double-count completion stats.
    pub async fn submit_quiz(
        &self,
        user_id: &str,
        quiz_id: &str,
        answers: Vec<QuizAnswer>,
    ) -> AppResult<Quiz> {
        let quiz = self.get_quiz(quiz_id).await?;

        if quiz.is_graded() {
            return Err(AppError::AlreadyExists(format!(
                "Quiz with id '{}' has already been submitted",
                quiz_id
            )));
        }

        let score = quiz_grading::score_quiz(&quiz.questions, &answers);
        let graded = self.repository.record_score(quiz_id, score, &answers).await?;

        // Gamification never fails the submission itself.
        if let Err(err) = self.record_completion(user_id).await {
            log::warn!(
                "badge evaluation failed after quiz submit for {}: {}",
                user_id,
                err
            );
        }

        Ok(graded)
    }

    /// Quiz history joined with book titles, plus display aggregates. The
    /// average is over per-quiz percentages, so it stays meaningful if quiz
    /// length ever varies.
    pub async fn quiz_stats(&self, user_id: &str) -> AppResult<QuizStatsResponse> {
        let books = self.books.find_by_user(user_id).await?;
        let titles: HashMap<&str, &str> = books
            .iter()
            .map(|book| (book.id.as_str(), book.title.as_str()))
            .collect();
        let book_ids: Vec<String> = books.iter().map(|book| book.id.clone()).collect();

        let quizzes = self.repository.find_by_books(&book_ids).await?;

        let mut breakdown = DifficultyBreakdown::default();
        let mut percentages = Vec::new();
        let mut history = Vec::with_capacity(quizzes.len());

        for quiz in &quizzes {
            breakdown.record(quiz.difficulty);
            if let Some(score) = quiz.score {
                percentages.push(quiz_grading::percentage(score, quiz.questions.len()));
            }
            history.push(QuizHistoryEntry {
                id: quiz.id.clone(),
                book_title: titles
                    .get(quiz.book_id.as_str())
                    .map(|title| title.to_string())
                    .unwrap_or_default(),
                difficulty: quiz.difficulty,
                score: quiz.score,
                created_at: quiz.created_at,
            });
        }

        let average_score = if percentages.is_empty() {
            0
        } else {
            (percentages.iter().sum::<i32>() as f64 / percentages.len() as f64).round() as i32
        };

        Ok(QuizStatsResponse {
            history,
            stats: QuizAggregates {
                total: quizzes.len() as i64,
                average_score,
                difficulty_breakdown: breakdown,
            },
        })
    }

    async fn record_completion(&self, user_id: &str) -> AppResult<()> {
        self.stats
            .increment_stat(user_id, StatField::QuizzesCompleted)
            .await?;
        self.badges.check_and_award_badges(user_id).await?;
        Ok(())
    }
}
