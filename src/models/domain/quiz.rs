use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizDifficulty {
    Beginner,
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl QuizDifficulty {
    pub const ALL: [QuizDifficulty; 5] = [
        QuizDifficulty::Beginner,
        QuizDifficulty::Easy,
        QuizDifficulty::Medium,
        QuizDifficulty::Hard,
        QuizDifficulty::Expert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuizDifficulty::Beginner => "beginner",
            QuizDifficulty::Easy => "easy",
            QuizDifficulty::Medium => "medium",
            QuizDifficulty::Hard => "hard",
            QuizDifficulty::Expert => "expert",
        }
    }
}

/// Question kinds the grader knows how to dispatch on. Anything else that
/// made it into the store grades through the single-answer branch, so an
/// unrecognized tag deserializes instead of failing the whole quiz.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    TrueFalse,
    #[default]
    MultipleChoice,
    MultipleSelect,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizQuestion {
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    pub question: String,
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answers: Option<Vec<i64>>,
}

/// A submitted answer: one option index for single-answer questions, a set
/// of indices for multiple-select.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum QuizAnswer {
    Single(i64),
    Multiple(Vec<i64>),
}

/// Quiz lifecycle: created ungraded (`score`/`user_answers` unset), graded
/// exactly once on submission, terminal thereafter.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub book_id: String,
    pub difficulty: QuizDifficulty,
    pub questions: Vec<QuizQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_answers: Option<Vec<QuizAnswer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(book_id: &str, difficulty: QuizDifficulty, questions: Vec<QuizQuestion>) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            book_id: book_id.to_string(),
            difficulty,
            questions,
            user_answers: None,
            score: None,
            created_at: Some(Utc::now()),
        }
    }

    pub fn is_graded(&self) -> bool {
        self.score.is_some()
    }
}
