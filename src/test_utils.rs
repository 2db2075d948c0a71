#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::quiz::{QuestionType, QuizQuestion};
    use crate::models::domain::{Book, BookStatus, UserStats};

    /// Creates a standard shelf book
    pub fn test_book(user_id: &str, title: &str) -> Book {
        Book::new(user_id, title, "Test Author", BookStatus::WantToRead)
    }

    /// Stats row with a chosen counter value
    pub fn stats_with_books_added(user_id: &str, count: i32) -> UserStats {
        UserStats {
            total_books_added: count,
            ..UserStats::zero(user_id)
        }
    }

    pub fn true_false_question(correct: i64) -> QuizQuestion {
        QuizQuestion {
            question_type: QuestionType::TrueFalse,
            question: "The hero survives.".to_string(),
            options: vec!["True".to_string(), "False".to_string()],
            correct_answer: Some(correct),
            correct_answers: None,
        }
    }

    pub fn multiple_select_question(correct: Vec<i64>) -> QuizQuestion {
        QuizQuestion {
            question_type: QuestionType::MultipleSelect,
            question: "Which characters appear?".to_string(),
            options: vec![
                "Ahab".to_string(),
                "Ishmael".to_string(),
                "Queequeg".to_string(),
                "None of the above".to_string(),
            ],
            correct_answer: None,
            correct_answers: Some(correct),
        }
    }
}
