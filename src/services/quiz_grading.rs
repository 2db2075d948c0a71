use std::collections::BTreeSet;

use crate::models::domain::quiz::{QuestionType, QuizAnswer, QuizQuestion};

/// Number of correctly answered questions. Questions and answers align by
/// index; a short answer vector grades the missing entries as incorrect.
pub fn score_quiz(questions: &[QuizQuestion], answers: &[QuizAnswer]) -> i32 {
    questions
        .iter()
        .enumerate()
        .filter(|(index, question)| is_correct(question, answers.get(*index)))
        .count() as i32
}

/// Display-layer transform only; the grading contract is the raw count.
pub fn percentage(score: i32, question_count: usize) -> i32 {
    if question_count == 0 {
        return 0;
    }
    (score as f64 / question_count as f64 * 100.0).round() as i32
}

fn is_correct(question: &QuizQuestion, answer: Option<&QuizAnswer>) -> bool {
    match question.question_type {
        QuestionType::MultipleSelect => {
            // Exact set equality, order-insensitive, no partial credit. A
            // single-index or absent answer grades as the empty set.
            let correct: BTreeSet<i64> = question
                .correct_answers
                .iter()
                .flatten()
                .copied()
                .collect();
            let chosen: BTreeSet<i64> = match answer {
                Some(QuizAnswer::Multiple(indices)) => indices.iter().copied().collect(),
                _ => BTreeSet::new(),
            };
            correct == chosen
        }
        // true_false, multiple_choice, and anything unrecognized grade by
        // direct index equality.
        _ => match (answer, question.correct_answer) {
            (Some(QuizAnswer::Single(chosen)), Some(correct)) => *chosen == correct,
            _ => false,
        },
    }
}
