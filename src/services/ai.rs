use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use async_trait::async_trait;
use schemars::JsonSchema;
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::quiz::{QuestionType, QuizDifficulty, QuizQuestion},
    models::dto::request::SummaryLength,
};

/// Structured shape the model is asked to return for a quiz. Kept separate
/// from the domain types so a sloppy response degrades field by field
/// instead of failing the whole payload.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeneratedQuiz {
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeneratedQuestion {
    #[serde(rename = "type")]
    pub question_type: String,
    pub question: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: Option<i64>,
    #[serde(default)]
    pub correct_answers: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeneratedRecommendations {
    pub recommendations: Vec<GeneratedRecommendation>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeneratedRecommendation {
    pub book_title: String,
    pub book_author: String,
    pub reason: String,
}

/// Opaque language-model collaborator. Everything past this trait is
/// provider detail; callers only see structured results.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn generate_quiz(
        &self,
        title: &str,
        author: &str,
        difficulty: QuizDifficulty,
    ) -> AppResult<Vec<QuizQuestion>>;

    async fn generate_summary(
        &self,
        title: &str,
        author: &str,
        length: SummaryLength,
    ) -> AppResult<String>;

    async fn recommend_books(
        &self,
        read_books: &[(String, String)],
    ) -> AppResult<Vec<GeneratedRecommendation>>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        let openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
        }
    }

    async fn json_completion(&self, system: &str, user: &str) -> AppResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .response_format(ResponseFormat::JsonObject)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;
        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();

        Ok(content)
    }

    async fn text_completion(&self, system: &str, user: &str) -> AppResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;
        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();

        Ok(content)
    }
}

#[async_trait]
impl AiClient for OpenAiClient {
    async fn generate_quiz(
        &self,
        title: &str,
        author: &str,
        difficulty: QuizDifficulty,
    ) -> AppResult<Vec<QuizQuestion>> {
        let system = quiz_system_prompt(difficulty);
        let user = format!(
            "Create a {} difficulty quiz with 10 mixed-type questions for \"{}\" by {}.",
            difficulty.as_str(),
            title,
            author
        );

        let content = self.json_completion(&system, &user).await?;
        let generated: GeneratedQuiz = serde_json::from_str(&content).map_err(|err| {
            AppError::InternalError(format!("AI returned malformed quiz JSON: {}", err))
        })?;

        if generated.questions.is_empty() {
            return Err(AppError::InternalError(
                "AI returned a quiz with no questions".to_string(),
            ));
        }

        Ok(generated.questions.into_iter().map(QuizQuestion::from).collect())
    }

    async fn generate_summary(
        &self,
        title: &str,
        author: &str,
        length: SummaryLength,
    ) -> AppResult<String> {
        let system = format!(
            "You are a helpful literary assistant. Provide a {} summary of the book. \
             Start with a paragraph introducing the premise, follow with bullet points \
             for main themes, key characters, and plot highlights, and end with a \
             paragraph on the book's significance.",
            length.description()
        );
        let user = format!(
            "Please provide a {} summary for the book \"{}\" by {}.",
            length.description(),
            title,
            author
        );

        let summary = self.text_completion(&system, &user).await?;
        if summary.trim().is_empty() {
            return Err(AppError::InternalError(
                "AI returned an empty summary".to_string(),
            ));
        }

        Ok(summary)
    }

    async fn recommend_books(
        &self,
        read_books: &[(String, String)],
    ) -> AppResult<Vec<GeneratedRecommendation>> {
        let book_list = read_books
            .iter()
            .map(|(title, author)| format!("\"{}\" by {}", title, author))
            .collect::<Vec<_>>()
            .join(", ");

        let schema = serde_json::to_string(&schemars::schema_for!(GeneratedRecommendations))
            .unwrap_or_default();
        let system = format!(
            "You are a librarian. Recommend 3 books based on the user's reading history. \
             Respond with JSON matching this schema: {}",
            schema
        );
        let user = format!("I have read: {}. What should I read next?", book_list);

        let content = self.json_completion(&system, &user).await?;
        let generated: GeneratedRecommendations =
            serde_json::from_str(&content).map_err(|err| {
                AppError::InternalError(format!(
                    "AI returned malformed recommendations JSON: {}",
                    err
                ))
            })?;

        Ok(generated.recommendations)
    }
}

impl From<GeneratedQuestion> for QuizQuestion {
    fn from(generated: GeneratedQuestion) -> Self {
        QuizQuestion {
            question_type: parse_question_type(&generated.question_type),
            question: generated.question,
            options: generated.options,
            correct_answer: generated.correct_answer,
            correct_answers: generated.correct_answers,
        }
    }
}

fn parse_question_type(value: &str) -> QuestionType {
    match value.trim().to_lowercase().as_str() {
        "true_false" => QuestionType::TrueFalse,
        "multiple_choice" => QuestionType::MultipleChoice,
        "multiple_select" => QuestionType::MultipleSelect,
        _ => QuestionType::MultipleChoice,
    }
}

fn quiz_system_prompt(difficulty: QuizDifficulty) -> String {
    format!(
        "You are a teacher creating a diverse quiz for a book. {} \
         Generate 10 questions with a mix of question types in JSON format. Include: \
         3 true/false questions (type: \"true_false\", options: [\"True\", \"False\"], \
         correct_answer: 0 or 1), \
         4 multiple choice questions (type: \"multiple_choice\", options: 4 choices, \
         correct_answer: 0-3), and \
         3 select-all-that-apply questions (type: \"multiple_select\", options: 4 choices, \
         correct_answers: array of correct indices like [0, 2]). \
         The format should be: {}",
        difficulty_prompt(difficulty),
        serde_json::to_string(&schemars::schema_for!(GeneratedQuiz)).unwrap_or_default()
    )
}

fn difficulty_prompt(difficulty: QuizDifficulty) -> &'static str {
    match difficulty {
        QuizDifficulty::Beginner => {
            "Generate very simple, basic recall questions about the main character names \
             and the most obvious plot events."
        }
        QuizDifficulty::Easy => {
            "Generate simple, factual questions about characters, settings, and major plot points."
        }
        QuizDifficulty::Medium => {
            "Generate questions about themes, character motivations, relationships, and key events."
        }
        QuizDifficulty::Hard => {
            "Generate challenging questions about literary devices, symbolism, subtle \
             foreshadowing, and thematic analysis."
        }
        QuizDifficulty::Expert => {
            "Generate expert-level questions requiring deep analysis of narrative techniques, \
             authorial intent, historical context, and complex character psychology."
        }
    }
}

impl SummaryLength {
    fn description(self) -> &'static str {
        match self {
            SummaryLength::Short => "brief (approximately 500 characters)",
            SummaryLength::Medium => "moderate length (approximately 1500 characters)",
            SummaryLength::Detailed => "comprehensive and detailed (approximately 5000 characters)",
        }
    }
}
