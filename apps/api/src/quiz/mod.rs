//! Multiple-choice-question generator: one prompt demanding an exact JSON
//! shape, fence-stripped and parsed into typed structures.

pub mod generator;
pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

fn default_level() -> String {
    "intermediate".to_string()
}

fn default_num_questions() -> u32 {
    10
}

/// Specification for a quiz to generate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub topic: String,
    pub domain: String,
    /// beginner, intermediate, or advanced.
    #[serde(default = "default_level")]
    pub difficulty: String,
    #[serde(default = "default_num_questions")]
    pub num_questions: u32,
    /// Specific skills to focus on; empty means general skills.
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default = "default_level")]
    pub user_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub quiz_metadata: QuizMetadata,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizMetadata {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub total_questions: u32,
    #[serde(default)]
    pub estimated_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: QuestionOptions,
    /// One of A, B, C, D.
    pub correct_answer: String,
    pub explanation: String,
    #[serde(default)]
    pub skill_category: String,
    #[serde(default)]
    pub difficulty_score: u8,
}

/// Exactly four labeled options. Typed fields rather than a map, so a response
/// missing a label fails the parse instead of sneaking through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}
