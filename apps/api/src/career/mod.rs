//! Career-path recommender: parse a free-text profile, generate suggestions,
//! then attach one personalized explanation per suggestion (2 + N completion
//! calls). Malformed intermediate JSON is defaulted, never fatal; provider
//! errors fail the request.

pub mod handlers;
pub mod orchestrator;
pub mod prompts;

use serde::{Deserialize, Serialize};

/// Structured profile extracted from free text. Malformed model output
/// degrades to the all-empty default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub academics: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerSuggestion {
    pub career_name: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
    /// Filled by the per-suggestion explanation call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}
