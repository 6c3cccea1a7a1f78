//! Resume analysis: extract text from an uploaded PDF, then three sequential
//! completion stages (parse, score, recommend), each independently callable.
//! Any stage failure aborts the pipeline; partial results are discarded.

pub mod extract;
pub mod handlers;
pub mod pipeline;
pub mod prompts;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured resume extracted by the parse stage. Every field is tolerant of
/// absence: the model regularly omits or nulls fields for sparse resumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub institution: String,
    /// Models emit this as either a number or a string; keep it raw.
    #[serde(default)]
    pub year: Option<Value>,
}

/// Six weighted sub-scores plus the total, produced by the scoring stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeScore {
    pub skill_score: f64,
    pub experience_score: f64,
    pub title_score: f64,
    pub education_score: f64,
    pub format_score: f64,
    pub language_score: f64,
    pub total_score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeRecommendations {
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub improved_bullets: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_resume_tolerates_sparse_model_output() {
        let json = r#"{
            "name": "Ada Lovelace",
            "skills": ["analysis"],
            "education": [{"degree": "BSc", "institution": "UoL", "year": 1840}]
        }"#;
        let parsed: ParsedResume = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.name, "Ada Lovelace");
        assert!(parsed.contact.email.is_none());
        assert!(parsed.experience.is_empty());
        assert_eq!(parsed.education[0].field, "");
        assert_eq!(parsed.education[0].year, Some(serde_json::json!(1840)));
    }

    #[test]
    fn test_score_requires_all_sub_scores() {
        let missing_total = r#"{
            "skill_score": 30, "experience_score": 15, "title_score": 10,
            "education_score": 8, "format_score": 9, "language_score": 4
        }"#;
        assert!(serde_json::from_str::<ResumeScore>(missing_total).is_err());
    }
}
