//! The three-stage career orchestrator. Parse failures on intermediate JSON
//! are quietly defaulted (the user still gets a useful answer); provider
//! failures propagate, since without the completion endpoint there is nothing
//! sensible to return.

use tracing::warn;

use crate::career::prompts::{
    EXPLANATION_PROMPT_TEMPLATE, PROFILE_PARSE_PROMPT_TEMPLATE, SUGGESTIONS_PROMPT_TEMPLATE,
};
use crate::career::{CareerSuggestion, StudentProfile};
use crate::errors::AppError;
use crate::llm_client::{normalize, CompletionOptions, LlmClient};

/// The safe placeholder returned when the suggestion call yields malformed
/// JSON: exactly one generic suggestion.
pub fn fallback_suggestions() -> Vec<CareerSuggestion> {
    vec![CareerSuggestion {
        career_name: "General Career Suggestion".to_string(),
        required_skills: vec![
            "Communication".to_string(),
            "Problem-solving".to_string(),
            "Adaptability".to_string(),
        ],
        reasoning: "Based on your profile, these foundational skills will help in many career paths."
            .to_string(),
        explanation: None,
    }]
}

/// Normalizes the profile-parse reply; malformed JSON → empty defaults.
pub fn profile_from_response(raw: &str) -> StudentProfile {
    match normalize::parse_json(raw) {
        Ok(profile) => profile,
        Err(e) => {
            warn!("profile parse returned malformed JSON, using empty defaults: {e}");
            StudentProfile::default()
        }
    }
}

/// Normalizes the suggestion reply; malformed JSON → the fixed fallback list.
pub fn suggestions_from_response(raw: &str) -> Vec<CareerSuggestion> {
    match normalize::parse_json(raw) {
        Ok(suggestions) => suggestions,
        Err(e) => {
            warn!("career suggestions returned malformed JSON, using fallback: {e}");
            fallback_suggestions()
        }
    }
}

fn explanation_prompt(suggestion: &CareerSuggestion, profile: &StudentProfile) -> String {
    EXPLANATION_PROMPT_TEMPLATE
        .replace("{career_name}", &suggestion.career_name)
        .replace("{strengths}", &profile.skills.join(", "))
        .replace("{required_skills}", &suggestion.required_skills.join(", "))
}

/// Full orchestration: 2 + N completion calls, strictly sequential.
pub async fn recommend(
    llm: &LlmClient,
    profile_text: &str,
) -> Result<Vec<CareerSuggestion>, AppError> {
    let options = CompletionOptions::default();

    // Stage 1: parse the profile (defaulted on malformed JSON).
    let raw = llm
        .complete(
            &PROFILE_PARSE_PROMPT_TEMPLATE.replace("{profile_text}", profile_text),
            &options,
        )
        .await?;
    let profile = profile_from_response(&raw);

    // Stage 2: career suggestions (fallback list on malformed JSON).
    let raw = llm
        .complete(
            &SUGGESTIONS_PROMPT_TEMPLATE.replace("{profile_text}", profile_text),
            &options,
        )
        .await?;
    let mut suggestions = suggestions_from_response(&raw);

    // Stage 3: one explanation call per suggestion, appended in place.
    for suggestion in &mut suggestions {
        let prompt = explanation_prompt(suggestion, &profile);
        suggestion.explanation = Some(llm.complete(&prompt, &options).await?);
    }

    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_profile_defaults_to_empty() {
        let profile = profile_from_response("I cannot answer that as JSON, sorry.");
        assert!(profile.skills.is_empty());
        assert!(profile.academics.is_none());
        assert!(profile.interests.is_empty());
    }

    #[test]
    fn test_well_formed_profile_parses() {
        let raw = r#"```json
        {"skills": ["Python", "SQL"], "academics": "BSc CS", "interests": ["data"]}
        ```"#;
        let profile = profile_from_response(raw);
        assert_eq!(profile.skills, ["Python", "SQL"]);
        assert_eq!(profile.academics.as_deref(), Some("BSc CS"));
    }

    #[test]
    fn test_malformed_suggestions_yield_exactly_the_fallback() {
        let suggestions = suggestions_from_response("** no json here **");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].career_name, "General Career Suggestion");
        assert_eq!(
            suggestions[0].required_skills,
            ["Communication", "Problem-solving", "Adaptability"]
        );
        assert!(suggestions[0].explanation.is_none());
    }

    #[test]
    fn test_well_formed_suggestions_parse_as_array() {
        let raw = r#"[
            {"career_name": "Data Engineer", "required_skills": ["SQL"], "reasoning": "fit"},
            {"career_name": "ML Engineer", "required_skills": ["Python"], "reasoning": "fit"}
        ]"#;
        let suggestions = suggestions_from_response(raw);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[1].career_name, "ML Engineer");
    }

    #[test]
    fn test_explanation_prompt_embeds_alignment_inputs() {
        let suggestion = CareerSuggestion {
            career_name: "Data Engineer".to_string(),
            required_skills: vec!["SQL".to_string(), "Spark".to_string()],
            reasoning: String::new(),
            explanation: None,
        };
        let profile = StudentProfile {
            skills: vec!["Python".to_string(), "SQL".to_string()],
            academics: None,
            interests: vec![],
        };
        let prompt = explanation_prompt(&suggestion, &profile);
        assert!(prompt.contains("Recommendation: Data Engineer"));
        assert!(prompt.contains("Student profile strengths: Python, SQL"));
        assert!(prompt.contains("Suggested required skills: SQL, Spark"));
    }
}
