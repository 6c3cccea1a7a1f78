//! Free-text advisory pipeline: one completion call over a prompt embedding the
//! static knowledge snapshot, plus a keyword-to-page lookup over the original
//! user text to optionally attach one navigation suggestion.

use tracing::warn;

use crate::chatbot::knowledge::{page_info, pages_json, website_info_json, PageInfo, KEYWORD_PAGES};
use crate::chatbot::{ChatReply, NavigateAction, OptionItem, ReplyKind};
use crate::llm_client::{CompletionOptions, LlmClient};

const ADVISORY_PROMPT_TEMPLATE: &str = r#"You are an AI career advisor for Student Advisor Portal, a comprehensive career guidance platform.

WEBSITE INFO: {website_info}
AVAILABLE PAGES: {pages}

USER QUESTION: {question}
CURRENT PAGE: {current_page}

Provide helpful, concise career advice (2-3 sentences max). Be practical and actionable.
If relevant, suggest specific platform features or pages that could help the user.
Focus on career development, skills, job search, resumes, and professional growth."#;

const DEGRADED_MESSAGE: &str =
    "I'm having trouble processing your request. Please try the menu options or ask again.";

/// Case-insensitive substring lookup over the fixed keyword table.
/// The first match in table-definition order wins; there is no ranking.
pub fn keyword_navigation(text: &str) -> Option<&'static PageInfo> {
    let lower = text.to_lowercase();
    KEYWORD_PAGES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .and_then(|(_, page)| page_info(page))
}

fn build_prompt(question: &str, current_page: Option<&str>) -> String {
    ADVISORY_PROMPT_TEMPLATE
        .replace("{website_info}", &website_info_json().to_string())
        .replace("{pages}", &pages_json().to_string())
        .replace("{question}", question)
        .replace("{current_page}", current_page.unwrap_or("Unknown"))
}

/// Answers a free-text question. Provider failures degrade to an error-type
/// reply offering the main menu; this function never fails the request.
pub async fn advise(llm: &LlmClient, message: &str, current_page: Option<&str>) -> ChatReply {
    let prompt = build_prompt(message, current_page);

    let response_text = match llm.complete(&prompt, &CompletionOptions::default()).await {
        Ok(text) => text,
        Err(e) => {
            warn!("advisory completion failed, degrading to error reply: {e}");
            return ChatReply::error(DEGRADED_MESSAGE, vec![OptionItem::main_menu()]);
        }
    };

    // Navigation suggestion comes from the ORIGINAL user text, not the reply.
    let actions = keyword_navigation(message)
        .map(|page| vec![NavigateAction::to_page(page.path, page.name)])
        .unwrap_or_default();

    ChatReply {
        kind: ReplyKind::Text,
        message: response_text,
        options: Vec::new(),
        page: None,
        confidence: 85,
        follow_up_options: vec![OptionItem::main_menu()],
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_is_case_insensitive() {
        let page = keyword_navigation("How do I improve my RESUME?").unwrap();
        assert_eq!(page.path, "/resume-builder");
    }

    #[test]
    fn test_first_table_order_match_wins() {
        // Contains both "skill" and "job"; "skill" is earlier in the table.
        let page = keyword_navigation("what jobs fit my skills?").unwrap();
        assert_eq!(page.path, "/skills-analysis");

        // "career" vs "path": "career" comes first.
        let page = keyword_navigation("career path advice").unwrap();
        assert_eq!(page.path, "/career-paths");
    }

    #[test]
    fn test_substring_matching_catches_embedded_keywords() {
        let page = keyword_navigation("tell me about mentorship programs").unwrap();
        assert_eq!(page.path, "/mentorship");
    }

    #[test]
    fn test_no_keyword_means_no_suggestion() {
        assert!(keyword_navigation("hello there").is_none());
    }

    #[test]
    fn test_prompt_embeds_question_and_page_context() {
        let prompt = build_prompt("should I learn Rust?", Some("/dashboard"));
        assert!(prompt.contains("USER QUESTION: should I learn Rust?"));
        assert!(prompt.contains("CURRENT PAGE: /dashboard"));
        assert!(prompt.contains("Student Advisor Portal"));

        let prompt = build_prompt("hi", None);
        assert!(prompt.contains("CURRENT PAGE: Unknown"));
    }
}
