//! Pure option router: maps a selected option id onto a canned reply plus a
//! fixed set of follow-up options. No I/O; free-text turns never reach this.

use crate::chatbot::knowledge::{
    nav_option, page_info, MAIN_MENU_GREETING, MAIN_MENU_OPTIONS, NAVIGATE_OPTIONS,
};
use crate::chatbot::{ChatReply, NavigateAction, OptionItem, ReplyKind};

pub fn main_menu() -> ChatReply {
    ChatReply::options(
        MAIN_MENU_GREETING,
        MAIN_MENU_OPTIONS.iter().map(OptionItem::from).collect(),
        100,
    )
}

/// Routes one selected option id. Unknown ids degrade to an error reply that
/// always offers a way back to the main menu.
pub fn route_option(option_id: &str) -> ChatReply {
    match option_id {
        "main_menu" | "" => main_menu(),
        "navigate_pages" => navigation_menu(),
        "explore_features" => explore_features(),
        "career_help" => career_help(),
        "quick_actions" => quick_actions(),
        id if id.starts_with("go_") => navigate_to(id),
        _ => unknown_option(),
    }
}

fn navigation_menu() -> ChatReply {
    let mut options: Vec<OptionItem> = NAVIGATE_OPTIONS
        .iter()
        .map(|opt| OptionItem::with_description(opt.id, opt.text, &format!("Go to {}", opt.text)))
        .collect();
    options.push(OptionItem::new("main_menu", "⬅️ Back to Main Menu"));

    ChatReply::options(
        "🧭 **Quick Navigation** - Where would you like to go?",
        options,
        100,
    )
}

fn navigate_to(option_id: &str) -> ChatReply {
    let Some(selected) = nav_option(option_id) else {
        return ChatReply::error("Page not found", vec![OptionItem::main_menu()]);
    };

    // Nav options are validated against the catalog in tests; fall back to the
    // raw path if the page is somehow missing.
    let (name, description) = match page_info(selected.page) {
        Some(page) => (page.name, page.description),
        None => (selected.page, "Loading..."),
    };

    ChatReply {
        kind: ReplyKind::Navigation,
        message: format!("🧭 Taking you to **{name}**...\n\n{description}"),
        options: Vec::new(),
        page: Some(selected.page.to_string()),
        confidence: 95,
        follow_up_options: vec![
            OptionItem::main_menu(),
            OptionItem::new("navigate_pages", "🧭 Go Somewhere Else"),
        ],
        actions: vec![NavigateAction::to_page(selected.page, name)],
    }
}

fn explore_features() -> ChatReply {
    ChatReply::options(
        "🔍 **Platform Features** - What would you like to explore?",
        vec![
            OptionItem::with_description(
                "feature_career",
                "🎯 Career Development Tools",
                "Career planning and guidance",
            ),
            OptionItem::with_description(
                "feature_analysis",
                "📊 Analysis Tools",
                "Skills and resume analysis",
            ),
            OptionItem::with_description(
                "feature_networking",
                "🤝 Networking Tools",
                "Mentorship and community",
            ),
            OptionItem::new("main_menu", "⬅️ Back to Main Menu"),
        ],
        98,
    )
}

fn career_help() -> ChatReply {
    ChatReply {
        kind: ReplyKind::Advice,
        message: "💼 **Career Guidance Available:**\n\n\
            • **Career Planning** - Set goals and create roadmaps\n\
            • **Skill Development** - Identify gaps and learning paths\n\
            • **Job Search** - Market insights and opportunities\n\
            • **Resume Optimization** - ATS-friendly resume building\n\
            • **Interview Prep** - Practice and feedback\n\n\
            What specific area would you like help with?"
            .to_string(),
        options: Vec::new(),
        page: None,
        confidence: 95,
        follow_up_options: vec![
            OptionItem::new("go_career_paths", "🛤️ Explore Careers"),
            OptionItem::new("go_skills", "🎯 Analyze Skills"),
            OptionItem::new("go_resume", "📄 Build Resume"),
            OptionItem::main_menu(),
        ],
        actions: Vec::new(),
    }
}

fn quick_actions() -> ChatReply {
    ChatReply::options(
        "⚡ **Quick Actions** - Popular features:",
        vec![
            OptionItem::with_description("go_skills", "🎯 Skills Assessment", "Evaluate your abilities"),
            OptionItem::with_description("go_ats", "📊 Check Resume ATS", "ATS compatibility check"),
            OptionItem::with_description("go_jobs", "💼 Browse Jobs", "Current opportunities"),
            OptionItem::with_description("go_dashboard", "📈 View Progress", "Your career dashboard"),
            OptionItem::new("main_menu", "⬅️ Back to Main Menu"),
        ],
        100,
    )
}

fn unknown_option() -> ChatReply {
    ChatReply::error(
        "I didn't understand that option. Let me show you the main menu.",
        vec![OptionItem::main_menu()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_lists_all_top_level_options() {
        let reply = main_menu();
        assert_eq!(reply.kind, ReplyKind::Options);
        assert_eq!(reply.options.len(), MAIN_MENU_OPTIONS.len());
        assert_eq!(reply.confidence, 100);
    }

    #[test]
    fn test_empty_option_id_returns_main_menu() {
        let reply = route_option("");
        assert_eq!(reply.kind, ReplyKind::Options);
        assert_eq!(reply.message, MAIN_MENU_GREETING);
    }

    #[test]
    fn test_unknown_option_degrades_to_error_with_main_menu_follow_up() {
        for id in ["bogus", "go", "feature_career_x", "☃"] {
            let reply = route_option(id);
            assert_eq!(reply.kind, ReplyKind::Error, "option id {id}");
            assert_eq!(reply.confidence, 0);
            assert!(
                reply.follow_up_options.iter().any(|o| o.id == "main_menu"),
                "option id {id} must offer a way back to the main menu"
            );
        }
    }

    #[test]
    fn test_go_option_returns_navigation_with_page() {
        let reply = route_option("go_resume");
        assert_eq!(reply.kind, ReplyKind::Navigation);
        assert_eq!(reply.page.as_deref(), Some("/resume-builder"));
        assert_eq!(reply.confidence, 95);
        assert!(reply.message.contains("Resume Builder"));
        assert!(reply.follow_up_options.iter().any(|o| o.id == "main_menu"));
    }

    #[test]
    fn test_unknown_go_option_is_page_not_found() {
        let reply = route_option("go_nowhere");
        assert_eq!(reply.kind, ReplyKind::Error);
        assert_eq!(reply.message, "Page not found");
        assert!(reply.follow_up_options.iter().any(|o| o.id == "main_menu"));
    }

    #[test]
    fn test_navigation_menu_ends_with_back_option() {
        let reply = route_option("navigate_pages");
        assert_eq!(reply.kind, ReplyKind::Options);
        assert_eq!(reply.options.len(), NAVIGATE_OPTIONS.len() + 1);
        assert_eq!(reply.options.last().unwrap().id, "main_menu");
    }

    #[test]
    fn test_career_help_offers_navigation_follow_ups() {
        let reply = route_option("career_help");
        assert_eq!(reply.kind, ReplyKind::Advice);
        let ids: Vec<&str> = reply
            .follow_up_options
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, ["go_career_paths", "go_skills", "go_resume", "main_menu"]);
    }

    #[test]
    fn test_quick_actions_lists_popular_features() {
        let reply = route_option("quick_actions");
        assert_eq!(reply.kind, ReplyKind::Options);
        assert!(reply.options.iter().any(|o| o.id == "go_ats"));
    }
}
