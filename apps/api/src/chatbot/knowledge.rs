//! Static knowledge base for the chatbot: website info, page catalog, menus,
//! and the keyword→page table. Loaded once as process-wide constants; nothing
//! writes after load, so no synchronization is needed.

use serde_json::{json, Value};

pub const WEBSITE_NAME: &str = "Student Advisor Portal";
pub const WEBSITE_DESCRIPTION: &str = "AI-powered career guidance platform";

pub const WEBSITE_FEATURES: &[&str] = &[
    "Career path exploration",
    "Skills analysis and development",
    "Resume building with ATS optimization",
    "Job market insights",
    "Professional mentorship",
    "Community collaboration",
];

#[derive(Debug, Clone, Copy)]
pub struct PageInfo {
    pub path: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const PAGES: &[PageInfo] = &[
    PageInfo {
        path: "/dashboard",
        name: "Dashboard",
        description: "Personal career development hub with progress tracking",
        features: &["Progress tracking", "Quick actions", "Personalized insights"],
    },
    PageInfo {
        path: "/career-paths",
        name: "Career Paths",
        description: "Explore career options and industry insights",
        features: &["Industry exploration", "Career roadmaps", "Salary insights"],
    },
    PageInfo {
        path: "/skills-analysis",
        name: "Skills Analysis",
        description: "Comprehensive skill assessment and development",
        features: &["Skill assessment", "Gap analysis", "Learning recommendations"],
    },
    PageInfo {
        path: "/resume-builder",
        name: "Resume Builder",
        description: "AI-powered resume creation and ATS optimization",
        features: &["ATS optimization", "Template selection", "Content suggestions"],
    },
    PageInfo {
        path: "/job-market",
        name: "Job Market",
        description: "Real-time job market trends and opportunities",
        features: &["Job listings", "Market analysis", "Salary trends"],
    },
    PageInfo {
        path: "/mentorship",
        name: "Mentorship",
        description: "Connect with industry professionals",
        features: &["Mentor matching", "Session booking", "Expert advice"],
    },
    PageInfo {
        path: "/community",
        name: "Community",
        description: "Peer collaboration and knowledge sharing",
        features: &["Discussion forums", "Peer support", "Networking"],
    },
    PageInfo {
        path: "/profile",
        name: "Profile",
        description: "Account management and preferences",
        features: &["Personal settings", "Achievements", "Goals"],
    },
    PageInfo {
        path: "/ats",
        name: "ATS Analysis",
        description: "Resume ATS compatibility checking",
        features: &["ATS scoring", "Optimization suggestions", "Keyword analysis"],
    },
];

pub fn page_info(path: &str) -> Option<&'static PageInfo> {
    PAGES.iter().find(|p| p.path == path)
}

#[derive(Debug, Clone, Copy)]
pub struct MenuOption {
    pub id: &'static str,
    pub text: &'static str,
    pub description: Option<&'static str>,
}

pub const MAIN_MENU_GREETING: &str =
    "👋 Welcome to Student Advisor Portal! I'm your AI career assistant. How can I help you today?";

pub const MAIN_MENU_OPTIONS: &[MenuOption] = &[
    MenuOption {
        id: "explore_features",
        text: "🔍 Explore Platform Features",
        description: Some("Learn about our career development tools"),
    },
    MenuOption {
        id: "navigate_pages",
        text: "🧭 Navigate to Specific Page",
        description: Some("Quick access to different sections"),
    },
    MenuOption {
        id: "career_help",
        text: "💼 Get Career Guidance",
        description: Some("Personalized career advice"),
    },
    MenuOption {
        id: "quick_actions",
        text: "⚡ Quick Actions",
        description: Some("Popular tasks and features"),
    },
    MenuOption {
        id: "free_text",
        text: "💬 Ask Me Anything",
        description: Some("Type your own question"),
    },
];

#[derive(Debug, Clone, Copy)]
pub struct NavOption {
    pub id: &'static str,
    pub text: &'static str,
    pub page: &'static str,
}

pub const NAVIGATE_OPTIONS: &[NavOption] = &[
    NavOption { id: "go_dashboard", text: "🏠 Dashboard", page: "/dashboard" },
    NavOption { id: "go_career_paths", text: "🛤️ Career Paths", page: "/career-paths" },
    NavOption { id: "go_skills", text: "🎯 Skills Analysis", page: "/skills-analysis" },
    NavOption { id: "go_resume", text: "📄 Resume Builder", page: "/resume-builder" },
    NavOption { id: "go_jobs", text: "💼 Job Market", page: "/job-market" },
    NavOption { id: "go_mentorship", text: "👥 Mentorship", page: "/mentorship" },
    NavOption { id: "go_community", text: "🤝 Community", page: "/community" },
    NavOption { id: "go_profile", text: "👤 Profile", page: "/profile" },
    NavOption { id: "go_ats", text: "📊 ATS Analysis", page: "/ats" },
];

pub fn nav_option(id: &str) -> Option<&'static NavOption> {
    NAVIGATE_OPTIONS.iter().find(|opt| opt.id == id)
}

/// Keyword→page table for the advisory pipeline. Order matters: the first
/// matching keyword wins, so more specific keywords come first.
pub const KEYWORD_PAGES: &[(&str, &str)] = &[
    ("skill", "/skills-analysis"),
    ("resume", "/resume-builder"),
    ("cv", "/resume-builder"),
    ("job", "/job-market"),
    ("career", "/career-paths"),
    ("path", "/career-paths"),
    ("mentor", "/mentorship"),
    ("community", "/community"),
    ("profile", "/profile"),
    ("ats", "/ats"),
    ("dashboard", "/dashboard"),
];

/// JSON snapshot of the website info, embedded into the advisory prompt.
pub fn website_info_json() -> Value {
    json!({
        "name": WEBSITE_NAME,
        "description": WEBSITE_DESCRIPTION,
        "features": WEBSITE_FEATURES,
    })
}

/// JSON snapshot of the page catalog, embedded into the advisory prompt.
pub fn pages_json() -> Value {
    let mut pages = serde_json::Map::new();
    for page in PAGES {
        pages.insert(
            page.path.to_string(),
            json!({
                "name": page.name,
                "description": page.description,
                "features": page.features,
            }),
        );
    }
    Value::Object(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_nav_option_points_at_a_catalogued_page() {
        for option in NAVIGATE_OPTIONS {
            assert!(
                page_info(option.page).is_some(),
                "nav option {} points at unknown page {}",
                option.id,
                option.page
            );
        }
    }

    #[test]
    fn test_every_keyword_maps_to_a_catalogued_page() {
        for (keyword, page) in KEYWORD_PAGES {
            assert!(
                page_info(page).is_some(),
                "keyword {keyword} maps to unknown page {page}"
            );
        }
    }

    #[test]
    fn test_menu_option_ids_are_unique() {
        let mut ids: Vec<&str> = MAIN_MENU_OPTIONS.iter().map(|o| o.id).collect();
        ids.extend(NAVIGATE_OPTIONS.iter().map(|o| o.id));
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_snapshots_serialize() {
        assert_eq!(website_info_json()["name"], WEBSITE_NAME);
        assert_eq!(pages_json().as_object().unwrap().len(), PAGES.len());
    }
}
