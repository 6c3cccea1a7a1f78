//! Menu-driven career chatbot: a pure option router over a static knowledge base,
//! plus a free-text advisory pipeline backed by the completion client.

pub mod advisory;
pub mod handlers;
pub mod knowledge;
pub mod router;

use serde::Serialize;

use knowledge::MenuOption;

/// Discriminator for the reply payload shape the frontend renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Options,
    Navigation,
    Advice,
    Text,
    Error,
}

/// A selectable option presented to the user.
#[derive(Debug, Clone, Serialize)]
pub struct OptionItem {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OptionItem {
    pub fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            description: None,
        }
    }

    pub fn with_description(id: &str, text: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            description: Some(description.to_string()),
        }
    }

    pub fn main_menu() -> Self {
        Self::new("main_menu", "🏠 Main Menu")
    }
}

impl From<&MenuOption> for OptionItem {
    fn from(option: &MenuOption) -> Self {
        Self {
            id: option.id.to_string(),
            text: option.text.to_string(),
            description: option.description.map(str::to_string),
        }
    }
}

/// A client-side navigation suggestion attached to a reply.
#[derive(Debug, Clone, Serialize)]
pub struct NavigateAction {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub page: String,
    pub label: String,
}

impl NavigateAction {
    pub fn to_page(page: &str, name: &str) -> Self {
        Self {
            kind: "navigate",
            page: page.to_string(),
            label: format!("Go to {name}"),
        }
    }
}

/// One chatbot reply. Exactly which optional fields are populated depends on
/// `kind`; the serialized shape matches what the frontend already consumes.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    #[serde(rename = "type")]
    pub kind: ReplyKind,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    pub confidence: u8,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub follow_up_options: Vec<OptionItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<NavigateAction>,
}

impl ChatReply {
    pub fn options(message: impl Into<String>, options: Vec<OptionItem>, confidence: u8) -> Self {
        Self {
            kind: ReplyKind::Options,
            message: message.into(),
            options,
            page: None,
            confidence,
            follow_up_options: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>, follow_up_options: Vec<OptionItem>) -> Self {
        Self {
            kind: ReplyKind::Error,
            message: message.into(),
            options: Vec::new(),
            page: None,
            confidence: 0,
            follow_up_options,
            actions: Vec::new(),
        }
    }
}
