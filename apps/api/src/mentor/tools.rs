//! Mentor tools: capabilities the model can request by name. Dispatch is
//! dynamic by string name with an explicit "tool not found" error path; each
//! tool implements a uniform `invoke(arguments) → result` contract.

use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::llm_client::{FunctionSpec, ToolDefinition};

#[async_trait]
pub trait MentorTool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// JSON Schema for the tool's arguments, advertised to the model.
    fn parameters(&self) -> Value;

    /// Executes the tool with model-supplied arguments.
    async fn invoke(&self, arguments: Value) -> Result<String>;
}

fn string_arg(arguments: &Value, key: &str) -> Option<String> {
    arguments
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Curated career-resource lookup. Deterministic: no live web access, just the
/// static guidance the mentor is allowed to hand out.
pub struct WebSearch;

#[async_trait]
impl MentorTool for WebSearch {
    fn name(&self) -> &'static str {
        "web_search"
    }

    fn description(&self) -> &'static str {
        "Look up career resources, industry trends, and learning material for a query"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {"type": "string", "description": "What to look up"}
            },
            "required": ["query"]
        })
    }

    async fn invoke(&self, arguments: Value) -> Result<String> {
        let Some(query) = string_arg(&arguments, "query") else {
            bail!("web_search requires a 'query' argument");
        };
        Ok(format!(
            "Curated resources for '{query}': industry reports highlight steady demand for \
             practitioners who pair technical depth with communication skills. Recommended next \
             steps: review the role's core skill list, compare it against your own, and pick one \
             gap to close this month through a structured course or project."
        ))
    }
}

/// Canned job-market overview for a role.
pub struct JobSearch;

#[async_trait]
impl MentorTool for JobSearch {
    fn name(&self) -> &'static str {
        "job_search"
    }

    fn description(&self) -> &'static str {
        "Summarize current openings and market outlook for a role"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "role": {"type": "string", "description": "Job title or role to search for"},
                "location": {"type": "string", "description": "Optional location filter"}
            },
            "required": ["role"]
        })
    }

    async fn invoke(&self, arguments: Value) -> Result<String> {
        let Some(role) = string_arg(&arguments, "role") else {
            bail!("job_search requires a 'role' argument");
        };
        let location = string_arg(&arguments, "location").unwrap_or_else(|| "remote-friendly markets".to_string());
        Ok(format!(
            "Job market snapshot for '{role}' in {location}: entry pipelines favor candidates \
             with demonstrable projects over credentials alone. Typical screening emphasizes \
             fundamentals, one portfolio piece, and an ATS-friendly resume. Suggest tailoring \
             the resume keywords to each posting before applying."
        ))
    }
}

/// Stress and wellbeing tips keyed off the requested topic.
pub struct WellnessGuide;

#[async_trait]
impl MentorTool for WellnessGuide {
    fn name(&self) -> &'static str {
        "wellness_guide"
    }

    fn description(&self) -> &'static str {
        "Offer wellbeing guidance for study or job-search stress"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {"type": "string", "description": "Wellness concern, e.g. stress, anxiety, sleep"}
            },
            "required": []
        })
    }

    async fn invoke(&self, arguments: Value) -> Result<String> {
        let topic = string_arg(&arguments, "topic").unwrap_or_else(|| "general".to_string());
        let lower = topic.to_lowercase();
        let tips = if lower.contains("stress") || lower.contains("anxiety") {
            "try box breathing (4-4-4-4), break the task into a 25-minute focused block, \
             and write down the single next action instead of the whole mountain"
        } else if lower.contains("sleep") {
            "keep a fixed wake time, avoid screens for the last 30 minutes of the day, \
             and move revision to the morning rather than late night"
        } else {
            "schedule short breaks between study blocks, get daylight early in the day, \
             and keep one evening a week completely free of career work"
        };
        Ok(format!("Wellness guidance ({topic}): {tips}."))
    }
}

/// Formats a calendar hold for a mentoring session. Requires a title; this is
/// the tool most likely to be called with incomplete arguments, and the error
/// path exercises the mentor fallback.
pub struct Calendar;

#[async_trait]
impl MentorTool for Calendar {
    fn name(&self) -> &'static str {
        "calendar"
    }

    fn description(&self) -> &'static str {
        "Draft a calendar invite for a meeting or mentoring session"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "title": {"type": "string", "description": "Meeting title"},
                "date": {"type": "string", "description": "Date, e.g. 2026-03-01"},
                "time": {"type": "string", "description": "Time, e.g. 15:00"}
            },
            "required": ["title"]
        })
    }

    async fn invoke(&self, arguments: Value) -> Result<String> {
        let Some(title) = string_arg(&arguments, "title") else {
            bail!("calendar invite requires a 'title' argument");
        };
        let date = string_arg(&arguments, "date").unwrap_or_else(|| "a date to be confirmed".to_string());
        let time = string_arg(&arguments, "time").unwrap_or_else(|| "a time to be confirmed".to_string());
        Ok(format!(
            "Drafted calendar invite: \"{title}\" on {date} at {time}. Share it with the \
             attendees to confirm."
        ))
    }
}

/// The static tool set, loaded once at startup and read-only thereafter.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn MentorTool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self {
            tools: vec![
                Arc::new(WebSearch),
                Arc::new(JobSearch),
                Arc::new(WellnessGuide),
                Arc::new(Calendar),
            ],
        }
    }
}

impl ToolRegistry {
    /// Exact-name lookup; a miss is an explicit error path at the call site.
    pub fn get(&self, name: &str) -> Option<Arc<dyn MentorTool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// OpenAI-format tool definitions advertised on the first completion call.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|t| ToolDefinition {
                kind: "function",
                function: FunctionSpec {
                    name: t.name(),
                    description: t.description(),
                    parameters: t.parameters(),
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup_by_exact_name() {
        let registry = ToolRegistry::default();
        assert!(registry.get("wellness_guide").is_some());
        assert!(registry.get("calendar").is_some());
        assert!(registry.get("Calendar").is_none());
        assert!(registry.get("time_machine").is_none());
    }

    #[test]
    fn test_definitions_advertise_all_tools() {
        let registry = ToolRegistry::default();
        let defs = registry.definitions();
        assert_eq!(defs.len(), 4);
        assert!(defs.iter().all(|d| d.kind == "function"));
        let names: Vec<&str> = defs.iter().map(|d| d.function.name).collect();
        assert_eq!(names, ["web_search", "job_search", "wellness_guide", "calendar"]);
    }

    #[tokio::test]
    async fn test_calendar_requires_title() {
        let err = Calendar.invoke(json!({"date": "2026-03-01"})).await.unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[tokio::test]
    async fn test_calendar_formats_invite() {
        let result = Calendar
            .invoke(json!({"title": "Mock interview", "date": "2026-03-01", "time": "15:00"}))
            .await
            .unwrap();
        assert!(result.contains("Mock interview"));
        assert!(result.contains("2026-03-01"));
    }

    #[tokio::test]
    async fn test_wellness_guide_matches_topic() {
        let result = WellnessGuide.invoke(json!({"topic": "exam stress"})).await.unwrap();
        assert!(result.contains("box breathing"));

        let result = WellnessGuide.invoke(json!({})).await.unwrap();
        assert!(result.contains("general"));
    }

    #[tokio::test]
    async fn test_search_tools_require_their_query() {
        assert!(WebSearch.invoke(json!({})).await.is_err());
        assert!(JobSearch.invoke(json!({"location": "Berlin"})).await.is_err());
        let ok = JobSearch.invoke(json!({"role": "data analyst"})).await.unwrap();
        assert!(ok.contains("data analyst"));
    }
}
