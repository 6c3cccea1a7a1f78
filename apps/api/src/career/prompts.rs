//! Prompt constants for the career orchestrator.

/// Profile parse stage. Replace `{profile_text}`.
pub const PROFILE_PARSE_PROMPT_TEMPLATE: &str = r#"Extract key information from the following student profile and return ONLY valid JSON.
Required keys:
- "skills" (list of strings)
- "academics" (string)
- "interests" (list of strings)

Profile Text: {profile_text}

Return ONLY JSON, no other text."#;

/// Suggestion stage. Replace `{profile_text}`.
pub const SUGGESTIONS_PROMPT_TEMPLATE: &str = r#"You are a career counselor. Based on the student's profile below, suggest 3 possible career paths.
For each career, provide:
- "career_name"
- "required_skills" (list of 5-7 key skills)
- "reasoning" (why this fits the student)

Respond strictly in JSON array format.

Profile: {profile_text}

Return ONLY JSON array, no other text."#;

/// Explanation stage. Replace `{career_name}`, `{strengths}`, `{required_skills}`.
pub const EXPLANATION_PROMPT_TEMPLATE: &str = r#"You are a career counselor. Generate a personalized explanation for the following career recommendation.

Recommendation: {career_name}
Student profile strengths: {strengths}
Suggested required skills: {required_skills}

Provide a concise, encouraging explanation highlighting the alignment
and suggesting which skills to improve.

Keep it to 2-3 sentences maximum."#;
