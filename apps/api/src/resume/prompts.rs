//! Prompt constants for the resume pipeline. Each stage instructs the model to
//! return JSON only; the normalizer handles fence-wrapped replies anyway.

/// Parse stage. Replace `{resume_text}` (pre-truncated to stay inside the
/// token budget) before sending.
pub const PARSE_PROMPT_TEMPLATE: &str = r#"You are an expert resume parser.
Extract structured data from the following resume and return valid JSON ONLY.

Required fields:
- "name" (string)
- "contact" (object with email, phone, linkedin)
- "skills" (array of strings)
- "experience" (array of objects with title, company, start_date, end_date, description)
- "education" (array of objects with degree, field, institution, year)
- "projects" (array of strings)
- "certifications" (array of strings)

Important: Return ONLY valid JSON, no other text.

Resume:
{resume_text}"#;

/// Score stage. Replace `{resume_json}` with the pretty-printed parsed resume.
pub const SCORE_PROMPT_TEMPLATE: &str = r#"You are an Applicant Tracking System (ATS).

Resume JSON:
{resume_json}

Score the resume (0-100) with these weights:
- Skills match (40%)
- Experience relevance (20%)
- Title/role alignment (15%)
- Education/certs (10%)
- Formatting/parseability (10%)
- Language/grammar (5%)

Return JSON ONLY with these exact fields:
{
  "skill_score": number,
  "experience_score": number,
  "title_score": number,
  "education_score": number,
  "format_score": number,
  "language_score": number,
  "total_score": number
}

Important: Return ONLY valid JSON, no other text."#;

/// Recommendation stage. Replace `{resume_json}`.
pub const RECOMMEND_PROMPT_TEMPLATE: &str = r#"You are a professional resume coach.

Resume JSON: {resume_json}

Return JSON ONLY with these exact fields:
{
  "missing_skills": array of strings,
  "improved_bullets": array of strings,
  "recommendations": array of strings,
  "summary": string
}

Important: Return ONLY valid JSON, no other text."#;
