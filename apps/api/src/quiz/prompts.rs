//! Prompt constants for the quiz generator.

/// Quiz generation prompt. Replace `{num_questions}`, `{topic}`, `{domain}`,
/// `{difficulty}`, `{user_level}`, and `{focus_areas}` before sending.
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"You are an expert educational content creator. Generate {num_questions} multiple-choice questions
for a skills assessment with the following specifications:

Topic: "{topic}"
Domain: "{domain}"
Difficulty Level: {difficulty}
User Level: {user_level}
Focus Areas: {focus_areas}

Requirements:
1. Exactly {num_questions} MCQs
2. Each question should have 4 options (A, B, C, D)
3. Questions should be appropriate for {difficulty} level
4. Include practical, real-world scenarios
5. Provide correct answer and detailed explanation for learning
6. Return ONLY valid JSON in this exact format:

{
    "quiz_metadata": {
        "topic": "{topic}",
        "domain": "{domain}",
        "difficulty": "{difficulty}",
        "total_questions": {num_questions},
        "estimated_time": "15-20 minutes"
    },
    "questions": [
        {
            "id": 1,
            "question": "Question text here",
            "options": {
                "A": "Option A text",
                "B": "Option B text",
                "C": "Option C text",
                "D": "Option D text"
            },
            "correct_answer": "A",
            "explanation": "Detailed explanation of why this is correct",
            "skill_category": "Technical Skills",
            "difficulty_score": 7
        }
    ]
}

Important: Return ONLY valid JSON, no other text or markdown formatting."#;
