// Resume skill extraction prompt template.

use crate::llm_client::prompts::JSON_OBJECT_ONLY;

/// Characters of resume text sent to the model.
pub const MAX_RESUME_CHARS: usize = 2000;

/// Replace: {json_only}, then {resume_text} last.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are a resume analyzer. From the following resume text, extract all relevant information.

Extract:
1. Technical skills - programming languages, frameworks, tools, technologies
2. Soft skills - communication, leadership, teamwork, problem-solving, etc.
3. Projects - project names or brief descriptions

Output format (must be valid JSON):
{
    "tech_skills": ["skill1", "skill2"],
    "soft_skills": ["skill1", "skill2"],
    "projects": ["project1", "project2"]
}

{json_only}

Resume Text:
{resume_text}"#;

/// Builds the extraction prompt from the first `MAX_RESUME_CHARS` characters of the resume.
pub fn build_resume_prompt(resume_text: &str) -> String {
    RESUME_PROMPT_TEMPLATE
        .replace("{json_only}", JSON_OBJECT_ONLY)
        .replace("{resume_text}", truncate_chars(resume_text, MAX_RESUME_CHARS))
}

/// Returns at most `max` characters, never splitting a UTF-8 sequence.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
