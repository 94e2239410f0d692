// Question generation prompt template.

use crate::llm_client::prompts::JSON_ARRAY_ONLY;
use crate::questions::models::QUESTION_SET_SIZE;

/// Replace: {count}, {json_only}, then {skills} last.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"You are an experienced technical interviewer preparing a mock interview.

The candidate lists these skills: {skills}

Generate exactly {count} scenario-based interview questions. Each question should describe a realistic situation the candidate could face on the job and ask how they would handle it.

DIFFICULTY DISTRIBUTION:
- exactly 1 "Easy" question
- 2 or 3 "Medium" questions
- 1 or 2 "Hard" questions

RULES:
1. Every question MUST be tagged with exactly one skill from the candidate's list in "skill_area"
2. Spread the questions across the listed skills where possible
3. "question_id" runs from 1 to {count} in order
4. "difficulty" is one of "Easy", "Medium", "Hard"

Return a JSON ARRAY with this EXACT schema:
[
  {
    "question_id": 1,
    "question": "Your team's dashboard takes 8 seconds to load after a new feature shipped. How would you track down the regression?",
    "difficulty": "Easy",
    "skill_area": "React"
  }
]

{json_only}"#;

/// Builds the question prompt; skills are joined with commas.
pub fn build_question_prompt(skills: &[&str]) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{count}", &QUESTION_SET_SIZE.to_string())
        .replace("{json_only}", JSON_ARRAY_ONLY)
        .replace("{skills}", &skills.join(", "))
}
