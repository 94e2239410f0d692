//! Skill-report normalization of model output.

use serde_json::Value;
use tracing::warn;

use crate::normalize::fields::{field, string_list};
use crate::normalize::{clean_response, preview, NormalizeError, Outcome};
use crate::resume::models::SkillExtractionResult;

/// Normalizes raw model text into the model's own skill report.
///
/// Unparseable output is not repaired: the report falls back to empty, so the
/// caller keeps only its keyword-scan baseline.
pub fn normalize_skill_report(
    raw: Option<&str>,
) -> Result<Outcome<SkillExtractionResult>, NormalizeError> {
    let cleaned = clean_response(raw)?;

    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Object(object)) => Ok(Outcome::Parsed(SkillExtractionResult {
            tech_skills: string_list(field(&object, &["tech_skills", "techSkills"])),
            soft_skills: string_list(field(&object, &["soft_skills", "softSkills"])),
            projects: string_list(field(&object, &["projects"])),
        })),
        _ => {
            warn!(
                "Failed to parse skill report from model output: {}",
                preview(cleaned)
            );
            Ok(Outcome::Fallback(SkillExtractionResult::default()))
        }
    }
}
