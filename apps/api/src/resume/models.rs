use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeRequest {
    #[serde(default, alias = "filePath")]
    pub file_path: String,
}

/// Skills found in a resume: keyword-scan baseline plus anything the model adds.
/// Each list is de-duplicated and keeps first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillExtractionResult {
    pub tech_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub projects: Vec<String>,
}

impl SkillExtractionResult {
    /// Adds model-reported items. Items are trimmed; blanks and exact duplicates
    /// (case-sensitive) of already-collected items are skipped.
    pub fn merge(&mut self, report: SkillExtractionResult) {
        merge_list(&mut self.tech_skills, report.tech_skills);
        merge_list(&mut self.soft_skills, report.soft_skills);
        merge_list(&mut self.projects, report.projects);
    }

    pub fn is_empty(&self) -> bool {
        self.tech_skills.is_empty() && self.soft_skills.is_empty() && self.projects.is_empty()
    }
}

fn merge_list(target: &mut Vec<String>, incoming: Vec<String>) {
    for item in incoming {
        let item = item.trim();
        if !item.is_empty() && !target.iter().any(|existing| existing == item) {
            target.push(item.to_string());
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub data: SkillExtractionResult,
}
