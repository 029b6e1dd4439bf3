use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::recommendation::RecommendationTier;

// ────────────────────────────────────────────────────────────────────────────
// "Not found" sentinels
// ────────────────────────────────────────────────────────────────────────────
//
// Absence is stored as these literal strings, not as empty values. Saved result
// files depend on them, so they are part of the data format.

pub const NAME_NOT_FOUND: &str = "Name Not Found";
pub const EMAIL_NOT_FOUND: &str = "Email Not Found";
pub const PHONE_NOT_FOUND: &str = "Phone Not Found";
pub const NO_SKILLS_DETECTED: &str = "No skills detected";
pub const EDUCATION_NOT_FOUND: &str = "Education information not found";

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// The job profile a resume is scored against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRequirements {
    pub position: String,
    /// Compared case-insensitively against extracted skills.
    pub required_skills: Vec<String>,
    /// Minimum years of experience. Zero means no requirement.
    pub required_experience: u32,
    /// Free-text degree keyword, e.g. "Bachelor". Empty means no requirement.
    pub required_education: String,
}

impl JobRequirements {
    pub const DEFAULT_POSITION: &'static str = "Software Developer";
    pub const DEFAULT_SKILLS: &'static str = "Python, SQL, Git";
    pub const DEFAULT_EXPERIENCE: u32 = 3;
    pub const DEFAULT_EDUCATION: &'static str = "Bachelor";

    /// Builds requirements from loosely-typed setup input, filling blanks with defaults.
    ///
    /// `skills_csv` is a comma-separated list; entries are trimmed and blanks dropped.
    pub fn from_input(
        position: &str,
        skills_csv: &str,
        required_experience: Option<u32>,
        education: &str,
    ) -> Self {
        let position = non_blank_or(position, Self::DEFAULT_POSITION);
        let skills_csv = non_blank_or(skills_csv, Self::DEFAULT_SKILLS);
        let required_skills = skills_csv
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            position,
            required_skills,
            required_experience: required_experience.unwrap_or(Self::DEFAULT_EXPERIENCE),
            required_education: non_blank_or(education, Self::DEFAULT_EDUCATION),
        }
    }
}

fn non_blank_or(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Extracted resume
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub total_years: u32,
    /// Lines that look like employer names, in document order. May repeat.
    pub companies: Vec<String>,
}

/// Structured fields pulled out of a free-text resume.
///
/// Every field is always populated; missing data carries one of the sentinels above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Title-cased, deduplicated, sorted. `[NO_SKILLS_DETECTED]` when empty.
    pub skills: Vec<String>,
    pub experience: Experience,
    /// `[EDUCATION_NOT_FOUND]` when empty.
    pub education: Vec<String>,
    pub raw_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring output
// ────────────────────────────────────────────────────────────────────────────

/// Weighted fit of one resume against one set of requirements.
///
/// `matched_skills` / `missing_skills` are `None` (and absent from JSON) when the
/// requirements list no skills. Both hold lowercase skill names in requirement order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills_score: u32,
    pub experience_score: u32,
    pub education_score: u32,
    pub total_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_skills: Option<Vec<String>>,
}

/// Everything produced by one pass of the pipeline over one resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: Uuid,
    #[serde(rename = "resume_data")]
    pub resume: ResumeRecord,
    pub requirements: JobRequirements,
    #[serde(rename = "score_breakdown")]
    pub breakdown: ScoreBreakdown,
    pub recommendation: RecommendationTier,
    pub report: String,
    #[serde(rename = "analyzed_at")]
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn total_score(&self) -> u32 {
        self.breakdown.total_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_splits_and_trims_skills() {
        let req = JobRequirements::from_input("Backend Engineer", " Rust , SQL,, Git ", Some(4), "Master");
        assert_eq!(req.position, "Backend Engineer");
        assert_eq!(req.required_skills, vec!["Rust", "SQL", "Git"]);
        assert_eq!(req.required_experience, 4);
        assert_eq!(req.required_education, "Master");
    }

    #[test]
    fn test_from_input_blank_fields_use_defaults() {
        let req = JobRequirements::from_input("  ", "", None, "");
        assert_eq!(req.position, "Software Developer");
        assert_eq!(req.required_skills, vec!["Python", "SQL", "Git"]);
        assert_eq!(req.required_experience, 3);
        assert_eq!(req.required_education, "Bachelor");
    }

    #[test]
    fn test_requirements_missing_json_fields_default() {
        let req: JobRequirements = serde_json::from_str(r#"{"position": "QA"}"#).unwrap();
        assert_eq!(req.position, "QA");
        assert!(req.required_skills.is_empty());
        assert_eq!(req.required_experience, 0);
        assert_eq!(req.required_education, "");
    }

    #[test]
    fn test_breakdown_omits_skill_lists_when_absent() {
        let breakdown = ScoreBreakdown {
            experience_score: 30,
            education_score: 20,
            total_score: 50,
            ..Default::default()
        };
        let json = serde_json::to_value(&breakdown).unwrap();
        assert!(json.get("matched_skills").is_none());
        assert!(json.get("missing_skills").is_none());
        assert_eq!(json["total_score"], 50);
    }
}
