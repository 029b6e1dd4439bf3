//! Resume parser: runs every field extractor over the same text.

use tracing::debug;

use crate::analysis::extractors::{
    extract_education, extract_email, extract_experience, extract_name, extract_phone,
    extract_skills,
};
use crate::analysis::models::ResumeRecord;

/// Parses raw resume text into a fully-populated record. Never fails, even on empty input.
pub fn parse_resume(text: &str) -> ResumeRecord {
    let record = ResumeRecord {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        skills: extract_skills(text),
        experience: extract_experience(text),
        education: extract_education(text),
        raw_text: text.to_string(),
    };

    debug!(
        name = %record.name,
        skills = record.skills.len(),
        years = record.experience.total_years,
        "Parsed resume"
    );

    record
}
