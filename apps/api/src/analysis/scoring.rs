//! Score engine: weighted fit of a parsed resume against job requirements.
//!
//! Three independent components, summed into a 0–100 total:
//! - skills (max 50): share of required skills found, case-insensitive
//! - experience (max 30): full when requirement met or absent, otherwise proportional
//! - education (max 20): full on substring match or no requirement, 10 for any degree
//!
//! All arithmetic is integer and floors, so each component stays inside its bound.

use std::collections::HashSet;

use crate::analysis::models::{JobRequirements, ResumeRecord, ScoreBreakdown};

pub const SKILLS_MAX: u32 = 50;
pub const EXPERIENCE_MAX: u32 = 30;
pub const EDUCATION_MAX: u32 = 20;
/// Awarded when the candidate holds some degree that doesn't match the requirement.
pub const EDUCATION_PARTIAL: u32 = 10;

/// Degree words that earn partial education credit.
const ANY_DEGREE_KEYWORDS: &[&str] = &["bachelor", "master", "phd"];

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

pub fn score_resume(resume: &ResumeRecord, requirements: &JobRequirements) -> ScoreBreakdown {
    let skills = score_skills(&resume.skills, &requirements.required_skills);
    let experience_score = score_experience(
        resume.experience.total_years,
        requirements.required_experience,
    );
    let education_score = score_education(&resume.education, &requirements.required_education);

    ScoreBreakdown {
        skills_score: skills.score,
        experience_score,
        education_score,
        total_score: skills.score + experience_score + education_score,
        matched_skills: skills.matched,
        missing_skills: skills.missing,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Components
// ────────────────────────────────────────────────────────────────────────────

struct SkillsOutcome {
    score: u32,
    matched: Option<Vec<String>>,
    missing: Option<Vec<String>>,
}

/// With no required skills the score is 0 and both lists are left out entirely.
fn score_skills(candidate: &[String], required: &[String]) -> SkillsOutcome {
    let candidate: HashSet<String> = candidate.iter().map(|s| s.to_lowercase()).collect();

    // Repeated requirements are counted each time they appear.
    let required: Vec<String> = required.iter().map(|s| s.to_lowercase()).collect();

    if required.is_empty() {
        return SkillsOutcome {
            score: 0,
            matched: None,
            missing: None,
        };
    }

    let (matched, missing): (Vec<String>, Vec<String>) =
        required.iter().cloned().partition(|s| candidate.contains(s));

    let score = (SKILLS_MAX as usize * matched.len() / required.len()) as u32;

    SkillsOutcome {
        score,
        matched: Some(matched),
        missing: Some(missing),
    }
}

fn score_experience(candidate_years: u32, required_years: u32) -> u32 {
    if required_years == 0 || candidate_years >= required_years {
        return EXPERIENCE_MAX;
    }
    (u64::from(EXPERIENCE_MAX) * u64::from(candidate_years) / u64::from(required_years)) as u32
}

fn score_education(candidate: &[String], required: &str) -> u32 {
    let required = required.to_lowercase();
    if required.is_empty() {
        return EDUCATION_MAX;
    }

    let candidate = candidate.join(" ").to_lowercase();
    if candidate.contains(&required) {
        EDUCATION_MAX
    } else if ANY_DEGREE_KEYWORDS.iter().any(|kw| candidate.contains(kw)) {
        EDUCATION_PARTIAL
    } else {
        0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
