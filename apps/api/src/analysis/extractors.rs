//! Field extractors: one heuristic per resume field.
//!
//! Each extractor takes the full raw text and returns a single field. They share no
//! state and can run in any order. None of them fail: when nothing matches, the
//! field's sentinel from `analysis::models` is returned instead.
//!
//! Where a field is found by trying several patterns in priority order (phone,
//! years of experience, degrees), the patterns live in an explicit `PatternRule`
//! table so precedence is visible and testable.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::models::{
    Experience, EDUCATION_NOT_FOUND, EMAIL_NOT_FOUND, NAME_NOT_FOUND, NO_SKILLS_DETECTED,
    PHONE_NOT_FOUND,
};
use crate::analysis::vocabulary::{title_case, SKILL_VOCABULARY};

// ────────────────────────────────────────────────────────────────────────────
// Rule tables
// ────────────────────────────────────────────────────────────────────────────

/// A named regex in a priority-ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// Tried in order; the first rule with any match wins.
pub const PHONE_RULES: &[PatternRule] = &[
    PatternRule {
        name: "international",
        pattern: r"\+?\d{1,3}[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
    },
    PatternRule {
        name: "domestic",
        pattern: r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
    },
    PatternRule {
        name: "digit_run",
        pattern: r"\+?\d{10,}",
    },
];

/// Applied to lowercased text. Group 1 is the year count. First rule with a match wins.
pub const EXPERIENCE_YEAR_RULES: &[PatternRule] = &[
    PatternRule {
        name: "years_of_experience",
        pattern: r"(\d+)\+?\s*years?\s+(?:of\s+)?experience",
    },
    PatternRule {
        name: "experience_label_years",
        pattern: r"experience\s*:?\s*(\d+)\+?\s*years?",
    },
    PatternRule {
        name: "yrs_of_experience",
        pattern: r"(\d+)\+?\s*yrs?\s+(?:of\s+)?experience",
    },
];

/// Every rule contributes all of its matches; rule order then document order.
/// Each match runs from the degree keyword to the end of its line.
pub const DEGREE_RULES: &[PatternRule] = &[
    PatternRule {
        name: "bachelor",
        pattern: r"(?i)\b(?:B\.?S\.?|Bachelor|B\.?A\.?|B\.?Tech\.?|B\.?E\.?)\b.*",
    },
    PatternRule {
        name: "master",
        pattern: r"(?i)\b(?:M\.?S\.?|Master|M\.?A\.?|M\.?Tech\.?|MBA|M\.?B\.?A\.?)\b.*",
    },
    PatternRule {
        name: "doctorate",
        pattern: r"(?i)\b(?:Ph\.?D\.?|Doctorate|Doctoral)\b.*",
    },
];

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Lines containing any of these are never taken as the candidate's name.
const HEADER_WORDS: &[&str] = &["resume", "cv", "curriculum", "vitae", "profile", "objective"];

/// Substrings that mark a line as a likely employer name.
const COMPANY_INDICATORS: &[&str] = &[
    "inc",
    "corp",
    "ltd",
    "llc",
    "technologies",
    "solutions",
    "systems",
];

const NAME_SCAN_LINES: usize = 5;
const NAME_MAX_WORDS: usize = 4;
const COMPANY_MAX_WORDS: usize = 6;

fn compile(rules: &[PatternRule]) -> Vec<Regex> {
    rules
        .iter()
        .map(|rule| Regex::new(rule.pattern).unwrap())
        .collect()
}

fn phone_patterns() -> &'static [Regex] {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile(PHONE_RULES))
}

fn experience_year_patterns() -> &'static [Regex] {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile(EXPERIENCE_YEAR_RULES))
}

fn degree_patterns() -> &'static [Regex] {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile(DEGREE_RULES))
}

/// One boundary-anchored matcher per vocabulary term, in vocabulary order.
fn skill_patterns() -> &'static [(&'static str, Regex)] {
    static RE: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RE.get_or_init(|| {
        SKILL_VOCABULARY
            .iter()
            .map(|term| {
                // Terms like "c++" end in non-word characters, so `\b` can't anchor them.
                let pattern = format!(r"(?:^|[^\w]){}(?:[^\w]|$)", regex::escape(term));
                (*term, Regex::new(&pattern).unwrap())
            })
            .collect()
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Extractors
// ────────────────────────────────────────────────────────────────────────────

/// First of the leading non-empty lines that reads like a personal name.
pub fn extract_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| is_name_line(line))
        .map(str::to_string)
        .unwrap_or_else(|| NAME_NOT_FOUND.to_string())
}

fn is_name_line(line: &str) -> bool {
    if line.split_whitespace().count() > NAME_MAX_WORDS {
        return false;
    }
    if !line.chars().next().is_some_and(char::is_uppercase) {
        return false;
    }
    let lower = line.to_lowercase();
    !HEADER_WORDS.iter().any(|word| lower.contains(word))
}

pub fn extract_email(text: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(EMAIL_PATTERN).unwrap());
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| EMAIL_NOT_FOUND.to_string())
}

pub fn extract_phone(text: &str) -> String {
    phone_patterns()
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| PHONE_NOT_FOUND.to_string())
}

/// Vocabulary terms present in the text, title-cased and sorted.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let found: BTreeSet<String> = skill_patterns()
        .iter()
        .filter(|(_, re)| re.is_match(&lower))
        .map(|(term, _)| title_case(term))
        .collect();

    if found.is_empty() {
        vec![NO_SKILLS_DETECTED.to_string()]
    } else {
        found.into_iter().collect()
    }
}

pub fn extract_experience(text: &str) -> Experience {
    Experience {
        total_years: extract_total_years(text),
        companies: extract_companies(text),
    }
}

fn extract_total_years(text: &str) -> u32 {
    let lower = text.to_lowercase();
    experience_year_patterns()
        .iter()
        .find_map(|re| re.captures(&lower))
        .and_then(|caps| caps.get(1))
        // The group is all digits, so a parse failure can only be overflow.
        .map(|years| years.as_str().parse().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

fn extract_companies(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            COMPANY_INDICATORS.iter().any(|ind| lower.contains(ind))
        })
        .map(str::trim)
        .filter(|line| line.split_whitespace().count() <= COMPANY_MAX_WORDS)
        .map(str::to_string)
        .collect()
}

pub fn extract_education(text: &str) -> Vec<String> {
    let education: Vec<String> = degree_patterns()
        .iter()
        .flat_map(|re| re.find_iter(text))
        .map(|m| m.as_str().trim_end().to_string())
        .collect();

    if education.is_empty() {
        vec![EDUCATION_NOT_FOUND.to_string()]
    } else {
        education
    }
}
