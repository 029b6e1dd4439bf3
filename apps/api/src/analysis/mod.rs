// Resume analysis pipeline: parse → score → recommend → report.
// Pure and synchronous; no I/O and no state shared between calls.

pub mod extractors;
pub mod models;
pub mod parser;
pub mod recommendation;
pub mod report;
pub mod scoring;
pub mod vocabulary;

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub use models::{AnalysisResult, JobRequirements};
pub use recommendation::RecommendationTier;

use parser::parse_resume;
use report::render_report;
use scoring::score_resume;

/// Runs the whole pipeline over one resume, stamped with the current time.
pub fn analyze_resume(resume_text: &str, requirements: &JobRequirements) -> AnalysisResult {
    analyze_resume_at(resume_text, requirements, Utc::now())
}

/// Same as [`analyze_resume`] with an explicit timestamp.
pub fn analyze_resume_at(
    resume_text: &str,
    requirements: &JobRequirements,
    timestamp: DateTime<Utc>,
) -> AnalysisResult {
    let resume = parse_resume(resume_text);
    let breakdown = score_resume(&resume, requirements);
    let recommendation = RecommendationTier::from_score(breakdown.total_score);
    let report = render_report(&resume, requirements, &breakdown, recommendation, timestamp);

    AnalysisResult {
        id: Uuid::new_v4(),
        resume,
        requirements: requirements.clone(),
        breakdown,
        recommendation,
        report,
        timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const RESUME: &str = r#"
        John Doe
        john.doe@email.com | +1-555-123-4567

        Senior Software Engineer with 7 years of experience in Python development

        SKILLS
        Python, Django, Flask, SQL, PostgreSQL, Git, REST API, Docker, AWS

        EDUCATION
        Bachelor of Science in Computer Science, 2016
    "#;

    fn requirements() -> JobRequirements {
        JobRequirements {
            position: "Senior Python Developer".to_string(),
            required_skills: vec![
                "Python".to_string(),
                "Django".to_string(),
                "SQL".to_string(),
                "Git".to_string(),
            ],
            required_experience: 5,
            required_education: "Bachelor".to_string(),
        }
    }

    #[test]
    fn test_pipeline_produces_consistent_result() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let result = analyze_resume_at(RESUME, &requirements(), at);

        assert_eq!(result.resume.name, "John Doe");
        assert_eq!(result.total_score(), 100);
        assert_eq!(result.recommendation, RecommendationTier::HighlyRecommended);
        assert_eq!(result.requirements, requirements());
        assert_eq!(result.timestamp, at);
        assert!(result.report.contains("MATCH SCORE: 100/100"));
        assert!(result.report.contains("Generated: 2025-01-15 12:00:00"));
    }

    #[test]
    fn test_pipeline_is_total_on_empty_input() {
        let result = analyze_resume("", &JobRequirements::default());
        assert_eq!(result.resume.name, "Name Not Found");
        // No requirements at all: skills 0, experience 30, education 20.
        assert_eq!(result.total_score(), 50);
        assert_eq!(result.recommendation, RecommendationTier::Maybe);
    }

    #[test]
    fn test_each_result_gets_a_fresh_id() {
        let a = analyze_resume(RESUME, &requirements());
        let b = analyze_resume(RESUME, &requirements());
        assert_ne!(a.id, b.id);
        assert_eq!(a.breakdown, b.breakdown);
    }
}
