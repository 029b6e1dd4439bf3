//! Plain-text candidate report.
//!
//! Output depends only on the arguments. The timestamp is passed in, so identical
//! inputs always render identical reports.

use chrono::{DateTime, Utc};

use crate::analysis::models::{JobRequirements, ResumeRecord, ScoreBreakdown};
use crate::analysis::recommendation::RecommendationTier;
use crate::analysis::scoring::{EDUCATION_MAX, EXPERIENCE_MAX, SKILLS_MAX};

const WIDTH: usize = 80;

pub fn render_report(
    resume: &ResumeRecord,
    requirements: &JobRequirements,
    breakdown: &ScoreBreakdown,
    recommendation: RecommendationTier,
    generated_at: DateTime<Utc>,
) -> String {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);

    let mut report = format!(
        "\n{heavy}\n\
         CANDIDATE ANALYSIS REPORT\n\
         Generated: {generated}\n\
         {heavy}\n\
         \n\
         CANDIDATE INFORMATION\n\
         {light}\n\
         Name:           {name}\n\
         Email:          {email}\n\
         Phone:          {phone}\n\
         \n\
         MATCH SCORE: {total}/100\n\
         RECOMMENDATION: {recommendation}\n\
         \n\
         DETAILED BREAKDOWN\n\
         {light}\n\
         Skills Match:       {skills}/{SKILLS_MAX} points\n\
         Experience Match:   {experience}/{EXPERIENCE_MAX} points\n\
         Education Match:    {education}/{EDUCATION_MAX} points\n\
         \n\
         SKILLS ANALYSIS\n\
         {light}\n\
         Candidate Skills: {candidate_skills}\n\
         \n",
        generated = generated_at.format("%Y-%m-%d %H:%M:%S"),
        name = resume.name,
        email = resume.email,
        phone = resume.phone,
        total = breakdown.total_score,
        skills = breakdown.skills_score,
        experience = breakdown.experience_score,
        education = breakdown.education_score,
        candidate_skills = resume.skills.join(", "),
    );

    // Skill lists are only present when the requirements named skills.
    if let (Some(matched), Some(missing)) = (&breakdown.matched_skills, &breakdown.missing_skills)
    {
        report.push_str(&format!("Matched Skills:   {}\n", join_or_none(matched)));
        report.push_str(&format!("Missing Skills:   {}\n", join_or_none(missing)));
    }

    report.push_str(&format!(
        "\n\
         EXPERIENCE\n\
         {light}\n\
         Total Years: {years} years\n\
         Required:    {required} years\n\
         \n\
         EDUCATION\n\
         {light}\n\
         {education}\n\
         \n\
         {heavy}\n\
         END OF REPORT\n\
         {heavy}\n",
        years = resume.experience.total_years,
        required = requirements.required_experience,
        education = resume.education.join(", "),
    ));

    report
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::analysis::parser::parse_resume;
    use crate::analysis::scoring::score_resume;

    const RESUME: &str = "Priya Nair\npriya@example.com\n(555) 987-6543\n\
        6 years of experience\nPython, SQL, Docker\nMaster of Science in Data Science\n";

    fn requirements(skills: &[&str]) -> JobRequirements {
        JobRequirements {
            position: "Data Engineer".to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            required_experience: 4,
            required_education: "Master".to_string(),
        }
    }

    fn render(req: &JobRequirements) -> String {
        let resume = parse_resume(RESUME);
        let breakdown = score_resume(&resume, req);
        let tier = RecommendationTier::from_score(breakdown.total_score);
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        render_report(&resume, req, &breakdown, tier, at)
    }

    #[test]
    fn test_report_contains_identity_score_and_sections() {
        let report = render(&requirements(&["Python", "Kafka"]));
        assert!(report.contains("CANDIDATE ANALYSIS REPORT"));
        assert!(report.contains("Generated: 2024-03-01 09:30:00"));
        assert!(report.contains("Name:           Priya Nair"));
        assert!(report.contains("Email:          priya@example.com"));
        assert!(report.contains("Phone:          (555) 987-6543"));
        assert!(report.contains("MATCH SCORE: 75/100"));
        assert!(report.contains("RECOMMENDATION: RECOMMENDED - Good candidate"));
        assert!(report.contains("Skills Match:       25/50 points"));
        assert!(report.contains("Experience Match:   30/30 points"));
        assert!(report.contains("Education Match:    20/20 points"));
        assert!(report.contains("Matched Skills:   python\n"));
        assert!(report.contains("Missing Skills:   kafka\n"));
        assert!(report.contains("Total Years: 6 years"));
        assert!(report.contains("Required:    4 years"));
        assert!(report.contains("Master of Science in Data Science"));
        assert!(report.contains("END OF REPORT"));
    }

    #[test]
    fn test_report_omits_skill_lists_without_required_skills() {
        let report = render(&requirements(&[]));
        assert!(!report.contains("Matched Skills"));
        assert!(!report.contains("Missing Skills"));
    }

    #[test]
    fn test_report_empty_missing_list_reads_none() {
        let report = render(&requirements(&["python", "docker"]));
        assert!(report.contains("Missing Skills:   None\n"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let req = requirements(&["Python"]);
        assert_eq!(render(&req), render(&req));
    }
}
