//! Demo mode: fixed requirements and three sample resumes.

use crate::analysis::{analyze_resume, AnalysisResult, JobRequirements};

pub const SAMPLE_RESUMES: [&str; 3] = [
    r#"
    John Doe
    john.doe@email.com | +1-555-123-4567

    PROFESSIONAL SUMMARY
    Senior Software Engineer with 7 years of experience in Python development

    SKILLS
    Python, Django, Flask, SQL, PostgreSQL, Git, REST API, Docker, AWS

    EXPERIENCE
    Senior Developer at Tech Solutions Inc (2018-Present)
    Software Engineer at Digital Systems Corp (2016-2018)

    EDUCATION
    Bachelor of Science in Computer Science, 2016
    "#,
    r#"
    Jane Smith
    jane.smith@example.com | (555) 987-6543

    Skills: JavaScript, HTML, CSS, React, Node.js

    Education: Bachelor of Arts in Design, 2023

    Experience: Web Development Intern (6 months)
    "#,
    r#"
    Robert Johnson
    robert.j@techmail.com | 555-444-3333

    Full-stack developer with 10+ years of experience

    SKILLS: Python, Java, Django, Flask, SQL, PostgreSQL, MongoDB
    Git, Docker, Kubernetes, REST API, GraphQL, Agile, DevOps

    EXPERIENCE: Lead Engineer at Tech Innovations Ltd (2015-Present)

    EDUCATION: Master of Science in Computer Science, 2012
    "#,
];

pub fn demo_requirements() -> JobRequirements {
    JobRequirements {
        position: "Senior Python Developer".to_string(),
        required_skills: ["Python", "Django", "SQL", "Git", "REST API"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        required_experience: 5,
        required_education: "Bachelor".to_string(),
    }
}

/// Analyzes every sample resume against `requirements`, in order.
pub fn run_demo(requirements: &JobRequirements) -> Vec<AnalysisResult> {
    SAMPLE_RESUMES
        .iter()
        .map(|text| analyze_resume(text, requirements))
        .collect()
}
