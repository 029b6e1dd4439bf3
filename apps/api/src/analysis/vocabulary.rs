//! Reference skill vocabulary and display casing.

/// Skills the extractor looks for, lowercase. Matched as whole words or phrases.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages
    "python",
    "java",
    "javascript",
    "c++",
    "c#",
    "ruby",
    "php",
    "swift",
    "kotlin",
    // Web
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node.js",
    "django",
    "flask",
    // Data stores
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "oracle",
    "nosql",
    // Cloud and tooling
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "jenkins",
    "git",
    // Data and ML
    "machine learning",
    "deep learning",
    "ai",
    "data science",
    "nlp",
    // Process and APIs
    "agile",
    "scrum",
    "devops",
    "ci/cd",
    "rest api",
    "graphql",
    // Soft skills
    "leadership",
    "communication",
    "project management",
    "problem solving",
    "teamwork",
    "analytical",
    "critical thinking",
    "time management",
    // Office and BI
    "excel",
    "powerpoint",
    "word",
    "tableau",
    "power bi",
    // Text and automation
    "text processing",
    "data extraction",
    "json",
    "algorithms",
    "web scraping",
    "automation",
    "testing",
    "debugging",
];

/// Title-cases a term: a letter is uppercased when it follows a non-letter, lowercased
/// otherwise. `"node.js"` becomes `"Node.Js"`, `"ci/cd"` becomes `"Ci/Cd"`.
pub fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut prev_is_letter = false;
    for c in term.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words_and_punctuation() {
        assert_eq!(title_case("python"), "Python");
        assert_eq!(title_case("rest api"), "Rest Api");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
        assert_eq!(title_case("c++"), "C++");
    }

    #[test]
    fn test_vocabulary_is_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for term in SKILL_VOCABULARY {
            assert_eq!(*term, term.to_lowercase());
            assert!(seen.insert(*term), "duplicate vocabulary term {term}");
        }
    }
}
