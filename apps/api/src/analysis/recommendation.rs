use std::fmt;

use serde::{Deserialize, Serialize};

/// Hiring-suitability bucket derived from the total match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationTier {
    HighlyRecommended,
    Recommended,
    Maybe,
    NotRecommended,
}

impl RecommendationTier {
    /// Boundaries are inclusive at the lower end: 80, 60, 40.
    pub fn from_score(total_score: u32) -> Self {
        match total_score {
            s if s >= 80 => Self::HighlyRecommended,
            s if s >= 60 => Self::Recommended,
            s if s >= 40 => Self::Maybe,
            _ => Self::NotRecommended,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HighlyRecommended => "HIGHLY RECOMMENDED",
            Self::Recommended => "RECOMMENDED",
            Self::Maybe => "MAYBE",
            Self::NotRecommended => "NOT RECOMMENDED",
        }
    }

    pub fn rationale(&self) -> &'static str {
        match self {
            Self::HighlyRecommended => "Excellent match for the position",
            Self::Recommended => "Good candidate, consider for interview",
            Self::Maybe => "Potential candidate with some skill gaps",
            Self::NotRecommended => "Significant gaps in requirements",
        }
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.label(), self.rationale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RecommendationTier::from_score(100), RecommendationTier::HighlyRecommended);
        assert_eq!(RecommendationTier::from_score(80), RecommendationTier::HighlyRecommended);
        assert_eq!(RecommendationTier::from_score(79), RecommendationTier::Recommended);
        assert_eq!(RecommendationTier::from_score(60), RecommendationTier::Recommended);
        assert_eq!(RecommendationTier::from_score(59), RecommendationTier::Maybe);
        assert_eq!(RecommendationTier::from_score(40), RecommendationTier::Maybe);
        assert_eq!(RecommendationTier::from_score(39), RecommendationTier::NotRecommended);
        assert_eq!(RecommendationTier::from_score(0), RecommendationTier::NotRecommended);
    }

    #[test]
    fn test_display_includes_label_and_rationale() {
        assert_eq!(
            RecommendationTier::HighlyRecommended.to_string(),
            "HIGHLY RECOMMENDED - Excellent match for the position"
        );
        assert!(RecommendationTier::from_score(30)
            .to_string()
            .starts_with("NOT RECOMMENDED"));
    }

    #[test]
    fn test_tier_serde_screaming_snake_case() {
        let json = serde_json::to_string(&RecommendationTier::NotRecommended).unwrap();
        assert_eq!(json, r#""NOT_RECOMMENDED""#);
        let tier: RecommendationTier = serde_json::from_str(r#""HIGHLY_RECOMMENDED""#).unwrap();
        assert_eq!(tier, RecommendationTier::HighlyRecommended);
    }
}
