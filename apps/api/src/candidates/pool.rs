//! Candidate pool: the analyzed results accumulated during one session.
//!
//! The analysis core never holds on to results. This pool is the one place that
//! does, and it is owned by `AppState` behind a lock.

use serde::Serialize;
use uuid::Uuid;

use crate::analysis::{AnalysisResult, RecommendationTier};

/// Scores at or above this count as recommended in the summary.
const RECOMMENDED_THRESHOLD: u32 = 60;

/// One line of the ranked candidate table.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateRow {
    pub rank: usize,
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub score: u32,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolSummary {
    pub total_candidates: usize,
    /// Rounded to one decimal place. Zero for an empty pool.
    pub average_score: f64,
    pub recommended_candidates: usize,
}

#[derive(Debug, Default)]
pub struct CandidatePool {
    results: Vec<AnalysisResult>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: AnalysisResult) {
        self.results.push(result);
    }

    pub fn extend(&mut self, results: impl IntoIterator<Item = AnalysisResult>) {
        self.results.extend(results);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results in insertion order.
    pub fn results(&self) -> &[AnalysisResult] {
        &self.results
    }

    pub fn get(&self, id: Uuid) -> Option<&AnalysisResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Highest total score first. Ties keep insertion order.
    pub fn ranked(&self) -> Vec<&AnalysisResult> {
        let mut ranked: Vec<&AnalysisResult> = self.results.iter().collect();
        ranked.sort_by(|a, b| b.total_score().cmp(&a.total_score()));
        ranked
    }

    pub fn rows(&self) -> Vec<CandidateRow> {
        self.ranked()
            .into_iter()
            .enumerate()
            .map(|(i, r)| CandidateRow {
                rank: i + 1,
                id: r.id,
                name: r.resume.name.clone(),
                email: r.resume.email.clone(),
                score: r.total_score(),
                status: r.recommendation.label(),
            })
            .collect()
    }

    pub fn summary(&self) -> PoolSummary {
        let total_candidates = self.results.len();
        if total_candidates == 0 {
            return PoolSummary {
                total_candidates,
                average_score: 0.0,
                recommended_candidates: 0,
            };
        }

        let sum: u64 = self.results.iter().map(|r| u64::from(r.total_score())).sum();
        let average = sum as f64 / total_candidates as f64;

        PoolSummary {
            total_candidates,
            average_score: (average * 10.0).round() / 10.0,
            recommended_candidates: self
                .results
                .iter()
                .filter(|r| r.total_score() >= RECOMMENDED_THRESHOLD)
                .count(),
        }
    }

    /// Count per recommendation tier, for dashboards.
    pub fn tier_count(&self, tier: RecommendationTier) -> usize {
        self.results
            .iter()
            .filter(|r| r.recommendation == tier)
            .count()
    }
}
