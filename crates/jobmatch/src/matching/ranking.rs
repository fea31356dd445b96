//! Stable sort, threshold filter, and truncation over scored postings.

use serde::{Deserialize, Serialize};

use super::posting::JobPosting;
use super::scoring::MatchResult;

/// One posting together with its match outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPosting {
    pub posting: JobPosting,
    pub result: MatchResult,
}

/// Caller policy for filtering and truncating ranked results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankPolicy {
    /// Entries scoring below this are dropped.
    pub min_score: f64,
    /// Keep only the first N entries after sorting and filtering.
    pub top_n: Option<usize>,
}

impl Default for RankPolicy {
    fn default() -> Self {
        Self {
            min_score: 0.2,
            top_n: None,
        }
    }
}

/// Rank scored postings descending by overall score.
///
/// The sort is stable: equal-score entries retain their original relative
/// order. Inputs are never mutated.
pub fn rank(results: &[ScoredPosting], policy: &RankPolicy) -> Vec<ScoredPosting> {
    let mut ranked: Vec<ScoredPosting> = results.to_vec();
    ranked.sort_by(|a, b| b.result.overall_score.total_cmp(&a.result.overall_score));
    ranked.retain(|entry| entry.result.overall_score >= policy.min_score);
    if let Some(limit) = policy.top_n {
        ranked.truncate(limit);
    }
    ranked
}
