//! Aggregate insight over a ranked result set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ranking::ScoredPosting;

/// Summary statistics for a batch of ranked matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub total_postings: usize,
    pub average_score: f64,
    /// Matches scoring at least 0.6.
    pub high_match_count: usize,
    /// Most frequent companies, descending, capped at 5.
    pub top_companies: Vec<(String, usize)>,
    /// Most frequent locations, descending, capped at 5.
    pub top_locations: Vec<(String, usize)>,
    /// Share of postings advertising remote work, in [0, 1].
    pub remote_share: f64,
}

impl MarketSummary {
    pub fn from_ranked(ranked: &[ScoredPosting]) -> Self {
        if ranked.is_empty() {
            return Self {
                total_postings: 0,
                average_score: 0.0,
                high_match_count: 0,
                top_companies: Vec::new(),
                top_locations: Vec::new(),
                remote_share: 0.0,
            };
        }

        let total = ranked.len();
        let score_sum: f64 = ranked.iter().map(|entry| entry.result.overall_score).sum();
        let high = ranked
            .iter()
            .filter(|entry| entry.result.overall_score >= 0.6)
            .count();
        let remote = ranked
            .iter()
            .filter(|entry| entry.posting.display_location().to_lowercase().contains("remote"))
            .count();

        Self {
            total_postings: total,
            average_score: score_sum / total as f64,
            high_match_count: high,
            top_companies: most_common(
                ranked.iter().map(|entry| entry.posting.display_company()),
            ),
            top_locations: most_common(
                ranked.iter().map(|entry| entry.posting.display_location()),
            ),
            remote_share: remote as f64 / total as f64,
        }
    }
}

fn most_common<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    let mut entries: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    // Descending by count; the BTreeMap walk already ordered ties by name.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(5);
    entries
}
