//! Sub-score computation: weighted keyword counts, token cosine similarity,
//! and the phrase-overlap bonus.

use std::collections::BTreeMap;

use super::super::extractor::{count_occurrences, tokenize};
use super::super::lexicon::{ScoreCategory, IMPORTANT_PHRASES};
use super::super::profile::Profile;

/// Normalized sub-scores for each keyword category, in declaration order of
/// [`ScoreCategory::ALL`].
///
/// A keyword contributes `weight * min(resume_count, posting_count) * 0.5`;
/// the category sum is divided by its fixed ceiling and clamped to [0, 1].
/// Keywords absent from the resume contribute nothing, so adding a keyword
/// the profile already carries to a posting can only raise the sub-score.
pub(crate) fn category_scores(profile: &Profile, posting_text: &str) -> BTreeMap<ScoreCategory, f64> {
    let mut scores = BTreeMap::new();
    for category in ScoreCategory::ALL {
        let mut raw = 0.0;
        for (keyword, weight) in category.keywords() {
            let resume_count = profile.term_count(keyword);
            if resume_count == 0 {
                continue;
            }
            let posting_count = count_occurrences(posting_text, keyword);
            if posting_count == 0 {
                continue;
            }
            raw += weight * f64::from(resume_count.min(posting_count)) * 0.5;
        }
        scores.insert(category, (raw / category.ceiling()).min(1.0));
    }
    scores
}

/// Cosine similarity over stop-worded token frequency vectors.
pub(crate) fn text_similarity(profile: &Profile, posting_text: &str) -> f64 {
    let posting_tokens = tokenize(posting_text);
    if profile.token_counts.is_empty() || posting_tokens.is_empty() {
        return 0.0;
    }

    let dot: f64 = profile
        .token_counts
        .iter()
        .filter_map(|(token, count)| {
            posting_tokens
                .get(token)
                .map(|other| f64::from(*count) * f64::from(*other))
        })
        .sum();

    let magnitude = |counts: &BTreeMap<String, u32>| -> f64 {
        counts
            .values()
            .map(|count| f64::from(*count).powi(2))
            .sum::<f64>()
            .sqrt()
    };

    let denominator = magnitude(&profile.token_counts) * magnitude(&posting_tokens);
    if denominator == 0.0 {
        return 0.0;
    }
    (dot / denominator).min(1.0)
}

/// Shared important-phrase overlap, normalized by the posting's phrase count
/// and capped at 0.2 before weighting.
pub(crate) fn phrase_bonus(profile: &Profile, posting_text: &str) -> f64 {
    let posting_phrases: Vec<&str> = IMPORTANT_PHRASES
        .iter()
        .copied()
        .filter(|phrase| posting_text.contains(phrase))
        .collect();
    if profile.phrases.is_empty() || posting_phrases.is_empty() {
        return 0.0;
    }

    let shared = posting_phrases
        .iter()
        .filter(|phrase| profile.phrases.contains(**phrase))
        .count();
    let score = shared as f64 / posting_phrases.len() as f64;
    score.min(0.2)
}
