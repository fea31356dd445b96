//! Deterministic scoring of a (profile, posting) pair.

mod location;
mod rules;
mod weights;

pub use super::lexicon::ScoreCategory;
pub use weights::ScoringWeights;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::posting::JobPosting;
use super::profile::{ExperienceLevel, Profile};

/// Human-readable match strength derived from fixed score thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStrength {
    Excellent,
    Strong,
    Good,
    Fair,
    Weak,
}

impl MatchStrength {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            MatchStrength::Excellent
        } else if score >= 0.6 {
            MatchStrength::Strong
        } else if score >= 0.4 {
            MatchStrength::Good
        } else if score >= 0.2 {
            MatchStrength::Fair
        } else {
            MatchStrength::Weak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MatchStrength::Excellent => "Excellent",
            MatchStrength::Strong => "Strong",
            MatchStrength::Good => "Good",
            MatchStrength::Fair => "Fair",
            MatchStrength::Weak => "Weak",
        }
    }
}

/// Whether a posting is worth applying to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationPriority {
    High,
    Medium,
    Low,
    Skip,
}

impl ApplicationPriority {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationPriority::High => "High",
            ApplicationPriority::Medium => "Medium",
            ApplicationPriority::Low => "Low",
            ApplicationPriority::Skip => "Skip",
        }
    }
}

/// Scored outcome of comparing one profile against one posting. Immutable,
/// recomputed on demand, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Blended score in [0, 1] after the location multiplier.
    pub overall_score: f64,
    /// Normalized sub-score per keyword category.
    pub breakdown: BTreeMap<ScoreCategory, f64>,
    pub strength: MatchStrength,
    pub priority: ApplicationPriority,
    /// Tokens shared between resume and posting, capped at 10.
    pub matching_keywords: Vec<String>,
    /// Specialty keywords the posting asks for but the resume lacks, capped at 5.
    pub missing_keywords: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Stateless scorer applying the weight configuration to (profile, posting)
/// pairs. Pure: no randomness, no I/O, no caching.
pub struct MatchEngine {
    weights: ScoringWeights,
}

impl MatchEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, profile: &Profile, posting: &JobPosting) -> MatchResult {
        let text = posting.search_text();

        let breakdown = rules::category_scores(profile, &text);
        let similarity = rules::text_similarity(profile, &text);
        let phrase = rules::phrase_bonus(profile, &text);

        let sub = |category: ScoreCategory| breakdown.get(&category).copied().unwrap_or(0.0);
        let blended = sub(ScoreCategory::Web3) * self.weights.web3
            + sub(ScoreCategory::Technical) * self.weights.technical
            + sub(ScoreCategory::Experience) * self.weights.experience
            + sub(ScoreCategory::Industry) * self.weights.industry
            + similarity * self.weights.similarity
            + phrase * self.weights.phrase_bonus;

        let location_lower = posting.display_location().to_lowercase();
        let multiplier =
            location::location_multiplier(location::location_score(&profile.location, &location_lower));

        let overall_score = (blended * multiplier).clamp(0.0, 1.0);

        let strength = MatchStrength::from_score(overall_score);
        let priority = application_priority(overall_score, sub(ScoreCategory::Web3));

        let matching_keywords = matching_keywords(profile, &text);
        let missing_keywords = missing_keywords(profile, &text);
        let recommendations = recommendations(
            overall_score,
            &breakdown,
            &missing_keywords,
            detect_posting_level(&text),
        );

        MatchResult {
            overall_score,
            breakdown,
            strength,
            priority,
            matching_keywords,
            missing_keywords,
            recommendations,
        }
    }
}

fn application_priority(score: f64, specialty_score: f64) -> ApplicationPriority {
    if score >= 0.7 && specialty_score >= 0.5 {
        ApplicationPriority::High
    } else if score >= 0.5 {
        ApplicationPriority::Medium
    } else if score >= 0.3 {
        ApplicationPriority::Low
    } else {
        ApplicationPriority::Skip
    }
}

/// Seniority band advertised by the posting itself.
fn detect_posting_level(text: &str) -> ExperienceLevel {
    const SENIOR: &[&str] = &["senior", "sr.", "lead", "principal", "staff"];
    const JUNIOR: &[&str] = &["junior", "jr.", "entry", "graduate", "intern"];
    const EXECUTIVE: &[&str] = &["cto", "director", "head of", "vp", "chief"];

    if SENIOR.iter().any(|term| text.contains(term)) {
        ExperienceLevel::Senior
    } else if JUNIOR.iter().any(|term| text.contains(term)) {
        ExperienceLevel::Junior
    } else if EXECUTIVE.iter().any(|term| text.contains(term)) {
        ExperienceLevel::Executive
    } else {
        ExperienceLevel::Mid
    }
}

fn matching_keywords(profile: &Profile, posting_text: &str) -> Vec<String> {
    let posting_tokens = super::extractor::tokenize(posting_text);
    profile
        .token_counts
        .keys()
        .filter(|token| posting_tokens.contains_key(*token))
        .take(10)
        .cloned()
        .collect()
}

fn missing_keywords(profile: &Profile, posting_text: &str) -> Vec<String> {
    ScoreCategory::Web3
        .keywords()
        .iter()
        .filter(|(keyword, _)| posting_text.contains(keyword) && profile.term_count(keyword) == 0)
        .take(5)
        .map(|(keyword, _)| (*keyword).to_string())
        .collect()
}

fn recommendations(
    overall_score: f64,
    breakdown: &BTreeMap<ScoreCategory, f64>,
    missing_keywords: &[String],
    posting_level: ExperienceLevel,
) -> Vec<String> {
    let mut notes = Vec::new();

    if overall_score >= 0.7 {
        notes.push("Excellent match; apply immediately and prioritize this role".to_string());
    } else if overall_score >= 0.5 {
        notes.push("Good match; worth applying with a customized application".to_string());
    } else if overall_score >= 0.3 {
        notes.push("Moderate match; consider whether to expand your skillset".to_string());
    } else {
        notes.push("Poor match; focus on more relevant opportunities".to_string());
    }

    let sub = |category: ScoreCategory| breakdown.get(&category).copied().unwrap_or(0.0);
    if sub(ScoreCategory::Web3) < 0.3 {
        notes.push("Highlight specialty domain experience more prominently".to_string());
    }
    if sub(ScoreCategory::Technical) < 0.4 {
        notes.push("Emphasize core technical and backend development skills".to_string());
    }

    if !missing_keywords.is_empty() {
        notes.push(format!(
            "Consider mentioning: {}",
            missing_keywords
                .iter()
                .take(3)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    match posting_level {
        ExperienceLevel::Senior if sub(ScoreCategory::Experience) < 0.5 => {
            notes.push("Emphasize leadership and senior-level project experience".to_string());
        }
        ExperienceLevel::Executive => {
            notes.push("Highlight entrepreneurial and scaling experience".to_string());
        }
        _ => {}
    }

    notes
}
