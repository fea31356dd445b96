//! Structured resume profile produced by extraction and consumed by scoring.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Experience band detected from a resume. Declaration order is the tie-break
/// order for the level argmax.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Executive,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Executive => "executive",
        }
    }
}

/// Per-industry classification signal.
///
/// `score` is matched keywords over total keywords for the industry;
/// `confidence` is `min(score * 2, 1.0)`. Industries with zero matches are
/// never recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustrySignal {
    pub industry: String,
    pub score: f64,
    pub matched_count: usize,
    pub confidence: f64,
}

/// Remote/region preference flags detected from the resume text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPreference {
    pub remote: bool,
    pub uk: bool,
    pub europe: bool,
}

/// Immutable summary of one analyzed resume.
///
/// Created once per upload and never mutated; a later upload supersedes the
/// previous profile rather than merging with it. Besides the classification
/// fields, the profile carries the derived matching state (term counts, token
/// frequencies, phrases, location flags) so the scorer stays a pure function
/// of `(Profile, JobPosting)` and never re-reads the raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub raw_text_length: usize,
    /// Detected skills in lexicon iteration order, deduplicated.
    pub skills: Vec<String>,
    pub skill_weights: BTreeMap<String, f64>,
    /// Industry signals in lexicon declaration order.
    pub industry_scores: Vec<IndustrySignal>,
    /// Argmax of `industry_scores` by confidence, first-seen tie-break;
    /// `"general"` when no industry matched.
    pub primary_industry: String,
    pub experience_level: ExperienceLevel,
    /// Overall analysis confidence in [0, 1].
    pub confidence: f64,
    /// Occurrence counts of scoring-lexicon terms found in the resume.
    pub term_counts: BTreeMap<String, u32>,
    /// Stop-worded token frequencies for the text-similarity component.
    pub token_counts: BTreeMap<String, u32>,
    /// Important multi-word phrases present in the resume.
    pub phrases: BTreeSet<String>,
    pub location: LocationPreference,
}

impl Profile {
    /// Occurrences of a scoring-lexicon term in the resume.
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    pub fn industry_signal(&self, industry: &str) -> Option<&IndustrySignal> {
        self.industry_scores
            .iter()
            .find(|signal| signal.industry == industry)
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }

    /// First `limit` skills, used for posting fabrication and cover letters.
    pub fn top_skills(&self, limit: usize) -> Vec<&str> {
        self.skills.iter().take(limit).map(String::as_str).collect()
    }
}
