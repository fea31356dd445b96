//! Resume text analysis: lexicon scan, experience detection, and confidence.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use regex::Regex;

use super::lexicon::{
    self, ScoreCategory, EXPERIENCE_INDICATORS, GENERAL_INDUSTRY, IMPORTANT_PHRASES, INDUSTRIES,
};
use super::profile::{ExperienceLevel, IndustrySignal, LocationPreference, Profile};

/// Minimum trimmed resume length considered analyzable.
pub const MIN_RESUME_CHARS: usize = 50;

/// Raised when the uploaded resume cannot be analyzed at all. Surfaced to the
/// caller, never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    #[error(
        "resume text too short to analyze: {length} characters after trimming, \
         minimum is {MIN_RESUME_CHARS}"
    )]
    InvalidInput { length: usize },
}

fn years_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(\d+)\+?\s*years?\s+(?:of\s+)?experience").expect("valid years pattern")
    })
}

fn token_separator() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^\w\s.\-]").expect("valid separator pattern"))
}

/// Stateless analyzer turning raw resume text into a [`Profile`].
pub struct ProfileExtractor;

impl ProfileExtractor {
    /// Analyze one resume. Fails only when the trimmed text is shorter than
    /// [`MIN_RESUME_CHARS`]; everything past that gate degrades to weak
    /// signals rather than errors.
    pub fn extract(raw_text: &str) -> Result<Profile, ExtractionError> {
        let trimmed_len = raw_text.trim().chars().count();
        if trimmed_len < MIN_RESUME_CHARS {
            return Err(ExtractionError::InvalidInput { length: trimmed_len });
        }

        let lower = raw_text.to_lowercase();

        let industry_scores = industry_signals(&lower);
        let primary_industry = primary_industry(&industry_scores);
        let skills = detect_skills(&lower);
        let skill_weights = skill_weights(&skills, &primary_industry);
        let experience_level = experience_level(&lower);
        let confidence = analysis_confidence(&skills, &industry_scores);

        Ok(Profile {
            raw_text_length: raw_text.chars().count(),
            skills,
            skill_weights,
            industry_scores,
            primary_industry,
            experience_level,
            confidence,
            term_counts: scoring_term_counts(&lower),
            token_counts: tokenize(&lower),
            phrases: detect_phrases(&lower),
            location: location_preference(&lower),
        })
    }
}

fn industry_signals(lower: &str) -> Vec<IndustrySignal> {
    let mut signals = Vec::new();
    for entry in INDUSTRIES {
        let matched = entry
            .keywords
            .iter()
            .filter(|keyword| lower.contains(*keyword))
            .count();
        if matched == 0 {
            continue;
        }
        let score = matched as f64 / entry.keywords.len() as f64;
        signals.push(IndustrySignal {
            industry: entry.name.to_string(),
            score,
            matched_count: matched,
            confidence: (score * 2.0).min(1.0),
        });
    }
    signals
}

fn primary_industry(signals: &[IndustrySignal]) -> String {
    let mut best: Option<&IndustrySignal> = None;
    for signal in signals {
        // Strict comparison keeps the first-seen entry on ties.
        if best.map_or(true, |current| signal.confidence > current.confidence) {
            best = Some(signal);
        }
    }
    best.map_or_else(|| GENERAL_INDUSTRY.to_string(), |s| s.industry.clone())
}

fn detect_skills(lower: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut skills = Vec::new();
    for entry in INDUSTRIES {
        for keyword in entry.keywords {
            if lower.contains(keyword) && seen.insert(*keyword) {
                skills.push((*keyword).to_string());
            }
        }
    }
    skills
}

fn skill_weights(skills: &[String], primary_industry: &str) -> BTreeMap<String, f64> {
    let mut weights = BTreeMap::new();
    match lexicon::industry(primary_industry) {
        Some(entry) => {
            for skill in skills {
                let weight = if entry.keywords.contains(&skill.as_str()) {
                    4.0 * entry.weight_multiplier
                } else {
                    2.0
                };
                weights.insert(skill.clone(), weight);
            }
        }
        None => {
            for skill in skills {
                weights.insert(skill.clone(), 2.5);
            }
        }
    }
    weights
}

fn experience_level(lower: &str) -> ExperienceLevel {
    let mut scores = BTreeMap::new();
    for (level, phrases) in EXPERIENCE_INDICATORS {
        let hits = phrases.iter().filter(|phrase| lower.contains(*phrase)).count() as u32;
        scores.insert(*level, hits);
    }

    let years: Vec<u32> = years_pattern()
        .captures_iter(lower)
        .filter_map(|capture| capture.get(1)?.as_str().parse().ok())
        .collect();
    if let Some(max_years) = years.into_iter().max() {
        let boosted = if max_years >= 8 {
            ExperienceLevel::Senior
        } else if max_years >= 4 {
            ExperienceLevel::Mid
        } else {
            ExperienceLevel::Junior
        };
        *scores.entry(boosted).or_default() += 2;
    }

    // Argmax with declaration-order tie-break (junior, mid, senior, executive).
    let mut best = ExperienceLevel::Junior;
    let mut best_score = 0u32;
    for level in ExperienceLevel::ALL {
        let score = scores.get(&level).copied().unwrap_or(0);
        if score > best_score {
            best = level;
            best_score = score;
        }
    }
    best
}

fn analysis_confidence(skills: &[String], signals: &[IndustrySignal]) -> f64 {
    let skill_confidence = (skills.len() as f64 / 10.0).min(1.0);
    let industry_confidence = signals
        .iter()
        .map(|signal| signal.confidence)
        .fold(f64::NAN, f64::max);
    let industry_confidence = if industry_confidence.is_nan() {
        0.1
    } else {
        industry_confidence
    };
    (skill_confidence + industry_confidence) / 2.0
}

fn scoring_term_counts(lower: &str) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for category in ScoreCategory::ALL {
        for (keyword, _) in category.keywords() {
            let count = count_occurrences(lower, keyword);
            if count > 0 {
                counts.entry((*keyword).to_string()).or_insert(count);
            }
        }
    }
    counts
}

fn detect_phrases(lower: &str) -> BTreeSet<String> {
    IMPORTANT_PHRASES
        .iter()
        .filter(|phrase| lower.contains(*phrase))
        .map(|phrase| (*phrase).to_string())
        .collect()
}

fn location_preference(lower: &str) -> LocationPreference {
    LocationPreference {
        remote: lower.contains("remote"),
        uk: lexicon::UK_TERMS.iter().any(|term| lower.contains(term)),
        europe: lexicon::EUROPE_TERMS.iter().any(|term| lower.contains(term)),
    }
}

/// Non-overlapping substring occurrences.
pub(crate) fn count_occurrences(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut offset = 0;
    while let Some(position) = haystack[offset..].find(needle) {
        count += 1;
        offset += position + needle.len();
    }
    count
}

/// Lowercase, strip punctuation, drop stop words and short tokens, and count
/// the remainder. Shared by extraction and posting-side similarity.
pub(crate) fn tokenize(lower: &str) -> BTreeMap<String, u32> {
    let cleaned = token_separator().replace_all(lower, " ");
    let mut counts = BTreeMap::new();
    for word in cleaned.split_whitespace() {
        if word.chars().count() <= 2 || lexicon::is_stop_word(word) {
            continue;
        }
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }
    counts
}
