//! CV-to-job matching pipeline: lexicon-driven profile extraction, weighted
//! keyword scoring, and stable ranking of scored postings.
//!
//! Data flows strictly one way: raw resume text -> [`Profile`] ->
//! (`Profile` x [`JobPosting`]) -> [`MatchResult`] -> ranked list. Every stage
//! is a pure function of its inputs; orchestration and storage live in
//! [`service`] behind the [`ProfileRepository`] seam.

pub(crate) mod cover_letter;
pub mod export;
pub mod extractor;
pub mod generator;
pub mod lexicon;
pub mod market;
pub mod posting;
pub mod profile;
pub mod ranking;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use cover_letter::render_cover_letter;
pub use extractor::{ExtractionError, ProfileExtractor, MIN_RESUME_CHARS};
pub use generator::{PostingGenerator, RandomSource, StdRandom};
pub use market::MarketSummary;
pub use posting::JobPosting;
pub use profile::{ExperienceLevel, IndustrySignal, LocationPreference, Profile};
pub use ranking::{rank, RankPolicy, ScoredPosting};
pub use repository::{ProfileId, ProfileRecord, ProfileRepository, ProfileView, RepositoryError};
pub use router::matching_router;
pub use scoring::{
    ApplicationPriority, MatchEngine, MatchResult, MatchStrength, ScoreCategory, ScoringWeights,
};
pub use service::{DiscoveryOutcome, MatchService, MatchServiceError};
