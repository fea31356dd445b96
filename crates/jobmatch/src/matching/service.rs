//! Orchestration facade composing extraction, scoring, fabrication, and
//! ranking over an injected repository.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::info;

use super::extractor::{ExtractionError, ProfileExtractor};
use super::generator::{PostingGenerator, RandomSource};
use super::market::MarketSummary;
use super::posting::JobPosting;
use super::ranking::{rank, RankPolicy, ScoredPosting};
use super::repository::{ProfileId, ProfileRecord, ProfileRepository, RepositoryError};
use super::scoring::{MatchEngine, ScoringWeights};

static PROFILE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_profile_id() -> ProfileId {
    let id = PROFILE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProfileId(format!("cv-{id:06}"))
}

/// Outcome of one discovery run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiscoveryOutcome {
    pub profile_id: ProfileId,
    pub ranked: Vec<ScoredPosting>,
    pub market: MarketSummary,
    /// True when the posting batch was fabricated rather than supplied.
    pub fabricated: bool,
}

/// Service owning the scoring engine and posting generator, storing profiles
/// through the injected repository.
pub struct MatchService<R, S: RandomSource> {
    repository: Arc<R>,
    engine: MatchEngine,
    generator: Mutex<PostingGenerator<S>>,
    default_policy: RankPolicy,
    max_fabricated: usize,
}

impl<R, S> MatchService<R, S>
where
    R: ProfileRepository + 'static,
    S: RandomSource + 'static,
{
    pub fn new(repository: Arc<R>, weights: ScoringWeights, generator: PostingGenerator<S>) -> Self {
        Self {
            repository,
            engine: MatchEngine::new(weights),
            generator: Mutex::new(generator),
            default_policy: RankPolicy::default(),
            max_fabricated: 5,
        }
    }

    /// Replace the default rank policy applied when a caller omits one.
    pub fn with_policy(mut self, policy: RankPolicy) -> Self {
        self.default_policy = policy;
        self
    }

    /// Cap the number of postings fabricated per discovery run.
    pub fn with_fabrication_limit(mut self, limit: usize) -> Self {
        self.max_fabricated = limit;
        self
    }

    pub fn default_policy(&self) -> RankPolicy {
        self.default_policy
    }

    /// Analyze a resume and store the profile, superseding any previous one.
    pub fn analyze(&self, raw_text: &str) -> Result<ProfileRecord, MatchServiceError> {
        let profile = ProfileExtractor::extract(raw_text)?;
        let profile_id = next_profile_id();

        info!(
            profile_id = %profile_id.0,
            primary_industry = %profile.primary_industry,
            experience_level = profile.experience_level.label(),
            skills = profile.skills.len(),
            "resume analyzed"
        );

        let record = ProfileRecord {
            profile_id,
            profile,
            stored_at: Utc::now(),
            latest_matches: None,
        };
        let stored = self.repository.replace_active(record)?;
        Ok(stored)
    }

    /// Fetch the active profile record.
    pub fn active_profile(&self) -> Result<ProfileRecord, MatchServiceError> {
        self.repository
            .active()?
            .ok_or(MatchServiceError::NoActiveProfile)
    }

    /// Score and rank a posting batch against the active profile. An empty
    /// batch triggers demo fabrication. The ranked set is recorded on the
    /// profile and returned.
    pub fn discover(
        &self,
        postings: Vec<JobPosting>,
        policy: &RankPolicy,
    ) -> Result<DiscoveryOutcome, MatchServiceError> {
        let mut record = self.active_profile()?;

        let fabricated = postings.is_empty();
        let postings = if fabricated {
            let mut generator = self
                .generator
                .lock()
                .map_err(|_| RepositoryError::Unavailable)?;
            generator.generate(&record.profile, self.max_fabricated)
        } else {
            postings
        };

        let scored: Vec<ScoredPosting> = postings
            .into_iter()
            .map(|posting| {
                let result = self.engine.score(&record.profile, &posting);
                ScoredPosting { posting, result }
            })
            .collect();

        let ranked = rank(&scored, policy);
        let market = MarketSummary::from_ranked(&ranked);

        info!(
            profile_id = %record.profile_id.0,
            scored = scored.len(),
            ranked = ranked.len(),
            fabricated,
            "discovery run complete"
        );

        record.latest_matches = Some(ranked.clone());
        let profile_id = record.profile_id.clone();
        match self.repository.update(record) {
            Ok(()) => {}
            // A newer upload superseded this profile mid-run; its record
            // must not be overwritten with the stale one.
            Err(RepositoryError::NotFound) => {
                info!(
                    profile_id = %profile_id.0,
                    "profile superseded during discovery; matches not recorded"
                );
            }
            Err(other) => return Err(other.into()),
        }

        Ok(DiscoveryOutcome {
            profile_id,
            ranked,
            market,
            fabricated,
        })
    }
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchServiceError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("no active profile; upload a resume first")]
    NoActiveProfile,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
