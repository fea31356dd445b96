//! Profile storage seam. The core never owns process-wide state; callers
//! inject a repository and the service passes it by reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::Profile;
use super::ranking::ScoredPosting;

/// Identifier wrapper for stored profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

/// Repository-backed record: the immutable profile plus mutable bookkeeping
/// (latest ranked matches, storage timestamp).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub profile_id: ProfileId,
    pub profile: Profile,
    pub stored_at: DateTime<Utc>,
    pub latest_matches: Option<Vec<ScoredPosting>>,
}

impl ProfileRecord {
    /// Compact view for API responses.
    pub fn profile_view(&self) -> ProfileView {
        ProfileView {
            profile_id: self.profile_id.clone(),
            primary_industry: self.profile.primary_industry.clone(),
            experience_level: self.profile.experience_level.label().to_string(),
            confidence: self.profile.confidence,
            skills: self.profile.skills.clone(),
            stored_at: self.stored_at,
        }
    }
}

/// API-facing summary of a stored profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub profile_id: ProfileId,
    pub primary_industry: String,
    pub experience_level: String,
    pub confidence: f64,
    pub skills: Vec<String>,
    pub stored_at: DateTime<Utc>,
}

/// Storage abstraction for the single active profile per session. A new
/// upload supersedes the previous record; records are never merged.
pub trait ProfileRepository: Send + Sync {
    /// Store a record as the active profile, superseding any previous one.
    fn replace_active(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError>;

    /// Fetch the active profile record, if any.
    fn active(&self) -> Result<Option<ProfileRecord>, RepositoryError>;

    /// Update the active record in place (e.g. after a discovery run).
    ///
    /// Implementations must reject a record whose `profile_id` no longer
    /// matches the active record with [`RepositoryError::NotFound`], so a
    /// stale writer cannot resurrect a superseded profile.
    fn update(&self, record: ProfileRecord) -> Result<(), RepositoryError>;
}

/// Error raised by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("no active profile stored")]
    NotFound,
    #[error("profile storage unavailable")]
    Unavailable,
}
