use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::matching::generator::{PostingGenerator, StdRandom};
use crate::matching::posting::JobPosting;
use crate::matching::profile::Profile;
use chrono::Utc;

use crate::matching::repository::{ProfileId, ProfileRecord, ProfileRepository, RepositoryError};
use crate::matching::router::matching_router;
use crate::matching::scoring::{ApplicationPriority, MatchResult, MatchStrength, ScoringWeights};
use crate::matching::service::MatchService;
use crate::matching::ProfileExtractor;

pub(super) const SENIOR_DEVOPS_RESUME: &str = "Senior DevOps Engineer with 10+ years \
     experience building AWS infrastructure for fintech platforms. Deep hands-on Kubernetes, \
     Docker, Terraform and CI/CD pipelines with Jenkins. Python automation, monitoring and \
     security hardening. Based in London, open to remote work across the UK.";

pub(super) const WEB3_RESUME: &str = "Senior blockchain engineer shipping Solidity smart \
     contract systems on Ethereum. Built DeFi protocols, liquidity tooling, and smart contracts \
     audited for flash loan exposure. Python and JavaScript backend services, remote-first \
     across the UK.";

pub(super) fn devops_profile() -> Profile {
    ProfileExtractor::extract(SENIOR_DEVOPS_RESUME).expect("resume extracts")
}

pub(super) fn web3_profile() -> Profile {
    ProfileExtractor::extract(WEB3_RESUME).expect("resume extracts")
}

pub(super) fn stored_record(id: &str, profile: Profile) -> ProfileRecord {
    ProfileRecord {
        profile_id: ProfileId(id.to_string()),
        profile,
        stored_at: Utc::now(),
        latest_matches: None,
    }
}

pub(super) fn posting(
    title: &str,
    company: &str,
    location: &str,
    description: &str,
) -> JobPosting {
    JobPosting {
        title: Some(title.to_string()),
        company: Some(company.to_string()),
        location: Some(location.to_string()),
        description: Some(description.to_string()),
        ..JobPosting::default()
    }
}

pub(super) fn platform_posting() -> JobPosting {
    posting(
        "Senior Platform Engineer",
        "CloudScale Systems",
        "Remote",
        "Senior engineer building Kubernetes and Docker infrastructure on AWS with \
         Terraform, Python automation, and monitoring.",
    )
}

pub(super) fn junior_sales_posting() -> JobPosting {
    posting(
        "Graduate Sales Executive",
        "RetailConnect",
        "Leeds",
        "Entry level sales role. Full training provided, no prior background needed.",
    )
}

pub(super) fn scored(title: &str, score: f64) -> crate::matching::ScoredPosting {
    crate::matching::ScoredPosting {
        posting: JobPosting {
            title: Some(title.to_string()),
            ..JobPosting::default()
        },
        result: MatchResult {
            overall_score: score,
            breakdown: BTreeMap::new(),
            strength: MatchStrength::from_score(score),
            priority: ApplicationPriority::Medium,
            matching_keywords: Vec::new(),
            missing_keywords: Vec::new(),
            recommendations: Vec::new(),
        },
    }
}

pub(super) fn build_service() -> (
    Arc<MatchService<MemoryRepository, StdRandom>>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(MatchService::new(
        repository.clone(),
        ScoringWeights::default(),
        PostingGenerator::new(StdRandom::seeded(11)),
    ));
    (service, repository)
}

pub(super) fn router_with_service(
    service: Arc<MatchService<MemoryRepository, StdRandom>>,
) -> axum::Router {
    matching_router(service)
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    record: Mutex<Option<ProfileRecord>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self) -> Option<ProfileRecord> {
        self.record.lock().expect("repository mutex poisoned").clone()
    }
}

impl ProfileRepository for MemoryRepository {
    fn replace_active(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        let mut guard = self.record.lock().expect("repository mutex poisoned");
        *guard = Some(record.clone());
        Ok(record)
    }

    fn active(&self) -> Result<Option<ProfileRecord>, RepositoryError> {
        let guard = self.record.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }

    fn update(&self, record: ProfileRecord) -> Result<(), RepositoryError> {
        let mut guard = self.record.lock().expect("repository mutex poisoned");
        match guard.as_ref() {
            Some(active) if active.profile_id == record.profile_id => {
                *guard = Some(record);
                Ok(())
            }
            _ => Err(RepositoryError::NotFound),
        }
    }
}

/// Serves a stale record from `active` while already holding a newer one, as
/// if a second upload landed mid-discovery.
pub(super) struct SupersededRepository {
    stale: ProfileRecord,
    current: Mutex<ProfileRecord>,
}

impl SupersededRepository {
    pub(super) fn new(stale: ProfileRecord, current: ProfileRecord) -> Self {
        Self {
            stale,
            current: Mutex::new(current),
        }
    }

    pub(super) fn current(&self) -> ProfileRecord {
        self.current.lock().expect("repository mutex poisoned").clone()
    }
}

impl ProfileRepository for SupersededRepository {
    fn replace_active(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        let mut guard = self.current.lock().expect("repository mutex poisoned");
        *guard = record.clone();
        Ok(record)
    }

    fn active(&self) -> Result<Option<ProfileRecord>, RepositoryError> {
        Ok(Some(self.stale.clone()))
    }

    fn update(&self, record: ProfileRecord) -> Result<(), RepositoryError> {
        let mut guard = self.current.lock().expect("repository mutex poisoned");
        if guard.profile_id == record.profile_id {
            *guard = record;
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn replace_active(&self, _record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }

    fn active(&self) -> Result<Option<ProfileRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }

    fn update(&self, _record: ProfileRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
