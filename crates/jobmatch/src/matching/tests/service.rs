use std::sync::Arc;

use super::common::*;
use crate::matching::generator::{PostingGenerator, StdRandom};
use crate::matching::ranking::RankPolicy;
use crate::matching::scoring::ScoringWeights;
use crate::matching::service::{MatchService, MatchServiceError};

fn open_policy() -> RankPolicy {
    RankPolicy {
        min_score: 0.0,
        top_n: None,
    }
}

#[test]
fn analyze_stores_profile_with_sequential_id() {
    let (service, repository) = build_service();

    let record = service.analyze(SENIOR_DEVOPS_RESUME).expect("analyze succeeds");
    assert!(record.profile_id.0.starts_with("cv-"));
    assert_eq!(record.profile.primary_industry, "devops_cloud");

    let stored = repository.stored().expect("record stored");
    assert_eq!(stored.profile_id, record.profile_id);
    assert!(stored.latest_matches.is_none());
}

#[test]
fn reupload_supersedes_previous_profile() {
    let (service, repository) = build_service();

    let first = service.analyze(SENIOR_DEVOPS_RESUME).expect("first upload");
    let second = service.analyze(WEB3_RESUME).expect("second upload");
    assert_ne!(first.profile_id, second.profile_id);

    let stored = repository.stored().expect("record stored");
    assert_eq!(stored.profile_id, second.profile_id);
    assert_eq!(stored.profile, second.profile);
}

#[test]
fn analyze_propagates_extraction_failure() {
    let (service, repository) = build_service();

    let error = service.analyze("too short").expect_err("short resume rejected");
    assert!(matches!(error, MatchServiceError::Extraction(_)));
    assert!(repository.stored().is_none());
}

#[test]
fn active_profile_requires_an_upload() {
    let (service, _) = build_service();
    let error = service.active_profile().expect_err("no profile yet");
    assert!(matches!(error, MatchServiceError::NoActiveProfile));
}

#[test]
fn discover_scores_and_records_supplied_postings() {
    let (service, repository) = build_service();
    service.analyze(SENIOR_DEVOPS_RESUME).expect("analyze succeeds");

    let outcome = service
        .discover(vec![platform_posting(), junior_sales_posting()], &open_policy())
        .expect("discovery succeeds");

    assert!(!outcome.fabricated);
    assert_eq!(outcome.ranked.len(), 2);
    assert_eq!(
        outcome.ranked[0].posting.display_title(),
        "Senior Platform Engineer"
    );
    assert_eq!(outcome.market.total_postings, 2);

    let stored = repository.stored().expect("record stored");
    assert_eq!(stored.latest_matches, Some(outcome.ranked));
}

#[test]
fn discover_fabricates_when_no_postings_supplied() {
    let (service, _) = build_service();
    service.analyze(SENIOR_DEVOPS_RESUME).expect("analyze succeeds");

    let outcome = service
        .discover(Vec::new(), &open_policy())
        .expect("discovery succeeds");

    assert!(outcome.fabricated);
    assert!(!outcome.ranked.is_empty());
    assert!(outcome.ranked.len() <= 5);
    for entry in &outcome.ranked {
        assert_eq!(entry.posting.display_source(), "Intelligent Match");
        assert!(entry.posting.contact_email.is_some());
    }
}

#[test]
fn discover_requires_an_active_profile() {
    let (service, _) = build_service();
    let error = service
        .discover(vec![platform_posting()], &open_policy())
        .expect_err("no profile yet");
    assert!(matches!(error, MatchServiceError::NoActiveProfile));
}

#[test]
fn repository_failures_surface_as_service_errors() {
    let service = MatchService::new(
        Arc::new(UnavailableRepository),
        ScoringWeights::default(),
        PostingGenerator::new(StdRandom::seeded(3)),
    );

    let error = service
        .analyze(SENIOR_DEVOPS_RESUME)
        .expect_err("repository offline");
    assert!(matches!(error, MatchServiceError::Repository(_)));
}

#[test]
fn discovery_does_not_resurrect_a_superseded_profile() {
    let stale = stored_record("cv-000101", devops_profile());
    let current = stored_record("cv-000102", web3_profile());
    let repository = Arc::new(SupersededRepository::new(stale, current));
    let service = MatchService::new(
        repository.clone(),
        ScoringWeights::default(),
        PostingGenerator::new(StdRandom::seeded(5)),
    );

    let outcome = service
        .discover(vec![platform_posting()], &open_policy())
        .expect("discovery still reports against the profile it scored");
    assert_eq!(outcome.profile_id.0, "cv-000101");
    assert_eq!(outcome.ranked.len(), 1);

    // The newer upload keeps its record; the stale write-back is dropped.
    let stored = repository.current();
    assert_eq!(stored.profile_id.0, "cv-000102");
    assert!(stored.latest_matches.is_none());
}

#[test]
fn repository_update_rejects_a_superseded_profile_id() {
    use crate::matching::repository::{ProfileRepository, RepositoryError};

    let repository = MemoryRepository::default();
    let active = repository
        .replace_active(stored_record("cv-000201", devops_profile()))
        .expect("record stored");

    let error = repository
        .update(stored_record("cv-000200", web3_profile()))
        .expect_err("stale id rejected");
    assert_eq!(error, RepositoryError::NotFound);

    let stored = repository.stored().expect("record kept");
    assert_eq!(stored.profile_id, active.profile_id);
}

#[test]
fn rank_policy_filter_applies_to_discovery() {
    let (service, _) = build_service();
    service.analyze(SENIOR_DEVOPS_RESUME).expect("analyze succeeds");

    let strict = RankPolicy {
        min_score: 0.99,
        top_n: None,
    };
    let outcome = service
        .discover(vec![platform_posting(), junior_sales_posting()], &strict)
        .expect("discovery succeeds");

    assert!(outcome.ranked.is_empty());
    assert_eq!(outcome.market.total_postings, 0);
}
