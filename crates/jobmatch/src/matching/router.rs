use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::generator::RandomSource;
use super::market::MarketSummary;
use super::posting::JobPosting;
use super::ranking::RankPolicy;
use super::repository::ProfileRepository;
use super::service::{MatchService, MatchServiceError};

/// Router builder exposing HTTP endpoints for resume analysis and matching.
pub fn matching_router<R, S>(service: Arc<MatchService<R, S>>) -> Router
where
    R: ProfileRepository + 'static,
    S: RandomSource + 'static,
{
    Router::new()
        .route("/api/v1/cv", post(analyze_handler::<R, S>))
        .route("/api/v1/cv", get(profile_handler::<R, S>))
        .route("/api/v1/matches", post(discover_handler::<R, S>))
        .route("/api/v1/matches", get(matches_handler::<R, S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    pub(crate) text: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DiscoverRequest {
    /// Postings to score; an empty list triggers demo fabrication.
    #[serde(default)]
    pub(crate) postings: Vec<JobPosting>,
    #[serde(default)]
    pub(crate) min_score: Option<f64>,
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
}

impl DiscoverRequest {
    fn policy(&self, defaults: RankPolicy) -> RankPolicy {
        RankPolicy {
            min_score: self.min_score.unwrap_or(defaults.min_score),
            top_n: self.top_n.or(defaults.top_n),
        }
    }
}

pub(crate) async fn analyze_handler<R, S>(
    State(service): State<Arc<MatchService<R, S>>>,
    axum::Json(request): axum::Json<AnalyzeRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
    S: RandomSource + 'static,
{
    match service.analyze(&request.text) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.profile_view())).into_response(),
        Err(MatchServiceError::Extraction(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn profile_handler<R, S>(
    State(service): State<Arc<MatchService<R, S>>>,
) -> Response
where
    R: ProfileRepository + 'static,
    S: RandomSource + 'static,
{
    match service.active_profile() {
        Ok(record) => (StatusCode::OK, axum::Json(record.profile_view())).into_response(),
        Err(MatchServiceError::NoActiveProfile) => {
            let payload = json!({ "error": "no active profile; upload a resume first" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn discover_handler<R, S>(
    State(service): State<Arc<MatchService<R, S>>>,
    axum::Json(request): axum::Json<DiscoverRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
    S: RandomSource + 'static,
{
    let policy = request.policy(service.default_policy());
    match service.discover(request.postings, &policy) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(MatchServiceError::NoActiveProfile) => {
            let payload = json!({ "error": "no active profile; upload a resume first" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn matches_handler<R, S>(
    State(service): State<Arc<MatchService<R, S>>>,
) -> Response
where
    R: ProfileRepository + 'static,
    S: RandomSource + 'static,
{
    match service.active_profile() {
        Ok(record) => {
            let matches = record.latest_matches.unwrap_or_default();
            let market = MarketSummary::from_ranked(&matches);
            let payload = json!({
                "profile_id": record.profile_id,
                "matches": matches,
                "market": market,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(MatchServiceError::NoActiveProfile) => {
            let payload = json!({ "error": "no active profile; upload a resume first" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
