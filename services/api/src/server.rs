use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryProfileRepository};
use crate::routes::with_matching_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use jobmatch::config::AppConfig;
use jobmatch::error::AppError;
use jobmatch::matching::{
    MatchService, PostingGenerator, RankPolicy, ScoringWeights, StdRandom,
};
use jobmatch::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryProfileRepository::default());
    let generator = PostingGenerator::new(StdRandom::from_entropy());
    let match_service = Arc::new(
        MatchService::new(repository, ScoringWeights::default(), generator)
            .with_policy(RankPolicy {
                min_score: config.matching.min_score,
                top_n: None,
            })
            .with_fabrication_limit(config.matching.max_demo_postings),
    );

    let app = with_matching_routes(match_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job matching service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
