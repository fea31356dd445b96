use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::matching::generator::StdRandom;
use crate::matching::router::{
    analyze_handler, discover_handler, matches_handler, profile_handler, AnalyzeRequest,
    DiscoverRequest,
};

#[tokio::test]
async fn analyze_handler_returns_created_profile() {
    let (service, _) = build_service();

    let response = analyze_handler::<MemoryRepository, StdRandom>(
        State(service),
        axum::Json(AnalyzeRequest {
            text: SENIOR_DEVOPS_RESUME.to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["primary_industry"], "devops_cloud");
    assert!(body["profile_id"].as_str().expect("id string").starts_with("cv-"));
}

#[tokio::test]
async fn analyze_handler_rejects_short_resume() {
    let (service, _) = build_service();

    let response = analyze_handler::<MemoryRepository, StdRandom>(
        State(service),
        axum::Json(AnalyzeRequest {
            text: "too short".to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"].as_str().expect("error string").contains("too short"));
}

#[tokio::test]
async fn profile_handler_reports_missing_profile() {
    let (service, _) = build_service();

    let response = profile_handler::<MemoryRepository, StdRandom>(State(service))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn discover_handler_scores_supplied_postings() {
    let (service, _) = build_service();
    service.analyze(SENIOR_DEVOPS_RESUME).expect("analyze succeeds");

    let response = discover_handler::<MemoryRepository, StdRandom>(
        State(service),
        axum::Json(DiscoverRequest {
            postings: vec![platform_posting(), junior_sales_posting()],
            min_score: Some(0.0),
            top_n: None,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["fabricated"], false);
    assert_eq!(body["ranked"].as_array().expect("ranked array").len(), 2);
}

#[tokio::test]
async fn matches_handler_requires_a_profile() {
    let (service, _) = build_service();

    let response = matches_handler::<MemoryRepository, StdRandom>(State(service)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn analyze_route_accepts_json_payloads() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/cv")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&json!({ "text": SENIOR_DEVOPS_RESUME })).expect("json"),
                ))
                .expect("request"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn matches_route_returns_latest_run() {
    let (service, _) = build_service();
    service.analyze(SENIOR_DEVOPS_RESUME).expect("analyze succeeds");
    service
        .discover(
            vec![platform_posting()],
            &crate::matching::ranking::RankPolicy {
                min_score: 0.0,
                top_n: None,
            },
        )
        .expect("discovery succeeds");
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/matches")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["matches"].as_array().expect("matches array").len(), 1);
    assert_eq!(body["market"]["total_postings"], 1);
}

#[tokio::test]
async fn malformed_posting_fields_coerce_instead_of_failing() {
    let (service, _) = build_service();
    service.analyze(SENIOR_DEVOPS_RESUME).expect("analyze succeeds");
    let router = router_with_service(service);

    let payload = json!({
        "postings": [{
            "title": "Platform Engineer",
            "company": 42,
            "location": null,
            "description": "Kubernetes and Docker work on AWS."
        }],
        "min_score": 0.0
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/matches")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&payload).expect("json"),
                ))
                .expect("request"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let ranked = body["ranked"].as_array().expect("ranked array");
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0]["posting"]["company"], serde_json::Value::Null);
}
