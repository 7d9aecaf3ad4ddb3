use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::readiness::router::{overview_handler, refresh_handler};

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

fn post_json(uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn overview_route_returns_metrics() {
    let fixture = seeded();

    let response = fixture
        .router()
        .oneshot(get("/api/v1/overview"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["forms"], 4);
    assert_eq!(payload["approved"], 1);
}

#[tokio::test]
async fn projects_route_lists_summaries() {
    let fixture = seeded();

    let response = fixture
        .router()
        .oneshot(get("/api/v1/projects"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let projects = payload["projects"].as_array().expect("projects array");
    assert_eq!(projects.len(), 4);
    assert_eq!(projects[0]["segment_label"], "TRL 4-7");
    assert_eq!(projects[2]["approved"], true);
}

#[tokio::test]
async fn search_route_returns_matches_or_not_found() {
    let fixture = seeded();
    let router = fixture.router();

    let response = router
        .clone()
        .oneshot(post_json("/api/v1/projects/search", json!({ "name": "kiln" })))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["projects"][0]["name"], "Solar Kiln");

    let response = router
        .oneshot(post_json("/api/v1/projects/search", json!({ "name": "ghost" })))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "no project matches 'ghost'");
}

#[tokio::test]
async fn report_route_decodes_project_name() {
    let fixture = seeded();

    let response = fixture
        .router()
        .oneshot(get("/api/v1/projects/Market%20Platform/report"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["name"], "Market Platform");
    assert_eq!(payload["segment_label"], "TRL 8-9");
    assert!(payload["generated_at"].is_string());
    assert_eq!(
        payload["insights"][0],
        "Ready for implementation: high market readiness"
    );
}

#[tokio::test]
async fn insights_and_charts_routes_serialize() {
    let fixture = seeded();
    let router = fixture.router();

    let response = router
        .clone()
        .oneshot(get("/api/v1/insights"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["approval_pct"], 25.0);
    assert_eq!(payload["insights"][0], "1 of 4 projects are approved (25.0%)");

    let response = router
        .oneshot(get("/api/v1/charts"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["early_score_histogram"].as_array().map(Vec::len),
        Some(20)
    );
    assert_eq!(payload["segment_distribution"][0]["label"], "TRL 8-9");
}

#[tokio::test]
async fn missing_snapshot_column_is_bad_request() {
    let fixture = Fixture::new()
        .with_snapshot("1,15\nSolar Dryer,Si\n")
        .with_rubric(RUBRIC_CSV);

    let response = fixture
        .router()
        .oneshot(get("/api/v1/overview"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn overview_handler_reports_missing_snapshot() {
    let fixture = Fixture::new().with_rubric(RUBRIC_CSV);
    let service = Arc::new(fixture.service(UnreachableSource));

    let response = overview_handler(State(service)).await.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn refresh_handler_reports_materialized_records() {
    let fixture = Fixture::new().with_rubric(RUBRIC_CSV);
    let service = Arc::new(fixture.service(FixedSource::new(SNAPSHOT_CSV)));

    let response = refresh_handler(State(service)).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "Snapshot ready (4 records)");
    assert_eq!(payload["outcome"], "fetched");
    assert_eq!(payload["records"], 4);
}

#[tokio::test]
async fn refresh_route_surfaces_upstream_errors() {
    let fixture = Fixture::new().with_rubric(RUBRIC_CSV);

    let response = fixture
        .router()
        .oneshot(
            Request::post("/api/v1/snapshot/refresh")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["error"],
        "form API responded with HTTP 502: bad gateway"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_reads_share_one_router() {
    let fixture = seeded();
    let router = fixture.router();

    let requests: Vec<_> = [
        "/api/v1/overview",
        "/api/v1/charts",
        "/api/v1/insights",
        "/api/v1/projects/solar/report",
    ]
    .into_iter()
    .map(|uri| {
        let router = router.clone();
        tokio::spawn(async move { router.oneshot(get(uri)).await })
    })
    .collect();

    for request in requests {
        let response = request
            .await
            .expect("task joins")
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
