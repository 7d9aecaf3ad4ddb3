use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use trl_insights::workflows::readiness::{readiness_router, ReadinessService, SnapshotSource};

pub(crate) fn with_readiness_routes<S>(service: Arc<ReadinessService<S>>) -> axum::Router
where
    S: SnapshotSource + 'static,
{
    readiness_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;
    use trl_insights::workflows::readiness::{FormApiSource, SnapshotStore};
    use trl_insights::config::FormApiConfig;

    fn state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    fn app(state: AppState) -> axum::Router {
        let service = ReadinessService::new(
            SnapshotStore::new("does-not-exist.csv"),
            FormApiSource::new(FormApiConfig {
                url: None,
                username: None,
                password: None,
                page_size: 100,
            }),
            "does-not-exist-rubric.csv",
        );
        with_readiness_routes(Arc::new(service)).layer(Extension(state))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).expect("request builds")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app(state(true))
            .oneshot(get("/health"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn ready_tracks_the_startup_flag() {
        let state = state(false);
        let flag = state.readiness.clone();
        let router = app(state);

        let response = router
            .clone()
            .oneshot(get("/ready"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        flag.store(true, Ordering::Release);
        let response = router.oneshot(get("/ready")).await.expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_render_as_prometheus_text() {
        let response = app(state(true))
            .oneshot(get("/metrics"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }

    #[tokio::test]
    async fn readiness_routes_are_mounted() {
        let response = app(state(true))
            .oneshot(get("/api/v1/overview"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("read body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
        assert!(payload["error"]
            .as_str()
            .unwrap_or_default()
            .contains("survey snapshot not found"));
    }
}
