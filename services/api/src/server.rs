use crate::cli::ServeArgs;
use crate::infra::{apply_data_overrides, readiness_service, AppState};
use crate::routes::with_readiness_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use trl_insights::config::AppConfig;
use trl_insights::error::AppError;
use trl_insights::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    config.data = apply_data_overrides(config.data, args.data);

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(readiness_service(&config.data));

    let app = with_readiness_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        snapshot = %config.data.snapshot_path.display(),
        rubric = %config.data.rubric_path.display(),
        "trl insights service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
