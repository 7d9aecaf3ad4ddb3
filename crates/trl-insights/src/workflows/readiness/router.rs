use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::charts::ChartDatasets;
use super::report::{CohortInsightsView, OverviewMetrics, ProjectDetailView, ProjectSummaryView};
use super::repository::{Materialization, SnapshotSource};
use super::service::{ReadinessError, ReadinessService};
use crate::error::AppError;

/// Router exposing the dashboard data endpoints.
pub fn readiness_router<S>(service: Arc<ReadinessService<S>>) -> Router
where
    S: SnapshotSource + 'static,
{
    Router::new()
        .route("/api/v1/snapshot/refresh", post(refresh_handler::<S>))
        .route("/api/v1/overview", get(overview_handler::<S>))
        .route("/api/v1/charts", get(charts_handler::<S>))
        .route("/api/v1/projects", get(projects_handler::<S>))
        .route("/api/v1/projects/search", post(search_handler::<S>))
        .route("/api/v1/projects/:name/report", get(report_handler::<S>))
        .route("/api/v1/insights", get(insights_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    pub message: String,
    #[serde(flatten)]
    pub materialization: Materialization,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectList<T> {
    pub projects: Vec<T>,
}

pub(crate) async fn refresh_handler<S>(
    State(service): State<Arc<ReadinessService<S>>>,
) -> Result<Json<RefreshResponse>, AppError>
where
    S: SnapshotSource + 'static,
{
    let materialization = service.refresh().await?;
    Ok(Json(RefreshResponse {
        message: format!("Snapshot ready ({} records)", materialization.records()),
        materialization,
    }))
}

pub(crate) async fn overview_handler<S>(
    State(service): State<Arc<ReadinessService<S>>>,
) -> Result<Json<OverviewMetrics>, AppError>
where
    S: SnapshotSource + 'static,
{
    Ok(Json(run_blocking(service, |service| service.overview()).await?))
}

pub(crate) async fn charts_handler<S>(
    State(service): State<Arc<ReadinessService<S>>>,
) -> Result<Json<ChartDatasets>, AppError>
where
    S: SnapshotSource + 'static,
{
    Ok(Json(run_blocking(service, |service| service.charts()).await?))
}

pub(crate) async fn projects_handler<S>(
    State(service): State<Arc<ReadinessService<S>>>,
) -> Result<Json<ProjectList<ProjectSummaryView>>, AppError>
where
    S: SnapshotSource + 'static,
{
    let projects = run_blocking(service, |service| service.projects()).await?;
    Ok(Json(ProjectList { projects }))
}

pub(crate) async fn search_handler<S>(
    State(service): State<Arc<ReadinessService<S>>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<ProjectList<ProjectDetailView>>, AppError>
where
    S: SnapshotSource + 'static,
{
    let projects = run_blocking(service, move |service| service.search(&request.name)).await?;
    Ok(Json(ProjectList { projects }))
}

pub(crate) async fn report_handler<S>(
    State(service): State<Arc<ReadinessService<S>>>,
    Path(name): Path<String>,
) -> Result<Json<ProjectDetailView>, AppError>
where
    S: SnapshotSource + 'static,
{
    Ok(Json(
        run_blocking(service, move |service| service.project_detail(&name)).await?,
    ))
}

pub(crate) async fn insights_handler<S>(
    State(service): State<Arc<ReadinessService<S>>>,
) -> Result<Json<CohortInsightsView>, AppError>
where
    S: SnapshotSource + 'static,
{
    Ok(Json(
        run_blocking(service, |service| service.cohort_insights()).await?,
    ))
}

/// Every query re-reads and parses both CSV files, so it runs on the
/// blocking pool.
async fn run_blocking<S, T, F>(service: Arc<ReadinessService<S>>, query: F) -> Result<T, AppError>
where
    S: SnapshotSource + 'static,
    T: Send + 'static,
    F: FnOnce(&ReadinessService<S>) -> Result<T, ReadinessError> + Send + 'static,
{
    let outcome = tokio::task::spawn_blocking(move || query(&service))
        .await
        .map_err(|err| AppError::Server(axum::Error::new(err)))?;
    Ok(outcome?)
}
