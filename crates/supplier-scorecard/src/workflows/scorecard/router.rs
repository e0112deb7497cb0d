use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use tokio::task::{self, JoinError};

use super::domain::SupplierId;
use super::repository::{DataSourceError, SupplierDataSource};
use super::service::{ScorecardError, SupplierScorecardService};

#[derive(Debug, Deserialize)]
pub struct PerformanceRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct ComparisonRequest {
    #[serde(default)]
    pub supplier_ids: Vec<SupplierId>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
pub struct TrendQuery {
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Router builder exposing the scorecard endpoints. Hosts merge it once at startup.
pub fn scorecard_router<S>(service: Arc<SupplierScorecardService<S>>) -> Router
where
    S: SupplierDataSource + 'static,
{
    Router::new()
        .route(
            "/api/v1/suppliers/performance",
            post(performance_handler::<S>),
        )
        .route("/api/v1/suppliers/compare", post(compare_handler::<S>))
        .route(
            "/api/v1/suppliers/:supplier_id/trend",
            get(trend_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn performance_handler<S>(
    State(service): State<Arc<SupplierScorecardService<S>>>,
    axum::Json(request): axum::Json<PerformanceRequest>,
) -> Response
where
    S: SupplierDataSource + 'static,
{
    let outcome = task::spawn_blocking(move || {
        service
            .performance_report(request.start_date, request.end_date)
            .map(|report| report.summary_view())
    })
    .await;

    match outcome {
        Ok(Ok(view)) => (StatusCode::OK, axum::Json(view)).into_response(),
        Ok(Err(error)) => error_response(error),
        Err(join_error) => worker_failure_response(join_error),
    }
}

pub(crate) async fn compare_handler<S>(
    State(service): State<Arc<SupplierScorecardService<S>>>,
    axum::Json(request): axum::Json<ComparisonRequest>,
) -> Response
where
    S: SupplierDataSource + 'static,
{
    let outcome = task::spawn_blocking(move || {
        service
            .compare(&request.supplier_ids, request.start_date, request.end_date)
            .map(|comparison| comparison.view())
    })
    .await;

    match outcome {
        Ok(Ok(view)) => (StatusCode::OK, axum::Json(view)).into_response(),
        Ok(Err(error)) => error_response(error),
        Err(join_error) => worker_failure_response(join_error),
    }
}

pub(crate) async fn trend_handler<S>(
    State(service): State<Arc<SupplierScorecardService<S>>>,
    Path(supplier_id): Path<String>,
    Query(query): Query<TrendQuery>,
) -> Response
where
    S: SupplierDataSource + 'static,
{
    let as_of = query
        .as_of
        .unwrap_or_else(|| Local::now().date_naive());
    let outcome =
        task::spawn_blocking(move || service.trend(&SupplierId(supplier_id), as_of)).await;

    match outcome {
        Ok(Ok(trend)) => (StatusCode::OK, axum::Json(trend)).into_response(),
        Ok(Err(error)) => error_response(error),
        Err(join_error) => worker_failure_response(join_error),
    }
}

/// Evaluation runs on the blocking pool; a panicked or cancelled worker becomes a 500.
fn worker_failure_response(join_error: JoinError) -> Response {
    tracing::error!(error = %join_error, "scorecard worker did not complete");
    let payload = json!({
        "error": "scorecard evaluation failed",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}

fn error_response(error: ScorecardError) -> Response {
    let status = match &error {
        ScorecardError::InvalidPeriod(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ScorecardError::DataSource(DataSourceError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        ScorecardError::DataSource(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
