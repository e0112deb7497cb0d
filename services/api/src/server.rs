use crate::cli::ServeArgs;
use crate::infra::{load_source, AppState};
use crate::routes::with_scorecard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use supplier_scorecard::config::AppConfig;
use supplier_scorecard::error::AppError;
use supplier_scorecard::telemetry;
use supplier_scorecard::workflows::scorecard::{EvaluationConfig, SupplierScorecardService};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.ledger.take() {
        config.scorecard.ledger_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let source = Arc::new(load_source(config.scorecard.ledger_path.as_deref())?);
    info!(
        entries = source.len(),
        sample = config.scorecard.ledger_path.is_none(),
        "supplier ledger loaded"
    );
    let scorecard_service = Arc::new(
        SupplierScorecardService::new(source, EvaluationConfig::default())
            .with_trend_window(config.scorecard.trend_window_months),
    );

    let app = with_scorecard_routes(scorecard_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "supplier scorecard service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
