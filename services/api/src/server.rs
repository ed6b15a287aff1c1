use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, InMemoryAssessmentRepository};
use crate::routes::with_ayurmind_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ayurmind::assessment::AssessmentService;
use ayurmind::config::AppConfig;
use ayurmind::error::AppError;
use ayurmind::telemetry;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
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
    if let Some(path) = args.diseases_csv.take() {
        config.data.diseases_csv = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        environment: config.environment,
        health_check_secret: config.security.health_check_secret.clone(),
        started_at: Utc::now(),
    };

    let assessments = Arc::new(AssessmentService::new(Arc::new(
        InMemoryAssessmentRepository::default(),
    )));
    let catalog = Arc::new(load_catalog(config.data.diseases_csv.as_deref())?);

    let app = with_ayurmind_routes(assessments, catalog)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(environment = config.environment.label(), %addr, "ayurmind api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
