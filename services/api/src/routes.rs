use crate::infra::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use ayurmind::assessment::{assessment_router, AssessmentRepository, AssessmentService};
use ayurmind::diseases::{disease_router, DiseaseCatalog, DiseaseRepository};
use ayurmind::yoga::yoga_router;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub(crate) const HEALTH_SECRET_HEADER: &str = "health-secret";

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StatusQuery {
    #[serde(default)]
    secret: Option<String>,
}

pub(crate) fn with_ayurmind_routes<A, D>(
    assessments: Arc<AssessmentService<A>>,
    catalog: Arc<DiseaseCatalog<D>>,
) -> Router
where
    A: AssessmentRepository + 'static,
    D: DiseaseRepository + 'static,
{
    assessment_router(assessments)
        .merge(disease_router(catalog))
        .merge(yoga_router())
        .route("/health", get(healthcheck))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/status", get(status_endpoint))
        .route("/api/status/ready", get(readiness_endpoint))
        .route("/api/status/live", get(liveness_endpoint))
}

pub(crate) async fn healthcheck(Extension(state): Extension<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "environment": state.environment.label(),
    }))
}

pub(crate) async fn status_endpoint(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> Response {
    // A malformed query string counts as no secret supplied.
    let query = query.map(|Query(query)| query).unwrap_or_default();
    let provided = headers
        .get(HEALTH_SECRET_HEADER)
        .and_then(|value| value.to_str().ok())
        .or(query.secret.as_deref());

    if !state.status_authorised(provided) {
        let payload = json!({
            "error": "Unauthorized",
            "message": "Invalid health check secret",
        });
        return (StatusCode::FORBIDDEN, Json(payload)).into_response();
    }

    let now = Utc::now();
    let payload = json!({
        "status": "OK",
        "timestamp": now,
        "uptime_seconds": state.uptime_seconds(now),
        "environment": state.environment.label(),
        "version": env!("CARGO_PKG_VERSION"),
        "ready": state.readiness.load(Ordering::Relaxed),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(json!({ "ready": ready, "timestamp": Utc::now() })))
}

pub(crate) async fn liveness_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "alive": true, "timestamp": Utc::now() }))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
