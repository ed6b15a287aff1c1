use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::DiseaseId;
use super::query::DiseaseQuery;
use super::repository::{DiseaseRepository, RepositoryError};
use super::service::DiseaseCatalog;

pub fn disease_router<R>(catalog: Arc<DiseaseCatalog<R>>) -> Router
where
    R: DiseaseRepository + 'static,
{
    Router::new()
        .route("/api/diseases", get(list_handler::<R>))
        .route("/api/diseases/stats/overview", get(stats_handler::<R>))
        .route("/api/diseases/:disease_id", get(disease_handler::<R>))
        .with_state(catalog)
}

fn server_error(error: RepositoryError, message: &str) -> Response {
    warn!(%error, "disease catalog request failed");
    let payload = json!({
        "error": "Server error",
        "message": message,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}

fn query_rejection(rejection: QueryRejection) -> Response {
    let payload = json!({
        "error": "Validation error",
        "message": rejection.body_text(),
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

pub(crate) async fn list_handler<R>(
    State(catalog): State<Arc<DiseaseCatalog<R>>>,
    query: Result<Query<DiseaseQuery>, QueryRejection>,
) -> Response
where
    R: DiseaseRepository + 'static,
{
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection(rejection),
    };

    match catalog.list(&query) {
        Ok(page) => {
            let payload = json!({
                "success": true,
                "diseases": page.diseases,
                "pagination": page.pagination,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => server_error(error, "Failed to fetch diseases"),
    }
}

pub(crate) async fn disease_handler<R>(
    State(catalog): State<Arc<DiseaseCatalog<R>>>,
    Path(disease_id): Path<String>,
) -> Response
where
    R: DiseaseRepository + 'static,
{
    match catalog.get(&DiseaseId(disease_id)) {
        Ok(disease) => {
            let payload = json!({
                "success": true,
                "disease": disease,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(RepositoryError::NotFound) => {
            let payload = json!({
                "error": "Not found",
                "message": "Disease not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(error) => server_error(error, "Failed to fetch disease"),
    }
}

pub(crate) async fn stats_handler<R>(State(catalog): State<Arc<DiseaseCatalog<R>>>) -> Response
where
    R: DiseaseRepository + 'static,
{
    match catalog.stats() {
        Ok(stats) => {
            let payload = json!({
                "success": true,
                "stats": stats,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => server_error(error, "Failed to fetch statistics"),
    }
}
