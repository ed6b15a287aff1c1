use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AnswerMap, AssessmentId, AssessmentRequest};
use super::repository::{AssessmentRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};
use crate::knowledge::texts::{classical_texts, methodology, TEXTS_NOTE};
use crate::knowledge::Dosha;

/// Router builder exposing the questionnaire, scoring, and history endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/dosha/assess", post(assess_handler::<R>))
        .route("/api/dosha/questions", get(questions_handler::<R>))
        .route("/api/dosha/subtypes/:dosha", get(subtypes_handler::<R>))
        .route("/api/dosha/history/:user_id", get(history_handler::<R>))
        .route(
            "/api/dosha/assessment/:assessment_id",
            get(assessment_handler::<R>),
        )
        .route("/api/dosha/quick-assess", post(quick_assess_handler::<R>))
        .route("/api/dosha/classical-texts", get(classical_texts_handler))
        .route("/api/dosha/methodology", get(methodology_handler))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuickAssessRequest {
    #[serde(default)]
    answers: AnswerMap,
}

fn rejection_response(rejection: JsonRejection) -> Response {
    let payload = json!({
        "error": "Validation error",
        "details": [rejection.body_text()],
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn internal_error(error: &str, message: &str) -> Response {
    let payload = json!({
        "error": error,
        "message": message,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}

pub(crate) async fn assess_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    request: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.assess(request) {
        Ok(record) => {
            let payload = json!({
                "success": true,
                "message": "Assessment completed successfully",
                "data": record.summary(),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Incomplete { missing }) => {
            let payload = json!({
                "error": "Incomplete assessment",
                "message": "Please answer all required questions",
                "missing_questions": missing,
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(error) if error.is_validation() => {
            let payload = json!({
                "error": "Validation error",
                "message": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(_) => internal_error(
            "Assessment failed",
            "An error occurred during the assessment process",
        ),
    }
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let bank = service.bank();
    let grouped = bank.by_category();
    let categories: Vec<&str> = grouped.keys().map(|category| category.key()).collect();
    let questions: serde_json::Map<String, serde_json::Value> = grouped
        .into_iter()
        .map(|(category, listed)| (category.key().to_string(), json!(listed)))
        .collect();

    let payload = json!({
        "success": true,
        "data": {
            "questions": questions,
            "total_questions": bank.len(),
            "categories": categories,
        },
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn subtypes_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(dosha): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let dosha = match dosha.parse::<Dosha>() {
        Ok(dosha) => dosha,
        Err(_) => {
            let payload = json!({
                "error": "Invalid dosha type",
                "message": "Dosha must be vata, pitta, or kapha",
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let subtypes = service.subtypes(dosha);
    let payload = json!({
        "success": true,
        "data": {
            "dosha": dosha,
            "count": subtypes.len(),
            "subtypes": subtypes,
        },
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.history(&user_id) {
        Ok(history) => {
            let payload = json!({
                "success": true,
                "data": {
                    "user_id": user_id,
                    "count": history.len(),
                    "assessments": history,
                },
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(AssessmentServiceError::MissingUserId) => {
            let payload = json!({
                "error": "User ID required",
                "message": "Please provide a valid user ID",
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(_) => internal_error(
            "Failed to fetch history",
            "An error occurred while retrieving assessment history",
        ),
    }
}

pub(crate) async fn assessment_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.get(&id) {
        Ok(record) => {
            let payload = json!({
                "success": true,
                "data": record,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "Assessment not found",
                "message": "No assessment found with the provided ID",
                "assessment_id": id.0,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(_) => internal_error(
            "Failed to fetch assessment",
            "An error occurred while retrieving the assessment",
        ),
    }
}

pub(crate) async fn quick_assess_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    request: Result<Json<QuickAssessRequest>, JsonRejection>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.quick_assess(&request.answers) {
        Ok(result) => {
            let payload = json!({
                "success": true,
                "message": "Quick assessment completed",
                "data": result,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(AssessmentServiceError::MissingAnswers) => {
            let payload = json!({
                "error": "Answers required",
                "message": "Please provide assessment answers",
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(_) => internal_error(
            "Quick assessment failed",
            "An error occurred during the quick assessment",
        ),
    }
}

pub(crate) async fn classical_texts_handler() -> Response {
    let texts = classical_texts();
    let payload = json!({
        "success": true,
        "data": {
            "texts": texts,
            "count": texts.len(),
            "note": TEXTS_NOTE,
        },
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn methodology_handler() -> Response {
    let payload = json!({
        "success": true,
        "data": methodology(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}
