use axum::{
    extract::{rejection::QueryRejection, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::library::{all_poses, category_counts, pose, search, PoseFilter};

/// Stateless router over the static pose library.
pub fn yoga_router() -> Router {
    Router::new()
        .route("/api/yoga/poses", get(poses_handler))
        .route("/api/yoga/poses/:pose_id", get(pose_handler))
}

pub(crate) async fn poses_handler(filter: Result<Query<PoseFilter>, QueryRejection>) -> Response {
    let Query(filter) = match filter {
        Ok(filter) => filter,
        Err(rejection) => {
            let payload = json!({
                "error": "Validation error",
                "message": rejection.body_text(),
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let poses = search(&filter);
    let payload = json!({
        "success": true,
        "data": {
            "count": poses.len(),
            "total_poses": all_poses().len(),
            "poses": poses,
            "categories": category_counts(),
        },
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn pose_handler(Path(pose_id): Path<String>) -> Response {
    match pose(&pose_id) {
        Some(pose) => {
            let payload = json!({
                "success": true,
                "data": pose,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        None => {
            let payload = json!({
                "error": "Not found",
                "message": "Yoga pose not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
