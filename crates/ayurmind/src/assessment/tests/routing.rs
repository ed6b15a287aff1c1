use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::assessment::router::{assess_handler, assessment_handler};
use crate::assessment::AssessmentService;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

#[tokio::test]
async fn assess_route_returns_results() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/dosha/assess",
            json!({ "answers": vata_pitta_answers(), "user_id": "user-5" }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"]["results"]["prakriti"]["constitution"],
        "Vata-Pitta"
    );
    assert_eq!(body["data"]["results"]["prakriti"]["primary_dosha"], "vata");
    assert_eq!(body["data"]["confidence_score"], 60.0);
    assert!(body["data"]["assessment_id"]
        .as_str()
        .expect("id string")
        .starts_with("asm-"));
}

#[tokio::test]
async fn assess_route_lists_missing_questions() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/dosha/assess",
            json!({ "answers": { "body_frame": "vata" } }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "Incomplete assessment");
    assert_eq!(body["missing_questions"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn assess_route_rejects_malformed_body() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json("/api/dosha/assess", json!({ "photos": [] })))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "Validation error");
}

#[tokio::test]
async fn assess_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(AssessmentService::new(Arc::new(UnavailableRepository)));

    let response = assess_handler::<UnavailableRepository>(
        State(service),
        Ok(axum::Json(request_for("user-1", vata_pitta_answers()))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "Assessment failed");
}

#[tokio::test]
async fn questions_route_groups_by_category() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(get("/api/dosha/questions"))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["data"]["total_questions"], 5);
    assert_eq!(
        body["data"]["categories"],
        json!(["physical", "physiological", "mental", "lifestyle"])
    );
    assert_eq!(body["data"]["questions"]["physical"][0]["id"], "body_frame");
    let grouped = &body["data"]["questions"];
    assert_eq!(grouped["physical"].as_array().map(Vec::len), Some(2));
    assert_eq!(grouped.as_object().map(|map| map.len()), Some(4));
    assert_eq!(
        body["data"]["questions"]["physical"][0]["options"][0]["value"],
        "vata"
    );
}

#[tokio::test]
async fn subtypes_route_validates_dosha() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let ok = router
        .clone()
        .oneshot(get("/api/dosha/subtypes/Kapha"))
        .await
        .expect("route responds");
    assert_eq!(ok.status(), StatusCode::OK);
    let body = read_json_body(ok).await;
    assert_eq!(body["data"]["dosha"], "kapha");
    assert_eq!(body["data"]["count"], 5);
    assert_eq!(body["data"]["subtypes"][0]["subtype"], "avalambaka_kapha");

    let bad = router
        .oneshot(get("/api/dosha/subtypes/rakta"))
        .await
        .expect("route responds");
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(bad).await;
    assert_eq!(body["error"], "Invalid dosha type");
}

#[tokio::test]
async fn assessment_route_returns_not_found_for_unknown_id() {
    let (service, _) = build_service();
    let response = assessment_handler::<MemoryRepository>(
        State(Arc::new(service)),
        Path("asm-424242".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["assessment_id"], "asm-424242");
}

#[tokio::test]
async fn stored_assessment_is_retrievable_and_listed_in_history() {
    let (service, _) = build_service();
    let record = service
        .assess(request_for("user-h", kapha_answers()))
        .expect("assessment succeeds");
    let router = router_with_service(service);

    let fetched = router
        .clone()
        .oneshot(get(&format!("/api/dosha/assessment/{}", record.id)))
        .await
        .expect("route responds");
    assert_eq!(fetched.status(), StatusCode::OK);
    let body = read_json_body(fetched).await;
    assert_eq!(body["data"]["id"], record.id.0.as_str());
    assert_eq!(
        body["data"]["answers"]["physical"]["body_frame"]["answer"],
        "Solid, broad, stocky, heavy-boned"
    );

    let history = router
        .oneshot(get("/api/dosha/history/user-h"))
        .await
        .expect("route responds");
    assert_eq!(history.status(), StatusCode::OK);
    let body = read_json_body(history).await;
    assert_eq!(body["data"]["count"], 1);
    assert_eq!(
        body["data"]["assessments"][0]["prakriti"]["constitution"],
        "Kapha-Pitta"
    );
}

#[tokio::test]
async fn quick_assess_route_tags_result() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/dosha/quick-assess",
            json!({ "answers": { "sleep_pattern": "kapha" } }),
        ))
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["data"]["assessment_type"], "quick");
    assert_eq!(body["data"]["primary_dosha"], "kapha");

    let empty = router
        .oneshot(post_json("/api/dosha/quick-assess", json!({ "answers": {} })))
        .await
        .expect("route responds");
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(empty).await;
    assert_eq!(body["error"], "Answers required");
}

#[tokio::test]
async fn reference_routes_serve_static_content() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let texts = router
        .clone()
        .oneshot(get("/api/dosha/classical-texts"))
        .await
        .expect("route responds");
    let body = read_json_body(texts).await;
    assert_eq!(body["data"]["count"], 5);
    assert_eq!(body["data"]["texts"][0]["name"], "Charaka Samhita");

    let methodology = router
        .oneshot(get("/api/dosha/methodology"))
        .await
        .expect("route responds");
    let body = read_json_body(methodology).await;
    assert_eq!(body["data"]["components"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["data"]["assessment_types"][1]["type"], "quick");
}
