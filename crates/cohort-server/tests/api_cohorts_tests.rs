//! Integration tests for cohort API endpoints

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

mod helpers;
use helpers::{setup_test_app, setup_test_db, test_app};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

fn valid_cohort() -> Value {
    json!({
        "cohortSlug": "ft-wd-madrid-2026-01",
        "cohortName": "FT Web Dev Madrid 2026 01",
        "program": "Web Dev",
        "format": "Full Time",
        "campus": "Madrid",
        "programManager": "Sara Ruiz",
        "leadTeacher": "Pedro Costa"
    })
}

#[tokio::test]
async fn test_docs_page_is_served() {
    let response = test_app()
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_static_cohorts_fixture() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/cohorts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json.is_array());
    assert!(!json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_cohort_missing_required_field() {
    let mut cohort = valid_cohort();
    cohort.as_object_mut().unwrap().remove("programManager");

    let response = test_app()
        .oneshot(post_json("/api/cohorts", &cohort))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("programManager"));
}

#[tokio::test]
async fn test_create_cohort_invalid_program() {
    let mut cohort = valid_cohort();
    cohort["program"] = json!("InvalidProgram");

    let response = test_app()
        .oneshot(post_json("/api/cohorts", &cohort))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("program"));
}

#[tokio::test]
async fn test_get_cohort_malformed_id() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/cohorts/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("not-a-uuid"));
}

#[tokio::test]
#[ignore] // Requires a running PostgreSQL
async fn test_cohort_round_trip_applies_defaults() {
    let pool = setup_test_db().await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(post_json("/api/cohorts", &valid_cohort()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;

    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["inProgress"], json!(false));
    assert_eq!(created["totalHours"], json!(360));
    assert!(created["startDate"].is_string());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/cohorts/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;

    assert_eq!(fetched["id"], json!(id));
    assert_eq!(fetched["cohortName"], created["cohortName"]);
    assert_eq!(fetched["totalHours"], json!(360));
}

#[tokio::test]
#[ignore] // Requires a running PostgreSQL
async fn test_get_cohort_not_found() {
    let pool = setup_test_db().await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/cohorts/{}", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
#[ignore] // Requires a running PostgreSQL
async fn test_update_cohort_merges_fields() {
    let pool = setup_test_db().await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(post_json("/api/cohorts", &valid_cohort()))
        .await
        .unwrap();
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/cohorts/{}", id))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({"inProgress": true})).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["inProgress"], json!(true));
    // Untouched fields survive the merge
    assert_eq!(updated["cohortName"], created["cohortName"]);
}

#[tokio::test]
#[ignore] // Requires a running PostgreSQL
async fn test_delete_cohort_returns_removed_document() {
    let pool = setup_test_db().await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(post_json("/api/cohorts", &valid_cohort()))
        .await
        .unwrap();
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/cohorts/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let removed = body_json(response).await;
    assert_eq!(removed["id"], json!(id));

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/cohorts/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
