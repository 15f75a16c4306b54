//! Integration tests for Student API endpoints.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::{Database, sqlite::SqliteDatabase};

/// Create a test app with an in-memory database
async fn test_app() -> axum::Router {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    routes::create_router(AppState::new(db))
}

/// Helper to parse JSON response body
async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Helper to POST a student and return the created record
async fn create_student(app: &axum::Router, payload: Value) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/students")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await
}

fn ada() -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.edu",
        "dateOfBirth": "1815-12-10",
        "department": "Mathematics",
        "enrollmentYear": 1833
    })
}

// =============================================================================
// GET /health
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn health_returns_ok() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

// =============================================================================
// POST /api/v1/students
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn create_student_returns_created_record() {
    let app = test_app().await;

    let body = create_student(&app, ada()).await;

    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["firstName"], "Ada");
    assert_eq!(body["lastName"], "Lovelace");
    assert_eq!(body["email"], "ada@example.edu");
    assert_eq!(body["dateOfBirth"], "1815-12-10");
    assert_eq!(body["department"], "Mathematics");
    assert_eq!(body["enrollmentYear"], 1833);
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_student_omits_unset_optional_fields() {
    let app = test_app().await;

    let body = create_student(
        &app,
        json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.edu"
        }),
    )
    .await;

    assert!(body.get("dateOfBirth").is_none());
    assert!(body.get("department").is_none());
    assert!(body.get("enrollmentYear").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_student_missing_first_name_returns_400() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/students")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "lastName": "Lovelace",
                        "email": "ada@example.edu"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["message"], "First name is required");
    assert_eq!(body["path"], "/api/v1/students");
    assert!(body["timestamp"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_student_blank_email_returns_400() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/students")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "firstName": "Ada",
                        "lastName": "Lovelace",
                        "email": "   "
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Email is required");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_student_duplicate_email_returns_409() {
    let app = test_app().await;

    create_student(&app, ada()).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/students")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&ada()).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = json_body(response).await;
    assert_eq!(body["status"], 409);
    assert_eq!(body["error"], "Conflict");
    assert_eq!(body["message"], "Email already in use: ada@example.edu");
}

// =============================================================================
// GET /api/v1/students/{id}
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn get_student_returns_record() {
    let app = test_app().await;

    let created = create_student(&app, ada()).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/students/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_student_missing_returns_404() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/students/9999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "Student not found with id: 9999");
    assert_eq!(body["path"], "/api/v1/students/9999");
}

#[tokio::test(flavor = "multi_thread")]
async fn get_student_non_numeric_id_returns_400() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/students/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// GET /api/v1/students
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn list_students_initially_empty() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/students")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body.as_array().expect("Expected array").len(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_students_returns_all_records() {
    let app = test_app().await;

    create_student(&app, ada()).await;
    create_student(
        &app,
        json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.edu",
            "department": "Computer Science"
        }),
    )
    .await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/students")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = json_body(response).await;
    let students = body.as_array().expect("Expected array");
    assert_eq!(students.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_students_filters_by_department() {
    let app = test_app().await;

    create_student(&app, ada()).await;
    create_student(
        &app,
        json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.edu",
            "department": "Computer Science"
        }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/students?department=Computer%20Science")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = json_body(response).await;
    let students = body.as_array().expect("Expected array");
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["email"], "grace@example.edu");

    // Exact match only
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/students?department=Computer")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body.as_array().expect("Expected array").len(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_students_blank_department_returns_all() {
    let app = test_app().await;

    create_student(&app, ada()).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/students?department=")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body.as_array().expect("Expected array").len(), 1);
}

// =============================================================================
// PUT /api/v1/students/{id}
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn update_student_merges_partial_payload() {
    let app = test_app().await;

    let created = create_student(&app, ada()).await;
    let id = created["id"].as_i64().unwrap();

    // Let the clock advance so updatedAt visibly changes.
    tokio::time::sleep(Duration::from_millis(10)).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/v1/students/{}", id))
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "department": "Computer Science"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["firstName"], "Ada");
    assert_eq!(body["lastName"], "Lovelace");
    assert_eq!(body["email"], "ada@example.edu");
    assert_eq!(body["department"], "Computer Science");
    assert_eq!(body["createdAt"], created["createdAt"]);
    assert_ne!(body["updatedAt"], created["updatedAt"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_student_missing_returns_404() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/v1/students/9999")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "firstName": "Ada" })).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Student not found with id: 9999");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_student_duplicate_email_returns_409() {
    let app = test_app().await;

    create_student(&app, ada()).await;
    let grace = create_student(
        &app,
        json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.edu"
        }),
    )
    .await;

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/v1/students/{}", grace["id"].as_i64().unwrap()))
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "email": "ada@example.edu" })).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = json_body(response).await;
    assert_eq!(body["error"], "Conflict");
    assert_eq!(body["message"], "Email already in use: ada@example.edu");
}

// =============================================================================
// DELETE /api/v1/students/{id}
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn delete_student_returns_204_and_removes_record() {
    let app = test_app().await;

    let created = create_student(&app, ada()).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/students/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/students/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_student_missing_returns_404() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/students/9999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "Student not found with id: 9999");
}
