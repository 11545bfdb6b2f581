//! Catalog API integration tests

mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[tokio::test]
async fn test_health() {
    let server = test_server();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Education server is running smoothly");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_and_fetch_course() {
    let server = test_server();

    let response = server
        .post("/api/v1/courses")
        .json(&json!({"title": "Rust 101", "price": 49}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["result"]["acknowledged"], true);
    let id = body["result"]["insertedId"].as_str().unwrap().to_string();

    let response = server.get(&format!("/api/v1/courses/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let course: Value = response.json();
    assert_eq!(course, json!({"_id": id, "title": "Rust 101", "price": 49}));

    let response = server.get("/api/v1/courses").await;
    let courses: Vec<Value> = response.json();
    assert_eq!(courses.len(), 1);
}

#[tokio::test]
async fn test_get_course_bad_and_missing_id() {
    let server = test_server();

    let response = server.get("/api/v1/courses/not-an-id").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server
        .get(&format!("/api/v1/courses/{}", uuid::Uuid::new_v4()))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Course not found");
}

#[tokio::test]
async fn test_collections_are_isolated() {
    let server = test_server();

    server.post("/api/v1/reviews").json(&json!({"rating": 5})).await;
    server.post("/api/v1/instructors").json(&json!({"name": "Grace"})).await;

    let reviews: Vec<Value> = server.get("/api/v1/reviews").await.json();
    let instructors: Vec<Value> = server.get("/api/v1/instructors").await.json();
    let books: Vec<Value> = server.get("/api/v1/books").await.json();

    assert_eq!(reviews.len(), 1);
    assert_eq!(instructors.len(), 1);
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_update_and_delete_instructor() {
    let server = test_server();

    let body: Value = server
        .post("/api/v1/instructors")
        .json(&json!({"name": "Grace", "subject": "COBOL"}))
        .await
        .json();
    let id = body["result"]["insertedId"].as_str().unwrap().to_string();
    let path = format!("/api/v1/instructors/{}", id);

    let response = server.put(&path).json(&json!({"subject": "Compilers"})).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["name"], "Grace");
    assert_eq!(updated["subject"], "Compilers");

    let response = server.delete(&path).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"success": true, "message": "Instructor deleted successfully"})
    );

    let response = server.delete(&path).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Instructor not found");
}

#[tokio::test]
async fn test_non_object_body_rejected() {
    let server = test_server();

    let response = server.post("/api/v1/courses").json(&json!([1, 2, 3])).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route() {
    let server = test_server();

    let response = server.get("/api/v1/nothing-here").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
