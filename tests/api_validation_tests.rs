// SPDX-License-Identifier: MIT

//! API input validation tests.
//!
//! The app under test points at an unroutable upstream and an offline
//! store, so any request that passes validation by mistake would surface
//! as a 502/500 rather than the expected 400.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_search_query_too_short() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/search?q=a")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Rejected before any outbound call is made
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_query_missing() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/search")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_anime_detail_rejects_non_integer_id() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/anime/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_watch_entry_negative_episodes_rejected() {
    let app = common::create_test_app();

    let body = serde_json::json!({
        "user_id": "u1",
        "mal_id": 5114,
        "title": "FMA:B",
        "episodes_watched": -1
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/watch")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = common::body_json(response).await;
    assert!(
        json["detail"].as_str().unwrap().contains("episodes_watched"),
        "detail should name the violated field: {}",
        json
    );
}

#[tokio::test]
async fn test_watch_entry_score_out_of_range_rejected() {
    let app = common::create_test_app();

    let body = serde_json::json!({
        "user_id": "u1",
        "mal_id": 5114,
        "title": "FMA:B",
        "score": 10.01
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/watch")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = common::body_json(response).await;
    assert!(json["detail"].as_str().unwrap().contains("score"));
}

#[tokio::test]
async fn test_watch_entry_missing_title_rejected() {
    let app = common::create_test_app();

    let body = serde_json::json!({
        "user_id": "u1",
        "mal_id": 5114
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/watch")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    // Missing required field fails body deserialization
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_rating_score_out_of_range_rejected() {
    let app = common::create_test_app();

    let body = serde_json::json!({
        "user_id": "u1",
        "mal_id": 5114,
        "score": -0.01
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/rate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
