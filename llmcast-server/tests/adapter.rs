//! In-process adapter tests: axum router driven with `oneshot`, inference
//! endpoint mocked with httpmock.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use httpmock::prelude::*;
use llmcast::{CastConfig, Caster};
use serde_json::json;
use tower::ServiceExt;

use llmcast_server::router;

fn app_for(server: &MockServer) -> axum::Router {
    let config = CastConfig::new("test-model").with_host(server.base_url());
    router(Arc::new(Caster::new(config).expect("valid config")))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

#[tokio::test]
async fn successful_cast_applies_status_headers_and_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/generate")
                .body_contains("/widgets?page=2");
            then.status(200).json_body(json!({
                "response": "here you go: {\"statusCode\":201,\"headers\":{\"X-Generated\":\"yes\",\"Content-Length\":\"999\"},\"generatedBody\":\"<h1>widgets</h1>\"}"
            }));
        })
        .await;

    let app = app_for(&server);
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/widgets?page=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers().get("x-generated").unwrap(), "yes");
    // The model-declared length is stripped before the generated body is
    // written.
    assert!(response.headers().get(header::CONTENT_LENGTH).is_none());
    assert_eq!(body_text(response).await, "<h1>widgets</h1>");
}

#[tokio::test]
async fn any_method_and_path_reach_the_cast() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/generate")
                .body_contains("DELETE")
                .body_contains("/deeply/nested/resource/42");
            then.status(200).json_body(json!({
                "response": "{\"statusCode\":200,\"generatedBody\":\"gone\"}"
            }));
        })
        .await;

    let app = app_for(&server);
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/deeply/nested/resource/42")
                .body(Body::from("{\"confirm\":true}"))
                .unwrap(),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "gone");
}

#[tokio::test]
async fn pipeline_failure_yields_processing_error_500() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/generate");
            then.status(200)
                .json_body(json!({ "response": "no json in sight" }));
        })
        .await;

    let app = app_for(&server);
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_text(response).await,
        "An error occurred while processing the request."
    );
}

#[tokio::test]
async fn unreadable_request_body_yields_generic_500_before_any_cast() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/generate");
            then.status(200)
                .json_body(json!({ "response": "{\"statusCode\":200,\"generatedBody\":\"x\"}" }));
        })
        .await;

    let app = app_for(&server);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/anything")
                .body(Body::from(vec![0xff, 0xfe, 0xfd]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "An internal server error occurred.");
    // The cast pipeline was never reached.
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn endpoint_outage_yields_processing_error_500() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/generate");
            then.status(503).body("down for maintenance");
        })
        .await;

    let app = app_for(&server);
    let response = app
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_text(response).await,
        "An error occurred while processing the request."
    );
}
