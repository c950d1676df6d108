// SPDX-License-Identifier: MIT

//! Tests of the code-execution proxy against a local stub provider. The
//! proxy passes the provider's status and JSON body through verbatim, and
//! these tests pin that contract for both success and error statuses.

use algoverse_backend::services::{LlmClient, SandboxClient};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    routing::post,
    Json, Router,
};
use tower::ServiceExt;

mod common;

/// Serve a canned JSON reply with a fixed status on `/execute` and return
/// the base URL to point a `SandboxClient` at.
async fn spawn_sandbox_stub(status: StatusCode, reply: serde_json::Value) -> String {
    let app = Router::new().route(
        "/execute",
        post(move |Json(_): Json<serde_json::Value>| async move { (status, Json(reply)) }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn stub_sandbox_client(base_url: String) -> SandboxClient {
    SandboxClient::with_base_url(
        Some("stub-id".to_string()),
        Some("stub-secret".to_string()),
        base_url,
    )
}

fn execute_request(language: &str, code: &str) -> Request<Body> {
    let body = serde_json::json!({ "language": language, "code": code });
    Request::builder()
        .method("POST")
        .uri("/api/execute")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_execute_passes_provider_output_through() {
    let reply = serde_json::json!({
        "output": "42\n",
        "statusCode": 200,
        "memory": "7700",
        "cpuTime": "0.01"
    });
    let base_url = spawn_sandbox_stub(StatusCode::OK, reply.clone()).await;
    let (app, _) = common::create_app_with(
        common::test_db_offline(),
        LlmClient::new("test-key".to_string()),
        stub_sandbox_client(base_url),
    );

    let response = app
        .oneshot(execute_request("python", "print(42)"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, reply);
}

#[tokio::test]
async fn test_execute_passes_provider_error_status_through() {
    let reply = serde_json::json!({ "error": "Unauthorized Request", "statusCode": 401 });
    let base_url = spawn_sandbox_stub(StatusCode::UNAUTHORIZED, reply.clone()).await;
    let (app, _) = common::create_app_with(
        common::test_db_offline(),
        LlmClient::new("test-key".to_string()),
        stub_sandbox_client(base_url),
    );

    let response = app
        .oneshot(execute_request("javascript", "console.log(1)"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response_json(response).await, reply);
}
