// SPDX-License-Identifier: MIT

//! AppError -> HTTP status mapping.

use algoverse_backend::error::AppError;
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[test]
fn test_bad_request_maps_to_400() {
    let response = AppError::BadRequest("missing field".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_not_found_maps_to_404() {
    let response = AppError::NotFound("algorithm x".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_upstream_errors_map_to_502() {
    let response = AppError::LlmApi("connection refused".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let response = AppError::SandboxApi("timeout".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let response = AppError::MalformedOutput("no metadata block".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn test_database_and_internal_map_to_500() {
    let response = AppError::Database("connection lost".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = AppError::Internal(anyhow::anyhow!("boom")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
