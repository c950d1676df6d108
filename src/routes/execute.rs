// SPDX-License-Identifier: MIT

//! Code-execution proxy route.

use crate::error::{AppError, Result};
use crate::services::sandbox::map_language;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/execute", post(execute_code))
}

#[derive(Deserialize)]
struct ExecuteRequest {
    language: Option<String>,
    code: Option<String>,
}

/// Forward a code snippet to the sandbox provider, passing its status code
/// and JSON body through verbatim. Unsupported languages are rejected before
/// any provider call.
async fn execute_code(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExecuteRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let code = req
        .code
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("code is required".to_string()))?;

    let language = req.language.as_deref().unwrap_or_default();
    let lang = map_language(language)
        .ok_or_else(|| AppError::BadRequest(format!("Unsupported language: {}", language)))?;

    let (status, body) = state.sandbox.execute(lang, code).await?;
    Ok((status, Json(body)))
}
