// SPDX-License-Identifier: MIT

//! Deprecated raw-JSX upload flow, kept for backward compatibility with the
//! pre-catalog frontend.

use crate::error::{AppError, Result};
use crate::models::LegacyCode;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/upload-jsx", post(upload_jsx))
        .route("/get-jsx/{id}", get(get_jsx))
}

#[derive(Deserialize)]
struct UploadJsxRequest {
    name: Option<String>,
    jsx: Option<String>,
    #[serde(default)]
    metadata: serde_json::Value,
}

#[derive(Serialize)]
pub struct UploadJsxResponse {
    pub success: bool,
    pub id: String,
}

async fn upload_jsx(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UploadJsxRequest>,
) -> Result<Json<UploadJsxResponse>> {
    let name = req
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("name is required".to_string()))?;
    let jsx = req
        .jsx
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("jsx is required".to_string()))?;

    let code = LegacyCode {
        name: name.to_string(),
        jsx: jsx.to_string(),
        metadata: req.metadata,
    };

    let id = state.db.save_legacy_code(&code).await?;
    Ok(Json(UploadJsxResponse { success: true, id }))
}

#[derive(Serialize)]
pub struct GetJsxResponse {
    pub name: String,
    pub jsx: String,
}

async fn get_jsx(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<GetJsxResponse>> {
    let code = state
        .db
        .get_legacy_code(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Page {} not found", id)))?;

    Ok(Json(GetJsxResponse {
        name: code.name,
        jsx: code.jsx,
    }))
}
