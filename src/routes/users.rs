// SPDX-License-Identifier: MIT

//! User sync route.

use crate::error::{AppError, Result};
use crate::models::User;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/sync-user", post(sync_user))
}

#[derive(Deserialize)]
struct SyncUserRequest {
    #[serde(rename = "clerkId")]
    clerk_id: Option<String>,
    name: Option<String>,
}

#[derive(Serialize)]
pub struct SyncUserResponse {
    pub success: bool,
    pub user: User,
}

/// Idempotent upsert of a user record by Clerk ID. Creates with default name
/// "Unknown" on first sight; later calls return the stored record unchanged.
async fn sync_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SyncUserRequest>,
) -> Result<Json<SyncUserResponse>> {
    let clerk_id = req
        .clerk_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("clerkId is required".to_string()))?;

    let user = state.db.sync_user(clerk_id, req.name).await?;

    Ok(Json(SyncUserResponse {
        success: true,
        user,
    }))
}
