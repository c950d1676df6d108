// SPDX-License-Identifier: MIT

//! Algorithm page routes: generate-or-reuse, fetch, and catalog listings.

use crate::error::{AppError, Result};
use crate::models::{Algorithm, AlgorithmMetadata, AlgorithmSummary, User};
use crate::services::extract::{clean_output, extract_metadata, parse_checker_decision};
use crate::services::llm::ModelProfile;
use crate::services::prompts::{checker_prompt, generator_prompt};
use crate::services::CheckerDecision;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Sentinel user ID for unauthenticated catalog requests.
const GUEST_USER_ID: &str = "guest";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/make", post(make_algorithm))
        .route("/get-algo/{id}", get(get_algorithm))
        .route("/get_algorithms", post(get_algorithms_for_user))
        .route("/get-admin-algos", post(get_admin_algorithms))
}

// ─── Generate or Reuse ───────────────────────────────────────

#[derive(Deserialize)]
struct MakeRequest {
    #[serde(rename = "Algo_name")]
    algo_name: Option<String>,
    #[serde(rename = "userID")]
    user_id: Option<String>,
}

#[derive(Serialize)]
pub struct MakeResponse {
    pub success: bool,
    pub id: String,
    pub metadata: AlgorithmMetadata,
    pub user: User,
}

/// Generate a new algorithm page, or reuse an existing one when the checker
/// model recognizes the concept in the catalog.
///
/// The reuse branch is an early, exclusive return: a found decision never
/// falls through to generation.
async fn make_algorithm(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MakeRequest>,
) -> Result<Json<MakeResponse>> {
    let algo_name = req
        .algo_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("Algo_name is required".to_string()))?;
    let user_id = req
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("userID is required".to_string()))?;

    tracing::info!(algo_name, user_id, "Generate-or-reuse request");

    // Check phase: ask the cheap model whether the concept already exists.
    let catalog = state.db.list_algorithm_summaries().await?;
    let check_response = state
        .llm
        .complete(ModelProfile::Checker, &checker_prompt(algo_name, &catalog))
        .await?;

    if let CheckerDecision::Found(id) = parse_checker_decision(&check_response) {
        // The checker is advisory; only reuse if the document really exists.
        if let Some(existing) = state.db.get_algorithm(&id).await? {
            tracing::info!(algo_name, id, "Reusing existing algorithm page");
            let user = state.db.add_saved_algorithm(user_id, &id).await?;
            return Ok(Json(MakeResponse {
                success: true,
                id,
                metadata: existing.metadata(),
                user,
            }));
        }
        tracing::warn!(id, "Checker named a missing document, generating instead");
    }

    // Generation phase.
    let raw = state
        .llm
        .complete(ModelProfile::Generator, &generator_prompt(algo_name))
        .await?;

    let metadata = extract_metadata(&raw)?;
    if crate::models::algorithm::normalize_slug(&metadata.slug).is_empty() {
        return Err(AppError::MalformedOutput(
            "Metadata slug is empty".to_string(),
        ));
    }
    let code = clean_output(&raw);

    let algo = Algorithm::from_metadata(&metadata, code);
    let (id, created) = state.db.create_algorithm(&algo).await?;

    // Slug collision means another request got there first; answer with the
    // stored document rather than the one we just built.
    let metadata = if created {
        metadata
    } else {
        state
            .db
            .get_algorithm(&id)
            .await?
            .map(|a| a.metadata())
            .unwrap_or(metadata)
    };

    let user = state.db.add_saved_algorithm(user_id, &id).await?;

    Ok(Json(MakeResponse {
        success: true,
        id,
        metadata,
        user,
    }))
}

// ─── Fetch One ───────────────────────────────────────────────

#[derive(Serialize)]
pub struct AlgorithmResponse {
    pub title: String,
    pub description: String,
    pub code: String,
    pub metadata: AlgorithmMetadata,
}

/// Get one algorithm page with its stored source.
async fn get_algorithm(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AlgorithmResponse>> {
    let algo = state
        .db
        .get_algorithm(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Algorithm {} not found", id)))?;

    Ok(Json(AlgorithmResponse {
        title: algo.title.clone(),
        description: algo.description.clone(),
        code: algo.code.clone(),
        metadata: algo.metadata(),
    }))
}

// ─── Catalog Listings ────────────────────────────────────────

#[derive(Deserialize)]
struct ListRequest {
    id: Option<String>,
}

#[derive(Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub data: Vec<AlgorithmSummary>,
}

/// List a user's saved algorithms unioned with the public verified catalog.
/// The sentinel id "guest" skips the per-user lookup entirely.
async fn get_algorithms_for_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ListRequest>,
) -> Result<Json<ListResponse>> {
    let id = req
        .id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("id is required".to_string()))?;

    let verified = state.db.list_verified().await?;

    if id == GUEST_USER_ID {
        return Ok(Json(ListResponse {
            success: true,
            data: verified,
        }));
    }

    let user = state
        .db
        .get_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    let mut data = state
        .db
        .get_algorithms_by_ids(&user.saved_algorithm_ids)
        .await?;

    // Union with the verified set, saved entries first.
    for summary in verified {
        if !data.iter().any(|s| s.id == summary.id) {
            data.push(summary);
        }
    }

    Ok(Json(ListResponse {
        success: true,
        data,
    }))
}

#[derive(Serialize)]
pub struct AdminListResponse {
    pub success: bool,
    pub algos: Vec<AlgorithmSummary>,
}

/// All verified algorithms (code excluded).
async fn get_admin_algorithms(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AdminListResponse>> {
    let algos = state.db.list_verified().await?;
    Ok(Json(AdminListResponse {
        success: true,
        algos,
    }))
}
