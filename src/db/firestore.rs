// SPDX-License-Identifier: MIT

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile + saved algorithm references)
//! - Algorithms (generated teaching pages, keyed by normalized slug)
//! - Legacy code (deprecated raw-JSX pages)

use crate::db::collections;
use crate::error::AppError;
use crate::models::algorithm::normalize_slug;
use crate::models::{Algorithm, AlgorithmSummary, LegacyCode, User};
use futures_util::{stream, StreamExt};

const MAX_CONCURRENT_DB_OPS: usize = 20;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by their Clerk subject ID.
    pub async fn get_user(&self, clerk_id: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(clerk_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or update a user.
    pub async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.clerk_id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Idempotent sync: create the user on first sight, otherwise return the
    /// stored record unchanged (a later call with a different name does not
    /// rename the user).
    pub async fn sync_user(
        &self,
        clerk_id: &str,
        name: Option<String>,
    ) -> Result<User, AppError> {
        if let Some(existing) = self.get_user(clerk_id).await? {
            return Ok(existing);
        }

        let user = User::new(
            clerk_id,
            Some(name.unwrap_or_else(|| "Unknown".to_string())),
        );
        self.upsert_user(&user).await?;
        tracing::info!(clerk_id, "Created user record");
        Ok(user)
    }

    /// Append an algorithm reference to a user's saved set, creating the user
    /// record if it does not exist yet. Add-if-absent: saving the same ID
    /// twice leaves the list unchanged.
    pub async fn add_saved_algorithm(
        &self,
        clerk_id: &str,
        algo_id: &str,
    ) -> Result<User, AppError> {
        let mut user = match self.get_user(clerk_id).await? {
            Some(user) => user,
            None => User::new(clerk_id, Some("Unknown".to_string())),
        };

        if user.save_algorithm(algo_id) {
            self.upsert_user(&user).await?;
            tracing::debug!(clerk_id, algo_id, "Saved algorithm reference");
        }

        Ok(user)
    }

    // ─── Algorithm Operations ────────────────────────────────────

    /// Get an algorithm page by document ID.
    pub async fn get_algorithm(&self, id: &str) -> Result<Option<Algorithm>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::ALGORITHMS)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Store a newly generated algorithm page, keyed by its normalized slug.
    ///
    /// Returns the document ID and whether a new document was written. If a
    /// document for the slug already exists the existing one wins and no write
    /// happens; the caller treats that as the "found" signal. The probe and
    /// write are not transactional, but because concurrent writers derive the
    /// same document ID they converge on a single document either way.
    pub async fn create_algorithm(&self, algo: &Algorithm) -> Result<(String, bool), AppError> {
        let id = normalize_slug(&algo.slug);
        if id.is_empty() {
            return Err(AppError::BadRequest("Empty algorithm slug".to_string()));
        }

        if self.get_algorithm(&id).await?.is_some() {
            tracing::info!(id, "Algorithm already stored, skipping write");
            return Ok((id, false));
        }

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::ALGORITHMS)
            .document_id(&id)
            .object(algo)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::info!(id, title = %algo.title, "Stored algorithm page");
        Ok((id, true))
    }

    /// Lightweight projection of every stored algorithm (for the checker
    /// prompt catalog).
    pub async fn list_algorithm_summaries(&self) -> Result<Vec<AlgorithmSummary>, AppError> {
        let algos: Vec<Algorithm> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::ALGORITHMS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        // Document ID is derived from the slug at write time, so the
        // projection can reconstruct it without a second read.
        Ok(algos
            .iter()
            .map(|a| a.summary(&normalize_slug(&a.slug)))
            .collect())
    }

    /// All verified algorithm summaries (the public catalog).
    pub async fn list_verified(&self) -> Result<Vec<AlgorithmSummary>, AppError> {
        let algos: Vec<Algorithm> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::ALGORITHMS)
            .filter(|q| q.field("is_verified").eq(true))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(algos
            .iter()
            .map(|a| a.summary(&normalize_slug(&a.slug)))
            .collect())
    }

    /// Fetch summaries for a list of document IDs, preserving order.
    ///
    /// Missing IDs are skipped: saved references are weak, and a reference to
    /// a vanished document is not an error for the listing path.
    pub async fn get_algorithms_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<AlgorithmSummary>, AppError> {
        let results: Vec<Result<Option<(String, Algorithm)>, AppError>> =
            stream::iter(ids.to_vec())
                .map(|id| async move {
                    let algo = self.get_algorithm(&id).await?;
                    Ok(algo.map(|a| (id, a)))
                })
                .buffered(MAX_CONCURRENT_DB_OPS)
                .collect()
                .await;

        let mut summaries = Vec::with_capacity(ids.len());
        for result in results {
            if let Some((id, algo)) = result? {
                summaries.push(algo.summary(&id));
            }
        }
        Ok(summaries)
    }

    // ─── Legacy Code Operations ──────────────────────────────────

    /// Store a raw JSX page from the deprecated upload flow.
    pub async fn save_legacy_code(&self, code: &LegacyCode) -> Result<String, AppError> {
        // Timestamp-derived ID; the legacy flow never relied on stable IDs.
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let id = format!("{}-{:x}", normalize_slug(&code.name), nanos);

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::CODE)
            .document_id(&id)
            .object(code)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::info!(id, name = %code.name, "Stored legacy JSX page");
        Ok(id)
    }

    /// Get a legacy page by document ID.
    pub async fn get_legacy_code(&self, id: &str) -> Result<Option<LegacyCode>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::CODE)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
