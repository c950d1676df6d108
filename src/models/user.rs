//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User profile stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Clerk subject ID (also used as document ID)
    pub clerk_id: String,
    /// Display name
    pub name: Option<String>,
    /// Email address (may be None if not shared)
    pub email: Option<String>,
    /// Token balance (present in schema, unused by any business rule)
    #[serde(default)]
    pub tokens: i64,
    /// Saved algorithm document IDs, in save order (add-if-absent)
    #[serde(default)]
    pub saved_algorithm_ids: Vec<String>,
    /// When the user record was first created (RFC 3339)
    pub created_at: String,
}

impl User {
    /// Build a fresh user record with an empty saved list.
    pub fn new(clerk_id: &str, name: Option<String>) -> Self {
        Self {
            clerk_id: clerk_id.to_string(),
            name,
            email: None,
            tokens: 0,
            saved_algorithm_ids: Vec::new(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Append an algorithm reference if not already saved.
    /// Returns true if the list changed.
    pub fn save_algorithm(&mut self, algo_id: &str) -> bool {
        if self.saved_algorithm_ids.iter().any(|id| id == algo_id) {
            return false;
        }
        self.saved_algorithm_ids.push(algo_id.to_string());
        true
    }
}
