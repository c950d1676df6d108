// SPDX-License-Identifier: MIT

//! Algorithm page models: the stored document, the metadata block emitted by
//! the generator model, and the code-free summary used by catalog listings.

use serde::{Deserialize, Serialize};

/// A generated algorithm teaching page stored in Firestore.
///
/// Document ID is the normalized slug, which enforces one document per
/// algorithm concept at the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Algorithm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub slug: String,
    /// The generated page source (JSX)
    pub code: String,
    /// Admin-sanctioned flag; verified pages are visible to all users
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_problems: Option<Vec<PracticeProblem>>,
    /// When the page was generated (RFC 3339)
    pub created_at: String,
}

/// A linked practice problem on an external judge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PracticeProblem {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: String,
}

/// The `<metadata>` JSON block emitted by the generator model.
///
/// The five required fields are schema-validated on extraction; the rest are
/// free-form extras the model may or may not include.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmMetadata {
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// The model sometimes emits problem objects, sometimes bare IDs; kept
    /// free-form here and narrowed when building the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_problems: Option<serde_json::Value>,
}

/// Code-free projection for catalog listings and the checker prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub slug: String,
    pub is_verified: bool,
}

impl Algorithm {
    /// Build a new document from extracted metadata and cleaned code.
    pub fn from_metadata(metadata: &AlgorithmMetadata, code: String) -> Self {
        // Narrow the free-form practice problem list to typed entries;
        // a list of bare IDs (older prompt revision) is dropped.
        let practice_problems = metadata
            .practice_problems
            .clone()
            .and_then(|v| serde_json::from_value::<Vec<PracticeProblem>>(v).ok());

        Self {
            title: metadata.title.clone(),
            description: metadata.description.clone(),
            category: metadata.category.clone(),
            difficulty: metadata.difficulty.clone(),
            slug: metadata.slug.clone(),
            code,
            is_verified: false,
            practice_problems,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Metadata view of a stored document (for /make and /get-algo responses).
    pub fn metadata(&self) -> AlgorithmMetadata {
        AlgorithmMetadata {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            difficulty: self.difficulty.clone(),
            slug: self.slug.clone(),
            path: None,
            external_url: None,
            practice_problems: self
                .practice_problems
                .as_ref()
                .and_then(|p| serde_json::to_value(p).ok()),
        }
    }

    /// Code-free summary with the given document ID.
    pub fn summary(&self, id: &str) -> AlgorithmSummary {
        AlgorithmSummary {
            id: id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            difficulty: self.difficulty.clone(),
            slug: self.slug.clone(),
            is_verified: self.is_verified,
        }
    }
}

/// Normalize a slug or algorithm name into a document ID: lowercase,
/// alphanumeric runs joined by single hyphens.
pub fn normalize_slug(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_hyphen = true; // suppress leading hyphen
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            out.extend(ch.to_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            out.push('-');
            last_was_hyphen = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug("Bubble Sort"), "bubble-sort");
        assert_eq!(normalize_slug("  A* Search!! "), "a-search");
        assert_eq!(normalize_slug("merge-sort"), "merge-sort");
        assert_eq!(normalize_slug("Dijkstra's Algorithm"), "dijkstra-s-algorithm");
    }

    #[test]
    fn test_from_metadata_narrows_practice_problems() {
        let meta = AlgorithmMetadata {
            title: "Bubble Sort".to_string(),
            description: "A simple comparison sort".to_string(),
            category: "Sorting".to_string(),
            difficulty: "Beginner".to_string(),
            slug: "bubble-sort".to_string(),
            path: None,
            external_url: None,
            practice_problems: Some(serde_json::json!([
                {"platform": "LeetCode", "url": "https://leetcode.com/problems/sort-an-array/",
                 "description": "Sort an array", "difficulty": "Medium"}
            ])),
        };

        let algo = Algorithm::from_metadata(&meta, "export default () => null;".to_string());
        let problems = algo.practice_problems.expect("typed problems kept");
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].platform, "LeetCode");
        assert!(!algo.is_verified);
    }

    #[test]
    fn test_from_metadata_drops_bare_id_problems() {
        let meta = AlgorithmMetadata {
            title: "Bubble Sort".to_string(),
            description: "d".to_string(),
            category: "Sorting".to_string(),
            difficulty: "Beginner".to_string(),
            slug: "bubble-sort".to_string(),
            path: None,
            external_url: None,
            practice_problems: Some(serde_json::json!([1, 2, 3])),
        };

        let algo = Algorithm::from_metadata(&meta, String::new());
        assert!(algo.practice_problems.is_none());
    }
}
