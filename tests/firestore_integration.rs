// SPDX-License-Identifier: MIT

//! Firestore integration tests (require the emulator).

use algoverse_backend::models::{Algorithm, AlgorithmMetadata};

mod common;

fn unique(prefix: &str) -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{}-{:x}", prefix, nanos)
}

fn test_algorithm(slug: &str, title: &str) -> Algorithm {
    let metadata = AlgorithmMetadata {
        title: title.to_string(),
        description: "test description".to_string(),
        category: "Sorting".to_string(),
        difficulty: "Beginner".to_string(),
        slug: slug.to_string(),
        path: None,
        external_url: None,
        practice_problems: None,
    };
    Algorithm::from_metadata(&metadata, "export default () => null;".to_string())
}

#[tokio::test]
async fn test_sync_user_is_create_once() {
    require_emulator!();
    let db = common::test_db().await;
    let clerk_id = unique("user");

    let first = db
        .sync_user(&clerk_id, Some("Ada".to_string()))
        .await
        .unwrap();
    assert_eq!(first.name.as_deref(), Some("Ada"));
    assert_eq!(first.tokens, 0);

    // Second sync with a different name returns the original record unchanged
    let second = db
        .sync_user(&clerk_id, Some("Grace".to_string()))
        .await
        .unwrap();
    assert_eq!(second.name.as_deref(), Some("Ada"));
    assert_eq!(second.created_at, first.created_at);
}

#[tokio::test]
async fn test_sync_user_defaults_name_to_unknown() {
    require_emulator!();
    let db = common::test_db().await;
    let clerk_id = unique("user");

    let user = db.sync_user(&clerk_id, None).await.unwrap();
    assert_eq!(user.name.as_deref(), Some("Unknown"));
}

#[tokio::test]
async fn test_add_saved_algorithm_is_idempotent() {
    require_emulator!();
    let db = common::test_db().await;
    let clerk_id = unique("user");

    let user = db.add_saved_algorithm(&clerk_id, "bubble-sort").await.unwrap();
    assert_eq!(user.saved_algorithm_ids, vec!["bubble-sort"]);

    // Saving the same reference again leaves the list unchanged
    let user = db.add_saved_algorithm(&clerk_id, "bubble-sort").await.unwrap();
    assert_eq!(user.saved_algorithm_ids, vec!["bubble-sort"]);

    let user = db.add_saved_algorithm(&clerk_id, "merge-sort").await.unwrap();
    assert_eq!(user.saved_algorithm_ids, vec!["bubble-sort", "merge-sort"]);
}

#[tokio::test]
async fn test_create_algorithm_dedupes_by_slug() {
    require_emulator!();
    let db = common::test_db().await;
    let slug = unique("quick-sort");

    let first = test_algorithm(&slug, "Quick Sort");
    let (id, created) = db.create_algorithm(&first).await.unwrap();
    assert!(created);
    assert_eq!(id, slug);

    // A second generation for the same concept is the "found" signal
    let duplicate = test_algorithm(&slug, "Quicksort (duplicate)");
    let (dup_id, created) = db.create_algorithm(&duplicate).await.unwrap();
    assert!(!created);
    assert_eq!(dup_id, id);

    // The original document wins
    let stored = db.get_algorithm(&id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Quick Sort");
}

#[tokio::test]
async fn test_create_algorithm_normalizes_slug() {
    require_emulator!();
    let db = common::test_db().await;
    let raw = unique("Tower of Hanoi");

    let algo = test_algorithm(&raw, "Tower of Hanoi");
    let (id, created) = db.create_algorithm(&algo).await.unwrap();
    assert!(created);
    assert!(id.starts_with("tower-of-hanoi-"));

    assert!(db.get_algorithm(&id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_verified_listing_excludes_unverified_pages() {
    require_emulator!();
    let db = common::test_db().await;
    let slug = unique("bogo-sort");

    // Freshly generated pages are never verified
    let algo = test_algorithm(&slug, "Bogo Sort");
    let (id, _) = db.create_algorithm(&algo).await.unwrap();

    let verified = db.list_verified().await.unwrap();
    assert!(verified.iter().all(|s| s.id != id));
    assert!(verified.iter().all(|s| s.is_verified));
}

#[tokio::test]
async fn test_saved_ids_fetch_skips_missing_documents() {
    require_emulator!();
    let db = common::test_db().await;
    let slug = unique("heap-sort");

    let algo = test_algorithm(&slug, "Heap Sort");
    let (id, _) = db.create_algorithm(&algo).await.unwrap();

    let ids = vec![id.clone(), unique("never-stored")];
    let summaries = db.get_algorithms_by_ids(&ids).await.unwrap();

    // Dangling references are weak: skipped, not an error
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, id);
    assert_eq!(summaries[0].title, "Heap Sort");
}
