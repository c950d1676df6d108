// SPDX-License-Identifier: MIT

use algoverse_backend::config::Config;
use algoverse_backend::db::FirestoreDb;
use algoverse_backend::routes::create_router;
use algoverse_backend::services::{LlmClient, SandboxClient};
use algoverse_backend::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

/// Create a test app from explicit dependencies (stubbed providers,
/// emulator or offline database). Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_app_with(
    db: FirestoreDb,
    llm: LlmClient,
    sandbox: SandboxClient,
) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        db,
        llm,
        sandbox,
    });

    (create_router(state.clone()), state)
}

/// Create a test app with offline mock dependencies.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let llm = LlmClient::new(config.groq_api_key.clone());
    // No sandbox credentials in tests: any request reaching the provider
    // path fails instead of making a network call.
    create_app_with(test_db_offline(), llm, SandboxClient::new(None, None))
}
