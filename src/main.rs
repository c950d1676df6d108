// SPDX-License-Identifier: MIT

//! Algoverse API Server
//!
//! Generates interactive algorithm teaching pages through an LLM, stores them
//! in Firestore, and serves the catalog to the frontend.

use algoverse_backend::{
    config::Config,
    db::FirestoreDb,
    services::{LlmClient, SandboxClient},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Algoverse API");

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    // Initialize LLM client (generator + checker profiles)
    let llm = LlmClient::new(config.groq_api_key.clone());
    tracing::info!("LLM client initialized");

    // Initialize code-execution sandbox client
    let sandbox = SandboxClient::new(
        config.jdoodle_client_id.clone(),
        config.jdoodle_client_secret.clone(),
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        llm,
        sandbox,
    });

    // Build router
    let app = algoverse_backend::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("algoverse_backend=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
