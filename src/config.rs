//! Application configuration loaded from environment variables.
//!
//! All keys are read once at startup and carried in an explicit struct that is
//! passed into the router and service clients.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key for the LLM client
    pub groq_api_key: String,
    /// JDoodle client ID for the code-execution proxy (execute returns 500 if absent)
    pub jdoodle_client_id: Option<String>,
    /// JDoodle client secret for the code-execution proxy
    pub jdoodle_client_secret: Option<String>,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// GCP project ID (Firestore)
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            groq_api_key: env::var("GROQ_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("GROQ_API_KEY"))?,
            jdoodle_client_id: env::var("JDOODLE_CLIENT_ID")
                .ok()
                .map(|v| v.trim().to_string()),
            jdoodle_client_secret: env::var("JDOODLE_CLIENT_SECRET")
                .ok()
                .map(|v| v.trim().to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
        })
    }

    /// Fixed config for tests.
    pub fn test_default() -> Self {
        Self {
            groq_api_key: "test_groq_key".to_string(),
            jdoodle_client_id: Some("test_jdoodle_id".to_string()),
            jdoodle_client_secret: Some("test_jdoodle_secret".to_string()),
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8000,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
