// SPDX-License-Identifier: MIT

//! JDoodle code-execution client for the playground proxy.
//!
//! The frontend's language names are translated to JDoodle identifiers, the
//! request is sent with server-held credentials, and the provider's status
//! code and JSON body are passed through verbatim.

use crate::error::AppError;
use axum::http::StatusCode;
use serde::Serialize;

const JDOODLE_BASE_URL: &str = "https://api.jdoodle.com/v1";

/// A JDoodle language identifier with its version index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandboxLanguage {
    pub language: &'static str,
    pub version_index: &'static str,
}

/// Map a frontend language name to JDoodle's identifier.
/// Returns None for unsupported languages (the route answers 400 without
/// calling the provider).
pub fn map_language(lang: &str) -> Option<SandboxLanguage> {
    match lang {
        "javascript" => Some(SandboxLanguage {
            language: "nodejs",
            version_index: "4", // Node.js 18.15.0
        }),
        "python" => Some(SandboxLanguage {
            language: "python3",
            version_index: "4", // Python 3.9.9
        }),
        "cpp" => Some(SandboxLanguage {
            language: "cpp17",
            version_index: "1", // GCC 11.1.0
        }),
        _ => None,
    }
}

/// JDoodle execution client.
#[derive(Clone)]
pub struct SandboxClient {
    http: reqwest::Client,
    base_url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
}

#[derive(Serialize)]
struct ExecuteRequest<'a> {
    #[serde(rename = "clientId")]
    client_id: &'a str,
    #[serde(rename = "clientSecret")]
    client_secret: &'a str,
    script: &'a str,
    language: &'a str,
    #[serde(rename = "versionIndex")]
    version_index: &'a str,
}

impl SandboxClient {
    /// Create a new client; credentials may be absent in dev setups, in which
    /// case execution requests fail with a 500 at call time.
    pub fn new(client_id: Option<String>, client_secret: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: JDOODLE_BASE_URL.to_string(),
            client_id,
            client_secret,
        }
    }

    /// Create a client pointed at a different base URL (for tests).
    pub fn with_base_url(
        client_id: Option<String>,
        client_secret: Option<String>,
        base_url: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            client_id,
            client_secret,
        }
    }

    /// Execute a code snippet, passing the provider's status and JSON body
    /// through to the caller.
    pub async fn execute(
        &self,
        lang: SandboxLanguage,
        code: &str,
    ) -> Result<(StatusCode, serde_json::Value), AppError> {
        let (client_id, client_secret) = match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => (id, secret),
            _ => {
                return Err(AppError::Internal(anyhow::anyhow!(
                    "Sandbox credentials not configured"
                )))
            }
        };

        let body = ExecuteRequest {
            client_id,
            client_secret,
            script: code,
            language: lang.language,
            version_index: lang.version_index,
        };

        let response = self
            .http
            .post(format!("{}/execute", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::SandboxApi(e.to_string()))?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::SandboxApi(format!("Invalid provider response: {}", e)))?;

        tracing::debug!(
            language = lang.language,
            status = status.as_u16(),
            "Sandbox execution completed"
        );

        Ok((status, json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_mapping() {
        let py = map_language("python").unwrap();
        assert_eq!(py.language, "python3");
        assert_eq!(py.version_index, "4");

        let js = map_language("javascript").unwrap();
        assert_eq!(js.language, "nodejs");

        let cpp = map_language("cpp").unwrap();
        assert_eq!(cpp.language, "cpp17");
        assert_eq!(cpp.version_index, "1");
    }

    #[test]
    fn test_unsupported_language() {
        assert!(map_language("rust").is_none());
        assert!(map_language("Python").is_none()); // case-sensitive, as the frontend sends
        assert!(map_language("").is_none());
    }

    #[tokio::test]
    async fn test_execute_without_credentials_is_internal_error() {
        let client = SandboxClient::new(None, None);
        let err = client
            .execute(map_language("python").unwrap(), "print(1)")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
