//! Legacy stored-page model, kept for the older JSX upload flow.

use serde::{Deserialize, Serialize};

/// Raw renderable source stored by the deprecated upload path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyCode {
    pub name: String,
    pub jsx: String,
    /// Free-form metadata object
    #[serde(default)]
    pub metadata: serde_json::Value,
}
