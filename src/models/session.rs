//! Persisted-session models.
//!
//! A saved session is a handle describing how to reconnect to a data source:
//! either a document database connection or a JSON file.

use serde::{Deserialize, Serialize};

/// Handle returned by /saveSession and accepted by /loadSession.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionHandle {
    /// Data source kind: "mongodb" or "json".
    pub client: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// JSON-file sessions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Database sessions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
}
