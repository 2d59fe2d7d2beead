//! Configuration module for the record editor client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the record store backend
    pub base_url: String,
    /// Alias of the saved connection this session runs against, if any
    pub alias: Option<String>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Whether record versioning (version selector, add-version) is enabled
    pub with_versioning: bool,
    /// Whether backend-held undo/redo history is enabled
    pub with_revision_history: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env::var("RECORD_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

        let alias = env::var("RECORD_ALIAS").ok();

        let log_level = env::var("RECORD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let with_versioning = env::var("RECORD_WITH_VERSIONING")
            .map(|v| v != "0" && v != "false")
            .unwrap_or(true);

        let with_revision_history = env::var("RECORD_WITH_REVISION_HISTORY")
            .map(|v| v != "0" && v != "false")
            .unwrap_or(true);

        Self {
            base_url,
            alias,
            log_level,
            with_versioning,
            with_revision_history,
        }
    }
}
