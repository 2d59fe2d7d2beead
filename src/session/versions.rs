//! Per-record version registry backing the version-selector control.

use crate::api::ApiClient;
use crate::errors::AppError;
use crate::models::LATEST_VERSION;

/// Ordered list of known version identifiers for the current record id,
/// with a `"Latest"` sentinel when the backend list is empty.
///
/// Refresh is lazy: the dirty flag is set whenever the id field changes and
/// cleared after a refresh, so switching versions of the same record does
/// not re-fetch the list.
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    versions: Vec<String>,
    selected: String,
    dirty: bool,
}

impl Default for VersionRegistry {
    fn default() -> Self {
        Self {
            versions: vec![LATEST_VERSION.to_string()],
            selected: LATEST_VERSION.to_string(),
            dirty: false,
        }
    }
}

impl VersionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Write the externally visible version selector.
    pub fn select(&mut self, version: &str) {
        self.selected = version.to_string();
    }

    /// The first entry, selected after a delete.
    pub fn first(&self) -> &str {
        self.versions
            .first()
            .map(String::as_str)
            .unwrap_or(LATEST_VERSION)
    }

    /// Record that the active id changed since the last refresh.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the version list with the backend's answer for `id`, or the
    /// single sentinel entry if the answer is empty.
    pub async fn refresh(&mut self, api: &ApiClient, id: &str) -> Result<(), AppError> {
        let entries = api.versions(id).await?;
        self.versions = if entries.is_empty() {
            vec![LATEST_VERSION.to_string()]
        } else {
            entries.into_iter().map(|e| e.resource_version).collect()
        };
        self.dirty = false;
        Ok(())
    }

    /// Refresh at most once per distinct id: a no-op unless the dirty flag
    /// is set. Returns whether a refresh was performed.
    pub async fn refresh_if_dirty(&mut self, api: &ApiClient, id: &str) -> Result<bool, AppError> {
        if !self.dirty {
            return Ok(false);
        }
        self.refresh(api, id).await?;
        Ok(true)
    }
}
