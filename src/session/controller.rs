//! The session controller: orchestrates the buffer pair, version registry
//! and action availability against the backend store.
//!
//! Every public operation is a sequential, non-overlapping asynchronous
//! flow; the busy gate serializes them. Every operation that mutates remote
//! state re-runs a lookup afterward instead of optimistically updating local
//! state — the client never trusts its own prediction of post-mutation
//! server state.

use std::str::FromStr;

use serde_json::Value;

use crate::api::ApiClient;
use crate::errors::AppError;
use crate::models::{FindOutcome, SessionHandle};

use super::{
    ActionAvailability, ActionFlags, MarkerSource, RecordModelPair, RecordState, ValidationGate,
    VersionRegistry,
};

/// Recognized revision operations. Any other token is rejected before a
/// network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionOp {
    Undo,
    Redo,
}

impl FromStr for RevisionOp {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undo" => Ok(RevisionOp::Undo),
            "redo" => Ok(RevisionOp::Redo),
            other => Err(AppError::InvalidOperation(format!(
                "Invalid operation: {}",
                other
            ))),
        }
    }
}

/// The user-facing selector fields: looked-up id and schema category.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub id: String,
    pub category: String,
}

/// Feature toggles collapsing the historical variants of the editor into
/// one controller.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Version selector and add-version surface.
    pub with_versioning: bool,
    /// Backend-held undo/redo history.
    pub with_revision_history: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            with_versioning: true,
            with_revision_history: true,
        }
    }
}

/// Transient, non-blocking alert presentation, implemented by the
/// presentation layer.
pub trait AlertSink {
    fn alert(&self, header: &str, message: &str);
}

/// Alert sink that routes alerts to the log.
pub struct TracingAlerts;

impl AlertSink for TracingAlerts {
    fn alert(&self, header: &str, message: &str) {
        tracing::warn!("{}: {}", header, message);
    }
}

/// Orchestrates lookups and mutating actions for one editing session.
pub struct SessionController {
    api: ApiClient,
    options: SessionOptions,
    state: SessionState,
    pair: RecordModelPair,
    registry: VersionRegistry,
    availability: ActionAvailability,
    gate: ValidationGate,
    alerts: Box<dyn AlertSink + Send + Sync>,
    categories: Vec<String>,
    schema: Option<Value>,
}

impl SessionController {
    pub fn new(
        api: ApiClient,
        options: SessionOptions,
        markers: Box<dyn MarkerSource + Send + Sync>,
        alerts: Box<dyn AlertSink + Send + Sync>,
    ) -> Self {
        Self {
            api,
            options,
            state: SessionState::default(),
            pair: RecordModelPair::new(),
            registry: VersionRegistry::new(),
            availability: ActionAvailability::new(),
            gate: ValidationGate::new(markers),
            alerts,
            categories: Vec::new(),
            schema: None,
        }
    }

    /// Load the process-wide category list and schema document. Called once
    /// at startup; both are read-only thereafter.
    pub async fn load_reference_data(&mut self) -> Result<(), AppError> {
        self.categories = self.api.categories().await?;
        self.schema = Some(self.api.schema().await?);
        if self.state.category.is_empty() {
            if let Some(first) = self.categories.first() {
                self.state.category = first.clone();
            }
        }
        Ok(())
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn schema(&self) -> Option<&Value> {
        self.schema.as_ref()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn pair(&self) -> &RecordModelPair {
        &self.pair
    }

    pub fn registry(&self) -> &VersionRegistry {
        &self.registry
    }

    pub fn flags(&self) -> ActionFlags {
        self.availability.flags()
    }

    pub fn record_state(&self) -> RecordState {
        self.availability.state()
    }

    /// Set the id field. Marks the version registry dirty when the id
    /// actually changed, so the next lookup refreshes the version list.
    pub fn set_id(&mut self, id: &str) {
        if self.state.id != id {
            self.state.id = id.to_string();
            self.registry.mark_dirty();
        }
    }

    /// Set the category selector, used when seeding a key template.
    pub fn set_category(&mut self, category: &str) {
        self.state.category = category.to_string();
    }

    /// Select a version of the current record.
    pub fn select_version(&mut self, version: &str) {
        self.registry.select(version);
    }

    /// Write the user's edits into the modified buffer.
    pub fn set_modified_text(&mut self, text: impl Into<String>) {
        self.pair.set_modified_text(text);
    }

    /// Fetch the record matching the current id and selected version,
    /// seeding a key template if it does not exist.
    pub async fn lookup(&mut self) -> Result<(), AppError> {
        let result = self.lookup_inner().await;
        self.finish_op(result).await
    }

    /// Send the modified buffer as a new record. Only valid when no record
    /// was found; the backend is the authority and may still reject.
    pub async fn create(&mut self) -> Result<(), AppError> {
        let result = self.create_inner().await;
        self.finish_op(result).await
    }

    /// Replace the current record with the modified buffer.
    pub async fn update(&mut self) -> Result<(), AppError> {
        let result = self.update_inner().await;
        self.finish_op(result).await
    }

    /// Store the modified buffer as a new version of the current record,
    /// unless that version already exists.
    pub async fn add_version(&mut self) -> Result<(), AppError> {
        let result = self.add_version_inner().await;
        self.finish_op(result).await
    }

    /// Delete the record identified by the *original* buffer. Unsaved edits
    /// to id or version in the modified buffer must not change what gets
    /// deleted.
    pub async fn delete(&mut self) -> Result<(), AppError> {
        let result = self.delete_inner().await;
        self.finish_op(result).await
    }

    /// Apply an undo or redo of the backend-held history, then
    /// resynchronize with whatever the history stack produced.
    pub async fn revise(&mut self, operation: &str) -> Result<(), AppError> {
        let result = self.revise_inner(operation).await;
        self.finish_op(result).await
    }

    /// Persist this session under its alias.
    pub async fn save_session(&self) -> Result<SessionHandle, AppError> {
        let result = self.api.save_session().await;
        self.report(result)
    }

    async fn lookup_inner(&mut self) -> Result<(), AppError> {
        if self.options.with_versioning {
            self.registry
                .refresh_if_dirty(&self.api, &self.state.id)
                .await?;
        }
        self.availability.begin_busy();

        let outcome = self
            .api
            .find(&self.state.id, self.registry.selected())
            .await?;
        match outcome {
            FindOutcome::Found(record) => {
                // Adopt the server-reported identity before loading the
                // buffers: the selector fields must mirror the server copy.
                if let Some(version) = record.resource_version() {
                    self.registry.select(version);
                }
                if let Some(category) = record.category() {
                    self.state.category = category.to_string();
                }
                self.pair.load(record.clone(), record);
                self.availability.record_loaded();
            }
            FindOutcome::Missing => {
                let mut template = self.api.keys(&self.state.category, &self.state.id).await?;
                template.strip_internal_id();
                template.set_field("id", &self.state.id);
                template.set_field("category", &self.state.category);
                self.pair.load(template.clone(), template);
                self.availability.no_record();
            }
        }

        self.poll_revision_status().await;
        Ok(())
    }

    async fn create_inner(&mut self) -> Result<(), AppError> {
        self.gate.check(self.pair.modified_text())?;
        let record = self.pair.modified_record()?;

        self.availability.begin_busy();
        self.api.insert(record.0.clone()).await?;

        if self.options.with_versioning {
            self.registry.refresh(&self.api, &self.state.id).await?;
            if let Some(version) = record.resource_version() {
                self.registry.select(version);
            }
        }
        self.lookup_inner().await
    }

    async fn update_inner(&mut self) -> Result<(), AppError> {
        self.gate.check(self.pair.modified_text())?;
        let modified = self.pair.modified_record()?;
        let original = self.pair.original_record()?;

        self.availability.begin_busy();
        self.api.update(modified.0.clone(), original.0).await?;

        if self.options.with_versioning {
            self.registry.refresh(&self.api, &self.state.id).await?;
            if let Some(version) = modified.resource_version() {
                self.registry.select(version);
            }
        }
        self.lookup_inner().await
    }

    async fn add_version_inner(&mut self) -> Result<(), AppError> {
        if !self.options.with_versioning {
            return Err(AppError::InvalidOperation(
                "Versioning is disabled for this session".to_string(),
            ));
        }
        self.gate.check(self.pair.modified_text())?;
        let record = self.pair.modified_record()?;
        let id = record.id().unwrap_or_default().to_string();
        let version = record.resource_version().unwrap_or_default().to_string();

        self.availability.begin_busy();
        if self.api.check_exists(&id, &version).await? {
            return Err(AppError::DuplicateVersion(
                "Resource version already exists".to_string(),
            ));
        }
        self.api.insert(record.0.clone()).await?;

        self.registry.refresh(&self.api, &self.state.id).await?;
        self.registry.select(&version);
        self.lookup_inner().await
    }

    async fn delete_inner(&mut self) -> Result<(), AppError> {
        // No validation gate: deleting does not require the modified buffer
        // to be well-formed. Identity comes from the original buffer.
        let record = self.pair.original_record()?;

        self.availability.begin_busy();
        self.api.delete(record.0).await?;

        if self.options.with_versioning {
            self.registry.refresh(&self.api, &self.state.id).await?;
            let first = self.registry.first().to_string();
            self.registry.select(&first);
        }
        self.lookup_inner().await
    }

    async fn revise_inner(&mut self, operation: &str) -> Result<(), AppError> {
        let op: RevisionOp = operation.parse()?;
        if !self.options.with_revision_history {
            return Err(AppError::InvalidOperation(
                "Revision history is disabled for this session".to_string(),
            ));
        }

        self.availability.begin_busy();
        match op {
            RevisionOp::Undo => self.api.undo().await?,
            RevisionOp::Redo => self.api.redo().await?,
        };
        self.lookup_inner().await
    }

    /// Refresh the undo/redo flags from the backend's revision-stack depth.
    /// Failures here are logged, not surfaced: the stale flags are corrected
    /// by the next lookup.
    async fn poll_revision_status(&mut self) {
        if !self.options.with_revision_history {
            return;
        }
        match self.api.revision_status().await {
            Ok(status) => self.availability.apply_revision_status(status),
            Err(err) => tracing::warn!("Revision status refresh failed: {}", err),
        }
    }

    /// Common exit path: on failure, drop out of the busy state (no
    /// rollback; the next lookup resynchronizes) and show the alert.
    async fn finish_op(&mut self, result: Result<(), AppError>) -> Result<(), AppError> {
        if result.is_err() && self.availability.state() == RecordState::Busy {
            self.availability.end_busy();
            self.poll_revision_status().await;
        }
        self.report(result)
    }

    fn report<T>(&self, result: Result<T, AppError>) -> Result<T, AppError> {
        if let Err(err) = &result {
            self.alerts.alert(err.error_code(), &err.message());
        }
        result
    }
}
