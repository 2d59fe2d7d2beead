//! The original/modified buffer pair backing the diff view.

use crate::errors::AppError;
use crate::models::Record;

/// Two text buffers: `original` is the last-synced-from-server snapshot,
/// `modified` is the user's edit target. Pure state; no network or
/// validation logic lives here. After any successful synchronize-with-server
/// operation the two buffers are byte-identical.
#[derive(Debug, Clone)]
pub struct RecordModelPair {
    original: String,
    modified: String,
}

impl Default for RecordModelPair {
    fn default() -> Self {
        let empty = Record::empty().to_pretty();
        Self {
            original: empty.clone(),
            modified: empty,
        }
    }
}

impl RecordModelPair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both buffers with pretty-printed serializations of the given
    /// records, stripping the backend-internal identity field first.
    pub fn load(&mut self, mut original: Record, mut modified: Record) {
        original.strip_internal_id();
        modified.strip_internal_id();
        self.original = original.to_pretty();
        self.modified = modified.to_pretty();
    }

    pub fn original_text(&self) -> &str {
        &self.original
    }

    pub fn modified_text(&self) -> &str {
        &self.modified
    }

    /// The editing surface: the presentation layer writes the user's edits
    /// here. The original buffer is never edited directly.
    pub fn set_modified_text(&mut self, text: impl Into<String>) {
        self.modified = text.into();
    }

    /// Parse the modified buffer as structured data.
    pub fn modified_record(&self) -> Result<Record, AppError> {
        Record::from_text(&self.modified)
    }

    /// Parse the original buffer as structured data.
    pub fn original_record(&self) -> Result<Record, AppError> {
        Record::from_text(&self.original)
    }

    /// True when there are no unsaved edits.
    pub fn is_synced(&self) -> bool {
        self.original == self.modified
    }
}
