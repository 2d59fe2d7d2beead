//! Action availability: which editing actions are currently permitted.

use crate::models::RevisionStatus;

/// Whether the current record exists remotely, with a transient busy state
/// while a network call for the current operation is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// Id not found remotely: create allowed, everything else disallowed.
    NoRecord,
    /// Record loaded: create disallowed, update/delete/add-version allowed.
    Loaded,
    /// A network call is in flight; all actions disabled.
    Busy,
}

/// Enabled-flags for the editing and revision controls. Never independently
/// mutated by the user; recomputed after every lookup and every
/// revision-status refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionFlags {
    pub create: bool,
    pub update: bool,
    pub delete: bool,
    pub add_version: bool,
    pub undo: bool,
    pub redo: bool,
}

/// State machine deriving [`ActionFlags`] from lookup outcomes, in-flight
/// network activity and the backend-reported revision-stack depth.
#[derive(Debug, Clone)]
pub struct ActionAvailability {
    state: RecordState,
    remembered: RecordState,
    flags: ActionFlags,
}

impl Default for ActionAvailability {
    fn default() -> Self {
        // Nothing is loaded yet; every action stays disabled until the
        // first lookup completes.
        Self {
            state: RecordState::NoRecord,
            remembered: RecordState::NoRecord,
            flags: ActionFlags::default(),
        }
    }
}

impl ActionAvailability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RecordState {
        self.state
    }

    /// Current flags; all editing actions read as disabled while busy.
    pub fn flags(&self) -> ActionFlags {
        if self.state == RecordState::Busy {
            ActionFlags::default()
        } else {
            self.flags
        }
    }

    /// Enter the busy state, remembering the pre-busy state.
    pub fn begin_busy(&mut self) {
        if self.state != RecordState::Busy {
            self.remembered = self.state;
        }
        self.state = RecordState::Busy;
    }

    /// Restore the remembered state. Used only on operation failure; a
    /// successful operation re-enters via a fresh lookup instead, because
    /// the action may have changed existence or version.
    pub fn end_busy(&mut self) {
        if self.state == RecordState::Busy {
            self.state = self.remembered;
        }
    }

    /// Lookup found the record.
    pub fn record_loaded(&mut self) {
        self.state = RecordState::Loaded;
        self.flags.create = false;
        self.flags.update = true;
        self.flags.delete = true;
        self.flags.add_version = true;
    }

    /// Lookup came back not-found.
    pub fn no_record(&mut self) {
        self.state = RecordState::NoRecord;
        self.flags.create = true;
        self.flags.update = false;
        self.flags.delete = false;
        self.flags.add_version = false;
    }

    /// Apply the backend's disabled-flags verbatim.
    pub fn apply_revision_status(&mut self, status: RevisionStatus) {
        self.flags.undo = !status.undo;
        self.flags.redo = !status.redo;
    }
}
