//! Edit-session snapshot
//!
//! One snapshot at most. Starting a session captures the plan by value;
//! starting again overwrites the old snapshot. Rollback hands the captured
//! value back exactly once.

use super::models::StudyPlan;

/// Snapshot cell for the single in-flight edit session
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    snapshot: Option<StudyPlan>,
}

impl EditSession {
    /// No session active
    #[must_use]
    pub const fn new() -> Self {
        Self { snapshot: None }
    }

    /// Capture a deep copy of `plan`, replacing any previous snapshot
    pub fn capture(&mut self, plan: &StudyPlan) {
        self.snapshot = Some(plan.clone());
    }

    /// Drop the snapshot (the edits are being kept)
    pub fn clear(&mut self) {
        self.snapshot = None;
    }

    /// Take the snapshot out for restore; `None` when no session is active
    pub fn take(&mut self) -> Option<StudyPlan> {
        self.snapshot.take()
    }

    /// Whether a session is in flight
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.snapshot.is_some()
    }
}
