//! Status resolution
//!
//! The override map stores only what the user set. Availability is derived
//! per lookup: a course with no unmet prerequisites reads as "cursar"
//! unless an explicit override wins. Satisfaction checks direct
//! prerequisites' stored overrides (one level, never recursive) so only
//! explicit regular/aprobada marks propagate availability.

use super::models::{CourseStatus, EffectiveStatus, StudyPlan};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-course status overrides, keyed by course id. Persisted as a plain
/// JSON object under `unitracker-statuses`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusOverrides {
    overrides: HashMap<String, CourseStatus>,
}

impl StatusOverrides {
    /// Empty override map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored override for a course; absence reads as `pendiente`
    #[must_use]
    pub fn stored(&self, course_id: &str) -> CourseStatus {
        self.overrides
            .get(course_id)
            .copied()
            .unwrap_or_default()
    }

    /// Store an override. Entries survive plan edits; overrides for ids no
    /// longer in the plan are inert, not purged.
    pub fn set(&mut self, course_id: &str, status: CourseStatus) {
        self.overrides.insert(course_id.to_string(), status);
    }

    /// Effective status of a course within `plan`
    ///
    /// Explicit non-pendiente overrides win. Otherwise a course with no
    /// prerequisites (or not present in the plan) is available; a course
    /// with prerequisites is available iff every direct prerequisite's
    /// stored override satisfies it.
    #[must_use]
    pub fn effective(&self, plan: &StudyPlan, course_id: &str) -> EffectiveStatus {
        let stored = self.stored(course_id);
        if stored != CourseStatus::Pendiente {
            return stored.into();
        }

        let Some(course) = plan.course(course_id) else {
            return EffectiveStatus::Cursar;
        };
        if course.dependencies.is_empty() {
            return EffectiveStatus::Cursar;
        }

        let satisfied = course
            .dependencies
            .iter()
            .all(|dep| self.stored(dep).satisfies_prerequisite());
        if satisfied {
            EffectiveStatus::Cursar
        } else {
            EffectiveStatus::Pendiente
        }
    }

    /// Advance a course one step in the click cycle and return the new
    /// override. An available course jumps straight to `regular` (no
    /// redundant "still pendiente" click); anything else follows the
    /// successor of the STORED override, not the effective one.
    pub fn cycle(&mut self, plan: &StudyPlan, course_id: &str) -> CourseStatus {
        let next = if self.effective(plan, course_id) == EffectiveStatus::Cursar {
            CourseStatus::Regular
        } else {
            self.stored(course_id).next()
        };
        self.set(course_id, next);
        next
    }

    /// Drop every stored override
    pub fn reset(&mut self) {
        self.overrides.clear();
    }

    /// Number of stored overrides
    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Whether no overrides are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
