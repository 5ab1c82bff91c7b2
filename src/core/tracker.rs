//! Tracker facade
//!
//! Ties the pure plan/status/grade logic to a [`Storage`] backend. The
//! CLI builds one `Tracker` per invocation; an embedding UI would keep
//! one alive for the whole session. All reads come from in-memory state
//! loaded up front; every completed operation persists the documents it
//! touched before returning.

use super::editor::EditSession;
use super::grades::{GradeBook, MAX_GRADE, MIN_GRADE};
use super::library::{self, PlanLibrary, UserData};
use super::models::{EffectiveStatus, StudyPlan};
use super::preferences::Preferences;
use super::prune::prune_plan_dependencies;
use super::stats::{plan_stats, PlanStats};
use super::statuses::StatusOverrides;
use super::storage::{
    load_json_or, save_json, Storage, CUSTOM_PLANS_KEY, GRADES_KEY, PLAN_KEY, PREFERENCES_KEY,
    STATUSES_KEY,
};
use crate::{debug, info};
use serde::Serialize;

/// Effective status before and after a cycle step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    /// Effective status before the cycle
    pub from: EffectiveStatus,
    /// Effective status after the cycle
    pub to: EffectiveStatus,
}

/// The study-plan engine: current plan, progress, preferences and the
/// storage backend they persist to
pub struct Tracker {
    storage: Box<dyn Storage>,
    plan: StudyPlan,
    statuses: StatusOverrides,
    grades: GradeBook,
    preferences: Preferences,
    session: EditSession,
}

impl Tracker {
    /// Load tracker state from storage, falling back to the built-in
    /// default plan and empty progress when nothing is persisted yet
    #[must_use]
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self::with_fallback_preferences(storage, Preferences::default())
    }

    /// Like [`new`](Self::new), but with explicit preference defaults used
    /// when no preferences document has been persisted (the CLI seeds these
    /// from the `[display]` config section)
    #[must_use]
    pub fn with_fallback_preferences(storage: Box<dyn Storage>, fallback: Preferences) -> Self {
        let plan = load_json_or(storage.as_ref(), PLAN_KEY, library::default_plan());
        let statuses = load_json_or(storage.as_ref(), STATUSES_KEY, StatusOverrides::new());
        let grades = load_json_or(storage.as_ref(), GRADES_KEY, GradeBook::new());
        let preferences = load_json_or(storage.as_ref(), PREFERENCES_KEY, fallback);
        debug!(
            "Tracker loaded: {} courses, {} status overrides, {} grades",
            plan.course_count(),
            statuses.len(),
            grades.len()
        );

        Self {
            storage,
            plan,
            statuses,
            grades,
            preferences,
            session: EditSession::new(),
        }
    }

    /// Current plan
    #[must_use]
    pub const fn plan(&self) -> &StudyPlan {
        &self.plan
    }

    /// Stored status overrides
    #[must_use]
    pub const fn statuses(&self) -> &StatusOverrides {
        &self.statuses
    }

    /// Recorded grades
    #[must_use]
    pub const fn grades(&self) -> &GradeBook {
        &self.grades
    }

    /// Display preferences
    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Effective status of a course against the current plan
    #[must_use]
    pub fn effective_status(&self, course_id: &str) -> EffectiveStatus {
        self.statuses.effective(&self.plan, course_id)
    }

    /// Advance a course one step through the status cycle and persist the
    /// overrides
    ///
    /// # Returns
    /// The effective status before and after, or `None` when the course is
    /// not part of the current plan (nothing is stored in that case)
    ///
    /// # Errors
    /// Returns an error when the status document cannot be persisted
    pub fn cycle_status(&mut self, course_id: &str) -> Result<Option<StatusChange>, String> {
        if !self.plan.contains_course(course_id) {
            return Ok(None);
        }

        let from = self.statuses.effective(&self.plan, course_id);
        self.statuses.cycle(&self.plan, course_id);
        let to = self.statuses.effective(&self.plan, course_id);
        self.persist(STATUSES_KEY, &self.statuses)?;
        info!("Status of '{course_id}': {from} -> {to}");
        Ok(Some(StatusChange { from, to }))
    }

    /// Record a grade for a course and persist the grade book
    ///
    /// # Errors
    /// Returns an error when the course is not in the plan, the grade is
    /// outside the valid range, or the grade document cannot be persisted
    pub fn set_grade(&mut self, course_id: &str, grade: u8) -> Result<(), String> {
        if !self.plan.contains_course(course_id) {
            return Err(format!("Course '{course_id}' is not in the plan"));
        }
        if !self.grades.set(course_id, grade) {
            return Err(format!(
                "Grade must be between {MIN_GRADE} and {MAX_GRADE}"
            ));
        }
        self.persist(GRADES_KEY, &self.grades)
    }

    /// Clear a course's grade without forgetting the entry
    ///
    /// # Errors
    /// Returns an error when the grade document cannot be persisted
    pub fn clear_grade(&mut self, course_id: &str) -> Result<(), String> {
        self.grades.clear(course_id);
        self.persist(GRADES_KEY, &self.grades)
    }

    /// Update a display preference and persist the preferences document
    ///
    /// # Errors
    /// Returns an error when the key is unknown, the value does not parse,
    /// or the document cannot be persisted
    pub fn set_preference(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.preferences.set(key, value)?;
        self.persist(PREFERENCES_KEY, &self.preferences)
    }

    /// Aggregate statistics over the current plan and progress
    #[must_use]
    pub fn stats(&self) -> PlanStats {
        plan_stats(&self.plan, &self.statuses, &self.grades)
    }

    /// Copy of the current plan with transitively redundant prerequisite
    /// edges removed
    #[must_use]
    pub fn pruned_plan(&self) -> StudyPlan {
        prune_plan_dependencies(&self.plan)
    }

    /// Snapshot the current plan so a later [`cancel_edit`](Self::cancel_edit)
    /// can restore it. Starting a new session replaces any previous snapshot.
    pub fn begin_edit(&mut self) {
        self.session.capture(&self.plan);
    }

    /// Whether an edit session is in progress
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.session.is_active()
    }

    /// Replace the in-memory plan without persisting. Edit flows stage
    /// changes through this and then commit or cancel.
    pub fn update_plan(&mut self, plan: StudyPlan) {
        self.plan = plan;
    }

    /// Keep the staged plan: drop the snapshot and persist
    ///
    /// # Errors
    /// Returns an error when the plan document cannot be persisted
    pub fn commit_edit(&mut self) -> Result<(), String> {
        self.session.clear();
        self.save_plan()
    }

    /// Throw away staged changes, restoring the snapshot taken at
    /// [`begin_edit`](Self::begin_edit). No-op when no session is active.
    pub fn cancel_edit(&mut self) {
        if let Some(snapshot) = self.session.take() {
            self.plan = snapshot;
        }
    }

    /// Persist the current plan document
    ///
    /// # Errors
    /// Returns an error when the plan document cannot be persisted
    pub fn save_plan(&self) -> Result<(), String> {
        self.persist(PLAN_KEY, &self.plan)
    }

    /// Replace the current plan with one parsed from a JSON document and
    /// persist it. Progress is kept as-is; entries for courses the new plan
    /// does not contain simply stop applying.
    ///
    /// # Errors
    /// Returns an error when the document is not valid plan JSON, the plan
    /// title is blank, or the plan cannot be persisted
    pub fn import_plan(&mut self, json: &str) -> Result<(), String> {
        let plan: StudyPlan =
            serde_json::from_str(json).map_err(|e| format!("Invalid plan document: {e}"))?;
        if plan.title.trim().is_empty() {
            return Err("Plan title cannot be empty".to_string());
        }

        info!("Importing plan '{}' ({} courses)", plan.title, plan.course_count());
        self.session.clear();
        self.plan = plan;
        self.save_plan()
    }

    /// Serialize the current plan as pretty-printed JSON, optionally with
    /// transitively redundant prerequisite edges removed
    ///
    /// # Errors
    /// Returns an error when the plan cannot be serialized
    pub fn export_plan(&self, pruned: bool) -> Result<String, String> {
        let plan = if pruned {
            prune_plan_dependencies(&self.plan)
        } else {
            self.plan.clone()
        };
        serde_json::to_string_pretty(&plan).map_err(|e| format!("Failed to serialize plan: {e}"))
    }

    /// Forget all statuses and grades, persisting the now-empty documents
    ///
    /// # Errors
    /// Returns an error when a progress document cannot be persisted
    pub fn reset_progress(&mut self) -> Result<(), String> {
        self.statuses.reset();
        self.grades.reset();
        self.persist(STATUSES_KEY, &self.statuses)?;
        self.persist(GRADES_KEY, &self.grades)
    }

    /// Discard the current plan entirely: install the built-in blank plan,
    /// clear all progress, and drop the persisted plan document so a fresh
    /// start falls back to the default plan
    ///
    /// # Errors
    /// Returns an error when a document cannot be persisted or removed
    pub fn delete_plan(&mut self) -> Result<(), String> {
        self.session.clear();
        self.plan = library::empty_plan();
        self.statuses.reset();
        self.grades.reset();
        self.persist(STATUSES_KEY, &self.statuses)?;
        self.persist(GRADES_KEY, &self.grades)?;
        self.storage
            .remove(PLAN_KEY)
            .map_err(|e| format!("Failed to remove stored plan: {e}"))
    }

    /// The saved-plans library, loaded fresh from storage
    #[must_use]
    pub fn library(&self) -> PlanLibrary {
        load_json_or(self.storage.as_ref(), CUSTOM_PLANS_KEY, PlanLibrary::new())
    }

    /// Save a copy of the current plan to the library under `title`,
    /// together with the progress current at save time. An existing entry
    /// with the same title is replaced.
    ///
    /// # Errors
    /// Returns an error when the title is blank or the library cannot be
    /// persisted
    pub fn save_to_library(&self, title: &str, subtitle: &str) -> Result<(), String> {
        let mut library = self.library();
        library.save(
            &self.plan,
            title,
            subtitle,
            UserData {
                statuses: self.statuses.clone(),
                grades: self.grades.clone(),
            },
        )?;
        self.persist(CUSTOM_PLANS_KEY, &library)
    }

    /// Switch to a plan from the library or a built-in template. Saved
    /// entries carrying progress restore it; entries without progress (all
    /// built-in templates) start clean. Saved entries shadow templates with
    /// the same title.
    ///
    /// # Returns
    /// `true` when progress was restored from the entry, `false` when it
    /// was reset
    ///
    /// # Errors
    /// Returns an error when no entry or template has that title, or a
    /// document cannot be persisted
    pub fn load_from_library(&mut self, title: &str) -> Result<bool, String> {
        let library = self.library();
        let (plan, user_data) = if let Some(saved) = library.find(title) {
            (saved.plan.clone(), saved.user_data.clone())
        } else if let Some(template) = library::builtin_templates()
            .into_iter()
            .find(|template| template.title == title)
        {
            (template, None)
        } else {
            return Err(format!("No saved plan or template named '{title}'"));
        };

        let restored = user_data.is_some();
        if let Some(data) = user_data {
            self.statuses = data.statuses;
            self.grades = data.grades;
        } else {
            self.statuses.reset();
            self.grades.reset();
        }

        info!(
            "Loaded plan '{title}' ({})",
            if restored { "progress restored" } else { "progress reset" }
        );
        self.session.clear();
        self.plan = plan;
        self.save_plan()?;
        self.persist(STATUSES_KEY, &self.statuses)?;
        self.persist(GRADES_KEY, &self.grades)?;
        Ok(restored)
    }

    /// Remove a saved entry from the library
    ///
    /// # Returns
    /// `true` if an entry was removed
    ///
    /// # Errors
    /// Returns an error when the library cannot be persisted
    pub fn delete_from_library(&self, title: &str) -> Result<bool, String> {
        let mut library = self.library();
        if !library.delete(title) {
            return Ok(false);
        }
        self.persist(CUSTOM_PLANS_KEY, &library)?;
        Ok(true)
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) -> Result<(), String> {
        save_json(self.storage.as_ref(), key, value)
            .map_err(|e| format!("Failed to persist '{key}': {e}"))
    }
}
