//! Saved-plans library
//!
//! Users can stash the current plan under a title and come back to it
//! later. A saved entry may carry the progress (statuses + grades) that
//! was current at save time; loading such an entry restores that progress,
//! loading one without it starts clean. Built-in templates ship embedded
//! in the binary and never carry progress.

use super::grades::GradeBook;
use super::models::StudyPlan;
use super::statuses::StatusOverrides;
use serde::{Deserialize, Serialize};

/// Progress captured alongside a saved plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    /// Status overrides at save time
    #[serde(default)]
    pub statuses: StatusOverrides,
    /// Grades at save time
    #[serde(default)]
    pub grades: GradeBook,
}

/// One library entry: a plan document plus the optional progress sidecar.
/// Serializes as the plan object itself with an extra `userData` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPlan {
    /// The plan document
    #[serde(flatten)]
    pub plan: StudyPlan,
    /// Progress sidecar, absent on built-in templates
    #[serde(rename = "userData", default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

/// The saved-plans collection, persisted as a JSON array under
/// `unitracker-custom-plans`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanLibrary {
    plans: Vec<SavedPlan>,
}

impl PlanLibrary {
    /// Empty library
    #[must_use]
    pub const fn new() -> Self {
        Self { plans: Vec::new() }
    }

    /// Stored entries in save order
    #[must_use]
    pub fn plans(&self) -> &[SavedPlan] {
        &self.plans
    }

    /// Save a copy of `plan` under `title`, attaching the given progress.
    /// An existing entry with the same title is replaced.
    ///
    /// # Errors
    /// Returns an error when the title is blank
    pub fn save(
        &mut self,
        plan: &StudyPlan,
        title: &str,
        subtitle: &str,
        user_data: UserData,
    ) -> Result<(), String> {
        let title = title.trim();
        if title.is_empty() {
            return Err("Plan title cannot be empty".to_string());
        }

        let mut entry = plan.clone();
        entry.title = title.to_string();
        entry.subtitle = subtitle.trim().to_string();

        self.plans.retain(|saved| saved.plan.title != title);
        self.plans.push(SavedPlan {
            plan: entry,
            user_data: Some(user_data),
        });
        Ok(())
    }

    /// Entry with the given title, if any
    #[must_use]
    pub fn find(&self, title: &str) -> Option<&SavedPlan> {
        self.plans.iter().find(|saved| saved.plan.title == title)
    }

    /// Remove the entry with the given title
    ///
    /// # Returns
    /// `true` if an entry was removed
    pub fn delete(&mut self, title: &str) -> bool {
        let before = self.plans.len();
        self.plans.retain(|saved| saved.plan.title != title);
        self.plans.len() != before
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Whether the library has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

/// The plan installed when nothing is persisted yet
///
/// # Panics
/// Panics if the embedded plan document is invalid JSON. This cannot
/// happen in practice since the document is compiled into the binary.
#[must_use]
pub fn default_plan() -> StudyPlan {
    serde_json::from_str(include_str!("../assets/default_plan.json"))
        .expect("Failed to parse compiled-in default plan")
}

/// The blank plan installed by the delete-plan flow: a single empty
/// semester so courses can be added right away
///
/// # Panics
/// Panics if the embedded plan document is invalid JSON. This cannot
/// happen in practice since the document is compiled into the binary.
#[must_use]
pub fn empty_plan() -> StudyPlan {
    serde_json::from_str(include_str!("../assets/empty_plan.json"))
        .expect("Failed to parse compiled-in empty plan")
}

/// Built-in templates offered alongside user-saved plans. The blank plan
/// is not listed; it backs the delete flow instead.
#[must_use]
pub fn builtin_templates() -> Vec<StudyPlan> {
    vec![default_plan()]
}
