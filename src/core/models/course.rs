//! Course model

use serde::{Deserialize, Serialize};

/// Represents a course in a study plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Stable unique identifier (e.g., "17", "course-1724081567001")
    pub id: String,

    /// Course name (e.g., "Análisis Matemático I")
    pub name: String,

    /// Direct prerequisites - stored as course ids, in insertion order
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Weekly hour load (0 when unknown)
    #[serde(rename = "weeklyHours", default)]
    pub weekly_hours: u32,
}

impl Course {
    /// Create a new course with no prerequisites
    ///
    /// # Arguments
    /// * `id` - Stable unique identifier
    /// * `name` - Full course name
    /// * `weekly_hours` - Weekly hour load
    #[must_use]
    pub const fn new(id: String, name: String, weekly_hours: u32) -> Self {
        Self {
            id,
            name,
            dependencies: Vec::new(),
            weekly_hours,
        }
    }

    /// Whether this course lists `course_id` as a direct prerequisite
    #[must_use]
    pub fn requires(&self, course_id: &str) -> bool {
        self.dependencies.iter().any(|dep| dep == course_id)
    }

    /// Drop a prerequisite edge if present
    ///
    /// # Returns
    /// `true` if the edge existed and was removed
    pub fn remove_dependency(&mut self, course_id: &str) -> bool {
        if let Some(pos) = self.dependencies.iter().position(|dep| dep == course_id) {
            self.dependencies.remove(pos);
            true
        } else {
            false
        }
    }
}
