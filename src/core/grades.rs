//! Grade map
//!
//! Grades live beside the plan, keyed by course id. Accepted values are
//! integers in [1,10]; a cleared grade is stored as an explicit null.
//! Loading is deliberately tolerant: persisted junk (empty strings,
//! non-numeric text, out-of-range numbers) reads as "no grade" instead of
//! failing the whole document.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lowest accepted grade
pub const MIN_GRADE: u8 = 1;
/// Highest accepted grade
pub const MAX_GRADE: u8 = 10;

/// Per-course grades, persisted as a plain JSON object under
/// `unitracker-grades`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GradeBook {
    grades: HashMap<String, Option<u8>>,
}

impl GradeBook {
    /// Empty grade map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grade for a course, if one is set
    #[must_use]
    pub fn get(&self, course_id: &str) -> Option<u8> {
        self.grades.get(course_id).copied().flatten()
    }

    /// Whether a course has a grade
    #[must_use]
    pub fn has_grade(&self, course_id: &str) -> bool {
        self.get(course_id).is_some()
    }

    /// Store a grade if it is in range
    ///
    /// # Returns
    /// `true` when accepted; out-of-range values leave the stored grade
    /// untouched and return `false`
    pub fn set(&mut self, course_id: &str, grade: u8) -> bool {
        if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            return false;
        }
        self.grades.insert(course_id.to_string(), Some(grade));
        true
    }

    /// Clear a course's grade (stored as an explicit null)
    pub fn clear(&mut self, course_id: &str) {
        self.grades.insert(course_id.to_string(), None);
    }

    /// Drop every stored grade
    pub fn reset(&mut self) {
        self.grades.clear();
    }

    /// Number of entries, including cleared ones
    #[must_use]
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    /// Whether no entries are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }
}

impl<'de> Deserialize<'de> for GradeBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: HashMap<String, serde_json::Value> = HashMap::deserialize(deserializer)?;
        let grades = raw
            .into_iter()
            .map(|(id, value)| (id, coerce_grade(&value)))
            .collect();
        Ok(Self { grades })
    }
}

/// Map a raw persisted value to a grade. Numbers and numeric strings in
/// [1,10] count; null, empty strings, and anything else read as no grade.
fn coerce_grade(value: &serde_json::Value) -> Option<u8> {
    let n = match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    u8::try_from(n)
        .ok()
        .filter(|g| (MIN_GRADE..=MAX_GRADE).contains(g))
}
