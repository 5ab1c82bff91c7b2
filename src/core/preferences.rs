//! Display preferences
//!
//! Persisted under `unitracker-preferences`. Stored values are merged over
//! the defaults field-wise, so a document from an older version with a
//! field missing still loads.

use serde::{Deserialize, Serialize};
use std::fmt;

const fn default_true() -> bool {
    true
}

/// What the plan grid shows per course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Show weekly hours on each course
    #[serde(rename = "showHours", default = "default_true")]
    pub show_hours: bool,

    /// Show grades on each course
    #[serde(rename = "showGrades", default = "default_true")]
    pub show_grades: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            show_hours: true,
            show_grades: true,
        }
    }
}

impl Preferences {
    /// Get a preference by key (`show-hours` / `show-grades`)
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "show_hours" | "show-hours" => Some(self.show_hours.to_string()),
            "show_grades" | "show-grades" => Some(self.show_grades.to_string()),
            _ => None,
        }
    }

    /// Set a preference by key
    ///
    /// # Errors
    /// Returns an error for unknown keys or non-boolean values
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let field = match key {
            "show_hours" | "show-hours" => &mut self.show_hours,
            "show_grades" | "show-grades" => &mut self.show_grades,
            _ => return Err(format!("Unknown preference key: '{key}'")),
        };
        *field = value
            .parse::<bool>()
            .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))?;
        Ok(())
    }
}

impl fmt::Display for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "show-hours = {}", self.show_hours)?;
        writeln!(f, "show-grades = {}", self.show_grades)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_all_on() {
        let prefs = Preferences::default();
        assert!(prefs.show_hours);
        assert!(prefs.show_grades);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"showHours":false}"#).unwrap();
        assert!(!prefs.show_hours);
        assert!(prefs.show_grades);

        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_get_set_by_key() {
        let mut prefs = Preferences::default();
        prefs.set("show-hours", "false").unwrap();
        assert_eq!(prefs.get("show-hours").as_deref(), Some("false"));
        assert_eq!(prefs.get("show_hours").as_deref(), Some("false"));

        assert!(prefs.set("show-hours", "maybe").is_err());
        assert!(prefs.set("unknown", "true").is_err());
        assert!(prefs.get("unknown").is_none());
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&Preferences::default()).unwrap();
        assert!(json.contains("\"showHours\":true"));
        assert!(json.contains("\"showGrades\":true"));
    }
}
