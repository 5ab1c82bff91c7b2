//! Course status models

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-stored status override for a course.
///
/// Only these three values are ever persisted. Availability ("cursar") is
/// derived from prerequisites and lives in [`EffectiveStatus`] instead, so
/// the type system keeps it out of the override map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    /// Not started (the implicit state when no override is stored).
    #[default]
    Pendiente,
    /// Coursework passed, final exam pending.
    Regular,
    /// Passed.
    Aprobada,
}

impl CourseStatus {
    /// Successor in the click cycle `pendiente → regular → aprobada → pendiente`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Pendiente => Self::Regular,
            Self::Regular => Self::Aprobada,
            Self::Aprobada => Self::Pendiente,
        }
    }

    /// Stable lowercase form used in persisted documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "pendiente",
            Self::Regular => "regular",
            Self::Aprobada => "aprobada",
        }
    }

    /// Whether this override satisfies a prerequisite check.
    #[must_use]
    pub const fn satisfies_prerequisite(self) -> bool {
        matches!(self, Self::Regular | Self::Aprobada)
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Displayed status of a course: either the stored override verbatim, or
/// the derived "available to take" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveStatus {
    /// Not started, prerequisites unmet.
    Pendiente,
    /// Coursework passed, final exam pending.
    Regular,
    /// Passed.
    Aprobada,
    /// Prerequisites satisfied, not yet started. Derived only, never stored.
    Cursar,
}

impl EffectiveStatus {
    /// Spanish display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Regular => "Regular",
            Self::Aprobada => "Aprobada",
            Self::Cursar => "Puedo cursar",
        }
    }

    /// One-character glyph for grid rendering.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Pendiente => "·",
            Self::Regular => "◐",
            Self::Aprobada => "●",
            Self::Cursar => "○",
        }
    }

    /// Whether the course counts toward completed hours (aprobada or regular).
    #[must_use]
    pub const fn counts_completed(self) -> bool {
        matches!(self, Self::Aprobada | Self::Regular)
    }
}

impl From<CourseStatus> for EffectiveStatus {
    fn from(status: CourseStatus) -> Self {
        match status {
            CourseStatus::Pendiente => Self::Pendiente,
            CourseStatus::Regular => Self::Regular,
            CourseStatus::Aprobada => Self::Aprobada,
        }
    }
}

impl fmt::Display for EffectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(CourseStatus::Pendiente.next(), CourseStatus::Regular);
        assert_eq!(CourseStatus::Regular.next(), CourseStatus::Aprobada);
        assert_eq!(CourseStatus::Aprobada.next(), CourseStatus::Pendiente);
    }

    #[test]
    fn test_default_is_pendiente() {
        assert_eq!(CourseStatus::default(), CourseStatus::Pendiente);
    }

    #[test]
    fn test_prerequisite_satisfaction() {
        assert!(!CourseStatus::Pendiente.satisfies_prerequisite());
        assert!(CourseStatus::Regular.satisfies_prerequisite());
        assert!(CourseStatus::Aprobada.satisfies_prerequisite());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&CourseStatus::Aprobada).unwrap();
        assert_eq!(json, "\"aprobada\"");

        let parsed: CourseStatus = serde_json::from_str("\"regular\"").unwrap();
        assert_eq!(parsed, CourseStatus::Regular);
    }

    #[test]
    fn test_effective_labels() {
        assert_eq!(EffectiveStatus::Pendiente.label(), "Pendiente");
        assert_eq!(EffectiveStatus::Regular.label(), "Regular");
        assert_eq!(EffectiveStatus::Aprobada.label(), "Aprobada");
        assert_eq!(EffectiveStatus::Cursar.label(), "Puedo cursar");
    }

    #[test]
    fn test_override_to_effective() {
        assert_eq!(
            EffectiveStatus::from(CourseStatus::Regular),
            EffectiveStatus::Regular
        );
        assert_eq!(
            EffectiveStatus::from(CourseStatus::Pendiente),
            EffectiveStatus::Pendiente
        );
    }
}
