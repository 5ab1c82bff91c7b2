//! Library crate for `UniTracker`
//! Contains the study-plan engine used by the CLI and by integration tests

pub mod core;
pub mod logger;

pub use crate::core::models::{Course, CourseStatus, EffectiveStatus, Semester, StudyPlan, Year};
pub use crate::core::tracker::Tracker;
