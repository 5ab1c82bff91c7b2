//! Data models for `unitracker`

pub mod course;
pub mod plan;
pub mod status;

pub use course::Course;
pub use plan::{Semester, StudyPlan, Year};
pub use status::{CourseStatus, EffectiveStatus};
