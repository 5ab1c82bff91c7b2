//! Study plan tree: years, semesters, courses

use super::course::Course;
use serde::{Deserialize, Serialize};

/// A term within a year. Position is what identifies it; labels are
/// display-only and recomputed after structural edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// 1-based position within the owning year (1 or 2 in practice)
    #[serde(rename = "semester")]
    pub number: u32,

    /// Display label (e.g., "3° Cuatrimestre")
    #[serde(default)]
    pub label: String,

    /// Courses in display order
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Semester {
    /// Create an empty semester
    #[must_use]
    pub const fn new(number: u32, label: String) -> Self {
        Self {
            number,
            label,
            courses: Vec::new(),
        }
    }
}

/// A year of the plan: an ordered run of semesters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Year {
    /// 1-based sequence position
    #[serde(rename = "year")]
    pub number: u32,

    /// Display label (e.g., "Año 2")
    #[serde(default)]
    pub label: String,

    /// Semesters in order (0-2 conceptually, not hard-enforced)
    #[serde(default)]
    pub semesters: Vec<Semester>,
}

impl Year {
    /// Create an empty year
    #[must_use]
    pub const fn new(number: u32, label: String) -> Self {
        Self {
            number,
            label,
            semesters: Vec::new(),
        }
    }
}

/// The full study-plan document. The single root aggregate; every mutation
/// produces a new value rather than editing in place, which is what makes
/// edit-session snapshot/rollback safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPlan {
    /// Plan title (wire name `plan`)
    #[serde(rename = "plan")]
    pub title: String,

    /// Subtitle shown under the title (e.g., the degree name)
    #[serde(default)]
    pub subtitle: String,

    /// Years in order
    pub years: Vec<Year>,
}

impl StudyPlan {
    /// Create a plan with no years
    #[must_use]
    pub const fn new(title: String, subtitle: String) -> Self {
        Self {
            title,
            subtitle,
            years: Vec::new(),
        }
    }

    /// Flatten all courses in year/semester order
    #[must_use]
    pub fn all_courses(&self) -> Vec<&Course> {
        self.years
            .iter()
            .flat_map(|year| year.semesters.iter())
            .flat_map(|sem| sem.courses.iter())
            .collect()
    }

    /// Flat list of all semesters in year order
    #[must_use]
    pub fn all_semesters(&self) -> Vec<&Semester> {
        self.years
            .iter()
            .flat_map(|year| year.semesters.iter())
            .collect()
    }

    /// Look up a course anywhere in the plan
    #[must_use]
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.all_courses()
            .into_iter()
            .find(|course| course.id == course_id)
    }

    /// Semester at a 0-based flattened position (years in order, then
    /// semesters in order, one running counter)
    #[must_use]
    pub fn semester_at(&self, flat_index: usize) -> Option<&Semester> {
        self.all_semesters().into_iter().nth(flat_index)
    }

    /// Flattened index of the semester containing `course_id`
    #[must_use]
    pub fn semester_index_of(&self, course_id: &str) -> Option<usize> {
        self.all_semesters()
            .iter()
            .position(|sem| sem.courses.iter().any(|course| course.id == course_id))
    }

    /// Total number of courses
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.years
            .iter()
            .flat_map(|year| year.semesters.iter())
            .map(|sem| sem.courses.len())
            .sum()
    }

    /// Total number of semesters
    #[must_use]
    pub fn semester_count(&self) -> usize {
        self.years.iter().map(|year| year.semesters.len()).sum()
    }

    /// Whether any course with this id exists
    #[must_use]
    pub fn contains_course(&self, course_id: &str) -> bool {
        self.course(course_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> StudyPlan {
        let mut plan = StudyPlan::new("Plan de Estudios".to_string(), "Prueba".to_string());

        let mut year1 = Year::new(1, "Año 1".to_string());
        let mut sem1 = Semester::new(1, "1° Cuatrimestre".to_string());
        sem1.courses.push(Course::new("a".to_string(), "Álgebra".to_string(), 6));
        sem1.courses.push(Course::new("b".to_string(), "Análisis".to_string(), 8));
        let mut sem2 = Semester::new(2, "2° Cuatrimestre".to_string());
        sem2.courses.push(Course::new("c".to_string(), "Física".to_string(), 6));
        year1.semesters.push(sem1);
        year1.semesters.push(sem2);

        let mut year2 = Year::new(2, "Año 2".to_string());
        let mut sem3 = Semester::new(1, "3° Cuatrimestre".to_string());
        sem3.courses.push(Course::new("d".to_string(), "Química".to_string(), 4));
        year2.semesters.push(sem3);

        plan.years.push(year1);
        plan.years.push(year2);
        plan
    }

    #[test]
    fn test_all_courses_order() {
        let plan = sample_plan();
        let ids: Vec<&str> = plan.all_courses().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_course_lookup() {
        let plan = sample_plan();
        assert_eq!(plan.course("c").map(|c| c.name.as_str()), Some("Física"));
        assert!(plan.course("zzz").is_none());
    }

    #[test]
    fn test_semester_at_flat_index() {
        let plan = sample_plan();
        assert_eq!(plan.semester_at(0).map(|s| s.label.as_str()), Some("1° Cuatrimestre"));
        assert_eq!(plan.semester_at(2).map(|s| s.label.as_str()), Some("3° Cuatrimestre"));
        assert!(plan.semester_at(3).is_none());
    }

    #[test]
    fn test_semester_index_of_course() {
        let plan = sample_plan();
        assert_eq!(plan.semester_index_of("a"), Some(0));
        assert_eq!(plan.semester_index_of("c"), Some(1));
        assert_eq!(plan.semester_index_of("d"), Some(2));
        assert_eq!(plan.semester_index_of("zzz"), None);
    }

    #[test]
    fn test_counts() {
        let plan = sample_plan();
        assert_eq!(plan.course_count(), 4);
        assert_eq!(plan.semester_count(), 3);
    }

    #[test]
    fn test_wire_field_names() {
        let plan = sample_plan();
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"plan\":\"Plan de Estudios\""));
        assert!(json.contains("\"semester\":1"));
        assert!(json.contains("\"year\":2"));

        let round: StudyPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(round, plan);
    }

    #[test]
    fn test_subtitle_defaults_when_absent() {
        let parsed: StudyPlan =
            serde_json::from_str(r#"{"plan":"Mi Plan","years":[]}"#).unwrap();
        assert_eq!(parsed.title, "Mi Plan");
        assert_eq!(parsed.subtitle, "");
        assert!(parsed.years.is_empty());
    }
}
