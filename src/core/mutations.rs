//! Structural plan mutations
//!
//! Every operation takes the current plan by reference and returns a new
//! plan value. Inapplicable operations (unknown ids, out-of-range indices,
//! blank names) return a value equal to the input, never an error. Callers
//! decide whether and when the result is persisted.

use super::models::{Course, Semester, StudyPlan, Year};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Outcome of [`toggle_dependency`], so the caller can phrase its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyChange {
    /// The prerequisite edge was added
    Added,
    /// The prerequisite edge was removed
    Removed,
}

/// Monotonic course-id counter, seeded from wall-clock millis so ids stay
/// unique across process restarts without any persisted counter.
static NEXT_COURSE_ID: LazyLock<AtomicU64> = LazyLock::new(|| {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(0));
    AtomicU64::new(seed)
});

/// Generate a fresh unique course id (`course-{n}`)
#[must_use]
pub fn generate_course_id() -> String {
    format!("course-{}", NEXT_COURSE_ID.fetch_add(1, Ordering::SeqCst))
}

/// Append a new course to the semester at a 0-based flattened position.
///
/// No-op when the name is blank or the position does not exist. The new
/// course gets a generated id, the given hours, and no prerequisites.
#[must_use]
pub fn add_course(
    plan: &StudyPlan,
    semester_flat_index: usize,
    name: &str,
    weekly_hours: u32,
) -> StudyPlan {
    let mut next = plan.clone();
    if name.trim().is_empty() {
        return next;
    }

    if let Some(sem) = semester_at_mut(&mut next, semester_flat_index) {
        sem.courses.push(Course::new(
            generate_course_id(),
            name.to_string(),
            weekly_hours,
        ));
    }
    next
}

/// Remove a course and strip its id from every other course's
/// prerequisites, plan-wide. Idempotent.
#[must_use]
pub fn remove_course(plan: &StudyPlan, course_id: &str) -> StudyPlan {
    let mut next = plan.clone();
    for year in &mut next.years {
        for sem in &mut year.semesters {
            sem.courses.retain(|course| course.id != course_id);
            for course in &mut sem.courses {
                course.dependencies.retain(|dep| dep != course_id);
            }
        }
    }
    next
}

/// Set the weekly hours on a course. No-op for unknown ids; any
/// non-negative value is accepted (the presentation layer clamps input).
#[must_use]
pub fn update_course_hours(plan: &StudyPlan, course_id: &str, hours: u32) -> StudyPlan {
    let mut next = plan.clone();
    if let Some(course) = course_mut(&mut next, course_id) {
        course.weekly_hours = hours;
    }
    next
}

/// Append a semester: to the last year while it has fewer than two,
/// otherwise to a freshly created year. Labels are recomputed afterwards.
#[must_use]
pub fn add_semester(plan: &StudyPlan) -> StudyPlan {
    let mut next = plan.clone();

    let appended = match next.years.last_mut() {
        Some(year) if year.semesters.len() < 2 => {
            let number = u32::try_from(year.semesters.len()).unwrap_or(0) + 1;
            year.semesters.push(Semester::new(number, String::new()));
            true
        }
        _ => false,
    };

    if !appended {
        let number = u32::try_from(next.years.len()).unwrap_or(0) + 1;
        let mut year = Year::new(number, String::new());
        year.semesters.push(Semester::new(1, String::new()));
        next.years.push(year);
    }

    reindex(&mut next);
    next
}

/// Remove the semester at a 0-based flattened position, cascading
/// prerequisite cleanup for every course it contained and dropping the
/// parent year when it becomes empty. No-op for unknown positions.
#[must_use]
pub fn remove_semester(plan: &StudyPlan, semester_flat_index: usize) -> StudyPlan {
    let mut next = plan.clone();

    let mut flat = 0usize;
    let mut removed_ids: Option<Vec<String>> = None;
    for year in &mut next.years {
        let mut target = None;
        for (s_idx, _) in year.semesters.iter().enumerate() {
            if flat == semester_flat_index {
                target = Some(s_idx);
            }
            flat += 1;
            if target.is_some() {
                break;
            }
        }
        if let Some(s_idx) = target {
            let removed = year.semesters.remove(s_idx);
            removed_ids = Some(removed.courses.into_iter().map(|c| c.id).collect());
            break;
        }
    }

    let Some(removed_ids) = removed_ids else {
        return next;
    };

    next.years.retain(|year| !year.semesters.is_empty());
    for year in &mut next.years {
        for sem in &mut year.semesters {
            for course in &mut sem.courses {
                course
                    .dependencies
                    .retain(|dep| !removed_ids.contains(dep));
            }
        }
    }

    reindex(&mut next);
    next
}

/// Move a course: remove it from wherever it sits, then insert it at
/// `target_position` (clamped to the semester's length) within the
/// semester at `target_semester_flat_index`. Same-semester reorders and
/// cross-semester moves behave uniformly; the target position is
/// interpreted against the post-removal layout. No-op when the course or
/// the target semester does not exist.
#[must_use]
pub fn reorder_course(
    plan: &StudyPlan,
    course_id: &str,
    target_semester_flat_index: usize,
    target_position: usize,
) -> StudyPlan {
    let mut next = plan.clone();

    let mut moved: Option<Course> = None;
    'search: for year in &mut next.years {
        for sem in &mut year.semesters {
            if let Some(pos) = sem.courses.iter().position(|c| c.id == course_id) {
                moved = Some(sem.courses.remove(pos));
                break 'search;
            }
        }
    }

    let Some(moved) = moved else {
        return next;
    };

    if let Some(sem) = semester_at_mut(&mut next, target_semester_flat_index) {
        let insert_at = target_position.min(sem.courses.len());
        sem.courses.insert(insert_at, moved);
        next
    } else {
        plan.clone()
    }
}

/// Toggle the prerequisite edge `source_id -> target_id` on the target
/// course: remove it when present, append it otherwise.
///
/// # Returns
/// The new plan plus what happened; `None` when the target course does not
/// exist or the edge would be a self-loop (both leave the plan unchanged).
/// No cycle detection beyond the self-loop guard; a user may wire mutually
/// dependent courses, and downstream consumers stay total on such input.
#[must_use]
pub fn toggle_dependency(
    plan: &StudyPlan,
    source_id: &str,
    target_id: &str,
) -> (StudyPlan, Option<DependencyChange>) {
    let mut next = plan.clone();
    if source_id == target_id {
        return (next, None);
    }

    let Some(course) = course_mut(&mut next, target_id) else {
        return (next, None);
    };

    let change = if course.remove_dependency(source_id) {
        DependencyChange::Removed
    } else {
        course.dependencies.push(source_id.to_string());
        DependencyChange::Added
    };
    (next, Some(change))
}

/// Merge title/subtitle changes into the plan
#[must_use]
pub fn update_plan_meta(
    plan: &StudyPlan,
    title: Option<&str>,
    subtitle: Option<&str>,
) -> StudyPlan {
    let mut next = plan.clone();
    if let Some(title) = title {
        next.title = title.to_string();
    }
    if let Some(subtitle) = subtitle {
        next.subtitle = subtitle.to_string();
    }
    next
}

/// Recompute positional numbering and labels from scratch: years become
/// `Año 1..N`, semesters are renumbered within their year and labeled with
/// a single plan-wide running counter (`1° Cuatrimestre`, `2° Cuatrimestre`,
/// ...). Year/semester identity is purely positional, so labels are never
/// patched incrementally.
pub fn reindex(plan: &mut StudyPlan) {
    let mut sem_counter = 0u32;
    let mut year_number = 0u32;
    for year in &mut plan.years {
        year_number += 1;
        year.number = year_number;
        year.label = format!("Año {year_number}");

        let mut sem_number = 0u32;
        for sem in &mut year.semesters {
            sem_number += 1;
            sem_counter += 1;
            sem.number = sem_number;
            sem.label = format!("{sem_counter}° Cuatrimestre");
        }
    }
}

fn semester_at_mut(plan: &mut StudyPlan, flat_index: usize) -> Option<&mut Semester> {
    plan.years
        .iter_mut()
        .flat_map(|year| year.semesters.iter_mut())
        .nth(flat_index)
}

fn course_mut<'a>(plan: &'a mut StudyPlan, course_id: &str) -> Option<&'a mut Course> {
    plan.years
        .iter_mut()
        .flat_map(|year| year.semesters.iter_mut())
        .flat_map(|sem| sem.courses.iter_mut())
        .find(|course| course.id == course_id)
}
