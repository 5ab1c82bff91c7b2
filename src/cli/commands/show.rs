//! Show command handler

use unitracker::core::models::{Course, EffectiveStatus};
use unitracker::core::tracker::Tracker;

/// Render the plan tree with per-course status glyphs.
///
/// # Arguments
/// * `tracker` - Loaded tracker state
/// * `available` - Only list courses currently available to take
/// * `deps` - Append prerequisite ids to each course line
pub fn run(tracker: &Tracker, available: bool, deps: bool) {
    if available {
        run_available(tracker, deps);
        return;
    }

    let plan = tracker.plan();
    println!("\n{}", plan.title);
    if !plan.subtitle.is_empty() {
        println!("{}", plan.subtitle);
    }

    for year in &plan.years {
        println!("\n{}", year.label);
        for sem in &year.semesters {
            println!("  {}", sem.label);
            if sem.courses.is_empty() {
                println!("    (no courses)");
            }
            for course in &sem.courses {
                println!("    {}", course_line(tracker, course, deps));
            }
        }
    }

    println!("\n● aprobada  ◐ regular  ○ puedo cursar  · pendiente");
}

fn run_available(tracker: &Tracker, deps: bool) {
    let plan = tracker.plan();
    let mut count = 0usize;

    println!("\nAvailable to take:");
    for course in plan.all_courses() {
        if tracker.effective_status(&course.id) == EffectiveStatus::Cursar {
            println!("  {}", course_line(tracker, course, deps));
            count += 1;
        }
    }
    if count == 0 {
        println!("  (none - complete some prerequisites first)");
    }
}

/// One display line for a course: glyph, id, name, then hours, grade and
/// prerequisites as preferences and flags allow
fn course_line(tracker: &Tracker, course: &Course, deps: bool) -> String {
    let status = tracker.effective_status(&course.id);
    let mut line = format!("{} [{}] {}", status.symbol(), course.id, course.name);

    let prefs = tracker.preferences();
    if prefs.show_hours && course.weekly_hours > 0 {
        line.push_str(&format!(" ({}h)", course.weekly_hours));
    }
    if prefs.show_grades {
        if let Some(grade) = tracker.grades().get(&course.id) {
            line.push_str(&format!(" nota: {grade}"));
        }
    }
    if deps && !course.dependencies.is_empty() {
        line.push_str(&format!(" (requiere: {})", course.dependencies.join(", ")));
    }
    line
}
