//! Edit command handler

use crate::args::EditSubcommand;
use unitracker::core::models::StudyPlan;
use unitracker::core::mutations::{self, DependencyChange};
use unitracker::core::tracker::Tracker;

/// Weekly-hours ceiling accepted from the command line
const MAX_WEEKLY_HOURS: u32 = 40;

/// Dispatch edit subcommands.
///
/// Every arm stages its change through an edit session: `--dry-run` shows
/// the outcome and rolls the session back, otherwise the session is
/// committed and the plan persisted.
pub fn run(tracker: &mut Tracker, subcommand: EditSubcommand) {
    match stage(tracker, subcommand) {
        Ok((message, true)) => {
            tracker.cancel_edit();
            println!("{message} (dry run - nothing saved)");
        }
        Ok((message, false)) => {
            if let Err(e) = tracker.commit_edit() {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
            println!("✓ {message}");
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Validate one subcommand, stage the mutated plan on the tracker and
/// build the success message. Returns the message and the dry-run flag.
fn stage(tracker: &mut Tracker, subcommand: EditSubcommand) -> Result<(String, bool), String> {
    let plan = tracker.plan().clone();

    let (next, message, dry_run) = match subcommand {
        EditSubcommand::AddCourse {
            semester,
            name,
            hours,
            dry_run,
        } => {
            let flat = to_flat_index(semester, plan.semester_count())?;
            if name.trim().is_empty() {
                return Err("Course name cannot be empty".to_string());
            }
            let label = semester_label(&plan, flat);
            let next = mutations::add_course(&plan, flat, &name, hours.min(MAX_WEEKLY_HOURS));
            (next, format!("Added '{name}' to {label}"), dry_run)
        }
        EditSubcommand::RemoveCourse { course_id, dry_run } => {
            let name = course_name(&plan, &course_id)?;
            let next = mutations::remove_course(&plan, &course_id);
            (
                next,
                format!("Removed '{name}' and every reference to it"),
                dry_run,
            )
        }
        EditSubcommand::SetHours {
            course_id,
            hours,
            dry_run,
        } => {
            let name = course_name(&plan, &course_id)?;
            let clamped = hours.min(MAX_WEEKLY_HOURS);
            let next = mutations::update_course_hours(&plan, &course_id, clamped);
            (
                next,
                format!("'{name}' set to {clamped} weekly hours"),
                dry_run,
            )
        }
        EditSubcommand::AddTerm { dry_run } => {
            let next = mutations::add_semester(&plan);
            let label = next
                .all_semesters()
                .last()
                .map_or_else(String::new, |sem| sem.label.clone());
            let count = next.semester_count();
            (
                next,
                format!("Added {label} ({count} semesters total)"),
                dry_run,
            )
        }
        EditSubcommand::RemoveTerm { semester, dry_run } => {
            let flat = to_flat_index(semester, plan.semester_count())?;
            let label = semester_label(&plan, flat);
            let course_count = plan.semester_at(flat).map_or(0, |sem| sem.courses.len());
            let next = mutations::remove_semester(&plan, flat);
            (
                next,
                format!("Removed {label} and its {course_count} courses"),
                dry_run,
            )
        }
        EditSubcommand::Move {
            course_id,
            semester,
            position,
            dry_run,
        } => {
            let name = course_name(&plan, &course_id)?;
            let flat = to_flat_index(semester, plan.semester_count())?;
            let label = semester_label(&plan, flat);
            // omitted position appends; the engine clamps to the semester length
            let target_position = position.map_or(usize::MAX, |pos| pos.saturating_sub(1));
            let next = mutations::reorder_course(&plan, &course_id, flat, target_position);
            (next, format!("Moved '{name}' to {label}"), dry_run)
        }
        EditSubcommand::Link {
            course_id,
            dependency_id,
            dry_run,
        } => {
            let name = course_name(&plan, &course_id)?;
            if course_id == dependency_id {
                return Err("A course cannot require itself".to_string());
            }

            let (next, change) = mutations::toggle_dependency(&plan, &dependency_id, &course_id);
            let mut message = match change {
                Some(DependencyChange::Added) => {
                    format!("Added prerequisite '{dependency_id}' to '{name}'")
                }
                Some(DependencyChange::Removed) => {
                    format!("Removed prerequisite '{dependency_id}' from '{name}'")
                }
                None => return Err(format!("Could not toggle prerequisite on '{course_id}'")),
            };
            if !plan.contains_course(&dependency_id) {
                message.push_str(&format!(" (note: '{dependency_id}' is not in the plan)"));
            }
            (next, message, dry_run)
        }
        EditSubcommand::Meta {
            title,
            subtitle,
            dry_run,
        } => {
            if title.is_none() && subtitle.is_none() {
                return Err("Provide --title and/or --subtitle".to_string());
            }
            if let Some(title) = &title {
                if title.trim().is_empty() {
                    return Err("Plan title cannot be empty".to_string());
                }
            }

            let next = mutations::update_plan_meta(&plan, title.as_deref(), subtitle.as_deref());
            let mut parts = Vec::new();
            if let Some(title) = &title {
                parts.push(format!("title '{title}'"));
            }
            if let Some(subtitle) = &subtitle {
                parts.push(format!("subtitle '{subtitle}'"));
            }
            (next, format!("Updated plan {}", parts.join(" and ")), dry_run)
        }
    };

    tracker.begin_edit();
    tracker.update_plan(next);
    Ok((message, dry_run))
}

fn course_name(plan: &StudyPlan, course_id: &str) -> Result<String, String> {
    plan.course(course_id)
        .map(|course| course.name.clone())
        .ok_or_else(|| format!("Course '{course_id}' not found in the plan"))
}

fn semester_label(plan: &StudyPlan, flat_index: usize) -> String {
    plan.semester_at(flat_index)
        .map_or_else(String::new, |sem| sem.label.clone())
}

/// Convert a 1-based semester position to the engine's 0-based flat index
fn to_flat_index(position: usize, count: usize) -> Result<usize, String> {
    let flat = position
        .checked_sub(1)
        .ok_or_else(|| "Semester positions start at 1".to_string())?;
    if flat >= count {
        return Err(format!(
            "Semester {position} does not exist (the plan has {count})"
        ));
    }
    Ok(flat)
}
