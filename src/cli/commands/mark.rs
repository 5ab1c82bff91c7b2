//! Mark command handler

use unitracker::core::tracker::Tracker;

/// Cycle a course one step through the status cycle and report the change
pub fn run(tracker: &mut Tracker, course_id: &str) {
    match tracker.cycle_status(course_id) {
        Ok(Some(change)) => {
            let name = tracker
                .plan()
                .course(course_id)
                .map_or_else(|| course_id.to_string(), |course| course.name.clone());
            println!("✓ {name}: {} → {}", change.from.label(), change.to.label());
        }
        Ok(None) => {
            eprintln!("✗ Course '{course_id}' not found in the plan");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}
