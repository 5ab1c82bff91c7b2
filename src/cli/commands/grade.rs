//! Grade command handler

use unitracker::core::tracker::Tracker;

/// Record or clear a final grade for a course
pub fn run(tracker: &mut Tracker, course_id: &str, grade: Option<u8>, clear: bool) {
    let name = tracker
        .plan()
        .course(course_id)
        .map_or_else(|| course_id.to_string(), |course| course.name.clone());

    if clear {
        if let Err(e) = tracker.clear_grade(course_id) {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
        println!("✓ Grade cleared for {name}");
        return;
    }

    let Some(grade) = grade else {
        eprintln!("✗ Provide a grade (1-10) or use --clear");
        std::process::exit(1);
    };

    if let Err(e) = tracker.set_grade(course_id, grade) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    println!("✓ {name}: nota {grade}");
}
