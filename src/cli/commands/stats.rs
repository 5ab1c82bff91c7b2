//! Stats command handler

use unitracker::core::tracker::Tracker;

/// Print aggregate progress statistics for the current plan
pub fn run(tracker: &Tracker) {
    let plan = tracker.plan();
    if plan.subtitle.is_empty() {
        println!("\n=== {} ===\n", plan.title);
    } else {
        println!("\n=== {} ({}) ===\n", plan.title, plan.subtitle);
    }
    print!("{}", tracker.stats());
}
