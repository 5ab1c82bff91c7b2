//! Reset command handler

use std::io::{self, Write};
use unitracker::core::tracker::Tracker;

/// Clear all statuses and grades, keeping the plan itself
pub fn run(tracker: &mut Tracker, yes: bool) {
    if !yes && !confirm("Are you sure you want to reset all progress? (y/n): ") {
        println!("✗ Reset cancelled");
        return;
    }

    if let Err(e) = tracker.reset_progress() {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    println!("✓ Progress reset (statuses and grades cleared)");
}

/// Prompt on stdout and read a y/yes answer from stdin
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes")
}
