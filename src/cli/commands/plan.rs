//! Plan command handler

use crate::args::PlanSubcommand;
use crate::commands::reset::confirm;
use std::fs;
use std::path::Path;
use unitracker::core::tracker::Tracker;

/// Dispatch plan subcommands
pub fn run(tracker: &mut Tracker, subcommand: PlanSubcommand) {
    match subcommand {
        PlanSubcommand::Export { output, pruned } => {
            handle_export(tracker, output.as_deref(), pruned);
        }
        PlanSubcommand::Import { input_file } => handle_import(tracker, &input_file),
        PlanSubcommand::Delete { yes } => handle_delete(tracker, yes),
        PlanSubcommand::Info => handle_info(tracker),
    }
}

fn handle_export(tracker: &Tracker, output: Option<&Path>, pruned: bool) {
    let json = match tracker.export_plan(pruned) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("✗ Failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
            println!("✓ Plan exported to {}", path.display());
        }
        None => println!("{json}"),
    }
}

fn handle_import(tracker: &mut Tracker, input_file: &Path) {
    let json = match fs::read_to_string(input_file) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("✗ Failed to read {}: {e}", input_file.display());
            std::process::exit(1);
        }
    };

    if let Err(e) = tracker.import_plan(&json) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    println!(
        "✓ Imported plan '{}' ({} courses)",
        tracker.plan().title,
        tracker.plan().course_count()
    );
}

fn handle_delete(tracker: &mut Tracker, yes: bool) {
    if !yes && !confirm("Are you sure you want to delete the plan and all progress? (y/n): ") {
        println!("✗ Delete cancelled");
        return;
    }

    if let Err(e) = tracker.delete_plan() {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    println!("✓ Plan deleted - a blank plan is now active");
}

fn handle_info(tracker: &Tracker) {
    let plan = tracker.plan();
    println!("\n=== {} ===\n", plan.title);
    if !plan.subtitle.is_empty() {
        println!("Subtitle:  {}", plan.subtitle);
    }
    println!("Years:     {}", plan.years.len());
    println!("Semesters: {}", plan.semester_count());
    println!("Courses:   {}", plan.course_count());
}
