//! Library command handler

use crate::args::LibrarySubcommand;
use unitracker::core::library::builtin_templates;
use unitracker::core::tracker::Tracker;

/// Dispatch library subcommands; no subcommand lists the library
pub fn run(tracker: &mut Tracker, subcommand: Option<LibrarySubcommand>) {
    match subcommand {
        None | Some(LibrarySubcommand::List) => handle_list(tracker),
        Some(LibrarySubcommand::Save { title, subtitle }) => {
            handle_save(tracker, &title, &subtitle);
        }
        Some(LibrarySubcommand::Load { title }) => handle_load(tracker, &title),
        Some(LibrarySubcommand::Delete { title }) => handle_delete(tracker, &title),
    }
}

fn handle_list(tracker: &Tracker) {
    let library = tracker.library();

    println!("\nSaved plans:");
    if library.is_empty() {
        println!("  (none)");
    }
    for saved in library.plans() {
        let courses = saved.plan.course_count();
        if saved.plan.subtitle.is_empty() {
            println!("  {} ({courses} courses)", saved.plan.title);
        } else {
            println!(
                "  {} - {} ({courses} courses)",
                saved.plan.title, saved.plan.subtitle
            );
        }
    }

    println!("\nBuilt-in templates:");
    for template in builtin_templates() {
        println!(
            "  {} - {} ({} courses)",
            template.title,
            template.subtitle,
            template.course_count()
        );
    }
}

fn handle_save(tracker: &Tracker, title: &str, subtitle: &str) {
    if let Err(e) = tracker.save_to_library(title, subtitle) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    println!("✓ Saved '{}' to the library", title.trim());
}

fn handle_load(tracker: &mut Tracker, title: &str) {
    match tracker.load_from_library(title) {
        Ok(true) => println!("✓ Switched to '{title}' (progress restored)"),
        Ok(false) => println!("✓ Switched to '{title}' (progress reset)"),
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn handle_delete(tracker: &Tracker, title: &str) {
    match tracker.delete_from_library(title) {
        Ok(true) => println!("✓ Removed '{title}' from the library"),
        Ok(false) => {
            eprintln!("✗ No saved plan named '{title}'");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}
