//! Prefs command handler

use crate::args::PrefsSubcommand;
use unitracker::core::tracker::Tracker;

/// Dispatch prefs subcommands; no subcommand shows all preferences
pub fn run(tracker: &mut Tracker, subcommand: Option<PrefsSubcommand>) {
    match subcommand {
        None | Some(PrefsSubcommand::Get { key: None }) => {
            println!("\n=== Preferences ===\n");
            print!("{}", tracker.preferences());
        }
        Some(PrefsSubcommand::Get { key: Some(key) }) => match tracker.preferences().get(&key) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("Unknown preference key: '{key}'");
                std::process::exit(1);
            }
        },
        Some(PrefsSubcommand::Set { key, value }) => {
            if let Err(e) = tracker.set_preference(&key, &value) {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
            println!("✓ Set {key} = {value}");
        }
    }
}
