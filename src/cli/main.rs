//! Command-line interface entry point for `UniTracker`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;
use unitracker::core::config::Config;
use unitracker::core::preferences::Preferences;
use unitracker::core::storage::FileStorage;
use unitracker::core::tracker::Tracker;
use unitracker::info;
use unitracker::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Determine effective runtime log level: CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Persisted documents live in the configured data directory; preference
    // defaults come from the [display] config section until a preferences
    // document exists
    let data_dir = if config.paths.data_dir.is_empty() {
        FileStorage::default_dir()
    } else {
        PathBuf::from(&config.paths.data_dir)
    };
    let storage = FileStorage::new(data_dir);
    let fallback_prefs = Preferences {
        show_hours: config.display.show_hours,
        show_grades: config.display.show_grades,
    };
    let mut tracker = Tracker::with_fallback_preferences(Box::new(storage), fallback_prefs);

    // Handle subcommands
    match args.command {
        Command::Show { available, deps } => {
            commands::show::run(&tracker, available, deps);
        }
        Command::Mark { course_id } => {
            commands::mark::run(&mut tracker, &course_id);
        }
        Command::Grade {
            course_id,
            grade,
            clear,
        } => {
            commands::grade::run(&mut tracker, &course_id, grade, clear);
        }
        Command::Stats => {
            commands::stats::run(&tracker);
        }
        Command::Reset { yes } => {
            commands::reset::run(&mut tracker, yes);
        }
        Command::Edit { subcommand } => {
            commands::edit::run(&mut tracker, subcommand);
        }
        Command::Plan { subcommand } => {
            commands::plan::run(&mut tracker, subcommand);
        }
        Command::Library { subcommand } => {
            commands::library::run(&mut tracker, subcommand);
        }
        Command::Prefs { subcommand } => {
            commands::prefs::run(&mut tracker, subcommand);
        }
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
    }
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        _ => None,
    }
}
