//! CLI argument definitions for `UniTracker`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use unitracker::core::config::ConfigOverrides;
use unitracker::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum EditSubcommand {
    /// Add a course to a semester.
    AddCourse {
        /// 1-based semester position counting down the plan
        #[arg(value_name = "SEMESTER")]
        semester: usize,
        /// Course name
        #[arg(value_name = "NAME")]
        name: String,
        /// Weekly hours (0-40)
        #[arg(long, value_name = "HOURS", default_value_t = 0)]
        hours: u32,
        /// Preview the change without saving
        #[arg(long)]
        dry_run: bool,
    },
    /// Remove a course and every prerequisite reference to it.
    RemoveCourse {
        /// Course id
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
        /// Preview the change without saving
        #[arg(long)]
        dry_run: bool,
    },
    /// Change a course's weekly hours.
    SetHours {
        /// Course id
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
        /// Weekly hours (0-40)
        #[arg(value_name = "HOURS")]
        hours: u32,
        /// Preview the change without saving
        #[arg(long)]
        dry_run: bool,
    },
    /// Append a semester (new year after the second semester of a year).
    AddTerm {
        /// Preview the change without saving
        #[arg(long)]
        dry_run: bool,
    },
    /// Remove a semester and all courses in it.
    RemoveTerm {
        /// 1-based semester position counting down the plan
        #[arg(value_name = "SEMESTER")]
        semester: usize,
        /// Preview the change without saving
        #[arg(long)]
        dry_run: bool,
    },
    /// Move a course to another semester.
    Move {
        /// Course id
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
        /// 1-based target semester position counting down the plan
        #[arg(value_name = "SEMESTER")]
        semester: usize,
        /// 1-based position within the target semester (appends when omitted)
        #[arg(long, value_name = "POS")]
        position: Option<usize>,
        /// Preview the change without saving
        #[arg(long)]
        dry_run: bool,
    },
    /// Toggle a prerequisite edge on a course.
    Link {
        /// Course whose prerequisites change
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
        /// Prerequisite course id to add or remove
        #[arg(value_name = "DEPENDENCY_ID")]
        dependency_id: String,
        /// Preview the change without saving
        #[arg(long)]
        dry_run: bool,
    },
    /// Change the plan title or subtitle.
    Meta {
        /// New plan title
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,
        /// New plan subtitle
        #[arg(long, value_name = "SUBTITLE")]
        subtitle: Option<String>,
        /// Preview the change without saving
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum PlanSubcommand {
    /// Write the current plan as JSON.
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Drop prerequisites already implied through other prerequisites
        #[arg(long)]
        pruned: bool,
    },
    /// Replace the current plan with one read from a JSON file.
    ///
    /// Progress is kept; entries for courses the new plan does not contain
    /// simply stop applying.
    Import {
        /// Path to a plan JSON file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,
    },
    /// Delete the current plan and all progress (requires confirmation).
    Delete {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
    /// Show the plan title and layout summary.
    Info,
}

#[derive(Debug, Subcommand)]
pub enum LibrarySubcommand {
    /// Save the current plan and progress under a title.
    Save {
        /// Title for the library entry
        #[arg(value_name = "TITLE")]
        title: String,
        /// Subtitle for the library entry
        #[arg(long, value_name = "SUBTITLE", default_value = "")]
        subtitle: String,
    },
    /// List saved plans and built-in templates.
    List,
    /// Switch to a saved plan or a built-in template.
    ///
    /// Saved entries restore the progress captured at save time; templates
    /// start with a clean slate.
    Load {
        /// Title of the entry or template
        #[arg(value_name = "TITLE")]
        title: String,
    },
    /// Remove a saved plan from the library.
    Delete {
        /// Title of the entry
        #[arg(value_name = "TITLE")]
        title: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum PrefsSubcommand {
    /// Display preference values.
    Get {
        /// Optional preference key (`show-hours`, `show-grades`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a preference value.
    Set {
        /// Preference key (`show-hours`, `show-grades`)
        #[arg(value_name = "KEY")]
        key: String,
        /// Boolean value
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display the plan with course statuses.
    Show {
        /// Show only courses currently available to take
        #[arg(long)]
        available: bool,
        /// Show prerequisite ids next to each course
        #[arg(long)]
        deps: bool,
    },
    /// Cycle a course status (pendiente, regular, aprobada).
    ///
    /// A course whose prerequisites are all met cycles straight to regular.
    Mark {
        /// Course id
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
    },
    /// Record or clear a final grade (1-10).
    Grade {
        /// Course id
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
        /// Grade between 1 and 10
        #[arg(value_name = "GRADE")]
        grade: Option<u8>,
        /// Clear the recorded grade instead
        #[arg(long)]
        clear: bool,
    },
    /// Show progress statistics.
    Stats,
    /// Clear all statuses and grades (requires confirmation).
    Reset {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
    /// Modify the plan structure.
    Edit {
        #[command(subcommand)]
        subcommand: EditSubcommand,
    },
    /// Import, export or delete the current plan.
    Plan {
        #[command(subcommand)]
        subcommand: PlanSubcommand,
    },
    /// Manage the saved-plans library.
    ///
    /// If no subcommand is provided, lists saved plans and templates.
    Library {
        #[command(subcommand)]
        subcommand: Option<LibrarySubcommand>,
    },
    /// Show or change display preferences.
    ///
    /// If no subcommand is provided, displays all preference values.
    Prefs {
        #[command(subcommand)]
        subcommand: Option<PrefsSubcommand>,
    },
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "unitracker",
    about = "UniTracker command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration. The short-form `--data-dir` takes precedence over
    /// `--config-data-dir` when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_data_dir: None,
            data_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = bare_cli(Command::Config { subcommand: None });

        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Stats);
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.data_dir = Some(PathBuf::from("/data"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.data_dir, Some("/data".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        // Short-form flags should take precedence over long-form
        let mut cli = bare_cli(Command::Stats);
        cli.config_data_dir = Some(PathBuf::from("/long/data"));
        cli.data_dir = Some(PathBuf::from("/short/data"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.data_dir, Some("/short/data".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        // Long-form flags should be used when short-form is absent
        let mut cli = bare_cli(Command::Stats);
        cli.config_data_dir = Some(PathBuf::from("/long/data"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.data_dir, Some("/long/data".to_string()));
    }
}
