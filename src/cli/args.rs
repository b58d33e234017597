//! CLI argument definitions for `GpaTracker`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_tracker::config::ConfigOverrides;
use gpa_tracker::logger::Level;

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
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `university`, `target_cgpa`)
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
pub enum SemesterSubcommand {
    /// Add an empty semester; its number is one past the highest existing number.
    Add {
        /// Semester name (e.g., "Fall 2024")
        #[arg(value_name = "NAME")]
        name: String,
        /// Calendar year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Rename a semester.
    Rename {
        /// Semester number
        #[arg(value_name = "NUMBER")]
        number: u32,
        /// New name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Remove a semester and all of its subjects.
    Remove {
        /// Semester number
        #[arg(value_name = "NUMBER")]
        number: u32,
    },
    /// List semesters with their subjects, grades, and SGPA.
    List,
}

#[derive(Debug, Subcommand)]
pub enum SubjectSubcommand {
    /// Add a subject to a semester.
    Add {
        /// Semester number
        #[arg(value_name = "SEMESTER")]
        semester: u32,
        /// Subject name
        #[arg(long)]
        name: String,
        /// Obtained marks
        #[arg(long)]
        marks: f64,
        /// Credit hours (1-6)
        #[arg(long = "credit-hours", short = 'c')]
        credit_hours: u8,
        /// Total marks (defaults to the university's standard total)
        #[arg(long = "total-marks")]
        total_marks: Option<f64>,
    },
    /// Edit a subject; only the given fields change.
    Edit {
        /// Semester number
        #[arg(value_name = "SEMESTER")]
        semester: u32,
        /// Subject position within the semester, starting at 1
        #[arg(value_name = "INDEX")]
        index: usize,
        /// New subject name
        #[arg(long)]
        name: Option<String>,
        /// New obtained marks
        #[arg(long)]
        marks: Option<f64>,
        /// New total marks
        #[arg(long = "total-marks")]
        total_marks: Option<f64>,
        /// Drop the explicit total so the university's default total applies
        #[arg(long = "clear-total-marks", conflicts_with = "total_marks")]
        clear_total_marks: bool,
        /// New credit hours (1-6)
        #[arg(long = "credit-hours", short = 'c')]
        credit_hours: Option<u8>,
    },
    /// Remove a subject from a semester.
    Remove {
        /// Semester number
        #[arg(value_name = "SEMESTER")]
        semester: u32,
        /// Subject position within the semester, starting at 1
        #[arg(value_name = "INDEX")]
        index: usize,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Preview the grade for a single set of marks without saving anything.
    Grade {
        /// Obtained marks
        #[arg(long)]
        marks: f64,
        /// Credit hours (1-6)
        #[arg(long = "credit-hours", short = 'c')]
        credit_hours: u8,
        /// Total marks (defaults to the university's standard total)
        #[arg(long = "total-marks")]
        total_marks: Option<f64>,
    },
    /// Manage semesters in the transcript.
    Semester {
        #[command(subcommand)]
        action: SemesterSubcommand,
    },
    /// Manage subjects within a semester.
    Subject {
        #[command(subcommand)]
        action: SubjectSubcommand,
    },
    /// Show CGPA, credits, trend, and grade distribution for the transcript.
    Summary,
    /// Compute the SGPA needed next semester to reach a target CGPA.
    ///
    /// Uses the transcript's CGPA and credits unless `--current-cgpa` and
    /// `--current-credits` are given.
    Target {
        /// Target CGPA (defaults to the transcript target, then config, then 3.5)
        #[arg(long)]
        target: Option<f64>,
        /// Credit hours planned for next semester
        #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..))]
        credits: u32,
        /// Current CGPA to project from instead of the transcript
        #[arg(long = "current-cgpa", requires = "current_credits")]
        current_cgpa: Option<f64>,
        /// Credits completed so far, paired with `--current-cgpa`
        #[arg(long = "current-credits", requires = "current_cgpa")]
        current_credits: Option<u32>,
        /// Store `--target` as the transcript's target CGPA
        #[arg(long, requires = "target", conflicts_with = "clear")]
        save: bool,
        /// Remove the transcript's stored target CGPA
        #[arg(long)]
        clear: bool,
    },
    /// Generate a transcript report.
    Report {
        /// Output file path (optional; defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,

        /// Credit hours assumed for next semester in the projection line
        #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..))]
        credits: u32,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpatracker",
    about = "Track semester and cumulative GPA across university grading policies",
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

    /// Transcript file to use for this run
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// University grading policy for this run (numl, gcwuf)
    #[arg(long, value_name = "SLUG")]
    pub university: Option<String>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` fields leave the loaded configuration untouched.
    ///
    /// # Examples
    /// ```ignore
    /// let args = Cli::parse();
    /// let overrides = args.to_config_overrides();
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            university: self.university.clone(),
            target_cgpa: None,
            transcript_file: self
                .transcript
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
