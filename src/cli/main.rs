//! Command-line interface entry point for `GpaTracker`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gpa_tracker::config::Config;
use gpa_tracker::info;
use gpa_tracker::logger::{enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Config is loaded once; CLI overrides apply to this run only
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // --debug wins, then --log-level, then config logging.level; fallback warn
    let level = if args.debug_flag {
        Level::Debug
    } else {
        args.log_level
            .map(std::convert::Into::into)
            .or_else(|| config.logging.level.parse::<Level>().ok())
            .unwrap_or(Level::Warn)
    };
    set_level(level);

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }

    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match init_file_logging(log_path) {
            Ok(()) if verbose => eprintln!("✓ File logging initialized at: {display_path}"),
            Ok(()) => info!("File logging initialized at: {display_path}"),
            Err(e) => eprintln!("✗ Failed to initialize file logging at {display_path}: {e}"),
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &config, &defaults);
        }
        Command::Grade {
            marks,
            credit_hours,
            total_marks,
        } => commands::grade::run(marks, credit_hours, total_marks, &config),
        Command::Semester { action } => commands::semester::run(action, &config),
        Command::Subject { action } => commands::subject::run(action, &config),
        Command::Summary => commands::summary::run(&config),
        Command::Target {
            target,
            credits,
            current_cgpa,
            current_credits,
            save,
            clear,
        } => commands::target::run(
            commands::target::TargetOptions {
                target,
                credits,
                current: current_cgpa.zip(current_credits),
                save,
                clear,
            },
            &config,
        ),
        Command::Report {
            output,
            format,
            credits,
        } => commands::report::run(output.as_deref(), &format, credits, &config),
    }
}
