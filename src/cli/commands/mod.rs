//! CLI command handlers for `GpaTracker`.
//!
//! Each command is implemented in its own submodule. Handlers print `✓`/`✗`
//! status lines and exit with status 1 on failure.

pub mod config;
pub mod grade;
pub mod report;
pub mod semester;
pub mod subject;
pub mod summary;
pub mod target;

use gpa_tracker::config::Config;
use gpa_tracker::core::models::Transcript;
use gpa_tracker::core::summary::DEFAULT_TARGET_CGPA;
use gpa_tracker::{error, info};

/// Load the configured transcript, or start an empty one for the configured university
pub fn load_transcript(config: &Config) -> Transcript {
    let path = config.transcript_path();
    match Transcript::load_or_new(&path, config.university()) {
        Ok(transcript) => {
            info!("Transcript loaded: {}", path.display());
            transcript
        }
        Err(e) => {
            error!("Failed to load transcript {}: {e}", path.display());
            eprintln!("✗ Failed to load transcript {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

/// Write the transcript back to the configured path
pub fn save_transcript(transcript: &Transcript, config: &Config) {
    let path = config.transcript_path();
    if let Err(e) = transcript.save(&path) {
        error!("Failed to save transcript {}: {e}", path.display());
        eprintln!("✗ Failed to save transcript {}: {e}", path.display());
        std::process::exit(1);
    }
    info!("Transcript saved: {}", path.display());
}

/// Target CGPA from the transcript, then config, then the built-in default
pub fn effective_target(transcript: &Transcript, config: &Config) -> f64 {
    transcript
        .target_cgpa
        .or_else(|| config.target_cgpa())
        .unwrap_or(DEFAULT_TARGET_CGPA)
}

/// Print an error and exit with status 1
pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("✗ {message}");
    std::process::exit(1);
}
