//! Target projection command handler

use super::{effective_target, fail, load_transcript, save_transcript};
use gpa_tracker::config::Config;
use gpa_tracker::core::grading::required_sgpa;
use gpa_tracker::core::validation::validate_target;

/// Options for the target command
#[derive(Debug, Clone, Copy)]
pub struct TargetOptions {
    /// Explicit target CGPA
    pub target: Option<f64>,
    /// Credits planned next semester
    pub credits: u32,
    /// Current CGPA and credits, overriding the transcript
    pub current: Option<(f64, u32)>,
    /// Persist `target` to the transcript
    pub save: bool,
    /// Clear the stored target
    pub clear: bool,
}

/// Store or clear the transcript target if requested, then print the required SGPA
pub fn run(options: TargetOptions, config: &Config) {
    if let Some(target) = options.target {
        if let Err(e) = validate_target(target) {
            fail(e);
        }
    }

    let mut transcript = load_transcript(config);
    if options.clear || options.save {
        let stored = if options.clear { None } else { options.target };
        if let Err(e) = transcript.set_target_cgpa(stored) {
            fail(e);
        }
        save_transcript(&transcript, config);
        match stored {
            Some(t) => println!("✓ Target CGPA set to {t:.2}"),
            None => println!("✓ Target CGPA cleared"),
        }
    }

    let target = options
        .target
        .unwrap_or_else(|| effective_target(&transcript, config));
    let (current_cgpa, current_credits) = options
        .current
        .unwrap_or_else(|| (transcript.cgpa(), transcript.total_credit_hours()));

    println!(
        "Current CGPA {current_cgpa:.2} over {current_credits} credit hour(s); target {target:.2}"
    );
    match required_sgpa(current_cgpa, current_credits, target, options.credits) {
        Some(sgpa) if sgpa <= 0.0 => println!(
            "✓ Target already secured: any SGPA over {} credit hour(s) keeps CGPA at or above {target:.2}",
            options.credits
        ),
        Some(sgpa) => println!(
            "Required SGPA next semester ({} credit hours): {sgpa:.2}",
            options.credits
        ),
        None => println!(
            "✗ Target {target:.2} is not reachable in one semester of {} credit hours",
            options.credits
        ),
    }
}
