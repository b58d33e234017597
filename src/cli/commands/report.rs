//! Report command handler
//!
//! Renders the transcript to Markdown or HTML.

use super::{effective_target, fail, load_transcript};
use gpa_tracker::config::Config;
use gpa_tracker::core::report::{ReportContext, ReportFormat};
use gpa_tracker::core::summary::TranscriptSummary;
use gpa_tracker::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Base file name for reports written to the reports directory
const DEFAULT_REPORT_NAME: &str = "transcript-report";

/// Run the report command.
///
/// # Arguments
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `credits` - Credits assumed for next semester in the projection line
/// * `config` - Configuration containing the transcript path and reports directory
pub fn run(output_file: Option<&Path>, format_str: &str, credits: u32, config: &Config) {
    match generate_report(output_file, format_str, credits, config) {
        Ok(path) => println!("✓ Report generated: {}", path.display()),
        Err(err) => {
            error!("Report generation failed: {err}");
            fail(err);
        }
    }
}

fn generate_report(
    output_file: Option<&Path>,
    format_str: &str,
    credits: u32,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)?;
    let output_path = resolve_output_path(output_file, format, config)?;

    let transcript = load_transcript(config);
    let target = effective_target(&transcript, config);
    let summary = TranscriptSummary::with_target(&transcript, Some(target));
    let ctx = ReportContext::new(&transcript, &summary, credits);

    format
        .reporter()
        .generate(&ctx, &output_path)
        .map_err(|e| format!("Failed to write {}: {e}", output_path.display()))?;
    info!("{format} report written to {}", output_path.display());
    Ok(output_path)
}

fn resolve_output_path(
    output_file: Option<&Path>,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    let path = match output_file {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(&config.paths.reports_dir)
            .join(format!("{DEFAULT_REPORT_NAME}.{}", format.extension())),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(path)
}
