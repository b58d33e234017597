//! Report generation module for transcripts
//!
//! Renders a transcript and its summary to Markdown or HTML through embedded
//! templates with `{{placeholder}}` substitution.

pub mod formats;

use crate::core::grading::University;
use crate::core::models::{GradedSemester, Transcript};
use crate::core::summary::TranscriptSummary;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Holds the transcript together with everything derived from it, so each
/// reporter only formats.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Transcript being reported
    pub transcript: &'a Transcript,
    /// Summary statistics
    pub summary: &'a TranscriptSummary,
    /// Graded semesters in chronological order
    pub semesters: Vec<GradedSemester>,
    /// Credit hours assumed for the next semester in the projection line
    pub next_semester_credits: u32,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub fn new(
        transcript: &'a Transcript,
        summary: &'a TranscriptSummary,
        next_semester_credits: u32,
    ) -> Self {
        Self {
            transcript,
            summary,
            semesters: transcript.graded_semesters(),
            next_semester_credits,
        }
    }

    /// University of the transcript
    #[must_use]
    pub const fn university(&self) -> University {
        self.transcript.university
    }

    /// Target CGPA formatted for display, or "Not set"
    #[must_use]
    pub fn target_label(&self) -> String {
        self.summary
            .target
            .map_or_else(|| "Not set".to_string(), |t| format!("{:.2}", t.target_cgpa))
    }

    /// One-line description of the SGPA required to reach the target
    #[must_use]
    pub fn projection_line(&self) -> String {
        let Some(progress) = self.summary.target else {
            return "No target CGPA set.".to_string();
        };
        if progress.met {
            return format!(
                "Target CGPA {:.2} is already met (current {:.2}).",
                progress.target_cgpa, self.summary.cgpa
            );
        }
        if self.next_semester_credits == 0 {
            return format!(
                "Target CGPA {:.2}: no next-semester credit hours given for a projection.",
                progress.target_cgpa
            );
        }
        match self
            .transcript
            .required_sgpa(progress.target_cgpa, self.next_semester_credits)
        {
            Some(sgpa) => format!(
                "An SGPA of {sgpa:.2} over {} credit hours next semester reaches a CGPA of {:.2}.",
                self.next_semester_credits, progress.target_cgpa
            ),
            None => format!(
                "A CGPA of {:.2} is not reachable with {} credit hours next semester.",
                progress.target_cgpa, self.next_semester_credits
            ),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Subject;

    fn transcript_with_target(target: Option<f64>) -> Transcript {
        let mut transcript = Transcript::new(University::Numl);
        let n = transcript.add_semester("Fall 2024", 2024).expect("add semester");
        transcript
            .add_subject(n, Subject::new("Calculus", 70.0, None, 3))
            .expect("valid subject");
        transcript.target_cgpa = target;
        transcript
    }

    #[test]
    fn test_projection_line_without_target() {
        let transcript = transcript_with_target(None);
        let summary = TranscriptSummary::from_transcript(&transcript);
        let ctx = ReportContext::new(&transcript, &summary, 15);
        assert_eq!(ctx.target_label(), "Not set");
        assert_eq!(ctx.projection_line(), "No target CGPA set.");
    }

    #[test]
    fn test_projection_line_reachable_and_met() {
        let transcript = transcript_with_target(Some(3.5));
        let summary = TranscriptSummary::from_transcript(&transcript);
        let ctx = ReportContext::new(&transcript, &summary, 3);
        assert!(ctx.projection_line().contains("4.00"));

        let met = transcript_with_target(Some(2.0));
        let met_summary = TranscriptSummary::from_transcript(&met);
        let met_ctx = ReportContext::new(&met, &met_summary, 15);
        assert!(met_ctx.projection_line().contains("already met"));
    }

    #[test]
    fn test_projection_line_without_next_semester_credits() {
        let transcript = transcript_with_target(Some(3.5));
        let summary = TranscriptSummary::from_transcript(&transcript);
        let ctx = ReportContext::new(&transcript, &summary, 0);
        let line = ctx.projection_line();
        assert!(line.contains("no next-semester credit hours"));
        assert!(!line.contains("not reachable"));
    }
}
