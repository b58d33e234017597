//! Markdown report generator
//!
//! Renders transcripts as Markdown tables that read well in a terminal pager
//! as well as in GitHub or VS Code previews.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let summary = ctx.summary;
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{university}}", ctx.university().display_name());
        output = output.replace("{{university_slug}}", ctx.university().slug());
        output = output.replace("{{cgpa}}", &format!("{:.2}", summary.cgpa));
        output = output.replace("{{total_credits}}", &summary.total_credit_hours.to_string());
        output = output.replace("{{semester_count}}", &summary.semester_count.to_string());
        output = output.replace("{{subject_count}}", &summary.subject_count.to_string());
        output = output.replace("{{average_sgpa}}", &format!("{:.2}", summary.average_sgpa));

        let best = summary.best_semester.as_ref().map_or_else(
            || "N/A".to_string(),
            |b| format!("{} ({:.2})", b.name, b.sgpa),
        );
        output = output.replace("{{best_semester}}", &best);
        output = output.replace("{{trend}}", &summary.trend.to_string());
        output = output.replace("{{target_cgpa}}", &ctx.target_label());

        output = output.replace("{{semester_table}}", &Self::generate_semester_table(ctx));
        output = output.replace("{{subject_details}}", &Self::generate_subject_details(ctx));
        output = output.replace(
            "{{grade_distribution}}",
            &Self::generate_distribution_table(ctx),
        );
        output = output.replace("{{projection}}", &ctx.projection_line());

        output
    }

    fn generate_semester_table(ctx: &ReportContext) -> String {
        if ctx.semesters.is_empty() {
            return "_No semesters recorded._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| # | Semester | Year | Credits | SGPA |\n");
        table.push_str("|---|---|---|---|---|\n");
        for semester in &ctx.semesters {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {:.2} |",
                semester.number,
                escape_cell(&semester.name),
                semester.year,
                semester.total_credit_hours,
                semester.sgpa
            );
        }
        table
    }

    fn generate_subject_details(ctx: &ReportContext) -> String {
        let mut out = String::new();
        for semester in &ctx.semesters {
            let _ = writeln!(
                out,
                "### {}. {} ({})\n",
                semester.number,
                escape_cell(&semester.name),
                semester.year
            );
            if semester.subjects.is_empty() {
                out.push_str("_No subjects._\n\n");
                continue;
            }
            out.push_str("| Subject | Marks | Credits | % | Grade | Grade Point |\n");
            out.push_str("|---|---|---|---|---|---|\n");
            for subject in &semester.subjects {
                let _ = writeln!(
                    out,
                    "| {} | {}/{} | {} | {:.2} | {} | {:.2} |",
                    escape_cell(&subject.name),
                    subject.obtained_marks,
                    subject.total_marks,
                    subject.credit_hours,
                    subject.result.percentage,
                    subject.result.letter_grade,
                    subject.result.grade_point
                );
            }
            out.push('\n');
        }
        out
    }

    fn generate_distribution_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str("| Grade | Subjects | Share |\n");
        table.push_str("|---|---|---|\n");
        for share in &ctx.summary.grade_distribution {
            let _ = writeln!(
                table,
                "| {} | {} | {}% |",
                share.bucket.label(),
                share.count,
                share.percentage
            );
        }
        table
    }
}

/// Keep user-entered names from breaking the table layout
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grading::University;
    use crate::core::models::{Subject, Transcript};
    use crate::core::summary::TranscriptSummary;

    #[test]
    fn test_render_includes_semesters_and_subjects() {
        let mut transcript = Transcript::new(University::Numl);
        let n = transcript.add_semester("Fall | 2024", 2024).expect("add semester");
        transcript
            .add_subject(n, Subject::new("Calculus", 74.0, None, 3))
            .expect("valid subject");
        let summary = TranscriptSummary::from_transcript(&transcript);
        let ctx = ReportContext::new(&transcript, &summary, 15);

        let report = MarkdownReporter::new().render(&ctx).expect("render");
        assert!(report.contains("National University of Modern Languages"));
        assert!(report.contains("Fall \\| 2024"));
        assert!(report.contains("| Calculus | 74/100 | 3 | 74.00 | B | 3.40 |"));
        assert!(report.contains("| B/B+ | 1 | 100% |"));
        assert!(!report.contains("{{"));
    }

    #[test]
    fn test_render_empty_transcript() {
        let transcript = Transcript::default();
        let summary = TranscriptSummary::from_transcript(&transcript);
        let ctx = ReportContext::new(&transcript, &summary, 15);
        let report = MarkdownReporter::default().render(&ctx).expect("render");
        assert!(report.contains("_No semesters recorded._"));
        assert!(report.contains("No target CGPA set."));
    }
}
