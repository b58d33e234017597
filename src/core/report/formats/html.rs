//! HTML report generator
//!
//! Generates a self-contained HTML page with embedded CSS. User-entered text
//! is escaped before substitution.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let summary = ctx.summary;
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{university}}", ctx.university().display_name());
        output = output.replace("{{university_slug}}", ctx.university().slug());
        output = output.replace("{{cgpa}}", &format!("{:.2}", summary.cgpa));
        output = output.replace("{{total_credits}}", &summary.total_credit_hours.to_string());
        output = output.replace("{{semester_count}}", &summary.semester_count.to_string());
        output = output.replace("{{subject_count}}", &summary.subject_count.to_string());
        output = output.replace("{{average_sgpa}}", &format!("{:.2}", summary.average_sgpa));

        let best = summary.best_semester.as_ref().map_or_else(
            || "N/A".to_string(),
            |b| format!("{} ({:.2})", escape_html(&b.name), b.sgpa),
        );
        output = output.replace("{{best_semester}}", &best);
        output = output.replace("{{trend}}", &summary.trend.to_string());
        output = output.replace("{{target_cgpa}}", &ctx.target_label());

        output = output.replace("{{semester_table}}", &Self::generate_semester_html(ctx));
        output = output.replace("{{subject_details}}", &Self::generate_subject_html(ctx));
        output = output.replace(
            "{{grade_distribution}}",
            &Self::generate_distribution_html(ctx),
        );
        output = output.replace("{{projection}}", &escape_html(&ctx.projection_line()));

        output
    }

    fn generate_semester_html(ctx: &ReportContext) -> String {
        if ctx.semesters.is_empty() {
            return "<p><em>No semesters recorded.</em></p>\n".to_string();
        }

        let mut html = String::new();
        html.push_str("<table>\n");
        html.push_str(
            "  <tr><th>#</th><th>Semester</th><th>Year</th><th>Credits</th><th>SGPA</th></tr>\n",
        );
        for semester in &ctx.semesters {
            let _ = writeln!(
                html,
                "  <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td></tr>",
                semester.number,
                escape_html(&semester.name),
                semester.year,
                semester.total_credit_hours,
                semester.sgpa
            );
        }
        html.push_str("</table>\n");
        html
    }

    fn generate_subject_html(ctx: &ReportContext) -> String {
        let mut html = String::new();
        for semester in &ctx.semesters {
            let _ = writeln!(
                html,
                "<h3>{}. {} ({})</h3>",
                semester.number,
                escape_html(&semester.name),
                semester.year
            );
            if semester.subjects.is_empty() {
                html.push_str("<p><em>No subjects.</em></p>\n");
                continue;
            }
            html.push_str("<table>\n");
            html.push_str("  <tr><th>Subject</th><th>Marks</th><th>Credits</th><th>%</th><th>Grade</th><th>Grade Point</th></tr>\n");
            for subject in &semester.subjects {
                let class = if subject.result.letter_grade.is_passing() {
                    ""
                } else {
                    " class=\"fail\""
                };
                let _ = writeln!(
                    html,
                    "  <tr{class}><td>{}</td><td>{}/{}</td><td>{}</td><td>{:.2}</td><td>{}</td><td>{:.2}</td></tr>",
                    escape_html(&subject.name),
                    subject.obtained_marks,
                    subject.total_marks,
                    subject.credit_hours,
                    subject.result.percentage,
                    subject.result.letter_grade,
                    subject.result.grade_point
                );
            }
            html.push_str("</table>\n");
        }
        html
    }

    fn generate_distribution_html(ctx: &ReportContext) -> String {
        let mut html = String::new();
        html.push_str("<table>\n");
        html.push_str("  <tr><th>Grade</th><th>Subjects</th><th>Share</th><th></th></tr>\n");
        for share in &ctx.summary.grade_distribution {
            let _ = writeln!(
                html,
                "  <tr><td>{}</td><td>{}</td><td>{}%</td><td><div class=\"bar\"><span style=\"width: {}%\"></span></div></td></tr>",
                escape_html(share.bucket.label()),
                share.count,
                share.percentage,
                share.percentage
            );
        }
        html.push_str("</table>\n");
        html
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
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
    fn test_escape_html() {
        assert_eq!(escape_html("<b>A & B</b>"), "&lt;b&gt;A &amp; B&lt;/b&gt;");
    }

    #[test]
    fn test_render_escapes_names_and_marks_failures() {
        let mut transcript = Transcript::new(University::Gcwuf);
        let n = transcript.add_semester("<Spring>", 2025).expect("add semester");
        transcript
            .add_subject(n, Subject::new("Ethics & Law", 10.0, None, 2))
            .expect("valid subject");
        let summary = TranscriptSummary::from_transcript(&transcript);
        let ctx = ReportContext::new(&transcript, &summary, 15);

        let report = HtmlReporter::new().render(&ctx).expect("render");
        assert!(report.contains("&lt;Spring&gt;"));
        assert!(report.contains("Ethics &amp; Law"));
        assert!(report.contains("class=\"fail\""));
        assert!(report.contains("D &amp; Below"));
        assert!(!report.contains("{{"));
    }
}
