//! Grade preview command handler

use super::fail;
use gpa_tracker::config::Config;
use gpa_tracker::core::grading::{GradingEngine, GradingPolicy};
use gpa_tracker::core::models::Subject;
use gpa_tracker::verbose;

/// Grade one set of marks under the configured university without touching the transcript
pub fn run(marks: f64, credit_hours: u8, total_marks: Option<f64>, config: &Config) {
    let engine = GradingEngine::for_university(config.university());
    let subject = Subject::new("preview", marks, total_marks, credit_hours);
    if let Err(e) = subject.validate(&engine) {
        fail(e);
    }

    let graded = subject.grade(&engine);
    verbose!(
        "Grading policy: {} ({})",
        engine.university().display_name(),
        engine.university().slug()
    );
    println!(
        "{}/{} marks, {} credit hour(s) under {}",
        graded.obtained_marks,
        graded.total_marks,
        graded.credit_hours,
        engine.university()
    );
    println!("  Letter grade: {}", graded.result.letter_grade);
    println!("  Grade point:  {:.2}", graded.result.grade_point);
    println!("  Percentage:   {:.2}%", graded.result.percentage);

    let semester_sgpa = engine.sgpa(&[subject.score()]);
    verbose!("  SGPA if this were the only subject: {semester_sgpa:.2}");
}
