//! Subject command handlers

use super::{fail, load_transcript, save_transcript};
use crate::args::SubjectSubcommand;
use gpa_tracker::config::Config;
use gpa_tracker::core::models::{Subject, SubjectUpdate, Transcript};

/// Dispatch subject subcommands
pub fn run(action: SubjectSubcommand, config: &Config) {
    match action {
        SubjectSubcommand::Add {
            semester,
            name,
            marks,
            credit_hours,
            total_marks,
        } => {
            let subject = Subject::new(name.trim(), marks, total_marks, credit_hours);
            handle_add(semester, subject, config);
        }
        SubjectSubcommand::Edit {
            semester,
            index,
            name,
            marks,
            total_marks,
            clear_total_marks,
            credit_hours,
        } => {
            let update = SubjectUpdate {
                name: name.map(|n| n.trim().to_string()),
                obtained_marks: marks,
                total_marks: if clear_total_marks {
                    Some(None)
                } else {
                    total_marks.map(Some)
                },
                credit_hours,
            };
            handle_edit(semester, index, &update, config);
        }
        SubjectSubcommand::Remove { semester, index } => handle_remove(semester, index, config),
    }
}

/// Convert a 1-based CLI position into a vector index
fn to_index(position: usize) -> usize {
    if position == 0 {
        fail("Subject positions start at 1");
    }
    position - 1
}

fn handle_add(semester: u32, subject: Subject, config: &Config) {
    let mut transcript = load_transcript(config);
    let engine = transcript.engine();
    match transcript.add_subject(semester, subject.clone()) {
        Ok(index) => {
            save_transcript(&transcript, config);
            let graded = subject.grade(&engine);
            println!(
                "✓ Added subject {} to semester {semester}: {} ({}, {:.2})",
                index + 1,
                graded.name,
                graded.result.letter_grade,
                graded.result.grade_point
            );
            print_sgpa(&transcript, semester);
        }
        Err(e) => fail(e),
    }
}

fn handle_edit(semester: u32, position: usize, update: &SubjectUpdate, config: &Config) {
    if update.is_empty() {
        fail(
            "Nothing to change; pass at least one of --name, --marks, --total-marks, \
             --clear-total-marks, --credit-hours",
        );
    }
    let index = to_index(position);
    let mut transcript = load_transcript(config);
    let engine = transcript.engine();
    let graded = match transcript.update_subject(semester, index, update) {
        Ok(subject) => subject.grade(&engine),
        Err(e) => fail(e),
    };
    save_transcript(&transcript, config);
    println!(
        "✓ Updated subject {position} in semester {semester}: {} ({}, {:.2})",
        graded.name, graded.result.letter_grade, graded.result.grade_point
    );
    print_sgpa(&transcript, semester);
}

fn handle_remove(semester: u32, position: usize, config: &Config) {
    let index = to_index(position);
    let mut transcript = load_transcript(config);
    match transcript.remove_subject(semester, index) {
        Ok(removed) => {
            save_transcript(&transcript, config);
            println!(
                "✓ Removed subject {position} ({}) from semester {semester}",
                removed.name
            );
            print_sgpa(&transcript, semester);
        }
        Err(e) => fail(e),
    }
}

fn print_sgpa(transcript: &Transcript, semester: u32) {
    if let Some(graded) = transcript.graded_semester(semester) {
        println!(
            "  Semester {semester} SGPA: {:.2} | CGPA: {:.2}",
            graded.sgpa,
            transcript.cgpa()
        );
    }
}
