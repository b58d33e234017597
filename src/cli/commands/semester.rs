//! Semester command handlers

use super::{fail, load_transcript, save_transcript};
use crate::args::SemesterSubcommand;
use gpa_tracker::config::Config;
use chrono::{Datelike, Utc};

/// Dispatch semester subcommands
pub fn run(action: SemesterSubcommand, config: &Config) {
    match action {
        SemesterSubcommand::Add { name, year } => handle_add(&name, year, config),
        SemesterSubcommand::Rename { number, name } => handle_rename(number, &name, config),
        SemesterSubcommand::Remove { number } => handle_remove(number, config),
        SemesterSubcommand::List => handle_list(config),
    }
}

fn handle_add(name: &str, year: Option<i32>, config: &Config) {
    if name.trim().is_empty() {
        fail("Semester name cannot be empty");
    }
    let mut transcript = load_transcript(config);
    let number = match transcript.add_semester(name.trim(), year.unwrap_or_else(current_year)) {
        Ok(number) => number,
        Err(e) => fail(e),
    };
    save_transcript(&transcript, config);
    println!("✓ Added semester {number}: {}", name.trim());
}

fn handle_rename(number: u32, name: &str, config: &Config) {
    if name.trim().is_empty() {
        fail("Semester name cannot be empty");
    }
    let mut transcript = load_transcript(config);
    if let Err(e) = transcript.rename_semester(number, name.trim()) {
        fail(e);
    }
    save_transcript(&transcript, config);
    println!("✓ Renamed semester {number} to {}", name.trim());
}

fn handle_remove(number: u32, config: &Config) {
    let mut transcript = load_transcript(config);
    match transcript.remove_semester(number) {
        Ok(removed) => {
            save_transcript(&transcript, config);
            println!(
                "✓ Removed semester {number} ({}) and {} subject(s)",
                removed.name,
                removed.subjects.len()
            );
        }
        Err(e) => fail(e),
    }
}

fn handle_list(config: &Config) {
    let transcript = load_transcript(config);
    let semesters = transcript.graded_semesters();
    if semesters.is_empty() {
        println!("No semesters recorded. Add one with `gpatracker semester add <NAME>`.");
        return;
    }

    println!(
        "\n=== Transcript ({}) ===",
        transcript.university.display_name()
    );
    for semester in &semesters {
        println!(
            "\n[{}] {} ({}): SGPA {:.2}, {} credit hour(s)",
            semester.number, semester.name, semester.year, semester.sgpa, semester.total_credit_hours
        );
        for (i, subject) in semester.subjects.iter().enumerate() {
            println!(
                "  {}. {:<30} {:>6}/{:<6} {} CH  {:>3}  {:.2}",
                i + 1,
                subject.name,
                subject.obtained_marks,
                subject.total_marks,
                subject.credit_hours,
                subject.result.letter_grade.as_str(),
                subject.result.grade_point
            );
        }
    }
    println!(
        "\nCGPA: {:.2} over {} credit hour(s)",
        transcript.cgpa(),
        transcript.total_credit_hours()
    );
}

/// Current calendar year (UTC)
fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_year_matches_today() {
        let year = current_year();
        assert_eq!(year, Utc::now().date_naive().year());
        assert!(year >= 2024);
    }
}
