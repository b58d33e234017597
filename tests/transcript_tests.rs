//! Integration tests for the transcript record store

use gpa_tracker::core::grading::University;
use gpa_tracker::core::models::{Subject, SubjectUpdate, Transcript, TranscriptError};
use gpa_tracker::core::summary::{GradeBucket, TranscriptSummary, Trend};
use gpa_tracker::core::validation::ValidationError;
use tempfile::TempDir;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Two NUML semesters: SGPA 3.50 (4 CH) then 3.00 (3 CH)
fn sample_transcript() -> Transcript {
    let mut transcript = Transcript::new(University::Numl);
    let fall = transcript.add_semester("Fall 2023", 2023).expect("add semester");
    transcript
        .add_subject(fall, Subject::new("Calculus", 85.0, None, 3))
        .expect("valid subject");
    transcript
        .add_subject(fall, Subject::new("Writing", 60.0, None, 1))
        .expect("valid subject");
    let spring = transcript.add_semester("Spring 2024", 2024).expect("add semester");
    transcript
        .add_subject(spring, Subject::new("Physics", 70.0, None, 3))
        .expect("valid subject");
    transcript
}

#[test]
fn cgpa_is_credit_weighted_across_semesters() {
    let transcript = sample_transcript();
    let totals = transcript.semester_totals();
    assert!(approx(totals[0].sgpa, 3.5));
    assert!(approx(totals[1].sgpa, 3.0));
    // (3.5 * 4 + 3.0 * 3) / 7 = 23 / 7
    assert!(approx(transcript.cgpa(), 3.29));
    assert_eq!(transcript.total_credit_hours(), 7);
}

#[test]
fn save_and_load_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("data").join("transcript.toml");

    let mut transcript = sample_transcript();
    transcript.set_target_cgpa(Some(3.5)).expect("valid target");
    transcript.save(&path).expect("save transcript");

    let loaded = Transcript::load(&path).expect("load transcript");
    assert_eq!(loaded, transcript);
    assert!(approx(loaded.cgpa(), transcript.cgpa()));
}

#[test]
fn load_or_new_starts_empty() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing.toml");
    let transcript = Transcript::load_or_new(&path, University::Gcwuf).expect("new transcript");
    assert_eq!(transcript.university, University::Gcwuf);
    assert!(transcript.semesters.is_empty());
    assert!(!path.exists());
}

#[test]
fn only_raw_inputs_are_persisted() {
    let toml_str = sample_transcript().to_toml().expect("serialize");
    assert!(toml_str.contains("university = \"numl\""));
    assert!(toml_str.contains("obtained_marks"));
    assert!(!toml_str.contains("grade_point"));
    assert!(!toml_str.contains("letter_grade"));
    assert!(!toml_str.contains("sgpa"));
}

#[test]
fn parses_handwritten_transcript() {
    let toml_str = r#"
university = "gcuwf"

[[semesters]]
name = "First"
number = 4
year = 2024

[[semesters.subjects]]
name = "Statistics"
obtained_marks = 30.0
total_marks = 50.0
credit_hours = 3
"#;
    let transcript = Transcript::from_toml(toml_str).expect("parse");
    assert_eq!(transcript.university, University::Gcwuf);
    assert_eq!(transcript.next_semester_number(), Some(5));
    // 8.10 quality points over 3 credit hours
    assert!(approx(transcript.cgpa(), 2.7));
}

#[test]
fn unknown_university_falls_back_to_default() {
    let transcript = Transcript::from_toml("university = \"somewhere\"\n").expect("parse");
    assert_eq!(transcript.university, University::Numl);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let result = Transcript::from_toml("university = [");
    assert!(matches!(result, Err(TranscriptError::Parse(_))));
}

#[test]
fn validation_rejects_bad_subjects() {
    let mut transcript = Transcript::new(University::Numl);
    let n = transcript.add_semester("Fall", 2024).expect("add semester");

    let cases = [
        Subject::new("  ", 50.0, None, 3),
        Subject::new("Negative", -1.0, None, 3),
        Subject::new("Too many credits", 50.0, None, 7),
        Subject::new("Zero credits", 50.0, None, 0),
        Subject::new("Over 100", 101.0, None, 3),
        Subject::new("Over stated total", 60.0, Some(50.0), 3),
    ];
    for subject in cases {
        let name = subject.name.clone();
        assert!(
            matches!(
                transcript.add_subject(n, subject),
                Err(TranscriptError::Invalid(_))
            ),
            "{name} should be rejected"
        );
    }
    assert_eq!(transcript.subject_count(), 0);
}

#[test]
fn marks_above_effective_total_are_rejected_not_clamped() {
    let mut transcript = Transcript::new(University::Gcwuf);
    let n = transcript.add_semester("Fall", 2024).expect("add semester");
    let err = transcript
        .add_subject(n, Subject::new("Lab", 45.0, None, 2))
        .expect_err("45 > 40");
    assert!(matches!(
        err,
        TranscriptError::Invalid(ValidationError::MarksExceedTotal { .. })
    ));

    transcript
        .add_subject(n, Subject::new("Lab", 45.0, Some(50.0), 2))
        .expect("within explicit total");
}

#[test]
fn update_and_remove_subjects() {
    let mut transcript = sample_transcript();
    let update = SubjectUpdate {
        name: Some("Physics I".to_string()),
        obtained_marks: Some(85.0),
        ..SubjectUpdate::default()
    };
    let updated = transcript.update_subject(2, 0, &update).expect("update");
    assert_eq!(updated.name, "Physics I");
    assert!(approx(transcript.semester_totals()[1].sgpa, 4.0));

    let removed = transcript.remove_subject(1, 1).expect("remove");
    assert_eq!(removed.name, "Writing");
    assert!(matches!(
        transcript.remove_subject(9, 0),
        Err(TranscriptError::SemesterNotFound(9))
    ));
}

#[test]
fn required_sgpa_uses_transcript_totals() {
    let mut transcript = Transcript::new(University::Numl);
    let n = transcript.add_semester("Fall", 2024).expect("add semester");
    transcript
        .add_subject(n, Subject::new("Calculus", 70.0, None, 3))
        .expect("valid subject");
    // (3.5 * 6 - 3.0 * 3) / 3 = 4.0
    assert_eq!(transcript.required_sgpa(3.5, 3), Some(4.0));
    assert_eq!(transcript.required_sgpa(3.9, 3), None);
    assert_eq!(transcript.required_sgpa(2.0, 3), Some(1.0));
    assert_eq!(transcript.required_sgpa(1.0, 3), Some(0.0));
}

#[test]
fn summary_reflects_transcript() {
    let transcript = sample_transcript();
    let summary = TranscriptSummary::with_target(&transcript, Some(3.5));

    assert_eq!(summary.trend, Trend::Declining);
    assert!(approx(summary.average_sgpa, 3.25));
    assert_eq!(summary.best_semester.as_ref().map(|b| b.number), Some(1));
    assert_eq!(summary.share(GradeBucket::A).map(|s| s.count), Some(1));
    assert_eq!(summary.share(GradeBucket::C).map(|s| s.count), Some(1));

    let target = summary.target.expect("target set");
    assert!(!target.met);
    assert!(approx(target.points_remaining, 0.21));
}
