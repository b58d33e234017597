//! Integration tests for the grading engine

use gpa_tracker::core::grading::{
    cgpa, continuous, quality_points, required_sgpa, weighted_sgpa, GradingEngine, GradingPolicy,
    LetterGrade, SemesterTotals, SubjectScore, University, WeightedGradePoint,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn continuous_policy_is_monotonic() {
    let mut previous_point = 0.0;
    let mut previous_letter = LetterGrade::F;
    for marks in 0..=100 {
        let marks = f64::from(marks);
        let point = continuous::grade_point(marks);
        let letter = continuous::letter_grade(marks);
        assert!(point >= previous_point, "grade point fell at {marks}");
        assert!(letter >= previous_letter, "letter fell at {marks}");
        assert!((0.0..=4.0).contains(&point));
        previous_point = point;
        previous_letter = letter;
    }
}

#[test]
fn quality_point_policy_is_monotonic() {
    for credit_hours in 1..=5 {
        let total = f64::from(credit_hours * 20);
        let mut previous = 0.0;
        for marks in 0..=(credit_hours * 20) {
            let qp = quality_points::quality_points(f64::from(marks), credit_hours, total);
            assert!(
                qp >= previous,
                "quality points fell at {marks}/{total} for {credit_hours} CH"
            );
            previous = qp;
        }
    }
}

#[test]
fn quality_point_engine_is_monotonic_for_custom_totals() {
    let engine = GradingEngine::for_university(University::Gcwuf);
    for (total, half_marks) in [(50.0_f64, 100_u32), (75.0, 150)] {
        let mut previous_point = 0.0;
        let mut previous_letter = LetterGrade::F;
        // half-mark steps from 0 to the stated total
        for step in 0..=half_marks {
            let marks = f64::from(step) / 2.0;
            let result = engine.grade(&SubjectScore::new(marks, Some(total), 3));
            assert!(
                result.grade_point >= previous_point,
                "grade point fell at {marks}/{total}"
            );
            assert!(
                result.letter_grade >= previous_letter,
                "letter fell at {marks}/{total}"
            );
            assert!((0.0..=4.0).contains(&result.grade_point));
            previous_point = result.grade_point;
            previous_letter = result.letter_grade;
        }
        let full = engine.grade(&SubjectScore::new(total, Some(total), 3));
        assert!(approx(full.grade_point, 4.0), "full marks out of {total}");
    }
}

#[test]
fn continuous_boundaries() {
    let cases = [
        (70.0, 3.0, LetterGrade::B),
        (74.0, 3.4, LetterGrade::B),
        (85.0, 4.0, LetterGrade::APlus),
        (49.0, 0.0, LetterGrade::F),
    ];
    for (marks, point, letter) in cases {
        let result = continuous::grade_result(marks);
        assert!(approx(result.grade_point, point), "{marks} -> {}", result.grade_point);
        assert_eq!(result.letter_grade, letter);
    }
}

#[test]
fn quality_point_normalization() {
    // 30/50 rescales to 36/60 at 3 credit hours
    assert!(approx(quality_points::quality_points(30.0, 3, 50.0), 8.1));
}

#[test]
fn quality_point_ceiling_saturates() {
    let max = quality_points::scale_for(3)
        .expect("3 credit hour table")
        .max_quality_points();
    assert!(approx(quality_points::quality_points(60.0, 3, 60.0), max));
    assert!(approx(quality_points::quality_points(59.0, 3, 60.0), max));
}

#[test]
fn weighted_sgpa_example() {
    let subjects = [
        WeightedGradePoint::new(4.0, 3),
        WeightedGradePoint::new(2.0, 1),
    ];
    assert!(approx(weighted_sgpa(&subjects), 3.5));
}

#[test]
fn cgpa_example() {
    let semesters = [SemesterTotals::new(3.0, 15), SemesterTotals::new(4.0, 15)];
    assert!(approx(cgpa(&semesters), 3.5));
}

#[test]
fn projection_infeasible_and_met() {
    assert_eq!(required_sgpa(2.0, 60, 4.0, 15), None);
    assert_eq!(required_sgpa(3.9, 140, 3.5, 15), Some(0.0));
    assert_eq!(required_sgpa(2.5, 30, 3.0, 20), Some(3.75));
}

#[test]
fn grading_is_idempotent() {
    for university in University::ALL {
        let engine = GradingEngine::for_university(university);
        let score = SubjectScore::new(47.0, None, 3);
        assert_eq!(engine.grade(&score), engine.grade(&score));
    }
}

#[test]
fn zero_division_is_safe() {
    for university in University::ALL {
        let engine = GradingEngine::for_university(university);
        assert!(approx(engine.sgpa(&[]), 0.0));
        assert!(approx(engine.cgpa(&[]), 0.0));
    }
    let quality = GradingEngine::for_university(University::Gcwuf);
    assert!(approx(quality.grade_point(50.0, 0, None), 0.0));
    assert!(approx(quality_points::quality_points(10.0, 3, 0.0), 0.0));
    assert_eq!(required_sgpa(3.0, 30, 3.5, 0), None);
}

#[test]
fn slug_resolution_never_fails() {
    assert_eq!(GradingEngine::for_slug("gcwuf").university(), University::Gcwuf);
    assert_eq!(GradingEngine::for_slug("GCUWF").university(), University::Gcwuf);
    assert_eq!(GradingEngine::for_slug("unknown").university(), University::Numl);
    assert_eq!(GradingEngine::for_slug("").university(), University::Numl);
}

#[test]
fn engine_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<GradingEngine>();
    assert_send_sync::<SubjectScore>();
    assert_send_sync::<SemesterTotals>();
}
