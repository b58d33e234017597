//! Integration smoke tests for `gpa_tracker`

use gpa_tracker::core::grading::{GradingEngine, GradingPolicy, SubjectScore};
use gpa_tracker::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn default_engine_grades() {
    let result = GradingEngine::default().grade(&SubjectScore::new(80.0, None, 3));
    assert!((result.grade_point - 4.0).abs() < 1e-9);
}
