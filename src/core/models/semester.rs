//! Semester model

use super::subject::{GradedSubject, Subject};
use crate::core::grading::{GradingEngine, GradingPolicy, SemesterTotals, SubjectScore};
use serde::{Deserialize, Serialize};

/// A semester and the subjects taken in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Display name (e.g., "Fall 2024")
    pub name: String,

    /// Chronological ordering key; need not be contiguous
    pub number: u32,

    /// Calendar year
    pub year: i32,

    /// Subjects in insertion order
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl Semester {
    /// Create an empty semester
    #[must_use]
    pub fn new(name: impl Into<String>, number: u32, year: i32) -> Self {
        Self {
            name: name.into(),
            number,
            year,
            subjects: Vec::new(),
        }
    }

    /// Sum of subject credit hours
    #[must_use]
    pub fn total_credit_hours(&self) -> u32 {
        self.subjects
            .iter()
            .map(|s| u32::from(s.credit_hours))
            .sum()
    }

    /// Engine inputs for every subject
    #[must_use]
    pub fn scores(&self) -> Vec<SubjectScore> {
        self.subjects.iter().map(Subject::score).collect()
    }

    /// Semester GPA under `engine`; 0 with no credit hours
    #[must_use]
    pub fn sgpa(&self, engine: &GradingEngine) -> f64 {
        engine.sgpa(&self.scores())
    }

    /// The figures CGPA aggregation needs from this semester
    #[must_use]
    pub fn totals(&self, engine: &GradingEngine) -> SemesterTotals {
        SemesterTotals::new(self.sgpa(engine), self.total_credit_hours())
    }

    /// Grade every subject and the semester as a whole
    #[must_use]
    pub fn graded(&self, engine: &GradingEngine) -> GradedSemester {
        GradedSemester {
            number: self.number,
            name: self.name.clone(),
            year: self.year,
            sgpa: self.sgpa(engine),
            total_credit_hours: self.total_credit_hours(),
            subjects: self.subjects.iter().map(|s| s.grade(engine)).collect(),
        }
    }
}

/// A semester with all derived figures computed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedSemester {
    /// Ordering key
    pub number: u32,
    /// Display name
    pub name: String,
    /// Calendar year
    pub year: i32,
    /// Semester GPA
    pub sgpa: f64,
    /// Sum of subject credit hours
    pub total_credit_hours: u32,
    /// Graded subjects in insertion order
    pub subjects: Vec<GradedSubject>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grading::University;

    fn sample_semester() -> Semester {
        let mut semester = Semester::new("Fall 2024", 1, 2024);
        semester.subjects.push(Subject::new("Calculus", 85.0, None, 3));
        semester.subjects.push(Subject::new("Writing", 60.0, None, 1));
        semester
    }

    #[test]
    fn test_total_credit_hours() {
        assert_eq!(sample_semester().total_credit_hours(), 4);
        assert_eq!(Semester::new("Empty", 2, 2024).total_credit_hours(), 0);
    }

    #[test]
    fn test_sgpa_is_weighted() {
        let engine = GradingEngine::for_university(University::Numl);
        assert!((sample_semester().sgpa(&engine) - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_semester_sgpa_is_zero() {
        let engine = GradingEngine::default();
        let totals = Semester::new("Empty", 1, 2024).totals(&engine);
        assert!(totals.sgpa.abs() < f64::EPSILON);
        assert_eq!(totals.total_credit_hours, 0);
    }

    #[test]
    fn test_sgpa_tracks_subject_edits() {
        let engine = GradingEngine::for_university(University::Numl);
        let mut semester = sample_semester();
        semester.subjects[1].obtained_marks = 85.0;
        assert!((semester.sgpa(&engine) - 4.0).abs() < 1e-9);

        semester.subjects.remove(0);
        assert_eq!(semester.graded(&engine).subjects.len(), 1);
    }
}
