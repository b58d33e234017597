//! Transcript model: the record store for one student's semesters

use super::semester::{GradedSemester, Semester};
use super::subject::Subject;
use crate::core::grading::{
    required_sgpa, GradingEngine, GradingPolicy, SemesterTotals, University,
};
use crate::core::validation::{validate_target, ValidationError};
use crate::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised by transcript operations
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// No semester has the requested number.
    #[error("Semester {0} not found")]
    SemesterNotFound(u32),

    /// Subject index is out of range for the semester.
    #[error("Subject {index} not found in semester {semester}")]
    SubjectNotFound {
        /// Semester number
        semester: u32,
        /// Requested subject index
        index: usize,
    },

    /// Every semester number is taken; no successor to the highest one exists.
    #[error("No semester number is available after {0}")]
    SemesterNumbersExhausted(u32),

    /// A subject or target failed validation.
    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationError),

    /// Reading or writing the transcript file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The transcript file is not valid TOML for a transcript.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The transcript could not be serialized.
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for transcript operations
pub type TranscriptResult<T> = Result<T, TranscriptError>;

/// Partial edit applied to an existing subject
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectUpdate {
    /// New display label
    pub name: Option<String>,
    /// New obtained marks
    pub obtained_marks: Option<f64>,
    /// New total marks; `Some(None)` drops the explicit total so the policy default applies
    pub total_marks: Option<Option<f64>>,
    /// New credit hours
    pub credit_hours: Option<u8>,
}

impl SubjectUpdate {
    /// Whether the update changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.obtained_marks.is_none()
            && self.total_marks.is_none()
            && self.credit_hours.is_none()
    }

    fn apply_to(&self, subject: &Subject) -> Subject {
        let mut updated = subject.clone();
        if let Some(name) = &self.name {
            updated.name.clone_from(name);
        }
        if let Some(marks) = self.obtained_marks {
            updated.obtained_marks = marks;
        }
        if let Some(total) = self.total_marks {
            updated.total_marks = total;
        }
        if let Some(credit_hours) = self.credit_hours {
            updated.credit_hours = credit_hours;
        }
        updated
    }
}

/// A student's full academic record under one university's grading policy.
///
/// The university is fixed for the transcript and every derived figure (grade
/// point, SGPA, CGPA) is recomputed from the stored marks on request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// University whose grading policy applies
    pub university: University,

    /// Goal CGPA, if the student has set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_cgpa: Option<f64>,

    /// Semesters in creation order
    #[serde(default)]
    pub semesters: Vec<Semester>,
}

impl Transcript {
    /// Create an empty transcript
    #[must_use]
    pub const fn new(university: University) -> Self {
        Self {
            university,
            target_cgpa: None,
            semesters: Vec::new(),
        }
    }

    /// Grading engine for this transcript's university
    #[must_use]
    pub const fn engine(&self) -> GradingEngine {
        GradingEngine::for_university(self.university)
    }

    /// Number the next created semester will receive (max existing + 1)
    ///
    /// `None` when the highest stored number is already `u32::MAX`.
    #[must_use]
    pub fn next_semester_number(&self) -> Option<u32> {
        self.semesters
            .iter()
            .map(|s| s.number)
            .max()
            .map_or(Some(1), |max| max.checked_add(1))
    }

    /// Add an empty semester and return its number
    ///
    /// # Errors
    /// Returns [`TranscriptError::SemesterNumbersExhausted`] when no number
    /// follows the highest stored one.
    pub fn add_semester(&mut self, name: impl Into<String>, year: i32) -> TranscriptResult<u32> {
        let number = self
            .next_semester_number()
            .ok_or(TranscriptError::SemesterNumbersExhausted(u32::MAX))?;
        let semester = Semester::new(name, number, year);
        info!("Added semester {number} ({})", semester.name);
        self.semesters.push(semester);
        Ok(number)
    }

    /// Look up a semester by number
    #[must_use]
    pub fn semester(&self, number: u32) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.number == number)
    }

    fn semester_mut(&mut self, number: u32) -> TranscriptResult<&mut Semester> {
        self.semesters
            .iter_mut()
            .find(|s| s.number == number)
            .ok_or(TranscriptError::SemesterNotFound(number))
    }

    /// Rename a semester
    ///
    /// # Errors
    /// Returns [`TranscriptError::SemesterNotFound`] for an unknown number.
    pub fn rename_semester(&mut self, number: u32, name: impl Into<String>) -> TranscriptResult<()> {
        let semester = self.semester_mut(number)?;
        semester.name = name.into();
        info!("Renamed semester {number} to {}", semester.name);
        Ok(())
    }

    /// Remove a semester together with all of its subjects
    ///
    /// # Errors
    /// Returns [`TranscriptError::SemesterNotFound`] for an unknown number.
    pub fn remove_semester(&mut self, number: u32) -> TranscriptResult<Semester> {
        let idx = self
            .semesters
            .iter()
            .position(|s| s.number == number)
            .ok_or(TranscriptError::SemesterNotFound(number))?;
        let removed = self.semesters.remove(idx);
        info!(
            "Removed semester {number} ({}) and {} subject(s)",
            removed.name,
            removed.subjects.len()
        );
        Ok(removed)
    }

    /// Validate and append a subject to a semester, returning its index
    ///
    /// # Errors
    /// Returns an error if the semester does not exist or the subject is invalid.
    pub fn add_subject(&mut self, number: u32, subject: Subject) -> TranscriptResult<usize> {
        let engine = self.engine();
        subject.validate(&engine)?;
        let semester = self.semester_mut(number)?;
        info!("Added subject '{}' to semester {number}", subject.name);
        semester.subjects.push(subject);
        Ok(semester.subjects.len() - 1)
    }

    /// Apply a partial edit to a subject; the result is validated before it is stored
    ///
    /// # Errors
    /// Returns an error if the semester or subject does not exist or the edited
    /// subject is invalid. On error the stored subject is unchanged.
    pub fn update_subject(
        &mut self,
        number: u32,
        index: usize,
        update: &SubjectUpdate,
    ) -> TranscriptResult<&Subject> {
        let engine = self.engine();
        let semester = self.semester_mut(number)?;
        let current = semester
            .subjects
            .get_mut(index)
            .ok_or(TranscriptError::SubjectNotFound {
                semester: number,
                index,
            })?;

        let updated = update.apply_to(current);
        updated.validate(&engine)?;
        *current = updated;
        info!("Updated subject {index} in semester {number}");
        Ok(&*current)
    }

    /// Remove a subject from a semester
    ///
    /// # Errors
    /// Returns an error if the semester or subject does not exist.
    pub fn remove_subject(&mut self, number: u32, index: usize) -> TranscriptResult<Subject> {
        let semester = self.semester_mut(number)?;
        if index >= semester.subjects.len() {
            return Err(TranscriptError::SubjectNotFound {
                semester: number,
                index,
            });
        }
        let removed = semester.subjects.remove(index);
        info!("Removed subject '{}' from semester {number}", removed.name);
        Ok(removed)
    }

    /// Set or clear the target CGPA
    ///
    /// # Errors
    /// Returns an error if the target is outside 0.0–4.0.
    pub fn set_target_cgpa(&mut self, target: Option<f64>) -> TranscriptResult<()> {
        if let Some(value) = target {
            validate_target(value)?;
        }
        self.target_cgpa = target;
        Ok(())
    }

    /// Semesters sorted by number (chronological order)
    #[must_use]
    pub fn chronological(&self) -> Vec<&Semester> {
        let mut ordered: Vec<&Semester> = self.semesters.iter().collect();
        ordered.sort_by_key(|s| s.number);
        ordered
    }

    /// Total number of subjects across all semesters
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.semesters.iter().map(|s| s.subjects.len()).sum()
    }

    /// Per-semester SGPA and credit hours in chronological order
    #[must_use]
    pub fn semester_totals(&self) -> Vec<SemesterTotals> {
        let engine = self.engine();
        self.chronological()
            .into_iter()
            .map(|s| s.totals(&engine))
            .collect()
    }

    /// Graded view of one semester
    #[must_use]
    pub fn graded_semester(&self, number: u32) -> Option<GradedSemester> {
        let engine = self.engine();
        self.semester(number).map(|s| s.graded(&engine))
    }

    /// Graded view of every semester in chronological order
    #[must_use]
    pub fn graded_semesters(&self) -> Vec<GradedSemester> {
        let engine = self.engine();
        self.chronological()
            .into_iter()
            .map(|s| s.graded(&engine))
            .collect()
    }

    /// Cumulative GPA across all semesters
    #[must_use]
    pub fn cgpa(&self) -> f64 {
        self.engine().cgpa(&self.semester_totals())
    }

    /// Credit hours across all semesters
    #[must_use]
    pub fn total_credit_hours(&self) -> u32 {
        self.semesters.iter().map(Semester::total_credit_hours).sum()
    }

    /// SGPA required next semester to reach `target_cgpa`.
    ///
    /// `None` means the target cannot be reached in one semester of
    /// `next_semester_credits` (or no credits were given).
    #[must_use]
    pub fn required_sgpa(&self, target_cgpa: f64, next_semester_credits: u32) -> Option<f64> {
        required_sgpa(
            self.cgpa(),
            self.total_credit_hours(),
            target_cgpa,
            next_semester_credits,
        )
    }

    /// Parse a transcript from TOML
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the schema.
    pub fn from_toml(toml_str: &str) -> TranscriptResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize the transcript to TOML
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> TranscriptResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a transcript from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> TranscriptResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a transcript, or start an empty one for `university` if the file does not exist
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load_or_new(path: &Path, university: University) -> TranscriptResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new(university))
        }
    }

    /// Write the transcript to a TOML file, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> TranscriptResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_numbers_follow_max() {
        let mut transcript = Transcript::new(University::Numl);
        assert_eq!(transcript.add_semester("First", 2023).expect("add semester"), 1);
        assert_eq!(transcript.add_semester("Second", 2023).expect("add semester"), 2);
        transcript.remove_semester(1).expect("semester 1 exists");
        assert_eq!(transcript.add_semester("Third", 2024).expect("add semester"), 3);

        transcript.semesters[0].number = 10;
        assert_eq!(transcript.next_semester_number(), Some(11));
    }

    #[test]
    fn test_add_semester_after_max_number_is_an_error() {
        let toml_str = r#"
university = "numl"

[[semesters]]
name = "Last"
number = 4294967295
year = 2024
"#;
        let mut transcript = Transcript::from_toml(toml_str).expect("valid transcript");
        assert_eq!(transcript.next_semester_number(), None);
        assert!(matches!(
            transcript.add_semester("Overflow", 2025),
            Err(TranscriptError::SemesterNumbersExhausted(u32::MAX))
        ));
        assert_eq!(transcript.semesters.len(), 1);
    }

    #[test]
    fn test_remove_semester_cascades() {
        let mut transcript = Transcript::new(University::Numl);
        let n = transcript.add_semester("Fall", 2024).expect("add semester");
        transcript
            .add_subject(n, Subject::new("Calculus", 80.0, None, 3))
            .expect("valid subject");
        let removed = transcript.remove_semester(n).expect("semester exists");
        assert_eq!(removed.subjects.len(), 1);
        assert_eq!(transcript.subject_count(), 0);
        assert!(matches!(
            transcript.remove_semester(n),
            Err(TranscriptError::SemesterNotFound(_))
        ));
    }

    #[test]
    fn test_add_subject_validates() {
        let mut transcript = Transcript::new(University::Gcwuf);
        let n = transcript.add_semester("Fall", 2024).expect("add semester");
        let result = transcript.add_subject(n, Subject::new("Lab", 25.0, None, 1));
        assert!(matches!(result, Err(TranscriptError::Invalid(_))));
        assert_eq!(transcript.subject_count(), 0);
    }

    #[test]
    fn test_update_subject_keeps_previous_value_on_error() {
        let mut transcript = Transcript::new(University::Numl);
        let n = transcript.add_semester("Fall", 2024).expect("add semester");
        transcript
            .add_subject(n, Subject::new("Calculus", 70.0, None, 3))
            .expect("valid subject");

        let bad = SubjectUpdate {
            obtained_marks: Some(140.0),
            ..SubjectUpdate::default()
        };
        assert!(transcript.update_subject(n, 0, &bad).is_err());
        assert!((transcript.semesters[0].subjects[0].obtained_marks - 70.0).abs() < f64::EPSILON);

        let good = SubjectUpdate {
            obtained_marks: Some(85.0),
            ..SubjectUpdate::default()
        };
        transcript.update_subject(n, 0, &good).expect("valid update");
        assert!((transcript.cgpa() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_update_subject_clears_total_marks() {
        let mut transcript = Transcript::new(University::Gcwuf);
        let n = transcript.add_semester("Fall", 2024).expect("add semester");
        transcript
            .add_subject(n, Subject::new("Chemistry", 40.0, Some(50.0), 3))
            .expect("valid subject");

        let clear = SubjectUpdate {
            total_marks: Some(None),
            ..SubjectUpdate::default()
        };
        assert!(!clear.is_empty());
        let updated = transcript.update_subject(n, 0, &clear).expect("valid update");
        assert_eq!(updated.total_marks, None);

        let graded = transcript.graded_semester(n).expect("semester exists");
        assert!((graded.subjects[0].total_marks - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remove_subject_out_of_range() {
        let mut transcript = Transcript::new(University::Numl);
        let n = transcript.add_semester("Fall", 2024).expect("add semester");
        assert!(matches!(
            transcript.remove_subject(n, 0),
            Err(TranscriptError::SubjectNotFound { .. })
        ));
    }

    #[test]
    fn test_target_validation() {
        let mut transcript = Transcript::default();
        assert!(transcript.set_target_cgpa(Some(3.5)).is_ok());
        assert!(transcript.set_target_cgpa(Some(4.5)).is_err());
        assert_eq!(transcript.target_cgpa, Some(3.5));
        assert!(transcript.set_target_cgpa(None).is_ok());
        assert_eq!(transcript.target_cgpa, None);
    }

    #[test]
    fn test_chronological_order_uses_number() {
        let mut transcript = Transcript::new(University::Numl);
        transcript.semesters.push(Semester::new("Later", 5, 2025));
        transcript.semesters.push(Semester::new("Earlier", 2, 2024));
        let names: Vec<&str> = transcript
            .chronological()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Earlier", "Later"]);
    }
}
