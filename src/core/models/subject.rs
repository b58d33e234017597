//! Subject model

use crate::core::grading::{GradeResult, GradingEngine, GradingPolicy, SubjectScore};
use crate::core::validation::{validate_subject, ValidationError};
use serde::{Deserialize, Serialize};

/// One graded course component within a semester.
///
/// Only the raw inputs are stored. Letter grade and grade point are derived on
/// demand through [`Subject::grade`], so they cannot go stale after an edit or
/// a policy change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Display label (e.g., "Linear Algebra")
    pub name: String,

    /// Raw score achieved
    pub obtained_marks: f64,

    /// Denominator the marks are scored out of; policy default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_marks: Option<f64>,

    /// Weight in GPA aggregation (1–6)
    pub credit_hours: u8,
}

impl Subject {
    /// Create a new subject
    ///
    /// # Arguments
    /// * `name` - Display label
    /// * `obtained_marks` - Raw score
    /// * `total_marks` - Optional denominator
    /// * `credit_hours` - Credit hours
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        obtained_marks: f64,
        total_marks: Option<f64>,
        credit_hours: u8,
    ) -> Self {
        Self {
            name: name.into(),
            obtained_marks,
            total_marks,
            credit_hours,
        }
    }

    /// Engine input for this subject
    #[must_use]
    pub fn score(&self) -> SubjectScore {
        SubjectScore::new(
            self.obtained_marks,
            self.total_marks,
            u32::from(self.credit_hours),
        )
    }

    /// Grade this subject with the given engine
    #[must_use]
    pub fn grade(&self, engine: &GradingEngine) -> GradedSubject {
        let credit_hours = u32::from(self.credit_hours);
        GradedSubject {
            name: self.name.clone(),
            obtained_marks: self.obtained_marks,
            total_marks: engine
                .university()
                .effective_total_marks(self.total_marks, credit_hours),
            credit_hours: self.credit_hours,
            result: engine.grade(&self.score()),
        }
    }

    /// Validate this subject for a grading engine's university
    ///
    /// # Errors
    /// Returns the first validation rule the subject breaks.
    pub fn validate(&self, engine: &GradingEngine) -> Result<(), ValidationError> {
        validate_subject(self, engine.university())
    }
}

/// A subject together with its derived grade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedSubject {
    /// Display label
    pub name: String,
    /// Raw score achieved
    pub obtained_marks: f64,
    /// Total marks the subject was graded against
    pub total_marks: f64,
    /// Credit hours
    pub credit_hours: u8,
    /// Derived letter grade, grade point, and percentage
    pub result: GradeResult,
}
