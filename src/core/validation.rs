//! Input validation for subjects and targets
//!
//! The grading engine assumes validated input; the transcript store runs these
//! checks before any record is created or changed.

use crate::core::grading::{University, MAX_GRADE_POINT};
use crate::core::models::Subject;
use thiserror::Error;

/// Longest accepted subject name, in characters
pub const MAX_NAME_LENGTH: usize = 100;

/// Fewest credit hours a subject may carry
pub const MIN_CREDIT_HOURS: u8 = 1;

/// Most credit hours a subject may carry
pub const MAX_CREDIT_HOURS: u8 = 6;

/// Rejected subject or target input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Subject name is empty or whitespace.
    #[error("Subject name is required")]
    EmptyName,

    /// Subject name exceeds [`MAX_NAME_LENGTH`].
    #[error("Subject name is too long ({0} characters, max 100)")]
    NameTooLong(usize),

    /// Obtained marks are negative or not a number.
    #[error("Marks cannot be negative: {0}")]
    NegativeMarks(f64),

    /// Total marks are zero, negative, or not a number.
    #[error("Total marks must be positive: {0}")]
    InvalidTotalMarks(f64),

    /// Obtained marks exceed the total they are scored out of.
    #[error("Marks cannot exceed {total}: {obtained}")]
    MarksExceedTotal {
        /// Obtained marks
        obtained: f64,
        /// Effective total marks
        total: f64,
    },

    /// Credit hours outside the accepted range.
    #[error("Credit hours must be between 1 and 6: {0}")]
    CreditHoursOutOfRange(u8),

    /// Target CGPA outside 0.0–4.0.
    #[error("Target CGPA must be between 0.0 and 4.0: {0}")]
    TargetOutOfRange(f64),
}

/// Validate a subject against the rules of `university`.
///
/// Marks are checked against the total the subject is actually graded out of
/// (always 100 for the continuous policy, the subject's own or default total
/// for the quality-point policy) and never exceed an explicitly stated total.
///
/// # Errors
/// Returns the first rule the subject breaks.
pub fn validate_subject(subject: &Subject, university: University) -> Result<(), ValidationError> {
    let name_len = subject.name.trim().chars().count();
    if name_len == 0 {
        return Err(ValidationError::EmptyName);
    }
    if name_len > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong(name_len));
    }

    if !(MIN_CREDIT_HOURS..=MAX_CREDIT_HOURS).contains(&subject.credit_hours) {
        return Err(ValidationError::CreditHoursOutOfRange(subject.credit_hours));
    }

    if subject.obtained_marks.is_nan() || subject.obtained_marks < 0.0 {
        return Err(ValidationError::NegativeMarks(subject.obtained_marks));
    }

    if let Some(total) = subject.total_marks {
        if total.is_nan() || total <= 0.0 {
            return Err(ValidationError::InvalidTotalMarks(total));
        }
    }

    let graded_total =
        university.effective_total_marks(subject.total_marks, u32::from(subject.credit_hours));
    let total = subject
        .total_marks
        .map_or(graded_total, |stated| stated.min(graded_total));
    if subject.obtained_marks > total {
        return Err(ValidationError::MarksExceedTotal {
            obtained: subject.obtained_marks,
            total,
        });
    }

    Ok(())
}

/// Validate a target CGPA
///
/// # Errors
/// Returns [`ValidationError::TargetOutOfRange`] outside 0.0–4.0.
pub fn validate_target(target_cgpa: f64) -> Result<(), ValidationError> {
    if (0.0..=MAX_GRADE_POINT).contains(&target_cgpa) {
        Ok(())
    } else {
        Err(ValidationError::TargetOutOfRange(target_cgpa))
    }
}
