//! Credit-hour weighted SGPA and CGPA aggregation

use super::round2;
use serde::{Deserialize, Serialize};

/// A grade point with the credit hours it is weighted by
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedGradePoint {
    /// Grade point on the 0.0–4.0 scale
    pub grade_point: f64,
    /// Credit hours
    pub credit_hours: u32,
}

impl WeightedGradePoint {
    /// Create a weighted grade point
    #[must_use]
    pub const fn new(grade_point: f64, credit_hours: u32) -> Self {
        Self {
            grade_point,
            credit_hours,
        }
    }
}

/// The per-semester figures CGPA is built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemesterTotals {
    /// Semester GPA
    pub sgpa: f64,
    /// Sum of the semester's subject credit hours
    pub total_credit_hours: u32,
}

impl SemesterTotals {
    /// Create semester totals
    #[must_use]
    pub const fn new(sgpa: f64, total_credit_hours: u32) -> Self {
        Self {
            sgpa,
            total_credit_hours,
        }
    }
}

/// Weighted mean of `(value, weight)` pairs, rounded once at the end.
///
/// Returns 0 when the total weight is 0.
fn weighted_mean<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, u32)>,
{
    let (weighted_sum, total_weight) = pairs
        .into_iter()
        .fold((0.0_f64, 0_u64), |(sum, weight), (value, w)| {
            (sum + value * f64::from(w), weight + u64::from(w))
        });

    if total_weight == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let total_weight = total_weight as f64;
    round2(weighted_sum / total_weight)
}

/// SGPA from grade points weighted by credit hours.
///
/// `Σ(grade_point × credit_hours) / Σ credit_hours`, rounded to 2 decimals.
/// Empty input or zero total credit hours yields 0.
#[must_use]
pub fn weighted_sgpa(subjects: &[WeightedGradePoint]) -> f64 {
    weighted_mean(subjects.iter().map(|s| (s.grade_point, s.credit_hours)))
}

/// CGPA from semester SGPAs weighted by semester credit hours.
///
/// Policy independent. No semesters or zero total credit hours yields 0.
#[must_use]
pub fn cgpa(semesters: &[SemesterTotals]) -> f64 {
    weighted_mean(semesters.iter().map(|s| (s.sgpa, s.total_credit_hours)))
}
