//! Multi-university grading engine
//!
//! Pure functions that turn raw marks into letter grades, grade points,
//! semester GPA (SGPA), cumulative GPA (CGPA), and the SGPA required to reach a
//! target CGPA. Two policies are supported:
//!
//! - [`continuous`]: a band-ramp formula over marks out of 100 (`numl`)
//! - [`quality_points`]: a lookup table of quality points keyed by credit
//!   hours, with mark normalization (`gcwuf`)
//!
//! Callers normally go through [`GradingEngine`], which dispatches on a
//! [`University`] and exposes the [`GradingPolicy`] capability set.

pub mod aggregate;
pub mod continuous;
pub mod engine;
pub mod projection;
pub mod quality_points;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use aggregate::{cgpa, weighted_sgpa, SemesterTotals, WeightedGradePoint};
pub use engine::{ContinuousPolicy, GradingEngine, GradingPolicy, QualityPointPolicy};
pub use projection::required_sgpa;

/// Highest grade point either policy can award
pub const MAX_GRADE_POINT: f64 = 4.0;

/// Round to two decimal places, half away from zero.
///
/// Every public numeric result of the engine passes through this exactly once,
/// at the point of return.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Letter grades across both policies.
///
/// Variants are declared worst to best so the derived ordering matches grade
/// quality (`F < D < ... < A+`). Policy B only ever produces `A`, `B`, `C`,
/// `D`, and `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    /// Fail
    #[serde(rename = "F")]
    F,
    /// D
    #[serde(rename = "D")]
    D,
    /// D+
    #[serde(rename = "D+")]
    DPlus,
    /// C
    #[serde(rename = "C")]
    C,
    /// C+
    #[serde(rename = "C+")]
    CPlus,
    /// B
    #[serde(rename = "B")]
    B,
    /// B+
    #[serde(rename = "B+")]
    BPlus,
    /// A
    #[serde(rename = "A")]
    A,
    /// A+
    #[serde(rename = "A+")]
    APlus,
}

impl LetterGrade {
    /// Display label (e.g. `"B+"`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::F => "F",
            Self::D => "D",
            Self::DPlus => "D+",
            Self::C => "C",
            Self::CPlus => "C+",
            Self::B => "B",
            Self::BPlus => "B+",
            Self::A => "A",
            Self::APlus => "A+",
        }
    }

    /// Whether this grade counts as a pass
    #[must_use]
    pub const fn is_passing(&self) -> bool {
        !matches!(self, Self::F)
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter grade, grade point, and percentage for one subject
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    /// Letter grade
    pub letter_grade: LetterGrade,
    /// Grade point on the 0.0–4.0 scale, rounded to 2 decimals
    pub grade_point: f64,
    /// Score as a percentage of the effective total marks, rounded to 2 decimals
    pub percentage: f64,
}

/// Raw inputs needed to grade one subject
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubjectScore {
    /// Marks achieved
    pub obtained_marks: f64,
    /// Denominator the marks are scored out of; policy default when `None`
    pub total_marks: Option<f64>,
    /// Weight of the subject in GPA aggregation
    pub credit_hours: u32,
}

impl SubjectScore {
    /// Create a subject score
    #[must_use]
    pub const fn new(obtained_marks: f64, total_marks: Option<f64>, credit_hours: u32) -> Self {
        Self {
            obtained_marks,
            total_marks,
            credit_hours,
        }
    }
}

/// Universities with a supported grading policy
///
/// Serialized as its slug. Deserializing an unrecognized slug yields the
/// default policy rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum University {
    /// National University of Modern Languages: continuous formula (Policy A)
    #[default]
    Numl,
    /// Government College Women University Faisalabad: quality-point table (Policy B)
    Gcwuf,
}

impl University {
    /// Every supported university
    pub const ALL: [Self; 2] = [Self::Numl, Self::Gcwuf];

    /// Resolve a university slug.
    ///
    /// Matching is case-insensitive and never fails: unrecognized or empty
    /// slugs resolve to the default policy ([`University::Numl`]).
    #[must_use]
    pub fn from_slug(slug: &str) -> Self {
        match slug.trim().to_ascii_lowercase().as_str() {
            "gcwuf" | "gcuwf" => Self::Gcwuf,
            "numl" => Self::Numl,
            other => {
                crate::debug!("Unknown university slug '{other}', using default grading policy");
                Self::default()
            }
        }
    }

    /// Canonical slug
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Numl => "numl",
            Self::Gcwuf => "gcwuf",
        }
    }

    /// Human-readable university name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Numl => "National University of Modern Languages",
            Self::Gcwuf => "Government College Women University Faisalabad",
        }
    }

    /// Total marks assumed for a subject that does not specify its own
    #[must_use]
    pub fn default_total_marks(&self, credit_hours: u32) -> f64 {
        match self {
            Self::Numl => continuous::STANDARD_TOTAL_MARKS,
            Self::Gcwuf => quality_points::default_total_marks(credit_hours),
        }
    }

    /// Whether subjects are graded against their own total marks
    ///
    /// Policy A always grades out of 100 and ignores any stored total.
    #[must_use]
    pub const fn uses_subject_total_marks(&self) -> bool {
        matches!(self, Self::Gcwuf)
    }

    /// Total marks a subject is actually graded against under this policy
    #[must_use]
    pub fn effective_total_marks(&self, total_marks: Option<f64>, credit_hours: u32) -> f64 {
        if self.uses_subject_total_marks() {
            total_marks.unwrap_or_else(|| self.default_total_marks(credit_hours))
        } else {
            self.default_total_marks(credit_hours)
        }
    }
}

impl From<String> for University {
    fn from(slug: String) -> Self {
        Self::from_slug(&slug)
    }
}

impl From<University> for String {
    fn from(university: University) -> Self {
        university.slug().to_string()
    }
}

impl fmt::Display for University {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_away_from_zero() {
        assert!((round2(3.125) - 3.13).abs() < 1e-9);
        assert!((round2(2.004) - 2.0).abs() < 1e-9);
        assert!((round2(-1.005_1) + 1.01).abs() < 1e-9);
        assert!(round2(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_letter_grade_ordering() {
        assert!(LetterGrade::F < LetterGrade::D);
        assert!(LetterGrade::BPlus > LetterGrade::B);
        assert!(LetterGrade::APlus > LetterGrade::A);
        assert_eq!(LetterGrade::CPlus.to_string(), "C+");
        assert!(!LetterGrade::F.is_passing());
        assert!(LetterGrade::D.is_passing());
    }

    #[test]
    fn test_university_slug_resolution() {
        assert_eq!(University::from_slug("numl"), University::Numl);
        assert_eq!(University::from_slug("GCWUF"), University::Gcwuf);
        assert_eq!(University::from_slug("gcuwf"), University::Gcwuf);
        assert_eq!(University::from_slug("harvard"), University::Numl);
        assert_eq!(University::from_slug(""), University::Numl);
    }

    #[test]
    fn test_effective_total_marks() {
        assert!((University::Numl.effective_total_marks(Some(50.0), 3) - 100.0).abs() < 1e-9);
        assert!((University::Gcwuf.effective_total_marks(None, 3) - 60.0).abs() < 1e-9);
        assert!((University::Gcwuf.effective_total_marks(Some(50.0), 3) - 50.0).abs() < 1e-9);
    }
}
