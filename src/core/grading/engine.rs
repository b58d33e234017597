//! Grading engine selection
//!
//! [`GradingPolicy`] is the uniform capability set every policy provides.
//! [`GradingEngine`] is the tagged variant over the supported policies, chosen
//! from a [`University`] or its slug, so aggregation and projection code never
//! needs to know which policy is active.

use super::aggregate::{self, SemesterTotals};
use super::{continuous, quality_points, GradeResult, LetterGrade, SubjectScore, University};

/// Operations every grading policy supports
pub trait GradingPolicy {
    /// Grade point for one subject, rounded to 2 decimals
    fn grade_point(&self, obtained_marks: f64, credit_hours: u32, total_marks: Option<f64>) -> f64;

    /// Letter grade for one subject
    fn letter_grade(
        &self,
        obtained_marks: f64,
        credit_hours: u32,
        total_marks: Option<f64>,
    ) -> LetterGrade;

    /// Semester GPA over a semester's subjects
    fn sgpa(&self, subjects: &[SubjectScore]) -> f64;

    /// Cumulative GPA over semester totals
    fn cgpa(&self, semesters: &[SemesterTotals]) -> f64 {
        aggregate::cgpa(semesters)
    }

    /// Letter grade, grade point, and percentage for one subject
    fn grade_result(
        &self,
        obtained_marks: f64,
        credit_hours: u32,
        total_marks: Option<f64>,
    ) -> GradeResult;

    /// Grade a [`SubjectScore`]
    fn grade(&self, score: &SubjectScore) -> GradeResult {
        self.grade_result(score.obtained_marks, score.credit_hours, score.total_marks)
    }
}

/// Continuous band-ramp policy. Ignores credit hours and total marks when
/// grading a single subject: marks are always out of 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContinuousPolicy;

impl GradingPolicy for ContinuousPolicy {
    fn grade_point(&self, obtained_marks: f64, _credit_hours: u32, _total_marks: Option<f64>) -> f64 {
        continuous::grade_point(obtained_marks)
    }

    fn letter_grade(
        &self,
        obtained_marks: f64,
        _credit_hours: u32,
        _total_marks: Option<f64>,
    ) -> LetterGrade {
        continuous::letter_grade(obtained_marks)
    }

    fn sgpa(&self, subjects: &[SubjectScore]) -> f64 {
        continuous::sgpa_from_marks(
            subjects
                .iter()
                .map(|subject| (subject.obtained_marks, subject.credit_hours)),
        )
    }

    fn grade_result(
        &self,
        obtained_marks: f64,
        _credit_hours: u32,
        _total_marks: Option<f64>,
    ) -> GradeResult {
        continuous::grade_result(obtained_marks)
    }
}

/// Quality-point lookup policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualityPointPolicy;

impl GradingPolicy for QualityPointPolicy {
    fn grade_point(&self, obtained_marks: f64, credit_hours: u32, total_marks: Option<f64>) -> f64 {
        quality_points::grade_point(obtained_marks, credit_hours, total_marks)
    }

    fn letter_grade(
        &self,
        obtained_marks: f64,
        credit_hours: u32,
        total_marks: Option<f64>,
    ) -> LetterGrade {
        quality_points::letter_grade(obtained_marks, credit_hours, total_marks)
    }

    fn sgpa(&self, subjects: &[SubjectScore]) -> f64 {
        quality_points::sgpa(subjects)
    }

    fn grade_result(
        &self,
        obtained_marks: f64,
        credit_hours: u32,
        total_marks: Option<f64>,
    ) -> GradeResult {
        quality_points::grade_result(obtained_marks, credit_hours, total_marks)
    }
}

/// The grading engine for one university
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradingEngine {
    /// Policy A
    Continuous(ContinuousPolicy),
    /// Policy B
    QualityPoints(QualityPointPolicy),
}

impl GradingEngine {
    /// Engine for a university
    #[must_use]
    pub const fn for_university(university: University) -> Self {
        match university {
            University::Gcwuf => Self::QualityPoints(QualityPointPolicy),
            University::Numl => Self::Continuous(ContinuousPolicy),
        }
    }

    /// Engine for a university slug; unknown slugs get the default policy
    #[must_use]
    pub fn for_slug(slug: &str) -> Self {
        Self::for_university(University::from_slug(slug))
    }

    /// University whose policy this engine applies
    #[must_use]
    pub const fn university(&self) -> University {
        match self {
            Self::Continuous(_) => University::Numl,
            Self::QualityPoints(_) => University::Gcwuf,
        }
    }

    fn policy(&self) -> &dyn GradingPolicy {
        match self {
            Self::Continuous(policy) => policy,
            Self::QualityPoints(policy) => policy,
        }
    }
}

impl Default for GradingEngine {
    fn default() -> Self {
        Self::for_university(University::default())
    }
}

impl From<University> for GradingEngine {
    fn from(university: University) -> Self {
        Self::for_university(university)
    }
}

impl GradingPolicy for GradingEngine {
    fn grade_point(&self, obtained_marks: f64, credit_hours: u32, total_marks: Option<f64>) -> f64 {
        self.policy()
            .grade_point(obtained_marks, credit_hours, total_marks)
    }

    fn letter_grade(
        &self,
        obtained_marks: f64,
        credit_hours: u32,
        total_marks: Option<f64>,
    ) -> LetterGrade {
        self.policy()
            .letter_grade(obtained_marks, credit_hours, total_marks)
    }

    fn sgpa(&self, subjects: &[SubjectScore]) -> f64 {
        self.policy().sgpa(subjects)
    }

    fn cgpa(&self, semesters: &[SemesterTotals]) -> f64 {
        self.policy().cgpa(semesters)
    }

    fn grade_result(
        &self,
        obtained_marks: f64,
        credit_hours: u32,
        total_marks: Option<f64>,
    ) -> GradeResult {
        self.policy()
            .grade_result(obtained_marks, credit_hours, total_marks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_dispatch() {
        assert!(matches!(
            GradingEngine::for_slug("gcwuf"),
            GradingEngine::QualityPoints(_)
        ));
        assert!(matches!(
            GradingEngine::for_slug("numl"),
            GradingEngine::Continuous(_)
        ));
        assert!(matches!(
            GradingEngine::for_slug("unknown-university"),
            GradingEngine::Continuous(_)
        ));
        assert_eq!(GradingEngine::default().university(), University::Numl);
    }

    #[test]
    fn test_policies_disagree_on_same_input() {
        let numl = GradingEngine::for_university(University::Numl);
        let gcwuf = GradingEngine::for_university(University::Gcwuf);

        // 48 marks: an F out of 100, an A out of 60
        assert_eq!(numl.letter_grade(48.0, 3, None), LetterGrade::F);
        assert_eq!(gcwuf.letter_grade(48.0, 3, None), LetterGrade::A);
        assert!((gcwuf.grade_point(48.0, 3, None) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_continuous_ignores_total_marks() {
        let engine = GradingEngine::for_university(University::Numl);
        let with_total = engine.grade_result(72.0, 3, Some(80.0));
        let without_total = engine.grade_result(72.0, 3, None);
        assert_eq!(with_total, without_total);
    }

    #[test]
    fn test_engine_sgpa_and_cgpa() {
        let engine = GradingEngine::for_university(University::Numl);
        let subjects = [
            SubjectScore::new(85.0, None, 3),
            SubjectScore::new(60.0, None, 1),
        ];
        assert!((engine.sgpa(&subjects) - 3.5).abs() < 1e-9);

        let semesters = [SemesterTotals::new(3.0, 15), SemesterTotals::new(4.0, 15)];
        let gcwuf = GradingEngine::for_university(University::Gcwuf);
        assert!((engine.cgpa(&semesters) - gcwuf.cgpa(&semesters)).abs() < 1e-9);
    }
}
